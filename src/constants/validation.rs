/// Upper bounds mirror a `VARCHAR(255)` column in the cat table.
pub const MAX_CAT_NAME_LENGTH: usize = 255;
pub const MAX_CAT_COLOR_LENGTH: usize = 255;
