pub const DEFAULT_REDIS_KEY_PREFIX: &str = "cats";
pub const DEFAULT_REDIS_CONNECTION_TIMEOUT_MS: u64 = 10_000;
