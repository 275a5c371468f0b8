//! This module contains all the constant values used in the system
mod validation;
pub use validation::*;

mod authorization;
pub use authorization::*;

mod public_endpoints;
pub use public_endpoints::*;

mod repository;
pub use repository::*;
