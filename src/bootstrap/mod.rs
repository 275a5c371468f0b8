//! Initialization routines for the cats service
//!
//! - `initialize_app_state`: builds the configured cat store and the shared
//!   application state
mod initialize_app_state;
pub use initialize_app_state::*;
