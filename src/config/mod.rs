//! Configuration system for the cats service.
//!
//! Everything is read from environment variables (a `.env` file is loaded by
//! `main` first):
//! - Server: bind address and port
//! - Storage: which cat repository backend to use and how to reach Redis
//! - Access: optional API key and rate limits
mod server_config;
pub use server_config::*;

mod rate_limit;
pub use rate_limit::*;

mod error;
pub use error::*;
