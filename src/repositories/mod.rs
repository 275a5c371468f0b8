//! # Repository Module
//!
//! Implements the data persistence layer for the cats service using the
//! Repository pattern.

mod cat;
pub use cat::*;

pub mod redis_base;
