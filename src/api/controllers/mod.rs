//! # API Controllers Module
//!
//! Handles HTTP request processing and business logic coordination.
//!
//! ## Controllers
//!
//! * `cat` - Cat creation and listing endpoints

pub mod cat;
