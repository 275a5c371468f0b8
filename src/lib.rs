//! Cats API Library
//!
//! A small REST service that creates and lists cat records. It includes:
//!
//! - A cat store with an in-memory and a Redis backend behind one interface
//! - HTTP handlers for creating, listing and fetching cats, plus a ping probe
//! - A generated OpenAPI document
//! - Prometheus metrics, bearer authentication and rate limiting
//!
//! # Module Structure
//!
//! - `api`: HTTP routes and controllers
//! - `bootstrap`: Application state construction
//! - `config`: Environment configuration
//! - `logging`: Logging setup
//! - `metrics`: Prometheus registry and middleware
//! - `models`: Data structures and errors
//! - `repositories`: Cat storage backends
//! - `utils`: Common utilities and helper functions

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod utils;
