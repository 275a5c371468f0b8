//! Property-based tests for the cats service.
mod logging;
