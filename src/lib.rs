//! SWAPI Fetcher Library
//!
//! A Rust library for retrieving the complete Star Wars API character roster
//! and ranking it by body mass index or age. Pages are fetched concurrently
//! with rate limiting, and the assembled roster is cached for the lifetime of
//! the process.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
