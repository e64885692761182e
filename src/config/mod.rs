//! Configuration module for iconizer
//!
//! Provides types and parsing for `iconizer.toml` settings.

pub mod schema;

pub use schema::*;
