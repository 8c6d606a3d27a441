//! Configuration system for the splitterm layout engine.
//!
//! This crate provides configuration loading and default values for the
//! split/tab/focus engine. It includes:
//!
//! - The [`Config`] struct with window, tab, bell and focus settings
//! - Default value functions used by serde
//! - Typed configuration errors

pub mod config;
pub mod defaults;
mod error;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
