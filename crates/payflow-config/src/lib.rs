//! # Payflow Config
//!
//! Configuration management for the Payflow cache layer.
//! Supports layered configuration from files and environment variables,
//! validated before anything connects to Redis.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
