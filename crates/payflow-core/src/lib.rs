//! # Payflow Core
//!
//! Core types, request parameters, and error definitions shared by the
//! Payflow cache layer. Domain records here are the payloads the services
//! read from their repositories and park in the cache.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use telemetry::*;
