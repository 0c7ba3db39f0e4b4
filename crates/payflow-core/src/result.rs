//! Result type aliases for Payflow.

use crate::PayflowError;

/// A specialized `Result` type for Payflow operations.
pub type PayflowResult<T> = Result<T, PayflowError>;
