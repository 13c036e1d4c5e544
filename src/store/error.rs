//! Store-specific error types
//!
//! This module defines all error types that can occur during store
//! operations. Errors are properly categorized and include context for
//! debugging.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database;
//!   this is the "store unavailable" condition surfaced to the user
//! - **`DecodeError`**: Failures when deserializing records from the store
//! - **`EncodeError`**: Failures when serializing records to the store
//! - **`NotFound`**: A record id that does not exist in its collection
//! - **`InvalidInput`**: Rejected mutations (empty name, unknown parent,
//!   nesting deeper than one sub-category level)
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Store-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Store unavailable: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding record: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding record: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Record id not present in its collection
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Invalid input provided (e.g., empty name or unknown parent id)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
