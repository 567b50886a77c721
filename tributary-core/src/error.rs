// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Tributary sequence library
//!
//! Almost nothing in a lazy sequence pipeline can fail at runtime: absent
//! sources are empty sequences, and panics from caller-supplied comparators
//! or equality contracts propagate unchanged. [`SequenceError`] covers the
//! remaining cases, and its [`Display`](core::fmt::Display) text is also the
//! message of the panics raised for programmer errors.
//!
//! # Examples
//!
//! ```
//! use tributary_core::{Result, SequenceError};
//!
//! fn require_contract(present: bool) -> Result<()> {
//!     if present {
//!         Ok(())
//!     } else {
//!         Err(SequenceError::contract_violation("distinct_with requires an equality contract"))
//!     }
//! }
//!
//! assert!(require_contract(false).is_err());
//! ```

/// Root error type for all Tributary operations
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// A caller broke an API contract
    ///
    /// This is a programmer error. Operators that detect it panic with this
    /// error's message rather than returning it.
    #[error("Contract violation: {context}")]
    ContractViolation {
        /// Which contract was broken
        context: String,
    },

    /// The background worker of a channel bridge could not be started
    #[error("Failed to spawn sequence worker: {0}")]
    WorkerSpawn(#[from] std::io::Error),
}

impl SequenceError {
    /// Create a contract violation error with the given context
    pub fn contract_violation(context: impl Into<String>) -> Self {
        Self::ContractViolation {
            context: context.into(),
        }
    }

    /// Check if this error indicates a bug in the calling code
    #[must_use]
    pub const fn is_programmer_error(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }
}

/// Specialized Result type for Tributary operations
pub type Result<T> = std::result::Result<T, SequenceError>;
