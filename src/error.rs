#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `GenError` enum used across the crate.

use derive_more::{Display, From};

/// The generator error enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum GenError {
    /// Wrapper for JSON model-loading errors.
    #[display("Model Error: {_0}")]
    Model(serde_json::Error),

    /// A non-exportable record re-entered its own inline expansion.
    #[from(ignore)]
    #[display("Cyclic type: `{name}` expands through itself ({cycle})")]
    CyclicType {
        /// Name of the record that closed the cycle.
        name: String,
        /// The expansion path, rendered as `A -> B -> A`.
        cycle: String,
    },

    /// A generic instantiation supplied the wrong number of arguments.
    #[from(ignore)]
    #[display("Arity mismatch: `{origin}` declares {expected} type parameter(s), got {found} argument(s)")]
    ArityMismatch {
        /// Name of the generic origin record.
        origin: String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        found: usize,
    },

    /// Two distinct types were registered under the same display name.
    #[from(ignore)]
    #[display("Name collision: `{name}` is declared by two distinct types")]
    NameCollision {
        /// The contested display name.
        name: String,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for GenError {}

/// Helper type alias for Result using GenError.
pub type GenResult<T> = Result<T, GenError>;
