//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReplayError {
    /// The capability exists as an extension point but is not built.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// A field of a transition does not have the configured length.
    #[error("Dimension mismatch in `{field}`: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Name of the field.
        field: &'static str,

        /// Length given by the row layout.
        expected: usize,

        /// Length of the given field.
        actual: usize,
    },

    /// Row index outside of `[0, capacity)`.
    #[error("Row index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The requested row.
        index: usize,

        /// Capacity of the buffer.
        capacity: usize,
    },

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
