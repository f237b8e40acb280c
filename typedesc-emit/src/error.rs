//! Error types for code emission.

use thiserror::Error;

/// Error type for emission operations.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The input type has no descriptor mapping. Unrecognized host types
    /// are rejected by name rather than guessed at; the driver is expected
    /// to fail generation for the declaration and report the type.
    #[error("unsupported type '{type_name}': no descriptor mapping")]
    UnsupportedType {
        /// Display name of the offending type.
        type_name: String,
    },

    /// A nullable wrapper around an already-nullable type, rejected under
    /// [`NestedOptionalPolicy::Reject`](crate::options::NestedOptionalPolicy).
    #[error("nested optional type '{type_name}' rejected by mapper policy")]
    NestedOptional {
        /// Display name of the offending type.
        type_name: String,
    },
}

/// Result type alias for emission operations.
pub type Result<T> = std::result::Result<T, EmitError>;
