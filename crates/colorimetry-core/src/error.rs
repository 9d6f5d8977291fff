//! Lookup errors for identifier parsing.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

/// A name did not match any member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Not one of the tabulated illuminants.
    #[error("unknown illuminant: {name}")]
    UnknownIlluminant {
        /// The name as given.
        name: String,
    },

    /// Not one of the tabulated RGB working spaces.
    #[error("unknown RGB working space: {name}")]
    UnknownRgbSpace {
        /// The name as given.
        name: String,
    },

    /// Not one of the value spaces.
    #[error("unknown color space kind: {name}")]
    UnknownSpaceKind {
        /// The name as given.
        name: String,
    },
}
