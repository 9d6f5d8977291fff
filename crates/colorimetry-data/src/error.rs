//! Error types for reference-table loading and matrix derivation.

use colorimetry_core::{CoreError, Illuminant, RgbSpaceId};
use thiserror::Error;

/// Result type for reference-data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Reference-data error.
///
/// Three families:
/// - table loading: [`Io`](DataError::Io), [`Parse`](DataError::Parse),
///   [`MissingColumn`](DataError::MissingColumn), [`Duplicate`](DataError::Duplicate)
/// - lookups: [`UnknownName`](DataError::UnknownName),
///   [`IlluminantNotFound`](DataError::IlluminantNotFound),
///   [`RgbSpaceNotFound`](DataError::RgbSpaceNotFound)
/// - integrity: [`SingularMatrix`](DataError::SingularMatrix), see [`DataError::is_fatal`]
#[derive(Debug, Error)]
pub enum DataError {
    /// Reading a table failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A table row could not be parsed.
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number in the table.
        line: usize,
        /// What was wrong.
        reason: String,
    },

    /// A required column is absent from the header row.
    #[error("missing column: {column}")]
    MissingColumn {
        /// Header name that was expected.
        column: &'static str,
    },

    /// The same name appears on two rows.
    #[error("duplicate table entry: {name}")]
    Duplicate {
        /// The repeated name.
        name: String,
    },

    /// A looked-up name is not a legal illuminant or working-space name.
    #[error(transparent)]
    UnknownName(#[from] CoreError),

    /// The illuminant is legal but absent from the loaded table.
    #[error("illuminant not in table: {illuminant}")]
    IlluminantNotFound {
        /// Requested illuminant.
        illuminant: Illuminant,
    },

    /// The working space is legal but absent from the loaded table.
    #[error("RGB working space not in table: {space}")]
    RgbSpaceNotFound {
        /// Requested working space.
        space: RgbSpaceId,
    },

    /// A primaries or adaptation matrix is not invertible.
    #[error("singular matrix: {context}")]
    SingularMatrix {
        /// Which matrix failed.
        context: String,
    },
}

impl DataError {
    /// True for reference-data integrity failures.
    ///
    /// These mean the tables are malformed, not that the call was wrong, and
    /// retrying with other arguments against the same tables will not help.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// True for failed lookups (unknown or missing names).
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownName(_) | Self::IlluminantNotFound { .. } | Self::RgbSpaceNotFound { .. }
        )
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse { line, reason: reason.into() }
    }
}
