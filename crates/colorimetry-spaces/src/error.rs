//! Error types for color values and conversions.

use colorimetry_core::{CoreError, SpaceKind};
use colorimetry_data::DataError;
use thiserror::Error;

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// Color operation error.
///
/// Covers the failure modes of the value algebra and the conversion engine:
/// - component access outside the fixed component count
/// - arithmetic across different spaces
/// - unparsable hex text
/// - reference-data lookups and integrity failures (wrapped [`DataError`])
/// - engine configuration loading
#[derive(Debug, Error)]
pub enum ColorError {
    /// Component index past the space's component count.
    #[error("component index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Component count of the space.
        len: usize,
    },

    /// Binary operation between two different spaces.
    #[error("cannot combine {left} with {right}")]
    TypeMismatch {
        /// Space of the left operand.
        left: SpaceKind,
        /// Space of the right operand.
        right: SpaceKind,
    },

    /// Operation the space's algebra does not define.
    #[error("{op} is not defined on {kind}")]
    UnsupportedOperation {
        /// Operator name.
        op: &'static str,
        /// Space the operator was applied to.
        kind: SpaceKind,
    },

    /// Integer division with a zero divisor component.
    #[error("division by zero in {kind}")]
    DivisionByZero {
        /// Space of the dividend.
        kind: SpaceKind,
    },

    /// Text is not a `#RRGGBB` color.
    #[error("invalid hex color: {value:?}")]
    InvalidHex {
        /// The text as given.
        value: String,
    },

    /// Reference-data failure.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Unknown identifier.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid engine configuration.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ColorError {
    /// True when the reference data itself is broken (singular matrices).
    ///
    /// Such errors should abort the whole operation rather than be handled as
    /// a bad argument.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Data(e) => e.is_fatal(),
            _ => false,
        }
    }

    /// True for unknown or missing illuminant, working-space and kind names.
    pub fn is_lookup(&self) -> bool {
        match self {
            Self::Data(e) => e.is_lookup(),
            Self::Core(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_forwarding() {
        let err = ColorError::from(DataError::SingularMatrix { context: "test".into() });
        assert!(err.is_fatal());
        assert!(!err.is_lookup());

        let err = ColorError::IndexOutOfRange { index: 3, len: 3 };
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "component index 3 out of range (len 3)");
    }

    #[test]
    fn test_lookup_family() {
        let err = ColorError::from(CoreError::UnknownRgbSpace { name: "Lab Gamut".into() });
        assert!(err.is_lookup());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_mismatch_message() {
        let err = ColorError::TypeMismatch { left: SpaceKind::Rgb, right: SpaceKind::Xyz };
        assert_eq!(err.to_string(), "cannot combine RGB with XYZ");
    }
}
