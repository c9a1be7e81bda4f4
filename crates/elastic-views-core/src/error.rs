//! Error types for Elastic Views.

use crate::element::ElementError;
use crate::frame_clock::FrameClockError;

/// The main error type for Elastic Views operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElasticError {
    /// An argument was rejected before any state was created.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// Element-related error.
    #[error("Element error: {0}")]
    Element(#[from] ElementError),

    /// Frame clock error.
    #[error("Frame clock error: {0}")]
    FrameClock(#[from] FrameClockError),
}

impl ElasticError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Returns `true` if this error rejected an argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// A specialized Result type for Elastic Views operations.
pub type Result<T> = std::result::Result<T, ElasticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = ElasticError::invalid_argument("duration_ms", "must be >= 0, got -1");
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid argument 'duration_ms': must be >= 0, got -1"
        );
    }

    #[test]
    fn test_from_element_error() {
        let err: ElasticError = ElementError::InvalidElementId.into();
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().starts_with("Element error"));
    }
}
