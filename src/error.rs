//! Error types shared by every module of the crate.
//!
//! Only precondition violations are reported through [`NumError`]. A result
//! that is mathematically undefined for otherwise valid input (for example a
//! standard error from a single observation) is returned as `NaN` instead.

/// Result alias used by all fallible operations in this crate.
pub type NumResult<T> = Result<T, NumError>;

/// Precondition violations raised before any computation takes place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumError {
    /// A probability fell outside the half-open interval `[0, 1)` or was NaN.
    #[error("probability{} must lie in [0, 1), got {value}", format_index(.index))]
    InvalidProbability {
        /// The offending value.
        value: f64,
        /// Position in the input slice, `None` for scalar calls.
        index: Option<usize>,
    },

    /// A value that must be finite was NaN or infinite.
    #[error("value{} must be finite, got {value}", format_index(.index))]
    NonFinite {
        /// The offending value.
        value: f64,
        /// Position in the input slice, `None` for scalar calls.
        index: Option<usize>,
    },

    /// The operation needs at least one element.
    #[error("input must contain at least one element")]
    EmptyInput,

    /// A geometric length was not finite and strictly positive.
    #[error("{name} must be finite and positive, got {value}")]
    InvalidLength {
        /// Name of the parameter, e.g. `"height"`.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

fn format_index(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {i}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalar_probability() {
        let err = NumError::InvalidProbability {
            value: 1.0,
            index: None,
        };
        assert_eq!(err.to_string(), "probability must lie in [0, 1), got 1");
    }

    #[test]
    fn test_display_indexed_probability() {
        let err = NumError::InvalidProbability {
            value: -0.5,
            index: Some(3),
        };
        assert_eq!(
            err.to_string(),
            "probability at index 3 must lie in [0, 1), got -0.5"
        );
    }

    #[test]
    fn test_display_non_finite() {
        let err = NumError::NonFinite {
            value: f64::INFINITY,
            index: None,
        };
        assert_eq!(err.to_string(), "value must be finite, got inf");
    }

    #[test]
    fn test_display_empty_and_length() {
        assert_eq!(
            NumError::EmptyInput.to_string(),
            "input must contain at least one element"
        );
        let err = NumError::InvalidLength {
            name: "height",
            value: -4.0,
        };
        assert_eq!(err.to_string(), "height must be finite and positive, got -4");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&NumError::EmptyInput);
    }
}
