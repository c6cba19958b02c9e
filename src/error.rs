//! Error type shared by the grid, the estimator and the CLI configuration.

/// Argument validation failures.
///
/// Every public operation validates its inputs before touching any state, so an
/// `Err` always leaves the receiver exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PercolationError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl PercolationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PercolationError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PercolationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_carries_reason() {
        let err = PercolationError::invalid("grid size must be positive, got 0");
        let msg = err.to_string();
        assert!(msg.starts_with("invalid argument"));
        assert!(msg.contains("got 0"), "message should keep the reason: {}", msg);
    }

    #[test]
    fn test_errors_compare_by_reason() {
        assert_eq!(PercolationError::invalid("a"), PercolationError::invalid("a"));
        assert_ne!(PercolationError::invalid("a"), PercolationError::invalid("b"));
    }
}
