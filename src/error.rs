//! Shared error types.
//!
//! This module provides the error values that module operations return
//! directly. Failure modes specific to the chaining façade live in
//! [`chain::error`](crate::chain) instead.
//!
//! The library's propagation policy is deliberately plain: lookup failures
//! become `Option`s or caller-supplied defaults, every other error is
//! returned to the immediate caller unmodified. There is no global error
//! channel and no retry logic anywhere.

/// Represents an attempt to reduce an empty collection without a seed.
///
/// When no accumulator seed is given, the first element of the collection
/// becomes the seed. An empty collection therefore has nothing to start
/// from, and the reduction is a usage error rather than a silent `None`.
///
/// # Examples
///
/// ```rust
/// use dashkit::error::EmptyReductionError;
///
/// let error = EmptyReductionError { operation: "reduce_" };
/// assert_eq!(
///     format!("{}", error),
///     "reduce_: cannot reduce an empty collection without a seed accumulator"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyReductionError {
    /// The name of the reducing operation that was invoked.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptyReductionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: cannot reduce an empty collection without a seed accumulator",
            self.operation
        )
    }
}

impl std::error::Error for EmptyReductionError {}

/// Represents a malformed call configuration detected at call time.
///
/// Raised when an operation receives arguments that are the wrong shape for
/// it, for example a chain step whose recorded argument cannot be coerced
/// to what the underlying operation expects.
///
/// # Examples
///
/// ```rust
/// use dashkit::error::ArgumentError;
///
/// let error = ArgumentError {
///     operation: "chunk",
///     message: "size argument must be an integer".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "chunk: size argument must be an integer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentError {
    /// The name of the operation that rejected its arguments.
    pub operation: &'static str,
    /// A human-readable description of what was wrong.
    pub message: String,
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.operation, self.message)
    }
}

impl std::error::Error for ArgumentError {}

/// Represents errors that module operations can return.
///
/// This enum provides a unified error type for the non-chain failure modes
/// of the library. Chain-specific failures are wrapped by
/// `ChainError` in the `chain` module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashError {
    /// A reduction over an empty collection without a seed.
    EmptyReduction(EmptyReductionError),
    /// A malformed call configuration.
    Argument(ArgumentError),
}

impl std::fmt::Display for DashError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyReduction(error) => write!(formatter, "{error}"),
            Self::Argument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for DashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyReduction(error) => Some(error),
            Self::Argument(error) => Some(error),
        }
    }
}

impl From<EmptyReductionError> for DashError {
    fn from(error: EmptyReductionError) -> Self {
        Self::EmptyReduction(error)
    }
}

impl From<ArgumentError> for DashError {
    fn from(error: ArgumentError) -> Self {
        Self::Argument(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reduction_display() {
        let error = EmptyReductionError { operation: "reduce_right" };
        assert!(format!("{error}").starts_with("reduce_right:"));
    }

    #[test]
    fn test_dash_error_from_argument() {
        let error: DashError = ArgumentError {
            operation: "sort_by",
            message: "unknown sort key".to_string(),
        }
        .into();
        assert!(matches!(error, DashError::Argument(_)));
    }
}
