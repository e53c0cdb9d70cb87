//! Failure modes specific to the chaining façade.

use crate::error::{ArgumentError, DashError, EmptyReductionError};

/// Represents errors raised while building or resolving a [`Chain`].
///
/// Building a chain validates operation names eagerly; everything else is
/// deferred until the chain resolves.
///
/// [`Chain`]: crate::chain::Chain
#[derive(Debug, Clone, PartialEq)]
pub enum ChainError {
    /// The operation name is not in the chain registry.
    ///
    /// Carries the name as supplied, before any trailing-underscore
    /// fallback was tried.
    InvalidMethod(String),
    /// A seed was supplied to a chain that was already built around one.
    SeedAlreadyBound,
    /// A recorded step failed while the chain was resolving.
    Operation(DashError),
}

impl std::fmt::Display for ChainError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMethod(name) => {
                write!(formatter, "invalid chain method: {name}")
            }
            Self::SeedAlreadyBound => {
                write!(formatter, "chain already has a seed value bound")
            }
            Self::Operation(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ChainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Operation(error) => Some(error),
            Self::InvalidMethod(_) | Self::SeedAlreadyBound => None,
        }
    }
}

impl From<DashError> for ChainError {
    fn from(error: DashError) -> Self {
        Self::Operation(error)
    }
}

impl From<EmptyReductionError> for ChainError {
    fn from(error: EmptyReductionError) -> Self {
        Self::Operation(error.into())
    }
}

impl From<ArgumentError> for ChainError {
    fn from(error: ArgumentError) -> Self {
        Self::Operation(error.into())
    }
}
