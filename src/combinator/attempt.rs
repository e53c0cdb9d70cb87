//! Error capture and small invocation helpers.

/// The outcome of [`attempt`]: either the value the operation returned,
/// or the error it failed with.
///
/// Unlike propagating a `Result` with `?`, an outcome is an ordinary
/// value that can flow through pipelines and be inspected later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome<T, E> {
    /// The operation completed and returned a value.
    Returned(T),
    /// The operation failed with an error.
    Failed(E),
}

impl<T, E> AttemptOutcome<T, E> {
    /// Whether the operation failed.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The returned value, if the operation completed.
    pub fn returned(self) -> Option<T> {
        match self {
            Self::Returned(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// The error, if the operation failed.
    pub fn failed(self) -> Option<E> {
        match self {
            Self::Returned(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Converts the outcome back into a [`Result`].
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Returned(value) => Ok(value),
            Self::Failed(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for AttemptOutcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Returned(value),
            Err(error) => Self::Failed(error),
        }
    }
}

/// Runs a fallible operation, capturing its error as a value instead of
/// propagating it.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::{AttemptOutcome, attempt};
///
/// let parsed = attempt(|| "42".parse::<i32>());
/// assert_eq!(parsed.returned(), Some(42));
///
/// let failed = attempt(|| "nope".parse::<i32>());
/// assert!(failed.is_failure());
/// ```
pub fn attempt<T, E, F>(operation: F) -> AttemptOutcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    operation().into()
}

/// Passes `value` to `interceptor` for its side effect, then returns
/// `value` unchanged.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::tap;
///
/// let mut seen = None;
/// let forwarded = tap(vec![1, 2, 3], |items| seen = Some(items.len()));
/// assert_eq!(forwarded, vec![1, 2, 3]);
/// assert_eq!(seen, Some(3));
/// ```
pub fn tap<T, F>(value: T, interceptor: F) -> T
where
    F: FnOnce(&T),
{
    interceptor(&value);
    value
}

/// Inverts a predicate.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::negate;
///
/// let is_even = |value: &i32| value % 2 == 0;
/// let is_odd = negate(is_even);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
pub fn negate<T, F>(predicate: F) -> impl Fn(&T) -> bool
where
    F: Fn(&T) -> bool,
{
    move |input| !predicate(input)
}

/// Invokes `function` with each index in `0..count`, collecting the
/// results.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::times;
///
/// let squares = times(4, |index| index * index);
/// assert_eq!(squares, vec![0, 1, 4, 9]);
/// ```
pub fn times<R, F>(count: usize, function: F) -> Vec<R>
where
    F: FnMut(usize) -> R,
{
    (0..count).map(function).collect()
}
