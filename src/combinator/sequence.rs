//! Explicit unique-ID generation.

use std::cell::Cell;

use static_assertions::assert_not_impl_any;

/// A monotonically increasing ID source.
///
/// Each generator owns its own counter; there is no process-global
/// state, so tests and subsystems construct independent instances and
/// get reproducible sequences. The counter starts at zero and is
/// pre-incremented, so the first ID is `"1"`.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::UniqueIdGenerator;
///
/// let ids = UniqueIdGenerator::new();
/// assert_eq!(ids.next_id(), "1");
/// assert_eq!(ids.next_id(), "2");
///
/// let prefixed = UniqueIdGenerator::with_prefix("user_");
/// assert_eq!(prefixed.next_id(), "user_1");
/// ```
#[derive(Debug, Default)]
pub struct UniqueIdGenerator {
    counter: Cell<u64>,
    prefix: Option<String>,
}

// Interior mutability keeps generators single-threaded.
assert_not_impl_any!(UniqueIdGenerator: Sync);

impl UniqueIdGenerator {
    /// Creates a generator with no prefix, starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: Cell::new(0),
            prefix: None,
        }
    }

    /// Creates a generator that prepends `prefix` to every ID.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            counter: Cell::new(0),
            prefix: Some(prefix.into()),
        }
    }

    /// Increments the counter and renders the next ID.
    pub fn next_id(&self) -> String {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        match &self.prefix {
            Some(prefix) => format!("{prefix}{next}"),
            None => next.to_string(),
        }
    }

    /// The number of IDs handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let generator = UniqueIdGenerator::new();
        assert_eq!(generator.next_id(), "1");
        assert_eq!(generator.next_id(), "2");
        assert_eq!(generator.next_id(), "3");
        assert_eq!(generator.issued(), 3);
    }

    #[test]
    fn prefix_applies_to_every_id() {
        let generator = UniqueIdGenerator::with_prefix("job-");
        assert_eq!(generator.next_id(), "job-1");
        assert_eq!(generator.next_id(), "job-2");
    }

    #[test]
    fn generators_are_independent() {
        let first = UniqueIdGenerator::new();
        let second = UniqueIdGenerator::new();
        first.next_id();
        first.next_id();
        assert_eq!(second.next_id(), "1");
    }
}
