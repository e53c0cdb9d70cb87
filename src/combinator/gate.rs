//! Call-count gates: run a function after, before, or exactly once.

/// Gates a function so it only runs from the n-th call onward.
///
/// Each call decrements the counter first, then invokes the wrapped
/// function when the counter has reached zero or below. Earlier calls
/// return `None`.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::After;
///
/// let mut gate = After::new(2, |name: &str| format!("done: {name}"));
/// assert_eq!(gate.call("a"), None);
/// assert_eq!(gate.call("b"), Some("done: b".to_string()));
/// assert_eq!(gate.call("c"), Some("done: c".to_string()));
/// ```
pub struct After<F> {
    remaining: i64,
    function: F,
}

impl<F> After<F> {
    /// Wraps `function` so it starts executing on the `threshold`-th call.
    pub const fn new(threshold: i64, function: F) -> Self {
        Self {
            remaining: threshold,
            function,
        }
    }

    /// Invokes the gate with `input`, returning the function's result
    /// once the threshold has been crossed.
    pub fn call<T, R>(&mut self, input: T) -> Option<R>
    where
        F: FnMut(T) -> R,
    {
        self.remaining -= 1;
        if self.remaining <= 0 {
            Some((self.function)(input))
        } else {
            None
        }
    }
}

/// Gates a function so it only runs for the first n calls.
///
/// While the counter is positive the wrapped function executes and the
/// counter decrements; once exhausted every call returns `None`.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::Before;
///
/// let mut gate = Before::new(2, |value: i32| value * 10);
/// assert_eq!(gate.call(1), Some(10));
/// assert_eq!(gate.call(2), Some(20));
/// assert_eq!(gate.call(3), None);
/// ```
pub struct Before<F> {
    remaining: i64,
    function: F,
}

impl<F> Before<F> {
    /// Wraps `function` so it executes for at most `limit` calls.
    pub const fn new(limit: i64, function: F) -> Self {
        Self {
            remaining: limit,
            function,
        }
    }

    /// Invokes the gate with `input` while calls remain.
    pub fn call<T, R>(&mut self, input: T) -> Option<R>
    where
        F: FnMut(T) -> R,
    {
        if self.remaining > 0 {
            self.remaining -= 1;
            Some((self.function)(input))
        } else {
            None
        }
    }
}

/// Runs a function exactly once and caches its result.
///
/// The first call computes and stores the result; every later call
/// returns a clone of the cached value and ignores its argument.
pub struct Once<F, R> {
    cached: Option<R>,
    function: F,
}

impl<F, R> Once<F, R> {
    /// Wraps `function` so only its first invocation runs.
    pub const fn new(function: F) -> Self {
        Self {
            cached: None,
            function,
        }
    }

    /// Returns the cached result, computing it on the first call.
    pub fn call<T>(&mut self, input: T) -> R
    where
        F: FnMut(T) -> R,
        R: Clone,
    {
        if let Some(cached) = &self.cached {
            return cached.clone();
        }
        let computed = (self.function)(input);
        self.cached = Some(computed.clone());
        computed
    }

    /// Whether the wrapped function has already run.
    pub const fn has_run(&self) -> bool {
        self.cached.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_skips_early_calls() {
        let mut invocations = 0;
        let mut gate = After::new(3, |_: ()| {
            invocations += 1;
            invocations
        });

        assert_eq!(gate.call(()), None);
        assert_eq!(gate.call(()), None);
        assert_eq!(gate.call(()), Some(1));
        assert_eq!(gate.call(()), Some(2));
    }

    #[test]
    fn after_with_zero_threshold_always_runs() {
        let mut gate = After::new(0, |value: i32| value);
        assert_eq!(gate.call(5), Some(5));
    }

    #[test]
    fn before_stops_after_limit() {
        let mut gate = Before::new(1, |value: i32| value + 1);
        assert_eq!(gate.call(1), Some(2));
        assert_eq!(gate.call(2), None);
        assert_eq!(gate.call(3), None);
    }

    #[test]
    fn once_caches_the_first_result() {
        let mut side_effects = Vec::new();
        let mut initialize = Once::new(|tag: &str| {
            side_effects.push(tag.to_string());
            tag.len()
        });

        assert!(!initialize.has_run());
        assert_eq!(initialize.call("abc"), 3);
        assert_eq!(initialize.call("zzzzzz"), 3);
        assert!(initialize.has_run());
        drop(initialize);
        assert_eq!(side_effects, vec!["abc".to_string()]);
    }
}
