//! Time-gated invocation: debounce, throttle, and blocking delay.

use std::thread;
use std::time::{Duration, Instant};

/// Rate-limits a function to at most one execution per quiet period.
///
/// Every call records the call instant; the wrapped function only
/// re-executes when at least `wait` has passed since the previous call
/// (or, with [`with_max_wait`](Debounce::with_max_wait), when `max_wait`
/// has passed since the previous execution, whichever comes first).
/// Calls always return the most recent result, so a burst of calls
/// inside the quiet period observes a stale value. The very first calls
/// return `None` until the function has executed once.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::Debounce;
///
/// let mut debounced = Debounce::new(50, |value: i32| value * 2);
/// // Immediately after construction the quiet period has not elapsed.
/// assert_eq!(debounced.call(1), None);
///
/// std::thread::sleep(std::time::Duration::from_millis(60));
/// assert_eq!(debounced.call(2), Some(4));
/// assert_eq!(debounced.call(3), Some(4));
/// ```
pub struct Debounce<F, R> {
    function: F,
    wait: Duration,
    max_wait: Option<Duration>,
    last_call: Instant,
    last_execution: Instant,
    last_result: Option<R>,
}

impl<F, R> Debounce<F, R> {
    /// Debounces `function` with a quiet period of `wait_ms` milliseconds.
    pub fn new(wait_ms: u64, function: F) -> Self {
        let now = Instant::now();
        Self {
            function,
            wait: Duration::from_millis(wait_ms),
            max_wait: None,
            last_call: now,
            last_execution: now,
            last_result: None,
        }
    }

    /// Adds an upper bound: the function re-executes no later than
    /// `max_wait_ms` milliseconds after its previous execution, even
    /// while calls keep arriving inside the quiet period.
    #[must_use]
    pub const fn with_max_wait(mut self, max_wait_ms: u64) -> Self {
        self.max_wait = Some(Duration::from_millis(max_wait_ms));
        self
    }

    /// Invokes the debounced function with `input`, returning the most
    /// recent result.
    pub fn call<T>(&mut self, input: T) -> Option<R>
    where
        F: FnMut(T) -> R,
        R: Clone,
    {
        let now = Instant::now();
        let quiet_elapsed = now.duration_since(self.last_call) >= self.wait;
        let overdue = self
            .max_wait
            .is_some_and(|limit| now.duration_since(self.last_execution) >= limit);

        if quiet_elapsed || overdue {
            self.last_result = Some((self.function)(input));
            self.last_execution = now;
        }
        self.last_call = now;
        self.last_result.clone()
    }
}

/// Rate-limits a function to at most one execution per interval.
///
/// Unlike [`Debounce`], the first call executes immediately; later calls
/// inside the interval return the cached result without executing.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::Throttle;
///
/// let mut throttled = Throttle::new(50, |value: i32| value * 2);
/// assert_eq!(throttled.call(1), Some(2));
/// assert_eq!(throttled.call(9), Some(2));
/// ```
pub struct Throttle<F, R> {
    function: F,
    wait: Duration,
    last_execution: Option<Instant>,
    last_result: Option<R>,
}

impl<F, R> Throttle<F, R> {
    /// Throttles `function` to one execution per `wait_ms` milliseconds.
    pub const fn new(wait_ms: u64, function: F) -> Self {
        Self {
            function,
            wait: Duration::from_millis(wait_ms),
            last_execution: None,
            last_result: None,
        }
    }

    /// Invokes the throttled function with `input`, returning the most
    /// recent result.
    pub fn call<T>(&mut self, input: T) -> Option<R>
    where
        F: FnMut(T) -> R,
        R: Clone,
    {
        let now = Instant::now();
        let due = self
            .last_execution
            .is_none_or(|at| now.duration_since(at) >= self.wait);

        if due {
            self.last_result = Some((self.function)(input));
            self.last_execution = Some(now);
        }
        self.last_result.clone()
    }
}

/// Sleeps the current thread for `wait_ms` milliseconds, then invokes
/// `function` with `input`.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::delay;
///
/// let result = delay(10, 21, |value| value * 2);
/// assert_eq!(result, 42);
/// ```
pub fn delay<T, R, F>(wait_ms: u64, input: T, function: F) -> R
where
    F: FnOnce(T) -> R,
{
    thread::sleep(Duration::from_millis(wait_ms));
    function(input)
}
