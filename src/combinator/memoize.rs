//! Result caching keyed by a resolver function.

use std::collections::HashMap;
use std::fmt::Debug;

/// Caches every result of a function, keyed by a string resolver.
///
/// The default resolver renders the input with [`Debug`]; a custom
/// resolver can collapse distinct inputs onto one cache entry. The cache
/// is unbounded and only shrinks through
/// [`clear_cache`](Memoize::clear_cache), so long-lived memoizers over
/// unbounded input domains grow without limit.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::Memoize;
///
/// let mut slow_square = Memoize::new(|value: &i32| value * value);
/// assert_eq!(slow_square.call(12), 144);
/// assert_eq!(slow_square.call(12), 144);
/// assert_eq!(slow_square.cache().len(), 1);
/// ```
pub struct Memoize<T, R, F> {
    function: F,
    resolver: Box<dyn Fn(&T) -> String>,
    cache: HashMap<String, R>,
}

impl<T, R, F> Memoize<T, R, F>
where
    F: FnMut(&T) -> R,
{
    /// Memoizes `function`, keying the cache on the input's [`Debug`]
    /// rendering.
    pub fn new(function: F) -> Self
    where
        T: Debug,
    {
        Self::with_resolver(function, |input| format!("{input:?}"))
    }

    /// Memoizes `function` with a custom cache-key resolver.
    ///
    /// ```
    /// use dashkit::combinator::Memoize;
    ///
    /// // Key case-insensitively: "Ada" and "ADA" share an entry.
    /// let mut greet = Memoize::with_resolver(
    ///     |name: &String| format!("hello {name}"),
    ///     |name| name.to_lowercase(),
    /// );
    /// assert_eq!(greet.call("Ada".to_string()), "hello Ada");
    /// assert_eq!(greet.call("ADA".to_string()), "hello Ada");
    /// ```
    pub fn with_resolver(function: F, resolver: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            function,
            resolver: Box::new(resolver),
            cache: HashMap::new(),
        }
    }

    /// Invokes the memoized function, consulting the cache first.
    pub fn call(&mut self, input: T) -> R
    where
        R: Clone,
    {
        let key = (self.resolver)(&input);
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }
        let computed = (self.function)(&input);
        self.cache.insert(key, computed.clone());
        computed
    }

    /// Read access to the underlying cache.
    pub const fn cache(&self) -> &HashMap<String, R> {
        &self.cache
    }

    /// Drops every cached entry.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
