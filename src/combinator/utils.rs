//! Small closed-form combinators: identity, constant, argument
//! rearrangement, and arity capping.

/// Returns the value unchanged.
///
/// The unit element of composition: `flow!(identity, f)` and
/// `flow!(f, identity)` are both equivalent to `f`.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - `flip(flip(f))(a, b) == f(a, b)`
/// - `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use dashkit::combinator::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip(divide);
/// assert_eq!(flipped(2.0, 10.0), 5.0);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Caps a unary function at one argument: the adapted form accepts and
/// discards a second argument.
///
/// Useful for feeding a unary function into a call site that supplies
/// extra positional context.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::ary1;
///
/// fn double(value: i32) -> i32 { value * 2 }
///
/// let capped = ary1(double);
/// assert_eq!(capped(21, "ignored"), 42);
/// ```
#[inline]
pub fn ary1<A, B, R, F>(function: F) -> impl Fn(A, B) -> R
where
    F: Fn(A) -> R,
{
    move |first_argument, _| function(first_argument)
}

/// Caps a binary function at two arguments, discarding a third.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::ary2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let capped = ary2(add);
/// assert_eq!(capped(1, 2, "ignored"), 3);
/// ```
#[inline]
pub fn ary2<A, B, C, R, F>(function: F) -> impl Fn(A, B, C) -> R
where
    F: Fn(A, B) -> R,
{
    move |first_argument, second_argument, _| function(first_argument, second_argument)
}

/// Reorders the arguments of a binary function.
///
/// Equivalent to [`flip`]; provided under the rearrangement name so the
/// binary and ternary forms read the same at call sites.
#[inline]
pub fn rearg2<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    flip(function)
}

/// Reorders the arguments of a homogeneous ternary function.
///
/// `order[i]` names which incoming argument position feeds the
/// function's `i`-th parameter.
///
/// # Panics
///
/// Panics if any entry of `order` is outside `0..3`.
///
/// # Examples
///
/// ```
/// use dashkit::combinator::rearg3;
///
/// fn sentence(a: &str, b: &str, c: &str) -> String {
///     format!("{a} {b} {c}")
/// }
///
/// let rotated = rearg3(sentence, [2, 0, 1]);
/// assert_eq!(rotated("world", "!", "hello"), "hello world !");
/// ```
#[inline]
pub fn rearg3<T, R, F>(function: F, order: [usize; 3]) -> impl Fn(T, T, T) -> R
where
    T: Clone,
    F: Fn(T, T, T) -> R,
{
    move |first, second, third| {
        let arguments = [first, second, third];
        function(
            arguments[order[0]].clone(),
            arguments[order[1]].clone(),
            arguments[order[2]].clone(),
        )
    }
}

/// Placeholder marker type for partial application.
///
/// Used by the [`partial!`](crate::partial) macro. Write `__` directly in
/// the macro invocation as a literal token, without importing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant for partial application.
///
/// **Important**: do NOT import this constant when using
/// [`partial!`](crate::partial). The macro matches `__` as a literal
/// identifier token; an imported binding would shadow it and break the
/// pattern match. It exists for programmatic uses only.
///
/// Named `__` (double underscore) because `macro_rules!` cannot match a
/// single underscore `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
