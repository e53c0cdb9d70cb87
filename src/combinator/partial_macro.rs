//! The partial application macro.
//!
//! Use `__` (double underscore) as a placeholder for arguments that
//! should remain free. Bound arguments are captured by value and cloned
//! on each invocation, so the partial application is reusable.
//!
//! **Important**: do NOT import [`__`](crate::combinator::__). The
//! macro matches `__` as a literal identifier token.

/// Partially applies a 2- or 3-argument function, with `__` marking the
/// free positions.
///
/// Placeholder layouts:
///
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)`
/// - `partial!(f, v1, v2)` creates the thunk `|| f(v1, v2)`
/// - same layouts for three arguments, e.g. `partial!(f, __, value, __)`
///
/// # Examples
///
/// ```
/// use dashkit::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
///
/// let add_to_ten = partial!(add, __, 10);
/// assert_eq!(add_to_ten(3), 13);
/// ```
///
/// ```
/// use dashkit::partial;
///
/// fn wrap(open: &str, body: &str, close: &str) -> String {
///     format!("{open}{body}{close}")
/// }
///
/// let bracket = partial!(wrap, "[", __, "]");
/// assert_eq!(bracket("x"), "[x]");
/// assert_eq!(bracket("y"), "[y]");
/// ```
#[macro_export]
macro_rules! partial {
    // Two arguments.
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};
    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};
    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};
    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};
    // Three arguments.
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};
    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};
    ($function:expr, __, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3)
    }};
    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};
    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};
    ($function:expr, $arg1:expr, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2| function(arg1.clone(), arg2, arg3.clone())
    }};
    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};
    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn binds_the_first_argument() {
        fn concat(prefix: String, suffix: &str) -> String {
            format!("{prefix}{suffix}")
        }

        let greet = partial!(concat, "hello ".to_string(), __);
        assert_eq!(greet("world"), "hello world");
        assert_eq!(greet("again"), "hello again");
    }

    #[test]
    fn binds_the_second_argument() {
        fn power(base: u32, exponent: u32) -> u32 {
            base.pow(exponent)
        }

        let square = partial!(power, __, 2);
        assert_eq!(square(9), 81);
    }

    #[test]
    fn all_placeholders_is_the_original_function() {
        let add = partial!(|a: i32, b: i32| a + b, __, __);
        assert_eq!(add(2, 3), 5);
    }

    #[test]
    fn fully_bound_becomes_a_thunk() {
        let forty_two = partial!(|a: i32, b: i32| a * b, 6, 7);
        assert_eq!(forty_two(), 42);
        assert_eq!(forty_two(), 42);
    }

    #[test]
    fn three_argument_layouts() {
        fn join(a: &str, b: &str, c: &str) -> String {
            format!("{a}.{b}.{c}")
        }

        let middle_free = partial!(join, "v1", __, "patch");
        assert_eq!(middle_free("2"), "v1.2.patch");

        let last_free = partial!(join, "a", "b", __);
        assert_eq!(last_free("c"), "a.b.c");

        let first_free = partial!(join, __, "y", "z");
        assert_eq!(first_free("x"), "x.y.z");
    }
}
