//! Function composition macros.
//!
//! [`flow!`](crate::flow) composes left-to-right (the reading order of
//! a pipeline); [`flow_right!`](crate::flow_right) composes
//! right-to-left (mathematical order). Both return a closure rather
//! than applying to a value, so the composition can be stored and
//! reused.

/// Composes functions left-to-right: the output of each feeds the next.
///
/// `flow!(f, g, h)(x)` equals `h(g(f(x)))`.
///
/// # Examples
///
/// ```
/// use dashkit::flow;
///
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// let pipeline = flow!(double, increment, double);
/// assert_eq!(pipeline(3), 14);
/// ```
#[macro_export]
macro_rules! flow {
    // Single function: nothing to compose.
    ($function:expr $(,)?) => {
        $function
    };

    // Two functions: basic left-to-right composition.
    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // Three or more: flow!(f, g, h, ...) = flow!(f, flow!(g, h, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest_composed = $crate::flow!($($remaining_functions),+);
        move |input| rest_composed(first(input))
    }};
}

/// Composes functions right-to-left.
///
/// `flow_right!(f, g, h)(x)` equals `f(g(h(x)))`.
///
/// # Examples
///
/// ```
/// use dashkit::flow_right;
///
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// let composed = flow_right!(double, increment);
/// assert_eq!(composed(3), 8);
/// ```
#[macro_export]
macro_rules! flow_right {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // flow_right!(f, g, h, ...) = f after flow_right!(g, h, ...)
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::flow_right!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
