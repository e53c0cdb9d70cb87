//! The curry macro family for converting multi-argument functions to
//! curried form.
//!
//! Macros are provided for 2 to 5 arguments, in both left-to-right
//! ([`curry2!`](crate::curry2) ...) and right-to-left
//! ([`curry_right2!`](crate::curry_right2) ...) application order.
//!
//! # Design Decisions
//!
//! The curry macros use `std::rc::Rc` internally to share the function
//! and the already-applied arguments across closure invocations. This
//! allows:
//!
//! - the curried function to be called multiple times
//! - partial applications to be reused
//! - argument types that don't implement `Copy` to work correctly
//!
//! The returned closures implement `Fn`, so they compose with
//! [`flow!`](crate::flow) and the other combinators.

/// Converts a 2-argument function into curried form.
///
/// Given `f(a, b) -> c`, returns a closure taking `a` that returns a
/// closure taking `b`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types must implement [`Clone`] (partial applications are
///   reusable)
///
/// # Examples
///
/// ```
/// use dashkit::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// let add_five = curried(5);
///
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// assert_eq!(curried(1)(2), 3);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into curried form.
///
/// # Examples
///
/// ```
/// use dashkit::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let percent = curry3!(clamp)(0)(100);
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into curried form.
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            arg4,
                        )
                    }
                }
            }
        }
    }};
}

/// Converts a 5-argument function into curried form.
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        let function = ::std::rc::Rc::clone(&function);
                        let arg1 = ::std::rc::Rc::clone(&arg1);
                        let arg2 = ::std::rc::Rc::clone(&arg2);
                        let arg3 = ::std::rc::Rc::clone(&arg3);
                        let arg4 = ::std::rc::Rc::new(arg4);
                        move |arg5| {
                            function(
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg4)),
                                arg5,
                            )
                        }
                    }
                }
            }
        }
    }};
}

/// Converts a 2-argument function into curried form with right-to-left
/// application: the first supplied argument binds the LAST parameter.
///
/// # Examples
///
/// ```
/// use dashkit::curry_right2;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let halve = curry_right2!(divide)(2.0);
/// assert_eq!(halve(10.0), 5.0);
/// ```
#[macro_export]
macro_rules! curry_right2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg2| {
            let function = ::std::rc::Rc::clone(&function);
            let arg2 = ::std::rc::Rc::new(arg2);
            move |arg1| {
                function(
                    arg1,
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                )
            }
        }
    }};
}

/// Converts a 3-argument function into right-to-left curried form.
///
/// `curry_right3!(f)(c)(b)(a)` equals `f(a, b, c)`.
#[macro_export]
macro_rules! curry_right3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg3| {
            let function = ::std::rc::Rc::clone(&function);
            let arg3 = ::std::rc::Rc::new(arg3);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg3 = ::std::rc::Rc::clone(&arg3);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg1| {
                    function(
                        arg1,
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into right-to-left curried form.
#[macro_export]
macro_rules! curry_right4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg4| {
            let function = ::std::rc::Rc::clone(&function);
            let arg4 = ::std::rc::Rc::new(arg4);
            move |arg3| {
                let function = ::std::rc::Rc::clone(&function);
                let arg4 = ::std::rc::Rc::clone(&arg4);
                let arg3 = ::std::rc::Rc::new(arg3);
                move |arg2| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg4 = ::std::rc::Rc::clone(&arg4);
                    let arg3 = ::std::rc::Rc::clone(&arg3);
                    let arg2 = ::std::rc::Rc::new(arg2);
                    move |arg1| {
                        function(
                            arg1,
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg4)),
                        )
                    }
                }
            }
        }
    }};
}

/// Converts a 5-argument function into right-to-left curried form.
#[macro_export]
macro_rules! curry_right5 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg5| {
            let function = ::std::rc::Rc::clone(&function);
            let arg5 = ::std::rc::Rc::new(arg5);
            move |arg4| {
                let function = ::std::rc::Rc::clone(&function);
                let arg5 = ::std::rc::Rc::clone(&arg5);
                let arg4 = ::std::rc::Rc::new(arg4);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg5 = ::std::rc::Rc::clone(&arg5);
                    let arg4 = ::std::rc::Rc::clone(&arg4);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg2| {
                        let function = ::std::rc::Rc::clone(&function);
                        let arg5 = ::std::rc::Rc::clone(&arg5);
                        let arg4 = ::std::rc::Rc::clone(&arg4);
                        let arg3 = ::std::rc::Rc::clone(&arg3);
                        let arg2 = ::std::rc::Rc::new(arg2);
                        move |arg1| {
                            function(
                                arg1,
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg4)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg5)),
                            )
                        }
                    }
                }
            }
        }
    }};
}
