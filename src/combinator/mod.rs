//! Function-wrapping combinators.
//!
//! Each combinator wraps a function in a tiny explicit state machine:
//!
//! - [`After`] / [`Before`] / [`Once`]: call-count gates
//! - [`Debounce`] / [`Throttle`]: time-gated re-invocation (plus the
//!   blocking [`delay`])
//! - [`Memoize`]: unbounded result caching with a pluggable resolver
//! - [`curry2!`](crate::curry2) family and [`partial!`](crate::partial):
//!   staged application
//! - [`flow!`](crate::flow) / [`flow_right!`](crate::flow_right):
//!   composition
//! - [`attempt`] / [`AttemptOutcome`]: error-to-value conversion
//! - [`UniqueIdGenerator`]: explicit, injectable ID counter state
//!
//! Every stateful combinator takes `&mut self` to advance its state, so
//! concurrent use is ruled out by the borrow rules rather than by locks;
//! none of this module is thread-aware on purpose.
//!
//! # Examples
//!
//! ```rust
//! use dashkit::combinator::Once;
//!
//! let mut initialize = Once::new(|name: &str| format!("hello {name}"));
//! assert_eq!(initialize.call("ada"), "hello ada");
//! // Later arguments are ignored; the cached result wins.
//! assert_eq!(initialize.call("grace"), "hello ada");
//! ```

mod attempt;
mod curry_macro;
mod flow_macro;
mod gate;
mod memoize;
mod partial_macro;
mod sequence;
mod timing;
mod utils;

pub use attempt::{AttemptOutcome, attempt, negate, tap, times};
pub use gate::{After, Before, Once};
pub use memoize::Memoize;
pub use sequence::UniqueIdGenerator;
pub use timing::{Debounce, Throttle, delay};
pub use utils::{Placeholder, ary1, ary2, constant, flip, identity, rearg2, rearg3, __};
