//! # dashkit
//!
//! A lodash-style functional utility library for Rust, built around a
//! dynamic [`Value`](value::Value) data model.
//!
//! ## Overview
//!
//! This library brings the familiar functional-utility vocabulary
//! (deep paths, iteratees, `group_by`, `debounce`, chaining) to Rust:
//!
//! - **Predicates**: shape and equality tests (`is_match`, monotonicity)
//! - **Object utilities**: deep `get`/`set`/`has` via dotted paths, `merge`,
//!   `defaults`, key/value transforms
//! - **Array utilities**: chunking, flattening, set algebra, zipping,
//!   sorted insertion search
//! - **Collection utilities**: map/filter/reduce/group/partition over
//!   sequences and mappings through one iteratee abstraction
//! - **String utilities**: case conversion, padding, interpolation, URL
//!   joining, HTML escaping
//! - **Numeric utilities**: missing-tolerant arithmetic and descriptive
//!   statistics
//! - **Combinators**: currying, partial application, debounce/throttle,
//!   memoization, composition
//! - **Chaining**: a lazy, replayable method-chain façade over all of the
//!   above
//!
//! ## Feature Flags
//!
//! - `predicate`: shape/equality/monotonicity tests
//! - `object`: deep path traversal and mapping transforms
//! - `iteratee`: the iteratee coercion layer
//! - `array`: sequence utilities
//! - `collection`: uniform sequence/mapping iteration
//! - `string`: string transformation
//! - `number`: numeric helpers and statistics
//! - `combinator`: function-wrapping combinators
//! - `chain`: the lazy chaining façade
//! - `serde`: `Serialize`/`Deserialize` for [`Value`](value::Value)
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use dashkit::value::Value;
//! use dashkit::object::get;
//!
//! let data = Value::map_of([
//!     ("user", Value::map_of([("name", Value::from("ada"))])),
//! ]);
//! assert_eq!(get(&data, "user.name"), Some(&Value::from("ada")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use dashkit::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::*;
    pub use crate::value::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "iteratee")]
    pub use crate::iteratee::*;

    #[cfg(feature = "array")]
    pub use crate::array::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "string")]
    pub use crate::string::*;

    #[cfg(feature = "number")]
    pub use crate::number::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "chain")]
    pub use crate::chain::*;
}

pub mod error;
pub mod value;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "iteratee")]
pub mod iteratee;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "string")]
pub mod string;

#[cfg(feature = "number")]
pub mod number;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "chain")]
pub mod chain;
