//! A lazy, replayable method-chain façade.
//!
//! A [`Chain`] is a seed value plus an ordered list of deferred steps.
//! Building a chain never executes anything: each [`call`](Chain::call)
//! validates the operation name against the registry and records the
//! step. [`value`](Chain::value) replays the steps first-to-last, each
//! step's output feeding the next step's input. Because resolution is a
//! pure replay, a chain can resolve repeatedly, and an unseeded chain
//! doubles as a reusable pipeline template resolved against different
//! seeds with [`value_with`](Chain::value_with).
//!
//! # Examples
//!
//! ```rust
//! use dashkit::chain::chain;
//! use dashkit::value::Value;
//!
//! let result = chain(vec![1_i64, 2, 3, 4])
//!     .call("filter", vec![])? // identity iteratee: keep truthy
//!     .call("map", vec![])?
//!     .call("sum", vec![])?
//!     .value()?;
//! assert_eq!(result, Value::Float(10.0));
//! # Ok::<(), dashkit::chain::ChainError>(())
//! ```

mod error;
mod registry;

use std::rc::Rc;

use static_assertions::assert_not_impl_any;

use crate::error::ArgumentError;
use crate::value::Value;

pub use error::ChainError;
pub use registry::ChainArg;

use registry::Adapter;

/// One recorded step of a chain.
#[derive(Clone)]
enum Step {
    /// A registry operation with its recorded arguments.
    Operation {
        name: String,
        adapter: Adapter,
        args: Vec<ChainArg>,
    },
    /// A side-effect observer; the flowing value passes through.
    Tap(Rc<dyn Fn(&Value)>),
    /// An arbitrary value transformation.
    Thru(Rc<dyn Fn(Value) -> Value>),
}

/// A lazy pipeline of deferred operations over a [`Value`].
///
/// See the [module documentation](self) for the building/resolving
/// model. Cloning a chain clones the recorded plan, so a prefix can be
/// extended in different directions without re-recording it.
#[derive(Clone, Default)]
pub struct Chain {
    seed: Option<Value>,
    steps: Vec<Step>,
}

// Tap/thru closures are Rc-shared; chains stay on one thread.
assert_not_impl_any!(Chain: Send, Sync);

/// Starts a chain around an eager seed value.
pub fn chain(seed: impl Into<Value>) -> Chain {
    Chain {
        seed: Some(seed.into()),
        steps: Vec::new(),
    }
}

impl Chain {
    /// Starts an unseeded chain: a pipeline template whose seed is
    /// supplied at resolution time via [`value_with`](Self::value_with).
    #[must_use]
    pub const fn planned() -> Self {
        Self {
            seed: None,
            steps: Vec::new(),
        }
    }

    /// Records an operation step.
    ///
    /// The name is validated against the registry immediately (trying
    /// the trailing-underscore alias); execution is deferred until the
    /// chain resolves.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidMethod`] when the registry knows no
    /// operation under `name` or its underscore alias.
    pub fn call(mut self, name: &str, args: Vec<ChainArg>) -> Result<Self, ChainError> {
        let adapter = registry::lookup(name)
            .ok_or_else(|| ChainError::InvalidMethod(name.to_string()))?;
        self.steps.push(Step::Operation {
            name: name.to_string(),
            adapter,
            args,
        });
        Ok(self)
    }

    /// Records a side-effect observer; the flowing value is passed to
    /// `observer` and continues unchanged.
    #[must_use]
    pub fn tap(mut self, observer: impl Fn(&Value) + 'static) -> Self {
        self.steps.push(Step::Tap(Rc::new(observer)));
        self
    }

    /// Records an arbitrary transformation of the flowing value.
    #[must_use]
    pub fn thru(mut self, transform: impl Fn(Value) -> Value + 'static) -> Self {
        self.steps.push(Step::Thru(Rc::new(transform)));
        self
    }

    /// The number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no recorded steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the chain was built around an eager seed.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }

    /// Resolves the chain by replaying its steps over the eager seed.
    ///
    /// Resolving twice re-executes the steps deterministically.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Operation`] when the chain has no seed or
    /// when a step fails.
    pub fn value(&self) -> Result<Value, ChainError> {
        let seed = self.seed.clone().ok_or_else(|| {
            ChainError::Operation(
                ArgumentError {
                    operation: "value",
                    message: "chain has no seed value; resolve with value_with".to_string(),
                }
                .into(),
            )
        })?;
        self.resolve(seed)
    }

    /// Resolves the chain over a late-bound seed.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::SeedAlreadyBound`] when the chain was built
    /// around an eager seed, or [`ChainError::Operation`] when a step
    /// fails.
    pub fn value_with(&self, seed: impl Into<Value>) -> Result<Value, ChainError> {
        if self.seed.is_some() {
            return Err(ChainError::SeedAlreadyBound);
        }
        self.resolve(seed.into())
    }

    fn resolve(&self, seed: Value) -> Result<Value, ChainError> {
        let mut current = seed;
        for step in &self.steps {
            current = match step {
                Step::Operation { adapter, args, .. } => adapter(current, args)?,
                Step::Tap(observer) => {
                    observer(&current);
                    current
                }
                Step::Thru(transform) => transform(current),
            };
        }
        Ok(current)
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let steps: Vec<&str> = self
            .steps
            .iter()
            .map(|step| match step {
                Step::Operation { name, .. } => name.as_str(),
                Step::Tap(_) => "<tap>",
                Step::Thru(_) => "<thru>",
            })
            .collect();
        formatter
            .debug_struct("Chain")
            .field("seed", &self.seed)
            .field("steps", &steps)
            .finish()
    }
}
