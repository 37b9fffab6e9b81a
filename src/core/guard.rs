//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the context and the incoming event.
//! They decide which of several alternatives declared for the same
//! (state, event) pair is taken.

use super::context::{Context, DEFAULT_READOUT};
use super::event::{Event, Operator};
use std::fmt;
use std::sync::Arc;

type Predicate = Arc<dyn Fn(&Context, &Event) -> bool + Send + Sync>;

/// Named pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{Context, Digit, Event, Guard};
///
/// let guard = Guard::is_zero();
/// let ctx = Context::new();
///
/// assert!(guard.check(&ctx, &Event::number(Digit::ZERO)));
/// assert!(!guard.check(&ctx, &Event::number(Digit::new(4).unwrap())));
/// ```
#[derive(Clone)]
pub struct Guard {
    name: &'static str,
    predicate: Predicate,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic, free of side effects and
    /// thread-safe (Send + Sync).
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&Context, &Event) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, context: &Context, event: &Event) -> bool {
        (self.predicate)(context, event)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Guard passing when this one fails.
    pub fn negate(self, name: &'static str) -> Self {
        let inner = self.predicate;
        Guard::new(name, move |ctx, event| !inner(ctx, event))
    }

    pub fn is_zero() -> Self {
        Guard::new("isZero", is_zero)
    }

    pub fn is_not_zero() -> Self {
        Guard::is_zero().negate("isNotZero")
    }

    pub fn is_minus() -> Self {
        Guard::new("isMinus", is_minus)
    }

    pub fn is_not_minus() -> Self {
        Guard::is_minus().negate("isNotMinus")
    }

    pub fn divide_by_zero() -> Self {
        Guard::new("divideByZero", |ctx, _| divide_by_zero(ctx))
    }

    pub fn not_divide_by_zero() -> Self {
        Guard::divide_by_zero().negate("notDivideByZero")
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.name).finish()
    }
}

/// The event carries the digit zero.
pub fn is_zero(_: &Context, event: &Event) -> bool {
    event.key().is_some_and(|key| key.is_zero())
}

/// The event carries the subtraction operator.
pub fn is_minus(_: &Context, event: &Event) -> bool {
    event.operator_key() == Some(Operator::Subtract)
}

/// Dividing by the operand currently being typed would divide by zero.
///
/// The divisor is the live readout, which is what `EQUALS` would store as
/// operand2. Only the untouched zero readout counts.
pub fn divide_by_zero(context: &Context) -> bool {
    context.display == DEFAULT_READOUT && context.operator == Some(Operator::Divide)
}
