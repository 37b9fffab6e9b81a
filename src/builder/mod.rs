//! Builder API for ergonomic calculator construction.
//!
//! This module provides fluent builders for transitions and calculators, plus
//! shorthand constructors used to lay out transition tables.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::CalculatorBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Action, EventKind, Guard};
use crate::machine::{Source, Target, Transition};

/// Create an unguarded transition.
///
/// # Example
///
/// ```
/// use calcstate::builder::simple_transition;
/// use calcstate::core::{Action, CalcState, EventKind, Leaf};
///
/// let transition = simple_transition(
///     CalcState::Start,
///     EventKind::DecimalPoint,
///     CalcState::Operand1(Leaf::AfterDecimalPoint),
///     &[Action::DefaultReadout],
/// );
/// assert!(transition.guard.is_none());
/// ```
pub fn simple_transition(
    source: impl Into<Source>,
    event: EventKind,
    target: impl Into<Target>,
    actions: &[Action],
) -> Transition {
    Transition {
        source: source.into(),
        event,
        guard: None,
        target: target.into(),
        actions: actions.to_vec(),
    }
}

/// Create a transition taken only when `guard` passes.
///
/// # Example
///
/// ```
/// use calcstate::builder::guarded_transition;
/// use calcstate::core::{Action, CalcState, EventKind, Guard, Leaf};
///
/// let transition = guarded_transition(
///     CalcState::Start,
///     EventKind::Number,
///     Guard::is_zero(),
///     CalcState::Operand1(Leaf::Zero),
///     &[Action::DefaultReadout],
/// );
/// assert_eq!(transition.guard.map(|g| g.name()), Some("isZero"));
/// ```
pub fn guarded_transition(
    source: impl Into<Source>,
    event: EventKind,
    guard: Guard,
    target: impl Into<Target>,
    actions: &[Action],
) -> Transition {
    Transition {
        guard: Some(guard),
        ..simple_transition(source, event, target, actions)
    }
}
