//! Log of the transitions committed during the current computation.

use super::event::EventKind;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One committed transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    pub from: S,
    pub to: S,
    pub event: EventKind,
    /// Commit time
    pub timestamp: DateTime<Utc>,
}

/// Immutable, ordered log of committed transitions.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{CalcState, EventKind, Leaf, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: CalcState::Start,
///     to: CalcState::Operand1(Leaf::Zero),
///     event: EventKind::Number,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     from: CalcState::Operand1(Leaf::Zero),
///     to: CalcState::OperatorEntered,
///     event: EventKind::Operator,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path().len(), 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// New history with `transition` appended; `self` is left as is.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append `transition` in place.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Drop every recorded transition.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// States visited, oldest first: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        self.transitions
            .first()
            .map(|first| &first.from)
            .into_iter()
            .chain(self.transitions.iter().map(|t| &t.to))
            .collect()
    }

    /// Event kinds that drove the machine, oldest first.
    pub fn events(&self) -> Vec<EventKind> {
        self.transitions.iter().map(|t| t.event).collect()
    }

    /// Whether `state` was entered at any point.
    pub fn entered(&self, state: &S) -> bool {
        self.transitions.iter().any(|t| &t.to == state)
    }

    /// Wall-clock span from the first to the last transition.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
