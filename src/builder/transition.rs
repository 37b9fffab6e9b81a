//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Context, Event, EventKind, Guard};
use crate::machine::{Source, Target, Transition};

/// Builder for constructing transitions with a fluent API.
#[derive(Default)]
pub struct TransitionBuilder {
    source: Option<Source>,
    event: Option<EventKind>,
    guard: Option<Guard>,
    target: Option<Target>,
    actions: Vec<Action>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the state the transition is declared on (required).
    pub fn from(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: EventKind) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target (required).
    pub fn to(mut self, target: impl Into<Target>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, name: &'static str, predicate: F) -> Self
    where
        F: Fn(&Context, &Event) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(name, predicate));
        self
    }

    /// Append one action.
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several actions, run in the given order.
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSource)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let target = self.target.ok_or(BuildError::MissingTarget)?;

        Ok(Transition {
            source,
            event,
            guard: self.guard,
            target,
            actions: self.actions,
        })
    }
}
