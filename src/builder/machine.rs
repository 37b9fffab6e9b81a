//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::machine::{calculator_table, Calculator, Transition};

/// Builder for configuring a [`Calculator`] with a fluent API.
///
/// Start from `standard_transitions` and add to it, or lay out a table of your own.
///
/// ```rust
/// use calcstate::builder::CalculatorBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .standard_transitions()
///     .record_history(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.display(), "0.");
/// assert!(calc.history().is_empty());
/// ```
pub struct CalculatorBuilder {
    transitions: Vec<Transition>,
    record_history: bool,
}

impl CalculatorBuilder {
    /// Create a new builder with history recording on and no transitions.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            record_history: true,
        }
    }

    /// Add the standard desk-calculator table.
    pub fn standard_transitions(mut self) -> Self {
        self.transitions.extend(calculator_table());
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Keep a log of committed transitions (on by default).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Build the calculator.
    pub fn build(self) -> Result<Calculator, BuildError> {
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(Calculator::with_transitions(
            self.transitions,
            self.record_history,
        ))
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
