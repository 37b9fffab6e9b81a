//! The calculator state machine: a pure `step` and the `Calculator` that commits it.

use crate::core::{
    CalcState, Command, Context, Event, Leaf, State, StateHistory, StateTransition,
};
use crate::machine::table::calculator_table;
use crate::machine::transition::Transition;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Everything that determines how the next event is handled.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: CalcState,
    pub context: Context,
    /// Leaf `operand2` resumes when entered without an explicit leaf.
    pub operand2_leaf: Leaf,
}

/// Result of feeding one event to the machine.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// A transition fired and was committed.
    Transitioned {
        from: CalcState,
        to: CalcState,
        commands: Vec<Command>,
    },

    /// No transition is declared for this event in the current state.
    Ignored,
}

impl StepResult {
    pub fn commands(&self) -> &[Command] {
        match self {
            Self::Transitioned { commands, .. } => commands,
            Self::Ignored => &[],
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// Find the transition that handles `event` (pure).
///
/// Transitions declared on the exact state are consulted before those of the
/// enclosing compound state, which come before root-level ones. Within a tier
/// the first transition whose guard passes wins.
pub fn resolve<'a>(
    transitions: &'a [Transition],
    state: &CalcState,
    context: &Context,
    event: &Event,
) -> Option<&'a Transition> {
    (0..=2).find_map(|tier| {
        transitions
            .iter()
            .filter(|t| t.source.tier() == tier)
            .find(|t| t.can_execute(state, context, event))
    })
}

/// Compute the snapshot after `event` (pure).
///
/// Actions run in order on a working copy of the context, so the new
/// snapshot is produced whole. Returns `None` when the event is ignored.
pub fn step(
    transitions: &[Transition],
    snapshot: &Snapshot,
    event: &Event,
) -> Option<(Snapshot, Vec<Command>)> {
    let transition = resolve(transitions, &snapshot.state, &snapshot.context, event)?;

    let mut context = snapshot.context.clone();
    let commands = transition
        .actions
        .iter()
        .filter_map(|action| action.apply(&mut context, event))
        .collect();

    let operand2_leaf = if transition.resets() {
        Leaf::default()
    } else {
        snapshot.operand2_leaf
    };
    let state = transition.target.resolve(operand2_leaf);
    let operand2_leaf = match state {
        CalcState::Operand2(leaf) => leaf,
        _ => operand2_leaf,
    };

    Some((
        Snapshot {
            state,
            context,
            operand2_leaf,
        },
        commands,
    ))
}

/// Whether a transition abandons the previous computation.
///
/// `CLEAR_EVERYTHING` always does; leaving `result` for a fresh operand1 or
/// for `start` does too. Continuing from `result` with an operator does not.
fn starts_computation(from: &CalcState, to: &CalcState, event: &Event) -> bool {
    *event == Event::ClearEverything
        || (*from == CalcState::Result
            && matches!(to, CalcState::Start | CalcState::Operand1(_)))
}

/// Hierarchical desk-calculator state machine.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{CalcState, Digit, Event, Operator};
/// use calcstate::machine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.send(Event::number(Digit::new(6).unwrap()));
/// calc.send(Event::operator(Operator::Add));
/// calc.send(Event::number(Digit::new(3).unwrap()));
/// calc.send(Event::Equals);
///
/// assert_eq!(calc.display(), "9");
/// assert_eq!(calc.state(), &CalcState::Result);
/// ```
pub struct Calculator {
    snapshot: Snapshot,
    transitions: Vec<Transition>,
    history: StateHistory<CalcState>,
    record_history: bool,
}

impl Calculator {
    /// Create a calculator with the standard table.
    pub fn new() -> Self {
        Self::with_transitions(calculator_table(), true)
    }

    pub(crate) fn with_transitions(transitions: Vec<Transition>, record_history: bool) -> Self {
        Self {
            snapshot: Snapshot::default(),
            transitions,
            history: StateHistory::new(),
            record_history,
        }
    }

    /// Process one event to completion.
    ///
    /// Returned commands must be carried out by the host; the machine never
    /// delivers their follow-up events itself.
    pub fn send(&mut self, event: Event) -> StepResult {
        let from = self.snapshot.state;
        let Some((next, commands)) = step(&self.transitions, &self.snapshot, &event) else {
            trace!(state = %from, event = %event.kind(), "event ignored");
            return StepResult::Ignored;
        };

        let to = next.state;
        debug!(
            from = %from,
            to = %to,
            event = %event.kind(),
            display = %next.context.display,
            "transition"
        );
        if to.is_error() {
            warn!(from = %from, to = %to, "division by zero intercepted");
        }

        if self.record_history {
            if starts_computation(&from, &to, &event) {
                self.history.clear();
            }
            self.history.push(StateTransition {
                from,
                to,
                event: event.kind(),
                timestamp: Utc::now(),
            });
        }
        self.snapshot = next;

        StepResult::Transitioned { from, to, commands }
    }

    /// Current readout, to be rendered verbatim.
    pub fn display(&self) -> &str {
        &self.snapshot.context.display
    }

    pub fn state(&self) -> &CalcState {
        &self.snapshot.state
    }

    pub fn context(&self) -> &Context {
        &self.snapshot.context
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Transitions of the current computation.
    ///
    /// Restarted by `CLEAR_EVERYTHING` and whenever a new operand is started
    /// from `result`; the restarting transition is the first entry.
    pub fn history(&self) -> &StateHistory<CalcState> {
        &self.history
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
