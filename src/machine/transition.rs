//! Transition declarations: where they apply, what they require, where they go.

use crate::core::{Action, CalcState, Context, Event, EventKind, Guard, Leaf, Region};

/// The state (or enclosing state) a transition is declared on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Source {
    /// One exact state, leaf included.
    State(CalcState),
    /// Any leaf of a compound state.
    Region(Region),
    /// Every state; declared at the root.
    Any,
}

impl Source {
    pub fn matches(&self, state: &CalcState) -> bool {
        match self {
            Self::State(expected) => expected == state,
            Self::Region(region) => state.region() == Some(*region),
            Self::Any => true,
        }
    }

    /// Lower tiers are consulted first: a state's own transitions shadow
    /// those of its enclosing states.
    pub fn tier(&self) -> u8 {
        match self {
            Self::State(_) => 0,
            Self::Region(_) => 1,
            Self::Any => 2,
        }
    }
}

impl From<CalcState> for Source {
    fn from(state: CalcState) -> Self {
        Self::State(state)
    }
}

impl From<Region> for Source {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

/// Where a transition leads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Target {
    /// An explicit state, leaf included.
    State(CalcState),
    /// Default entry of a compound state: `operand1` starts at `zero`,
    /// `operand2` resumes its remembered leaf.
    Region(Region),
}

impl Target {
    /// Concrete state reached, given the leaf `operand2` last visited.
    pub fn resolve(&self, operand2_leaf: Leaf) -> CalcState {
        match self {
            Self::State(state) => *state,
            Self::Region(Region::Operand1) => CalcState::Operand1(Leaf::Zero),
            Self::Region(Region::Operand2) => CalcState::Operand2(operand2_leaf),
        }
    }
}

impl From<CalcState> for Target {
    fn from(state: CalcState) -> Self {
        Self::State(state)
    }
}

impl From<Region> for Target {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

/// A declared transition with its optional guard and ordered actions.
#[derive(Clone, Debug)]
pub struct Transition {
    pub source: Source,
    pub event: EventKind,
    pub guard: Option<Guard>,
    pub target: Target,
    pub actions: Vec<Action>,
}

impl Transition {
    /// Check if this transition applies (pure).
    pub fn can_execute(&self, state: &CalcState, context: &Context, event: &Event) -> bool {
        if self.event != event.kind() || !self.source.matches(state) {
            return false;
        }

        self.guard
            .as_ref()
            .is_none_or(|guard| guard.check(context, event))
    }

    /// Whether the transition wipes the whole computation.
    pub fn resets(&self) -> bool {
        self.actions.contains(&Action::Reset)
    }
}
