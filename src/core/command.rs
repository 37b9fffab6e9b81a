//! Commands returned by transitions for the host to carry out.
//!
//! The machine never performs side effects itself. When an action needs the
//! outside world, it describes the work as a [`Command`] and the host runs it.

use super::event::Event;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-visible notifications.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Notice {
    DivideByZero,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivideByZero => f.write_str("Cannot divide by zero!"),
        }
    }
}

/// Work requested by a transition.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Show `notice`, then deliver `follow_up` back to the machine on a later turn.
    Alert { notice: Notice, follow_up: Event },
}

impl Command {
    pub fn follow_up(&self) -> &Event {
        match self {
            Self::Alert { follow_up, .. } => follow_up,
        }
    }
}
