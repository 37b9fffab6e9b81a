//! The calculator state machine.
//!
//! - **Transitions**: declared on a state, a compound state or the root, with
//!   an optional guard and ordered actions
//! - **Table**: the full desk-calculator transition table
//! - **Calculator**: steps events through the table and tracks history
//!
//! Stepping is synchronous and pure; anything that must happen outside the
//! machine comes back as a [`Command`](crate::core::Command).

mod calculator;
mod table;
mod transition;

pub use calculator::{resolve, step, Calculator, Snapshot, StepResult};
pub use table::calculator_table;
pub use transition::{Source, Target, Transition};
