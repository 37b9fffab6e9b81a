//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - States via the `State` trait and the `CalcState` tree
//! - Events, context and the arithmetic evaluator
//! - Guard predicates and actions attached to transitions
//! - Immutable history tracking
//!
//! Nothing in here performs I/O. Side effects leave the core as
//! [`Command`] values.

mod action;
mod arithmetic;
mod command;
mod context;
mod event;
mod guard;
mod history;
mod state;

pub use action::Action;
pub use arithmetic::{evaluate, format_number, parse_operand};
pub use command::{Command, Notice};
pub use context::{Context, DEFAULT_NEGATIVE_READOUT, DEFAULT_READOUT};
pub use event::{Digit, Event, EventKind, Operator};
pub use guard::{divide_by_zero, is_minus, is_zero, Guard};
pub use history::{StateHistory, StateTransition};
pub use state::{CalcState, Leaf, Region, State};
