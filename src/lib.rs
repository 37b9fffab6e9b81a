//! Calcstate: a hierarchical desk-calculator state machine
//!
//! Calcstate follows the "pure core, imperative shell" philosophy. The
//! calculator is a table of guarded transitions over a small context record;
//! stepping it is pure and synchronous. The one side effect the calculator
//! ever needs, telling the user they tried to divide by zero, leaves the
//! core as a command value that the shell turns into a Stillwater effect.
//!
//! # Core Concepts
//!
//! - **State**: `CalcState`, with `operand1`/`operand2` as compound states
//! - **Guards**: pure predicates choosing between alternatives
//! - **Actions**: context mutators attached to transitions
//! - **Commands**: side effects requested by a transition, run by the host
//!
//! # Example
//!
//! ```rust
//! use calcstate::core::{CalcState, Digit, Event, Operator};
//! use calcstate::Calculator;
//!
//! let mut calc = Calculator::new();
//! for event in [
//!     Event::number(Digit::new(5).unwrap()),
//!     Event::number(Digit::ZERO),
//!     Event::Percentage,
//! ] {
//!     calc.send(event);
//! }
//!
//! assert_eq!(calc.display(), "0.5");
//! assert_eq!(calc.state(), &CalcState::Result);
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod input;
pub mod logging;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use crate::core::{CalcState, Command, Context, Digit, Event, Guard, Operator, State};
pub use effects::{EffectError, Notifier, Session};
pub use machine::{Calculator, StepResult};
