//! Effectful shell around the calculator, using Stillwater 0.11.
//!
//! The machine returns [`Command`](crate::core::Command) values instead of
//! performing side effects. This module turns them into effects over a host
//! environment and feeds their follow-up events back into the machine.
//!
//! # Key Concepts
//!
//! - **Notifier**: host capability for showing notices
//! - **perform**: command to `BoxedEffect` over that environment
//! - **Session**: event queue that runs commands and re-delivers follow-ups
//! - **CalculatorHandle**: channel-backed `send`/`display` for UI code

mod perform;
mod session;

pub use perform::{perform, EffectError, Notifier};
pub use session::{CalculatorHandle, Session, SessionLoop};
