//! Build errors for calculator and transition builders.

use thiserror::Error;

/// Errors that can occur when building calculators and transitions.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source not specified. Call .from(source)")]
    MissingSource,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target not specified. Call .to(target)")]
    MissingTarget,
}
