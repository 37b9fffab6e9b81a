//! The mutable record the calculator carries across transitions.

use super::event::Operator;
use serde::{Deserialize, Serialize};

/// Readout shown when no digits have been entered.
pub const DEFAULT_READOUT: &str = "0.";

/// Readout shown for a negative number with no digits yet.
pub const DEFAULT_NEGATIVE_READOUT: &str = "-0.";

/// Display text plus the operands and operator of the computation in flight.
///
/// `display` is what the user is typing or viewing; operands are snapshots
/// copied out of it at specific transitions.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Context {
    pub display: String,
    pub operand1: Option<String>,
    pub operand2: Option<String>,
    pub operator: Option<Operator>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            display: DEFAULT_READOUT.to_string(),
            operand1: None,
            operand2: None,
            operator: None,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}
