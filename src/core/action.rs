//! Actions that update the context as part of a transition.

use super::arithmetic::{evaluate, format_number, parse_operand};
use super::command::{Command, Notice};
use super::context::{Context, DEFAULT_NEGATIVE_READOUT, DEFAULT_READOUT};
use super::event::Event;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Named context mutators attached to transitions.
///
/// Actions read the context and event and write into the context. Only
/// [`Action::DivideByZeroAlert`] produces a [`Command`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    DefaultReadout,
    DefaultNegativeReadout,
    SetReadoutNum,
    SetNegativeReadoutNum,
    AppendNumBeforeDecimal,
    AppendNumAfterDecimal,
    StartNegativeNumber,
    RecordOperator,
    SetOperator,
    ComputePercentage,
    Compute,
    StoreResultAsOperand1,
    StoreResultAsOperand2,
    DivideByZeroAlert,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DefaultReadout => "defaultReadout",
            Self::DefaultNegativeReadout => "defaultNegativeReadout",
            Self::SetReadoutNum => "setReadoutNum",
            Self::SetNegativeReadoutNum => "setNegativeReadoutNum",
            Self::AppendNumBeforeDecimal => "appendNumBeforeDecimal",
            Self::AppendNumAfterDecimal => "appendNumAfterDecimal",
            Self::StartNegativeNumber => "startNegativeNumber",
            Self::RecordOperator => "recordOperator",
            Self::SetOperator => "setOperator",
            Self::ComputePercentage => "computePercentage",
            Self::Compute => "compute",
            Self::StoreResultAsOperand1 => "storeResultAsOperand1",
            Self::StoreResultAsOperand2 => "storeResultAsOperand2",
            Self::DivideByZeroAlert => "divideByZeroAlert",
            Self::Reset => "reset",
        }
    }

    /// Apply the action to `context`.
    ///
    /// Digit and operator actions expect the matching event payload and leave
    /// the context untouched without it.
    pub fn apply(&self, context: &mut Context, event: &Event) -> Option<Command> {
        match self {
            Self::DefaultReadout => context.display = DEFAULT_READOUT.to_string(),
            Self::DefaultNegativeReadout => {
                context.display = DEFAULT_NEGATIVE_READOUT.to_string()
            }
            Self::SetReadoutNum => {
                if let Some(key) = event.key() {
                    context.display = format!("{}.", key.as_char());
                }
            }
            Self::SetNegativeReadoutNum => {
                if let Some(key) = event.key() {
                    context.display = format!("-{}.", key.as_char());
                }
            }
            Self::AppendNumBeforeDecimal => {
                if let Some(key) = event.key() {
                    if context.display.ends_with('.') {
                        context.display.pop();
                    }
                    context.display.push(key.as_char());
                    context.display.push('.');
                }
            }
            Self::AppendNumAfterDecimal => {
                if let Some(key) = event.key() {
                    context.display.push(key.as_char());
                }
            }
            Self::StartNegativeNumber => context.display = "-".to_string(),
            Self::RecordOperator => {
                context.operand1 = Some(context.display.clone());
                if let Some(operator) = event.operator_key() {
                    context.operator = Some(operator);
                }
            }
            // Keeps the operator chosen when operand1 was recorded.
            Self::SetOperator => {}
            Self::ComputePercentage => {
                let value = parse_operand(Some(&context.display)) / 100.0;
                context.display = format_number(value);
            }
            Self::Compute => {
                let result = evaluate(
                    context.operand1.as_deref(),
                    context.operand2.as_deref(),
                    context.operator,
                );
                let rendered = format_number(result);
                info!(
                    operand1 = context.operand1.as_deref().unwrap_or_default(),
                    operator = context.operator.map(|op| op.symbol()).unwrap_or_default(),
                    operand2 = context.operand2.as_deref().unwrap_or_default(),
                    result = %rendered,
                    "doing calculation"
                );
                context.display = rendered;
            }
            Self::StoreResultAsOperand1 => context.operand1 = Some(context.display.clone()),
            Self::StoreResultAsOperand2 => context.operand2 = Some(context.display.clone()),
            Self::DivideByZeroAlert => {
                return Some(Command::Alert {
                    notice: Notice::DivideByZero,
                    follow_up: Event::Ok,
                });
            }
            Self::Reset => *context = Context::default(),
        }
        None
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
