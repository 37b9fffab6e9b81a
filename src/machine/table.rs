//! The desk-calculator transition table.

use crate::builder::{guarded_transition, simple_transition};
use crate::core::{Action, CalcState, EventKind, Guard, Leaf, Region};
use crate::machine::transition::{Source, Transition};

use Action::*;
use CalcState::{Alert, NegativeNumber, NegativeNumber2, Operand1, Operand2, OperatorEntered, Start};
use EventKind::{ClearEntry, ClearEverything, DecimalPoint, Equals, Number, Percentage};
use Leaf::{AfterDecimalPoint, BeforeDecimalPoint, Zero};

/// Transitions for one compound operand state: digit entry per leaf plus the
/// leaf-independent keys handled by `operand1`/`operand2` themselves.
fn digit_entry(region: Region) -> Vec<Transition> {
    let leaf = |leaf| CalcState::within(region, leaf);
    vec![
        simple_transition(leaf(Zero), Number, leaf(BeforeDecimalPoint), &[SetReadoutNum]),
        simple_transition(leaf(Zero), DecimalPoint, leaf(AfterDecimalPoint), &[]),
        simple_transition(
            leaf(BeforeDecimalPoint),
            Number,
            leaf(BeforeDecimalPoint),
            &[AppendNumBeforeDecimal],
        ),
        simple_transition(leaf(BeforeDecimalPoint), DecimalPoint, leaf(AfterDecimalPoint), &[]),
        simple_transition(
            leaf(AfterDecimalPoint),
            Number,
            leaf(AfterDecimalPoint),
            &[AppendNumAfterDecimal],
        ),
    ]
}

/// Entry of a negative operand after a leading minus.
fn negative_entry(from: CalcState, region: Region, cleared: CalcState) -> Vec<Transition> {
    let leaf = |leaf| CalcState::within(region, leaf);
    vec![
        guarded_transition(from, Number, Guard::is_zero(), leaf(Zero), &[DefaultNegativeReadout]),
        guarded_transition(
            from,
            Number,
            Guard::is_not_zero(),
            leaf(BeforeDecimalPoint),
            &[SetNegativeReadoutNum],
        ),
        simple_transition(from, DecimalPoint, leaf(AfterDecimalPoint), &[DefaultNegativeReadout]),
        simple_transition(from, ClearEntry, cleared, &[DefaultReadout]),
    ]
}

/// Build the complete calculator table.
///
/// Alternatives sharing a (state, event) pair are listed in priority order.
pub fn calculator_table() -> Vec<Transition> {
    let mut table = Vec::new();

    // start
    table.extend([
        guarded_transition(Start, Number, Guard::is_zero(), Operand1(Zero), &[DefaultReadout]),
        guarded_transition(
            Start,
            Number,
            Guard::is_not_zero(),
            Operand1(BeforeDecimalPoint),
            &[SetReadoutNum],
        ),
        guarded_transition(
            Start,
            EventKind::Operator,
            Guard::is_minus(),
            NegativeNumber,
            &[StartNegativeNumber],
        ),
        simple_transition(Start, DecimalPoint, Operand1(AfterDecimalPoint), &[DefaultReadout]),
    ]);

    // operand1
    table.extend(digit_entry(Region::Operand1));
    table.extend([
        simple_transition(
            Region::Operand1,
            EventKind::Operator,
            OperatorEntered,
            &[RecordOperator],
        ),
        simple_transition(
            Region::Operand1,
            Percentage,
            CalcState::Result,
            &[StoreResultAsOperand2, ComputePercentage],
        ),
        simple_transition(Region::Operand1, ClearEntry, Operand1(Zero), &[DefaultReadout]),
    ]);

    table.extend(negative_entry(NegativeNumber, Region::Operand1, Start));

    // operator_entered
    table.extend([
        guarded_transition(
            OperatorEntered,
            EventKind::Operator,
            Guard::is_not_minus(),
            OperatorEntered,
            &[SetOperator],
        ),
        guarded_transition(
            OperatorEntered,
            EventKind::Operator,
            Guard::is_minus(),
            NegativeNumber2,
            &[StartNegativeNumber],
        ),
        guarded_transition(
            OperatorEntered,
            Number,
            Guard::is_zero(),
            Operand2(Zero),
            &[DefaultReadout],
        ),
        guarded_transition(
            OperatorEntered,
            Number,
            Guard::is_not_zero(),
            Operand2(BeforeDecimalPoint),
            &[SetReadoutNum],
        ),
        simple_transition(
            OperatorEntered,
            DecimalPoint,
            Operand2(AfterDecimalPoint),
            &[DefaultReadout],
        ),
    ]);

    // operand2
    table.extend(digit_entry(Region::Operand2));
    table.extend([
        simple_transition(
            Region::Operand2,
            EventKind::Operator,
            OperatorEntered,
            &[StoreResultAsOperand2, Compute, StoreResultAsOperand1, SetOperator],
        ),
        guarded_transition(
            Region::Operand2,
            Equals,
            Guard::not_divide_by_zero(),
            CalcState::Result,
            &[StoreResultAsOperand2, Compute],
        ),
        guarded_transition(
            Region::Operand2,
            Equals,
            Guard::divide_by_zero(),
            Alert,
            &[DivideByZeroAlert],
        ),
        simple_transition(Region::Operand2, ClearEntry, Region::Operand2, &[DefaultReadout]),
    ]);

    table.extend(negative_entry(NegativeNumber2, Region::Operand2, OperatorEntered));

    // result
    table.extend([
        guarded_transition(
            CalcState::Result,
            Number,
            Guard::is_zero(),
            Region::Operand1,
            &[DefaultReadout],
        ),
        guarded_transition(
            CalcState::Result,
            Number,
            Guard::is_not_zero(),
            Operand1(BeforeDecimalPoint),
            &[SetReadoutNum],
        ),
        simple_transition(
            CalcState::Result,
            Percentage,
            CalcState::Result,
            &[StoreResultAsOperand2, ComputePercentage],
        ),
        simple_transition(
            CalcState::Result,
            EventKind::Operator,
            OperatorEntered,
            &[StoreResultAsOperand1, RecordOperator],
        ),
        simple_transition(CalcState::Result, ClearEntry, Start, &[DefaultReadout]),
    ]);

    // alert
    table.push(simple_transition(Alert, EventKind::Ok, Region::Operand2, &[]));

    // root
    table.push(simple_transition(Source::Any, ClearEverything, Start, &[Reset]));

    table
}
