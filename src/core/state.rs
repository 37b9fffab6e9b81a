//! Calculator states and the `State` trait they implement.
//!
//! States form a shallow tree: most are plain top-level modes, while the two
//! operand modes are compound states carrying the leaf that tracks where the
//! user is in the number being typed.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Behaviour shared by machine states.
///
/// States are plain values: cloned into history, compared during lookup and
/// serializable for inspection.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{CalcState, Leaf, State};
///
/// let state = CalcState::Operand1(Leaf::BeforeDecimalPoint);
/// assert_eq!(state.name(), "operand1.before_decimal_point");
/// assert!(!state.is_error());
/// assert!(CalcState::Alert.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and `Display`.
    fn name(&self) -> &str;

    fn is_final(&self) -> bool {
        false
    }

    /// States the user has to acknowledge before continuing.
    fn is_error(&self) -> bool {
        false
    }
}

/// Position inside an operand being typed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leaf {
    /// Nothing but the default `0.` has been entered.
    #[default]
    Zero,
    /// Digits accumulate to the left of the decimal point.
    BeforeDecimalPoint,
    /// Digits accumulate after the decimal point.
    AfterDecimalPoint,
}

impl Leaf {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::BeforeDecimalPoint => "before_decimal_point",
            Self::AfterDecimalPoint => "after_decimal_point",
        }
    }
}

/// Compound states that own leaves.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Operand1,
    Operand2,
}

impl Region {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Operand1 => "operand1",
            Self::Operand2 => "operand2",
        }
    }
}

/// Every state the calculator can be in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcState {
    #[default]
    Start,
    Operand1(Leaf),
    NegativeNumber,
    OperatorEntered,
    Operand2(Leaf),
    NegativeNumber2,
    Result,
    Alert,
}

impl CalcState {
    /// The compound state this state sits in, if any.
    pub fn region(&self) -> Option<Region> {
        match self {
            Self::Operand1(_) => Some(Region::Operand1),
            Self::Operand2(_) => Some(Region::Operand2),
            _ => None,
        }
    }

    /// The active leaf when inside a compound state.
    pub fn leaf(&self) -> Option<Leaf> {
        match self {
            Self::Operand1(leaf) | Self::Operand2(leaf) => Some(*leaf),
            _ => None,
        }
    }

    /// Build the state for `leaf` inside `region`.
    pub fn within(region: Region, leaf: Leaf) -> Self {
        match region {
            Region::Operand1 => Self::Operand1(leaf),
            Region::Operand2 => Self::Operand2(leaf),
        }
    }
}

impl State for CalcState {
    fn name(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::Operand1(Leaf::Zero) => "operand1.zero",
            Self::Operand1(Leaf::BeforeDecimalPoint) => "operand1.before_decimal_point",
            Self::Operand1(Leaf::AfterDecimalPoint) => "operand1.after_decimal_point",
            Self::NegativeNumber => "negative_number",
            Self::OperatorEntered => "operator_entered",
            Self::Operand2(Leaf::Zero) => "operand2.zero",
            Self::Operand2(Leaf::BeforeDecimalPoint) => "operand2.before_decimal_point",
            Self::Operand2(Leaf::AfterDecimalPoint) => "operand2.after_decimal_point",
            Self::NegativeNumber2 => "negative_number_2",
            Self::Result => "result",
            Self::Alert => "alert",
        }
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Alert)
    }
}

impl fmt::Display for CalcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_uses_dotted_paths() {
        assert_eq!(CalcState::Start.name(), "start");
        assert_eq!(CalcState::Operand1(Leaf::Zero).name(), "operand1.zero");
        assert_eq!(
            CalcState::Operand2(Leaf::AfterDecimalPoint).name(),
            "operand2.after_decimal_point"
        );
        assert_eq!(CalcState::NegativeNumber2.name(), "negative_number_2");
    }

    #[test]
    fn name_is_built_from_region_and_leaf() {
        for region in [Region::Operand1, Region::Operand2] {
            for leaf in [Leaf::Zero, Leaf::BeforeDecimalPoint, Leaf::AfterDecimalPoint] {
                let state = CalcState::within(region, leaf);
                assert_eq!(
                    state.name(),
                    format!("{}.{}", region.name(), leaf.name())
                );
            }
        }
    }

    #[test]
    fn only_alert_is_an_error_state() {
        assert!(CalcState::Alert.is_error());
        assert!(!CalcState::Result.is_error());
        assert!(!CalcState::Operand2(Leaf::Zero).is_error());
    }

    #[test]
    fn no_state_is_final() {
        let states = [
            CalcState::Start,
            CalcState::Operand1(Leaf::Zero),
            CalcState::NegativeNumber,
            CalcState::OperatorEntered,
            CalcState::Operand2(Leaf::BeforeDecimalPoint),
            CalcState::NegativeNumber2,
            CalcState::Result,
            CalcState::Alert,
        ];
        assert!(states.iter().all(|s| !s.is_final()));
    }

    #[test]
    fn region_and_leaf_accessors() {
        let state = CalcState::Operand2(Leaf::BeforeDecimalPoint);
        assert_eq!(state.region(), Some(Region::Operand2));
        assert_eq!(state.leaf(), Some(Leaf::BeforeDecimalPoint));
        assert_eq!(CalcState::Result.region(), None);
        assert_eq!(CalcState::Result.leaf(), None);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalcState::Operand1(Leaf::AfterDecimalPoint);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalcState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
