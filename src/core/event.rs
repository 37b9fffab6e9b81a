//! Input events delivered to the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Returns `None` for values above nine.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Character used when the digit is written into the readout.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("digit out of range: {value}"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary operator keys.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "x")]
    Multiply,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Divide => "/",
            Self::Multiply => "x",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "/" => Some(Self::Divide),
            "x" => Some(Self::Multiply),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Events accepted by [`Calculator::send`](crate::machine::Calculator::send).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    Number { key: Digit },
    Operator { operator: Operator },
    DecimalPoint,
    Percentage,
    ClearEntry,
    ClearEverything,
    Equals,
    Ok,
}

impl Event {
    pub fn number(key: Digit) -> Self {
        Self::Number { key }
    }

    pub fn operator(operator: Operator) -> Self {
        Self::Operator { operator }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Number { .. } => EventKind::Number,
            Self::Operator { .. } => EventKind::Operator,
            Self::DecimalPoint => EventKind::DecimalPoint,
            Self::Percentage => EventKind::Percentage,
            Self::ClearEntry => EventKind::ClearEntry,
            Self::ClearEverything => EventKind::ClearEverything,
            Self::Equals => EventKind::Equals,
            Self::Ok => EventKind::Ok,
        }
    }

    /// Digit payload, for `NUMBER` events.
    pub fn key(&self) -> Option<Digit> {
        match self {
            Self::Number { key } => Some(*key),
            _ => None,
        }
    }

    /// Operator payload, for `OPERATOR` events.
    pub fn operator_key(&self) -> Option<Operator> {
        match self {
            Self::Operator { operator } => Some(*operator),
            _ => None,
        }
    }
}

/// Payload-free discriminant of [`Event`], used to index the transition table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Number,
    Operator,
    DecimalPoint,
    Percentage,
    ClearEntry,
    ClearEverything,
    Equals,
    Ok,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::Operator => "OPERATOR",
            Self::DecimalPoint => "DECIMAL_POINT",
            Self::Percentage => "PERCENTAGE",
            Self::ClearEntry => "CLEAR_ENTRY",
            Self::ClearEverything => "CLEAR_EVERYTHING",
            Self::Equals => "EQUALS",
            Self::Ok => "OK",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_rejects_values_above_nine() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
        assert!(Digit::try_from(42u8).is_err());
    }

    #[test]
    fn digit_char_matches_value() {
        for value in 0..=9u8 {
            let digit = Digit::new(value).unwrap();
            assert_eq!(digit.as_char().to_digit(10), Some(value as u32));
            assert_eq!(Digit::from_char(digit.as_char()), Some(digit));
        }
        assert!(Digit::ZERO.is_zero());
    }

    #[test]
    fn operator_symbols_round_trip() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Divide,
            Operator::Multiply,
        ] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("*"), None);
    }

    #[test]
    fn event_kind_and_payloads() {
        let seven = Event::number(Digit::new(7).unwrap());
        assert_eq!(seven.kind(), EventKind::Number);
        assert_eq!(seven.key().map(Digit::value), Some(7));
        assert_eq!(seven.operator_key(), None);

        let minus = Event::operator(Operator::Subtract);
        assert_eq!(minus.kind(), EventKind::Operator);
        assert_eq!(minus.operator_key(), Some(Operator::Subtract));
        assert_eq!(EventKind::ClearEverything.to_string(), "CLEAR_EVERYTHING");
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let event = Event::operator(Operator::Multiply);
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["type"], "OPERATOR");
        assert_eq!(json["operator"], "x");

        let parsed: Event = serde_json::from_str(r#"{"type":"NUMBER","key":4}"#).unwrap();
        assert_eq!(parsed, Event::number(Digit::new(4).unwrap()));
        assert!(serde_json::from_str::<Event>(r#"{"type":"NUMBER","key":12}"#).is_err());
    }
}
