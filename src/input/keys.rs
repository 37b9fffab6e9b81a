//! Key labels to events.

use crate::core::{Digit, Event, Operator};
use crate::input::error::KeyError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Parse a single key label.
///
/// Accepted labels: `0`-`9`, `+`, `-`, `/`, `x` (or `*`), `.`, `%`, `=`,
/// `CE`, `C`/`AC`, `OK`. Letters are case-insensitive.
pub fn parse_key(label: &str) -> Result<Event, KeyError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(KeyError::Empty);
    }

    let mut chars = label.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(digit) = Digit::from_char(c) {
            return Ok(Event::number(digit));
        }
    }

    if let Some(operator) = Operator::from_symbol(label) {
        return Ok(Event::operator(operator));
    }

    match label.to_ascii_uppercase().as_str() {
        "*" | "X" => Ok(Event::operator(Operator::Multiply)),
        "." => Ok(Event::DecimalPoint),
        "%" => Ok(Event::Percentage),
        "=" => Ok(Event::Equals),
        "CE" => Ok(Event::ClearEntry),
        "C" | "AC" => Ok(Event::ClearEverything),
        "OK" => Ok(Event::Ok),
        _ => Err(KeyError::UnknownKey {
            position: 0,
            token: label.to_string(),
        }),
    }
}

/// Parse one whitespace-separated token; a run of digits becomes one event per digit.
fn parse_token(position: usize, token: &str) -> Result<Vec<Event>, KeyError> {
    let unknown = || KeyError::UnknownKey {
        position,
        token: token.to_string(),
    };

    if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit()) {
        return token
            .chars()
            .map(|c| Digit::from_char(c).map(Event::number).ok_or_else(unknown))
            .collect();
    }

    parse_key(token).map(|event| vec![event]).map_err(|_| unknown())
}

/// Parse a whitespace-separated key script such as `"12 + 3 ="`.
///
/// Every unknown token is reported, not just the first.
///
/// ```rust
/// use calcstate::input::parse_keys;
/// use stillwater::validation::Validation;
///
/// assert!(parse_keys("12 + 3 =").is_success());
///
/// match parse_keys("1 ? 2 !") {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
///     Validation::Success(_) => panic!("expected failures"),
/// }
/// ```
pub fn parse_keys(script: &str) -> Validation<Vec<Event>, NonEmptyVec<KeyError>> {
    let checks: Vec<Validation<Vec<Event>, NonEmptyVec<KeyError>>> = script
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| match parse_token(position, token) {
            Ok(events) => Validation::success(events),
            Err(error) => Validation::fail(error),
        })
        .collect();

    Validation::all_vec(checks).map(|groups| groups.into_iter().flatten().collect())
}
