//! Property-based tests for the calculator machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated key sequences.

use calcstate::core::{format_number, CalcState, Digit, Event, Operator};
use calcstate::machine::{Calculator, Snapshot};
use proptest::prelude::*;

fn digit() -> impl Strategy<Value = Digit> {
    (0..=9u8).prop_map(|d| Digit::new(d).unwrap())
}

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Divide),
        Just(Operator::Multiply),
    ]
}

fn arbitrary_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => digit().prop_map(Event::number),
        2 => operator().prop_map(Event::operator),
        1 => Just(Event::DecimalPoint),
        1 => Just(Event::Percentage),
        1 => Just(Event::ClearEntry),
        1 => Just(Event::Equals),
        1 => Just(Event::Ok),
    ]
}

fn run(events: &[Event]) -> Calculator {
    let mut calc = Calculator::new();
    for event in events {
        calc.send(*event);
    }
    calc
}

fn type_number(value: u32) -> Vec<Event> {
    value
        .to_string()
        .chars()
        .map(|c| Event::number(Digit::from_char(c).unwrap()))
        .collect()
}

proptest! {
    #[test]
    fn typed_digits_appear_in_display(
        first in 1..=9u8,
        rest in prop::collection::vec(digit(), 0..12)
    ) {
        let mut events = vec![Event::number(Digit::new(first).unwrap())];
        events.extend(rest.iter().copied().map(Event::number));

        let calc = run(&events);

        let mut expected = first.to_string();
        expected.extend(rest.iter().map(|d| d.as_char()));
        expected.push('.');
        prop_assert_eq!(calc.display(), expected.as_str());
        prop_assert_eq!(calc.display().matches('.').count(), 1);
    }

    #[test]
    fn fraction_digits_follow_decimal_point(
        whole in 1..=9u8,
        fraction in prop::collection::vec(digit(), 1..8)
    ) {
        let mut events = vec![Event::number(Digit::new(whole).unwrap()), Event::DecimalPoint];
        events.extend(fraction.iter().copied().map(Event::number));
        events.push(Event::DecimalPoint);

        let calc = run(&events);

        let expected: String = std::iter::once(whole.to_string())
            .chain(std::iter::once(".".to_string()))
            .chain(fraction.iter().map(|d| d.to_string()))
            .collect();
        prop_assert_eq!(calc.display(), expected.as_str());
    }

    #[test]
    fn clear_everything_resets_from_any_state(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut calc = run(&events);
        calc.send(Event::ClearEverything);

        prop_assert_eq!(calc.state(), &CalcState::Start);
        prop_assert_eq!(calc.snapshot(), &Snapshot::default());
    }

    #[test]
    fn display_is_never_empty(events in prop::collection::vec(arbitrary_event(), 0..40)) {
        let mut calc = Calculator::new();
        for event in events {
            calc.send(event);
            prop_assert!(!calc.display().is_empty());
        }
    }

    #[test]
    fn machine_is_deterministic(events in prop::collection::vec(arbitrary_event(), 0..40)) {
        let first = run(&events);
        let second = run(&events);
        prop_assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn ignored_events_change_nothing(
        events in prop::collection::vec(arbitrary_event(), 0..40),
        next in arbitrary_event()
    ) {
        let mut calc = run(&events);
        let before = calc.snapshot().clone();

        if calc.send(next).is_ignored() {
            prop_assert_eq!(calc.snapshot(), &before);
        }
    }

    #[test]
    fn alert_only_reached_by_dividing_by_zero(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut calc = Calculator::new();
        for event in events {
            let before = calc.snapshot().clone();
            calc.send(event);
            if calc.state() == &CalcState::Alert && before.state != CalcState::Alert {
                prop_assert_eq!(event, Event::Equals);
                prop_assert_eq!(before.context.operator, Some(Operator::Divide));
                prop_assert_eq!(before.context.display.as_str(), "0.");
                prop_assert_eq!(&calc.snapshot().context, &before.context);
            }
        }
    }

    #[test]
    fn binary_operation_matches_float_arithmetic(
        a in 1..100_000u32,
        b in 1..100_000u32,
        op in operator()
    ) {
        let mut events = type_number(a);
        events.push(Event::operator(op));
        events.extend(type_number(b));
        events.push(Event::Equals);

        let calc = run(&events);

        let (a, b) = (f64::from(a), f64::from(b));
        let expected = match op {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Divide => a / b,
            Operator::Multiply => a * b,
        };
        prop_assert_eq!(calc.state(), &CalcState::Result);
        prop_assert_eq!(calc.display(), format_number(expected));
    }
}
