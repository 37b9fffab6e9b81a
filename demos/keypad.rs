//! Keypad Calculator
//!
//! Feeds a key script to the calculator and prints the readout after every key.
//!
//! Key concepts:
//! - Parsing keys with accumulated validation errors
//! - Stepping the pure machine directly
//! - Inspecting the snapshot and history
//!
//! Run with: cargo run --example keypad -- 12 + 3 x 2 =
//! Set CALCSTATE_LOG_LEVEL=info to see each computation.

use calcstate::input::parse_keys;
use calcstate::logging;
use calcstate::Calculator;
use stillwater::validation::Validation;

fn main() {
    logging::init_default();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let script = if args.is_empty() {
        "6 + 3 + 2 = %".to_string()
    } else {
        args.join(" ")
    };

    println!("=== Keypad Calculator ===\n");
    println!("Keys: {}\n", script);

    let events = match parse_keys(&script) {
        Validation::Success(events) => events,
        Validation::Failure(errors) => {
            eprintln!("Could not read {} key(s):", errors.len());
            for error in errors.iter() {
                eprintln!("  - {}", error);
            }
            std::process::exit(1);
        }
    };

    let mut calc = Calculator::new();
    for event in events {
        let result = calc.send(event);
        let marker = if result.is_ignored() { " (ignored)" } else { "" };
        println!(
            "{:>18} -> {:<28} [{}]{}",
            event.kind().to_string(),
            calc.state().to_string(),
            calc.display(),
            marker
        );
    }

    println!("\nDisplay: {}", calc.display());

    let keys: Vec<String> = calc
        .history()
        .events()
        .iter()
        .map(|kind| kind.to_string())
        .collect();
    println!("Accepted: {}", keys.join(" "));

    println!("\nPath:");
    for state in calc.history().get_path() {
        println!("  {}", state);
    }

    match serde_json::to_string_pretty(calc.snapshot()) {
        Ok(json) => println!("\nSnapshot:\n{}", json),
        Err(err) => eprintln!("Could not serialize snapshot: {}", err),
    }
}
