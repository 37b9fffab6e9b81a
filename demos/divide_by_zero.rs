//! Divide by Zero
//!
//! Shows the one asynchronous path through the calculator: an alert
//! command carried out by the host, whose acknowledgment is queued back
//! into the machine.
//!
//! Key concepts:
//! - Commands returned from pure transitions
//! - A Notifier environment carrying out effects
//! - A connected session driven by a handle
//!
//! Run with: cargo run --example divide_by_zero

use calcstate::core::{CalcState, Digit, Event, Notice, Operator};
use calcstate::{logging, Calculator, EffectError, Notifier, Session};

#[derive(Clone)]
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) -> Result<(), EffectError> {
        println!("  ALERT: {}", notice);
        Ok(())
    }
}

fn digit(value: u8) -> Event {
    Event::number(Digit::new(value).unwrap())
}

#[tokio::main]
async fn main() -> Result<(), EffectError> {
    logging::init_default();

    println!("=== Divide by Zero ===\n");

    let session = Session::new(Calculator::new(), ConsoleNotifier);
    let (mut handle, driver) = session.connect();

    let keys = [
        digit(5),
        Event::operator(Operator::Divide),
        digit(0),
        Event::Equals,
        digit(2),
        Event::Equals,
    ];

    // The handle is moved in and dropped at the end, which stops the driver.
    let ui = async move {
        for event in keys {
            println!("Pressing {}", event.kind());
            handle.send(event)?;
            let shown = handle.changed().await?;
            println!("  display: {}", shown);
        }
        Ok::<_, EffectError>(())
    };

    let (session, ui) = tokio::join!(driver.run(), ui);
    ui?;

    if session.calculator().history().entered(&CalcState::Alert) {
        println!("\nThe alert was acknowledged automatically.");
    }

    println!("\nStates visited:");
    for state in session.calculator().history().get_path() {
        println!("  {}", state);
    }

    Ok(())
}
