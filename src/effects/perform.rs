//! Turning machine commands into effects over a host environment.

use crate::core::{Command, Event, Notice};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use thiserror::Error;
use tracing::info;

/// Errors raised while carrying out commands in the host.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EffectError {
    #[error("Notification failed: {0}")]
    NotificationFailed(String),

    #[error("Calculator event queue is closed")]
    QueueClosed,
}

/// Host capability for showing notices to the user.
pub trait Notifier {
    fn notify(&self, notice: &Notice) -> Result<(), EffectError>;
}

/// Build the effect that carries out `command`.
///
/// Running the effect shows the notice and yields the event to queue back
/// into the machine. The machine itself is never touched here.
pub fn perform<Env>(command: Command) -> BoxedEffect<Event, EffectError, Env>
where
    Env: Notifier + Clone + Send + Sync + 'static,
{
    match command {
        Command::Alert { notice, follow_up } => from_fn(move |env: &Env| {
            info!(%notice, follow_up = %follow_up.kind(), "showing alert");
            env.notify(&notice)?;
            Ok(follow_up)
        })
        .boxed(),
    }
}
