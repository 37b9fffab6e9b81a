//! Host-side driver: queues events, runs commands and feeds follow-ups back.

use crate::core::Event;
use crate::effects::perform::{perform, EffectError, Notifier};
use crate::machine::{Calculator, StepResult};
use std::collections::VecDeque;
use stillwater::effect::Effect;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

/// A calculator paired with the environment that carries out its commands.
///
/// Events are processed strictly one at a time. Follow-up events produced by
/// commands go to the back of the queue and are delivered on a later turn,
/// after the transition that requested them has been committed.
pub struct Session<Env> {
    calculator: Calculator,
    env: Env,
    queue: VecDeque<Event>,
}

impl<Env> Session<Env>
where
    Env: Notifier + Clone + Send + Sync + 'static,
{
    pub fn new(calculator: Calculator, env: Env) -> Self {
        Self {
            calculator,
            env,
            queue: VecDeque::new(),
        }
    }

    /// Submit one event and process it, plus any follow-ups, to completion.
    ///
    /// A command whose effect fails is logged and its follow-up is still
    /// delivered, so the machine never stays parked in `alert`.
    pub async fn send(&mut self, event: Event) {
        self.queue.push_back(event);

        while let Some(event) = self.queue.pop_front() {
            let StepResult::Transitioned { commands, .. } = self.calculator.send(event) else {
                continue;
            };

            for command in commands {
                let fallback = *command.follow_up();
                let follow_up = match perform::<Env>(command).run(&self.env).await {
                    Ok(follow_up) => follow_up,
                    Err(err) => {
                        warn!(error = %err, "command failed, delivering its follow-up anyway");
                        fallback
                    }
                };
                debug!(event = %follow_up.kind(), "follow-up queued");
                self.queue.push_back(follow_up);
            }

            if !self.queue.is_empty() {
                tokio::task::yield_now().await;
            }
        }
    }

    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Split into a cloneable handle for the UI and the loop that drives the session.
    pub fn connect(self) -> (CalculatorHandle, SessionLoop<Env>) {
        let (events, inbox) = mpsc::unbounded_channel();
        let (display_tx, display) = watch::channel(self.display().to_string());

        (
            CalculatorHandle { events, display },
            SessionLoop {
                session: self,
                inbox,
                display: display_tx,
            },
        )
    }
}

/// UI-facing side of a connected session.
#[derive(Clone)]
pub struct CalculatorHandle {
    events: mpsc::UnboundedSender<Event>,
    display: watch::Receiver<String>,
}

impl CalculatorHandle {
    pub fn send(&self, event: Event) -> Result<(), EffectError> {
        self.events.send(event).map_err(|_| EffectError::QueueClosed)
    }

    /// Readout as of the last processed event.
    pub fn display(&self) -> String {
        self.display.borrow().clone()
    }

    /// Wait for the readout to change and return it.
    pub async fn changed(&mut self) -> Result<String, EffectError> {
        self.display
            .changed()
            .await
            .map_err(|_| EffectError::QueueClosed)?;
        Ok(self.display.borrow_and_update().clone())
    }
}

/// Event loop of a connected session.
pub struct SessionLoop<Env> {
    session: Session<Env>,
    inbox: mpsc::UnboundedReceiver<Event>,
    display: watch::Sender<String>,
}

impl<Env> SessionLoop<Env>
where
    Env: Notifier + Clone + Send + Sync + 'static,
{
    /// Process events until every handle is dropped, then hand the session back.
    pub async fn run(mut self) -> Session<Env> {
        while let Some(event) = self.inbox.recv().await {
            self.session.send(event).await;
            self.display.send_replace(self.session.display().to_string());
        }
        self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcState, Digit, Leaf, Notice, Operator};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingEnv {
        notices: Arc<Mutex<Vec<Notice>>>,
    }

    impl Notifier for RecordingEnv {
        fn notify(&self, notice: &Notice) -> Result<(), EffectError> {
            self.notices.lock().unwrap().push(*notice);
            Ok(())
        }
    }

    #[derive(Clone)]
    struct BrokenEnv;

    impl Notifier for BrokenEnv {
        fn notify(&self, _notice: &Notice) -> Result<(), EffectError> {
            Err(EffectError::NotificationFailed("offline".to_string()))
        }
    }

    fn number(value: u8) -> Event {
        Event::number(Digit::new(value).unwrap())
    }

    #[tokio::test]
    async fn session_acknowledges_divide_by_zero_automatically() {
        let env = RecordingEnv::default();
        let mut session = Session::new(Calculator::new(), env.clone());

        for event in [number(5), Event::operator(Operator::Divide), number(0)] {
            session.send(event).await;
        }
        session.send(Event::Equals).await;

        assert_eq!(session.calculator().state(), &CalcState::Operand2(Leaf::Zero));
        assert_eq!(session.display(), "0.");
        assert_eq!(*env.notices.lock().unwrap(), vec![Notice::DivideByZero]);

        let path = session.calculator().history().get_path();
        assert_eq!(path[path.len() - 2], &CalcState::Alert);
    }

    #[tokio::test]
    async fn session_keeps_working_after_alert() {
        let mut session = Session::new(Calculator::new(), RecordingEnv::default());

        for event in [
            number(8),
            Event::operator(Operator::Divide),
            number(0),
            Event::Equals,
            number(4),
            Event::Equals,
        ] {
            session.send(event).await;
        }

        assert_eq!(session.display(), "2");
    }

    #[tokio::test]
    async fn failed_notification_still_leaves_alert() {
        let mut session = Session::new(Calculator::new(), BrokenEnv);

        for event in [number(5), Event::operator(Operator::Divide), number(0), Event::Equals] {
            session.send(event).await;
        }
        assert_eq!(session.calculator().state(), &CalcState::Operand2(Leaf::Zero));

        session.send(number(3)).await;
        assert_eq!(session.calculator().state(), &CalcState::Operand2(Leaf::BeforeDecimalPoint));
        assert_eq!(session.display(), "3.");
    }

    #[tokio::test]
    async fn connected_loop_survives_failed_notification() {
        let session = Session::new(Calculator::new(), BrokenEnv);
        let (mut handle, driver) = session.connect();

        let ui = async move {
            for event in [number(8), Event::operator(Operator::Divide), number(0), Event::Equals] {
                handle.send(event).unwrap();
                handle.changed().await.unwrap();
            }
            handle.send(number(4)).unwrap();
            handle.send(Event::Equals).unwrap();
            let mut shown = handle.display();
            while shown != "2" {
                shown = handle.changed().await.unwrap();
            }
            shown
        };

        let (session, shown) = tokio::join!(driver.run(), ui);

        assert_eq!(shown, "2");
        assert_eq!(session.calculator().state(), &CalcState::Result);
    }

    #[tokio::test]
    async fn connected_loop_publishes_display() {
        let session = Session::new(Calculator::new(), RecordingEnv::default());
        let (mut handle, driver) = session.connect();
        assert_eq!(handle.display(), "0.");

        let ui = async move {
            for event in [
                number(1),
                number(2),
                Event::operator(Operator::Add),
                number(3),
                Event::Equals,
            ] {
                handle.send(event).unwrap();
            }
            let mut shown = handle.display();
            while shown != "15" {
                shown = handle.changed().await.unwrap();
            }
            shown
        };

        let (session, shown) = tokio::join!(driver.run(), ui);

        assert_eq!(shown, "15");
        assert_eq!(session.display(), "15");
    }

    #[tokio::test]
    async fn handle_reports_closed_queue() {
        let session = Session::new(Calculator::new(), RecordingEnv::default());
        let (handle, driver) = session.connect();
        drop(driver);

        assert_eq!(handle.send(Event::Equals), Err(EffectError::QueueClosed));
    }
}
