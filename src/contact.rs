//! Contact form submission lifecycle.
//!
//! [`transition`] is the pure state machine. [`ContactMachine`] wraps it with the form
//! fields and a submission ticket, and returns the effects the UI has to perform: send
//! the request, schedule or cancel the success reset.

mod relay;

use std::future::Future;
use std::time::Duration;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use relay::HttpRelay;

/// Relay endpoint the form posts to. Overridable at build time.
pub const DEFAULT_RELAY_ENDPOINT: &str = match option_env!("PORTFOLIO_RELAY_URL") {
    Some(url) => url,
    None => "https://formspree.io/f/ikmalbadrol29@gmail.com",
};

/// How long the success message stays up before the form returns to idle.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// The submit control is disabled while a request is in flight.
    pub fn is_submit_disabled(self) -> bool {
        self == SubmissionStatus::Sending
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Send Message",
            SubmissionStatus::Sending => "Sending...",
            SubmissionStatus::Success => "Message Sent!",
            SubmissionStatus::Error => "Try Again",
        }
    }

    /// Inline message under the form. At most one is shown at a time.
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some("Thanks! Your message has been sent successfully."),
            SubmissionStatus::Error => Some("Oops! Something went wrong. Please try again later."),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("relay unreachable: {0}")]
    Transport(String),
    #[error("relay rejected submission with status {status}")]
    Rejected { status: u16 },
    #[error("could not encode submission: {0}")]
    Encode(String),
}

/// Identifies one submit cycle. Used to drop resets scheduled by an earlier cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    Submit,
    Delivered,
    Failed(ContactError),
    ResetElapsed(SubmissionTicket),
}

/// Side effects requested by [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Send,
    ClearForm,
    ScheduleReset,
    CancelReset,
}

/// Pure state transition. Events that make no sense in the current state leave it
/// unchanged with no commands.
pub fn transition(
    status: SubmissionStatus,
    event: &ContactEvent,
) -> (SubmissionStatus, Vec<Command>) {
    use SubmissionStatus::*;
    match (status, event) {
        (Idle | Error, ContactEvent::Submit) => (Sending, vec![Command::Send]),
        (Success, ContactEvent::Submit) => (Sending, vec![Command::CancelReset, Command::Send]),
        (Sending, ContactEvent::Delivered) => {
            (Success, vec![Command::ClearForm, Command::ScheduleReset])
        }
        (Sending, ContactEvent::Failed(_)) => (Error, Vec::new()),
        (Success, ContactEvent::ResetElapsed(_)) => (Idle, Vec::new()),
        (status, _) => (status, Vec::new()),
    }
}

/// Effects the caller performs on behalf of [`ContactMachine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEffect {
    Dispatch {
        ticket: SubmissionTicket,
        form: ContactForm,
    },
    ScheduleReset {
        ticket: SubmissionTicket,
        after: Duration,
    },
    CancelReset,
}

#[derive(Debug, Clone)]
pub struct ContactMachine {
    status: SubmissionStatus,
    form: ContactForm,
    ticket: SubmissionTicket,
    reset_after: Duration,
}

impl Default for ContactMachine {
    fn default() -> Self {
        Self::new(SUCCESS_RESET_DELAY)
    }
}

impl ContactMachine {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            status: SubmissionStatus::Idle,
            form: ContactForm::default(),
            ticket: SubmissionTicket::default(),
            reset_after,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn ticket(&self) -> SubmissionTicket {
        self.ticket
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    pub fn step(&mut self, event: ContactEvent) -> Vec<ContactEffect> {
        if let ContactEvent::ResetElapsed(ticket) = &event {
            if *ticket != self.ticket {
                log::debug!("ignoring stale reset for {ticket:?}");
                return Vec::new();
            }
        }
        if let ContactEvent::Failed(err) = &event {
            match err {
                ContactError::Rejected { status } => {
                    log::warn!("contact relay rejected submission: status {status}")
                }
                ContactError::Transport(detail) => {
                    log::warn!("contact relay unreachable: {detail}")
                }
                ContactError::Encode(detail) => {
                    log::error!("contact submission could not be encoded: {detail}")
                }
            }
        }

        let (next, commands) = transition(self.status, &event);
        if next != self.status {
            log::debug!("contact status {:?} -> {:?}", self.status, next);
        }
        self.status = next;

        let mut effects = Vec::new();
        for command in commands {
            match command {
                Command::Send => {
                    self.ticket = SubmissionTicket(self.ticket.0 + 1);
                    effects.push(ContactEffect::Dispatch {
                        ticket: self.ticket,
                        form: self.form.clone(),
                    });
                }
                Command::ClearForm => self.form.clear(),
                Command::ScheduleReset => effects.push(ContactEffect::ScheduleReset {
                    ticket: self.ticket,
                    after: self.reset_after,
                }),
                Command::CancelReset => effects.push(ContactEffect::CancelReset),
            }
        }
        effects
    }
}

/// Delivers a form to the relay and reports the HTTP status it answered with.
pub trait RelayTransport {
    fn deliver(&self, form: &ContactForm) -> impl Future<Output = Result<u16, ContactError>>;
}

/// Send one submission and translate the outcome into the event for the machine.
pub async fn dispatch<T: RelayTransport>(transport: &T, form: &ContactForm) -> ContactEvent {
    match transport.deliver(form).await {
        Ok(status) => match classify_status(status) {
            Ok(()) => ContactEvent::Delivered,
            Err(err) => ContactEvent::Failed(err),
        },
        Err(err) => ContactEvent::Failed(err),
    }
}

/// Only a 2xx answer counts as delivered.
pub fn classify_status(status: u16) -> Result<(), ContactError> {
    match StatusCode::from_u16(status) {
        Ok(code) if code.is_success() => Ok(()),
        _ => Err(ContactError::Rejected { status }),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    struct FakeRelay {
        answer: Result<u16, ContactError>,
        calls: Cell<usize>,
        seen: RefCell<Vec<ContactForm>>,
    }

    impl FakeRelay {
        fn answering(answer: Result<u16, ContactError>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl RelayTransport for FakeRelay {
        async fn deliver(&self, form: &ContactForm) -> Result<u16, ContactError> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(form.clone());
            self.answer.clone()
        }
    }

    fn filled() -> ContactMachine {
        let mut machine = ContactMachine::default();
        machine.edit(ContactField::Name, "Ada".to_string());
        machine.edit(ContactField::Email, "ada@example.com".to_string());
        machine.edit(ContactField::Message, "Hello there".to_string());
        machine
    }

    fn dispatched(effects: &[ContactEffect]) -> Option<(SubmissionTicket, ContactForm)> {
        effects.iter().find_map(|e| match e {
            ContactEffect::Dispatch { ticket, form } => Some((*ticket, form.clone())),
            _ => None,
        })
    }

    #[test]
    fn test_transition_table() {
        use SubmissionStatus::*;
        let failed = ContactEvent::Failed(ContactError::Rejected { status: 500 });
        let reset = ContactEvent::ResetElapsed(SubmissionTicket(1));

        assert_eq!(transition(Idle, &ContactEvent::Submit), (Sending, vec![Command::Send]));
        assert_eq!(transition(Error, &ContactEvent::Submit), (Sending, vec![Command::Send]));
        assert_eq!(
            transition(Success, &ContactEvent::Submit),
            (Sending, vec![Command::CancelReset, Command::Send])
        );
        assert_eq!(transition(Sending, &ContactEvent::Submit), (Sending, vec![]));
        assert_eq!(
            transition(Sending, &ContactEvent::Delivered),
            (Success, vec![Command::ClearForm, Command::ScheduleReset])
        );
        assert_eq!(transition(Sending, &failed), (Error, vec![]));
        assert_eq!(transition(Success, &reset), (Idle, vec![]));

        // no automatic way out of Error, and stray responses are ignored
        assert_eq!(transition(Error, &reset), (Error, vec![]));
        assert_eq!(transition(Idle, &ContactEvent::Delivered), (Idle, vec![]));
        assert_eq!(transition(Success, &failed), (Success, vec![]));
    }

    #[test]
    fn test_success_clears_form_and_schedules_reset() {
        let mut machine = filled();
        let effects = machine.step(ContactEvent::Submit);
        assert_eq!(machine.status(), SubmissionStatus::Sending);
        let (ticket, form) = dispatched(&effects).expect("submit should dispatch");
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Hello there");

        let effects = machine.step(ContactEvent::Delivered);
        assert_eq!(machine.status(), SubmissionStatus::Success);
        assert_eq!(machine.form(), &ContactForm::default());
        assert_eq!(
            effects,
            vec![ContactEffect::ScheduleReset {
                ticket,
                after: SUCCESS_RESET_DELAY
            }]
        );

        machine.step(ContactEvent::ResetElapsed(ticket));
        assert_eq!(machine.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_form() {
        let mut machine = filled();
        machine.step(ContactEvent::Submit);
        let effects = machine.step(ContactEvent::Failed(ContactError::Rejected { status: 500 }));
        assert!(effects.is_empty());
        assert_eq!(machine.status(), SubmissionStatus::Error);
        assert_eq!(machine.form().email, "ada@example.com");

        // retry is a fresh send
        let effects = machine.step(ContactEvent::Submit);
        assert_eq!(machine.status(), SubmissionStatus::Sending);
        assert!(dispatched(&effects).is_some());
    }

    #[test]
    fn test_submit_while_sending_is_noop() {
        let mut machine = filled();
        let first = machine.step(ContactEvent::Submit);
        let ticket = machine.ticket();
        assert!(dispatched(&first).is_some());

        let second = machine.step(ContactEvent::Submit);
        assert!(second.is_empty());
        assert_eq!(machine.ticket(), ticket);
        assert!(machine.status().is_submit_disabled());
    }

    #[test]
    fn test_resubmit_cancels_pending_reset() {
        let mut machine = filled();
        machine.step(ContactEvent::Submit);
        machine.step(ContactEvent::Delivered);
        let first = machine.ticket();

        machine.edit(ContactField::Message, "One more thing".to_string());
        let effects = machine.step(ContactEvent::Submit);
        assert_eq!(effects[0], ContactEffect::CancelReset);
        assert_eq!(machine.status(), SubmissionStatus::Sending);

        // the old timer fires anyway: Sending is untouched
        assert!(machine.step(ContactEvent::ResetElapsed(first)).is_empty());
        assert_eq!(machine.status(), SubmissionStatus::Sending);

        // and it cannot cut the second success short either
        machine.step(ContactEvent::Delivered);
        machine.step(ContactEvent::ResetElapsed(first));
        assert_eq!(machine.status(), SubmissionStatus::Success);
        machine.step(ContactEvent::ResetElapsed(machine.ticket()));
        assert_eq!(machine.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_status_affordances() {
        assert_eq!(SubmissionStatus::Idle.button_label(), "Send Message");
        assert_eq!(SubmissionStatus::Error.button_label(), "Try Again");
        assert!(SubmissionStatus::Idle.message().is_none());
        assert!(SubmissionStatus::Sending.message().is_none());
        assert_ne!(
            SubmissionStatus::Success.message(),
            SubmissionStatus::Error.message()
        );
        assert!(!SubmissionStatus::Error.is_submit_disabled());
    }

    #[test]
    fn test_form_serializes_as_flat_object() {
        let form = filled().form().clone();
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
            })
        );
    }

    #[test]
    fn test_classify_status() {
        assert!(classify_status(200).is_ok());
        assert!(classify_status(204).is_ok());
        assert_eq!(
            classify_status(302),
            Err(ContactError::Rejected { status: 302 })
        );
        assert_eq!(
            classify_status(422),
            Err(ContactError::Rejected { status: 422 })
        );
        assert!(classify_status(1000).is_err());
    }

    #[tokio::test]
    async fn test_dispatch_success_sends_once() {
        let relay = FakeRelay::answering(Ok(200));
        let form = filled().form().clone();
        assert_eq!(dispatch(&relay, &form).await, ContactEvent::Delivered);
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.seen.borrow()[0], form);
    }

    #[tokio::test]
    async fn test_dispatch_failures_are_distinguishable() {
        let form = ContactForm::default();

        let rejected = FakeRelay::answering(Ok(500));
        assert_eq!(
            dispatch(&rejected, &form).await,
            ContactEvent::Failed(ContactError::Rejected { status: 500 })
        );

        let offline = FakeRelay::answering(Err(ContactError::Transport("timed out".into())));
        assert_eq!(
            dispatch(&offline, &form).await,
            ContactEvent::Failed(ContactError::Transport("timed out".into()))
        );
        assert_eq!(offline.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_full_cycle_with_fake_relay() {
        let relay = FakeRelay::answering(Ok(201));
        let mut machine = filled();

        let effects = machine.step(ContactEvent::Submit);
        let (_, form) = dispatched(&effects).expect("submit should dispatch");
        // a second click while the request is in flight sends nothing
        assert!(dispatched(&machine.step(ContactEvent::Submit)).is_none());

        let outcome = dispatch(&relay, &form).await;
        machine.step(outcome);
        assert_eq!(machine.status(), SubmissionStatus::Success);
        assert_eq!(machine.form(), &ContactForm::default());
        assert_eq!(relay.calls.get(), 1);
    }
}
