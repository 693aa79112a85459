//! Contact form model and submission state machine.
//!
//! DESIGN
//! ======
//! `ContactFlow` is plain data: the three form fields, the tri-state
//! submission status and the transient toast. Transitions are methods that
//! take a submission generation so late callbacks (a relay settling after a
//! newer submission, a dismissal timer from an older one) are ignored instead
//! of clobbering current state. The async orchestration lives in
//! `net::submit`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::net::relay::RelayError;

/// How long a success/failure toast stays up before the form returns to idle.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(4000);

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send. Please try again.";

/// Lifecycle of a single form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// The three fields of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    /// Mirrors the form's `required` / `type=email` constraints so the submit
    /// control can stay inert until the browser would accept the form.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && looks_like_email(self.email.trim()) && !self.message.trim().is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Basic `local@domain.tld` shape check; no RFC parsing.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient feedback shown while a submission result is on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    fn success() -> Self {
        Self { kind: ToastKind::Success, message: SUCCESS_MESSAGE.to_owned() }
    }

    fn error() -> Self {
        Self { kind: ToastKind::Error, message: FAILURE_MESSAGE.to_owned() }
    }
}

/// Result of a call to `SubmissionDriver::submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(RelayError),
    /// A submission was already in flight, or the form was torn down; nothing
    /// was sent.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadySending,
}

/// Form fields plus submission status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFlow {
    pub form: ContactFormInput,
    state: SubmissionState,
    toast: Option<Toast>,
    generation: u64,
}

impl ContactFlow {
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    /// Whether the submit control should accept a click.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_sending() && self.form.is_submittable()
    }

    /// Enter `Sending` and return the new submission's generation.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::AlreadySending`] while a previous call is still
    /// awaiting the relay.
    pub fn begin(&mut self) -> Result<u64, SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::AlreadySending);
        }
        self.generation += 1;
        self.state = SubmissionState::Sending;
        self.toast = None;
        Ok(self.generation)
    }

    /// Record the relay's answer for `generation`. Returns `false` when the
    /// answer is stale and was dropped.
    pub fn settle(&mut self, generation: u64, result: &Result<(), RelayError>) -> bool {
        if generation != self.generation || !self.is_sending() {
            return false;
        }
        match result {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                self.toast = Some(Toast::success());
                self.form.clear();
            }
            Err(_) => {
                self.state = SubmissionState::Failed;
                self.toast = Some(Toast::error());
            }
        }
        true
    }

    /// Return to `Idle` if `generation` is still the settled submission.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        let settled = matches!(self.state, SubmissionState::Succeeded | SubmissionState::Failed);
        if generation != self.generation || !settled {
            return false;
        }
        self.state = SubmissionState::Idle;
        self.toast = None;
        true
    }
}

/// Shared, possibly disposed, home of a [`ContactFlow`].
pub trait FlowCell: Clone + 'static {
    /// Run `f` against the flow. `None` once the owner has been torn down.
    fn update_flow<T>(&self, f: impl FnOnce(&mut ContactFlow) -> T) -> Option<T>;
}

impl FlowCell for RwSignal<ContactFlow> {
    fn update_flow<T>(&self, f: impl FnOnce(&mut ContactFlow) -> T) -> Option<T> {
        self.try_update(f)
    }
}
