//! Contact form submission driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges the pure `ContactFlow` state machine to the outside world: one
//! relay call per accepted submission, then a cancellable dismissal timer
//! that returns the form to idle. The driver owns the pending timer so the
//! hosting component can cancel it on teardown.
//!
//! ORDERING
//! ========
//! `submit` moves the flow to `Sending` before it returns its future, so the
//! control is disabled before the first suspension point.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use super::relay::{ContactFields, Relay};
use crate::state::contact::{ContactFlow, ContactFormInput, DEFAULT_DISMISS_AFTER, FlowCell, SubmissionOutcome};
use crate::util::timer::Scheduler;

pub struct SubmissionDriver<C, R, S: Scheduler> {
    flow: C,
    relay: Rc<R>,
    scheduler: S,
    dismiss_after: Duration,
    pending: Rc<RefCell<Option<S::Handle>>>,
    torn_down: Rc<Cell<bool>>,
}

impl<C: Clone, R, S: Scheduler> Clone for SubmissionDriver<C, R, S> {
    fn clone(&self) -> Self {
        Self {
            flow: self.flow.clone(),
            relay: Rc::clone(&self.relay),
            scheduler: self.scheduler.clone(),
            dismiss_after: self.dismiss_after,
            pending: Rc::clone(&self.pending),
            torn_down: Rc::clone(&self.torn_down),
        }
    }
}

impl<C: FlowCell, R: Relay, S: Scheduler> SubmissionDriver<C, R, S> {
    pub fn new(flow: C, relay: R, scheduler: S) -> Self {
        Self {
            flow,
            relay: Rc::new(relay),
            scheduler,
            dismiss_after: DEFAULT_DISMISS_AFTER,
            pending: Rc::new(RefCell::new(None)),
            torn_down: Rc::new(Cell::new(false)),
        }
    }

    #[must_use]
    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    /// Send `input` through the relay.
    ///
    /// The flow enters `Sending` synchronously. A call made while another is
    /// still in flight resolves to [`SubmissionOutcome::Rejected`] without
    /// contacting the relay.
    pub fn submit(&self, input: ContactFormInput) -> impl Future<Output = SubmissionOutcome> + use<C, R, S> {
        let started = if self.torn_down.get() {
            None
        } else {
            match self.flow.update_flow(ContactFlow::begin) {
                Some(Ok(generation)) => Some(generation),
                Some(Err(e)) => {
                    leptos::logging::warn!("contact: submit ignored: {e}");
                    None
                }
                None => None,
            }
        };
        let call = started.map(|generation| {
            self.cancel_pending();
            (generation, self.relay.send(ContactFields::from(&input)))
        });
        let driver = self.clone();

        async move {
            let Some((generation, sent)) = call else {
                return SubmissionOutcome::Rejected;
            };
            let result = sent.await;
            if let Err(e) = &result {
                leptos::logging::warn!("contact: relay send failed: {e}");
            }
            if driver.torn_down.get() {
                return outcome_of(result);
            }
            let settled = driver
                .flow
                .update_flow(|flow| flow.settle(generation, &result))
                .unwrap_or(false);
            if settled {
                driver.schedule_dismissal(generation);
            }
            outcome_of(result)
        }
    }

    /// Cancel the pending dismissal and ignore any in-flight settlement.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        self.cancel_pending();
    }

    fn cancel_pending(&self) {
        // Dropping the handle cancels the timer.
        drop(self.pending.borrow_mut().take());
    }

    fn schedule_dismissal(&self, generation: u64) {
        let flow = self.flow.clone();
        let handle = self.scheduler.schedule(
            self.dismiss_after,
            Box::new(move || {
                let _ = flow.update_flow(|f| f.dismiss(generation));
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }
}

fn outcome_of(result: Result<(), super::relay::RelayError>) -> SubmissionOutcome {
    match result {
        Ok(()) => SubmissionOutcome::Succeeded,
        Err(e) => SubmissionOutcome::Failed(e),
    }
}
