use super::*;

use futures::channel::oneshot;
use futures::executor::block_on;

use crate::net::relay::{RelayError, RelayFuture};
use crate::state::contact::{FAILURE_MESSAGE, SUCCESS_MESSAGE, SubmissionState, ToastKind};

// =============================================================
// Test doubles
// =============================================================

impl FlowCell for Rc<RefCell<ContactFlow>> {
    fn update_flow<T>(&self, f: impl FnOnce(&mut ContactFlow) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// A cell whose owner can be disposed, like a Leptos signal.
#[derive(Clone, Default)]
struct DisposableCell(Rc<RefCell<Option<ContactFlow>>>);

impl FlowCell for DisposableCell {
    fn update_flow<T>(&self, f: impl FnOnce(&mut ContactFlow) -> T) -> Option<T> {
        self.0.borrow_mut().as_mut().map(f)
    }
}

type Pending = Rc<RefCell<Vec<oneshot::Sender<Result<(), RelayError>>>>>;

#[derive(Clone)]
enum Script {
    AlwaysOk,
    AlwaysFail,
    Held(Pending),
}

#[derive(Clone)]
struct FakeRelay {
    script: Script,
    calls: Rc<RefCell<Vec<ContactFields>>>,
}

impl FakeRelay {
    fn new(script: Script) -> Self {
        Self { script, calls: Rc::default() }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Relay for FakeRelay {
    fn send(&self, fields: ContactFields) -> RelayFuture {
        self.calls.borrow_mut().push(fields);
        match &self.script {
            Script::AlwaysOk => Box::pin(async { Ok(()) }),
            Script::AlwaysFail => Box::pin(async { Err(RelayError::Status { status: 500, body: "boom".into() }) }),
            Script::Held(senders) => {
                let (tx, rx) = oneshot::channel();
                senders.borrow_mut().push(tx);
                Box::pin(async move { rx.await.unwrap_or_else(|_| Err(RelayError::Network("dropped".into()))) })
            }
        }
    }
}

struct Scheduled {
    delay: Duration,
    cancelled: Rc<Cell<bool>>,
    task: Option<Box<dyn FnOnce()>>,
}

/// Scheduler whose clock only moves when the test says so.
#[derive(Clone, Default)]
struct ManualScheduler {
    queue: Rc<RefCell<Vec<Scheduled>>>,
}

struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let cancelled = Rc::new(Cell::new(false));
        self.queue.borrow_mut().push(Scheduled { delay, cancelled: Rc::clone(&cancelled), task: Some(task) });
        ManualHandle { cancelled }
    }
}

impl ManualScheduler {
    /// Tasks that are neither cancelled nor fired.
    fn armed(&self) -> usize {
        self.queue.borrow().iter().filter(|s| !s.cancelled.get() && s.task.is_some()).count()
    }

    fn last_delay(&self) -> Option<Duration> {
        self.queue.borrow().last().map(|s| s.delay)
    }

    /// Let the clock run past every armed task.
    fn elapse(&self) -> usize {
        let due: Vec<Box<dyn FnOnce()>> = self
            .queue
            .borrow_mut()
            .iter_mut()
            .filter(|s| !s.cancelled.get())
            .filter_map(|s| s.task.take())
            .collect();
        let fired = due.len();
        for task in due {
            task();
        }
        fired
    }
}

fn ada() -> ContactFormInput {
    ContactFormInput::new("Ada", "ada@example.com", "Hello")
}

fn flow_with(form: ContactFormInput) -> ContactFlow {
    let mut flow = ContactFlow::default();
    flow.form = form;
    flow
}

fn filled_flow() -> Rc<RefCell<ContactFlow>> {
    Rc::new(RefCell::new(flow_with(ada())))
}

#[test]
fn prefilled_flow_starts_idle_and_submittable() {
    let flow = filled_flow();
    assert_eq!(state_of(&flow), SubmissionState::Idle);
    assert!(flow.borrow().can_submit());
    assert_eq!(flow.borrow().form, ada());
}

fn state_of(flow: &Rc<RefCell<ContactFlow>>) -> SubmissionState {
    flow.borrow().state()
}

// =============================================================
// Success path
// =============================================================

#[test]
fn success_goes_sending_succeeded_idle_and_clears_form() {
    let flow = filled_flow();
    let relay = FakeRelay::new(Script::AlwaysOk);
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(flow.clone(), relay.clone(), scheduler.clone());

    assert_eq!(state_of(&flow), SubmissionState::Idle);
    let pending = driver.submit(ada());
    assert_eq!(state_of(&flow), SubmissionState::Sending);

    assert_eq!(block_on(pending), SubmissionOutcome::Succeeded);
    assert_eq!(state_of(&flow), SubmissionState::Succeeded);
    assert!(flow.borrow().form.is_empty());
    let toast = flow.borrow().toast().cloned().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, SUCCESS_MESSAGE);

    assert_eq!(scheduler.last_delay(), Some(Duration::from_millis(4000)));
    assert_eq!(scheduler.elapse(), 1);
    assert_eq!(state_of(&flow), SubmissionState::Idle);
    assert!(flow.borrow().form.is_empty());
    assert!(flow.borrow().toast().is_none());
}

#[test]
fn relay_receives_the_three_fields_once() {
    let relay = FakeRelay::new(Script::AlwaysOk);
    let driver = SubmissionDriver::new(filled_flow(), relay.clone(), ManualScheduler::default());

    block_on(driver.submit(ada()));

    let calls = relay.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].user_name, "Ada");
    assert_eq!(calls[0].user_email, "ada@example.com");
    assert_eq!(calls[0].message, "Hello");
}

// =============================================================
// Failure path
// =============================================================

#[test]
fn failure_goes_sending_failed_idle_and_keeps_form() {
    let flow = filled_flow();
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(flow.clone(), FakeRelay::new(Script::AlwaysFail), scheduler.clone());

    let pending = driver.submit(ada());
    assert_eq!(state_of(&flow), SubmissionState::Sending);

    let outcome = block_on(pending);
    assert_eq!(outcome, SubmissionOutcome::Failed(RelayError::Status { status: 500, body: "boom".into() }));
    assert_eq!(state_of(&flow), SubmissionState::Failed);
    assert_eq!(flow.borrow().form, ada());
    assert_eq!(flow.borrow().toast().map(|t| t.message.as_str()), Some(FAILURE_MESSAGE));

    scheduler.elapse();
    assert_eq!(state_of(&flow), SubmissionState::Idle);
    assert_eq!(flow.borrow().form, ada());
    assert!(flow.borrow().toast().is_none());
}

#[test]
fn failure_is_not_retried() {
    let relay = FakeRelay::new(Script::AlwaysFail);
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(filled_flow(), relay.clone(), scheduler.clone());

    block_on(driver.submit(ada()));
    scheduler.elapse();

    assert_eq!(relay.call_count(), 1);
}

// =============================================================
// Concurrency
// =============================================================

#[test]
fn second_submit_while_sending_is_rejected_without_a_call() {
    let senders = Pending::default();
    let flow = filled_flow();
    let relay = FakeRelay::new(Script::Held(senders.clone()));
    let driver = SubmissionDriver::new(flow.clone(), relay.clone(), ManualScheduler::default());

    let first = driver.submit(ada());
    let second = driver.submit(ada());

    assert_eq!(block_on(second), SubmissionOutcome::Rejected);
    assert_eq!(relay.call_count(), 1);
    assert_eq!(state_of(&flow), SubmissionState::Sending);

    let tx = senders.borrow_mut().pop().unwrap();
    tx.send(Ok(())).unwrap();
    assert_eq!(block_on(first), SubmissionOutcome::Succeeded);
    assert_eq!(state_of(&flow), SubmissionState::Succeeded);
}

#[test]
fn new_submission_cancels_previous_dismissal() {
    let flow = filled_flow();
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(flow.clone(), FakeRelay::new(Script::AlwaysFail), scheduler.clone());

    block_on(driver.submit(ada()));
    assert_eq!(scheduler.armed(), 1);

    let retry = driver.submit(ada());
    assert_eq!(scheduler.armed(), 0);
    assert!(flow.borrow().toast().is_none());

    block_on(retry);
    assert_eq!(scheduler.armed(), 1);
    assert_eq!(scheduler.elapse(), 1);
    assert_eq!(state_of(&flow), SubmissionState::Idle);
}

// =============================================================
// Dismissal delay and teardown
// =============================================================

#[test]
fn dismissal_delay_is_configurable() {
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(filled_flow(), FakeRelay::new(Script::AlwaysOk), scheduler.clone())
        .with_dismiss_after(Duration::from_millis(1500));

    block_on(driver.submit(ada()));

    assert_eq!(scheduler.last_delay(), Some(Duration::from_millis(1500)));
}

#[test]
fn teardown_cancels_pending_dismissal() {
    let flow = filled_flow();
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(flow.clone(), FakeRelay::new(Script::AlwaysOk), scheduler.clone());

    block_on(driver.submit(ada()));
    driver.teardown();

    assert_eq!(scheduler.armed(), 0);
    assert_eq!(scheduler.elapse(), 0);
    assert_eq!(state_of(&flow), SubmissionState::Succeeded);
}

#[test]
fn teardown_during_flight_drops_the_late_answer() {
    let senders = Pending::default();
    let flow = filled_flow();
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(flow.clone(), FakeRelay::new(Script::Held(senders.clone())), scheduler.clone());

    let pending = driver.submit(ada());
    driver.teardown();
    senders.borrow_mut().pop().unwrap().send(Ok(())).unwrap();

    assert_eq!(block_on(pending), SubmissionOutcome::Succeeded);
    assert_eq!(flow.borrow().form, ada());
    assert_eq!(scheduler.armed(), 0);
}

#[test]
fn submit_after_teardown_is_rejected() {
    let relay = FakeRelay::new(Script::AlwaysOk);
    let driver = SubmissionDriver::new(filled_flow(), relay.clone(), ManualScheduler::default());

    driver.teardown();

    assert_eq!(block_on(driver.submit(ada())), SubmissionOutcome::Rejected);
    assert_eq!(relay.call_count(), 0);
}

#[test]
fn disposed_cell_rejects_without_a_call() {
    let cell = DisposableCell::default();
    let relay = FakeRelay::new(Script::AlwaysOk);
    let driver = SubmissionDriver::new(cell, relay.clone(), ManualScheduler::default());

    assert_eq!(block_on(driver.submit(ada())), SubmissionOutcome::Rejected);
    assert_eq!(relay.call_count(), 0);
}

#[test]
fn dismissal_after_cell_disposal_is_a_noop() {
    let cell = DisposableCell(Rc::new(RefCell::new(Some(flow_with(ada())))));
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(cell.clone(), FakeRelay::new(Script::AlwaysOk), scheduler.clone());

    block_on(driver.submit(ada()));
    cell.0.borrow_mut().take();

    assert_eq!(scheduler.elapse(), 1);
    assert!(cell.0.borrow().is_none());
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn scenario_always_succeeding_relay_ends_idle_and_empty() {
    let flow = filled_flow();
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(flow.clone(), FakeRelay::new(Script::AlwaysOk), scheduler.clone());

    let input = flow.borrow().form.clone();
    block_on(driver.submit(input));
    scheduler.elapse();

    let end = flow.borrow();
    assert_eq!(end.state(), SubmissionState::Idle);
    assert!(end.form.is_empty());
    assert!(end.toast().is_none());
}

#[test]
fn scenario_always_rejecting_relay_ends_idle_and_populated() {
    let flow = filled_flow();
    let scheduler = ManualScheduler::default();
    let driver = SubmissionDriver::new(flow.clone(), FakeRelay::new(Script::AlwaysFail), scheduler.clone());

    let input = flow.borrow().form.clone();
    block_on(driver.submit(input));
    let shown = flow.borrow().toast().map(|t| t.kind);
    scheduler.elapse();

    assert_eq!(shown, Some(ToastKind::Error));
    let end = flow.borrow();
    assert_eq!(end.state(), SubmissionState::Idle);
    assert_eq!(end.form.name, "Ada");
    assert_eq!(end.form.email, "ada@example.com");
    assert_eq!(end.form.message, "Hello");
    assert!(end.toast().is_none());
}
