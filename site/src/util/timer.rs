//! One-shot delayed tasks with drop-to-cancel handles.
//!
//! In the browser a task is a `gloo_timers` `Timeout`, which clears the
//! underlying `setTimeout` when dropped. Outside the browser nothing is ever
//! scheduled.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

/// Schedules a callback after a delay. Dropping the returned handle cancels it.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    #[cfg(feature = "hydrate")]
    type Handle = gloo_timers::callback::Timeout;
    #[cfg(not(feature = "hydrate"))]
    type Handle = ();

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(delay_millis(delay), task)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, task);
        }
    }
}

/// `setTimeout` takes a 32-bit millisecond count; longer delays saturate.
#[must_use]
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
