//! Delayed dispatch of the sign-in redirect.
//!
//! The redirect is held back for a short moment so the disabled button and
//! spinner can paint before the browser leaves the page. Nothing cancels a
//! scheduled redirect.

use std::time::Duration;

use super::state::ViewState;

/// Delay between the click and the redirect to the identity provider.
pub const SIGN_IN_REDIRECT_DELAY: Duration = Duration::from_millis(500);

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>);
}

/// Scheduler backed by the browser's `setTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimer;

impl Scheduler for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
        leptos::prelude::set_timeout(task, delay);
    }
}

/// Handles presses of the sign-in button.
#[derive(Debug, Clone, Copy)]
pub struct SignInFlow<S> {
    scheduler: S,
    delay: Duration,
}

impl<S: Scheduler> SignInFlow<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_delay(scheduler, SIGN_IN_REDIRECT_DELAY)
    }

    pub fn with_delay(scheduler: S, delay: Duration) -> Self {
        Self { scheduler, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts the redirect unless one is already in progress.
    ///
    /// Flips `state` into redirecting synchronously and schedules `redirect`
    /// after the delay. Returns false, and schedules nothing, on repeat presses.
    pub fn press<F>(&self, state: &mut ViewState, redirect: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        if !state.begin_redirect() {
            return false;
        }
        self.scheduler.schedule(self.delay, Box::new(redirect));
        true
    }
}
