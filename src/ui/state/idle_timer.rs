// SPDX-License-Identifier: MPL-2.0
//! Single-shot idle countdown for the controls overlay.
//!
//! The timer is either `Idle` or `Armed` with exactly one pending deadline.
//! Arming again replaces the deadline, so a burst of interactions produces a
//! single expiry, measured from the last one.

use super::IdleTimeout;
use crate::scheduler::{Scheduler, TimerId};
use std::time::Duration;

/// Current state of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdleState {
    /// No deadline pending.
    #[default]
    Idle,
    /// A deadline is pending.
    Armed {
        timer: TimerId,
        /// Scheduler time at which the timer fires.
        deadline: Duration,
    },
}

/// Resettable countdown that signals "hide controls" when it elapses.
#[derive(Debug, Clone, Default)]
pub struct IdleTimer {
    state: IdleState,
    timeout: IdleTimeout,
}

impl IdleTimer {
    #[must_use]
    pub fn new(timeout: IdleTimeout) -> Self {
        Self {
            state: IdleState::Idle,
            timeout,
        }
    }

    #[must_use]
    pub fn state(&self) -> IdleState {
        self.state
    }

    #[must_use]
    pub fn timeout(&self) -> IdleTimeout {
        self.timeout
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, IdleState::Armed { .. })
    }

    /// Pending deadline, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        match self.state {
            IdleState::Armed { deadline, .. } => Some(deadline),
            IdleState::Idle => None,
        }
    }

    /// Arms with the configured timeout.
    pub fn arm<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.arm_after(scheduler, self.timeout.as_duration());
    }

    /// Cancels any pending deadline and schedules a new one `after` from now.
    pub fn arm_after<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S, after: Duration) {
        self.cancel(scheduler);
        let timer = scheduler.schedule_once(after);
        self.state = IdleState::Armed {
            timer,
            deadline: scheduler.now() + after,
        };
    }

    /// Invalidates the pending deadline, if any.
    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let IdleState::Armed { timer, .. } = std::mem::take(&mut self.state) {
            scheduler.cancel(timer);
        }
    }

    /// Handles a fired timer.
    ///
    /// Returns true exactly once per armed deadline, when `timer` is the one
    /// currently pending. Stale ids from replaced or cancelled deadlines
    /// return false and leave the state alone.
    pub fn on_fired(&mut self, timer: TimerId) -> bool {
        match self.state {
            IdleState::Armed { timer: armed, .. } if armed == timer => {
                self.state = IdleState::Idle;
                true
            }
            _ => false,
        }
    }
}
