// SPDX-License-Identifier: MPL-2.0
//! Timer scheduling for the control screen.
//!
//! The controller never talks to a real clock. It asks a [`Scheduler`] for
//! one-shot and repeating timers and is told, one [`TimerId`] at a time,
//! which of them came due. Time itself is pushed into the scheduler by the
//! host: wall-clock ticks in the application, a simulated clock in tests.
//!
//! # Delivery order
//!
//! [`Scheduler::pop_due`] yields a single timer per call, earliest first.
//! Anything the caller cancels or re-arms while handling that timer is
//! visible to the next call, so a cancel issued from inside a callback
//! always wins over an expiry that was already due in the same batch.
//!
//! # Example
//!
//! ```
//! use iced_reel::scheduler::{DeadlineScheduler, Scheduler};
//! use std::time::Duration;
//!
//! let mut scheduler = DeadlineScheduler::new();
//! let hide = scheduler.schedule_once(Duration::from_secs(10));
//!
//! assert_eq!(scheduler.pop_due(Duration::from_secs(9)), None);
//! assert_eq!(scheduler.pop_due(Duration::from_secs(10)), Some(hide));
//! assert_eq!(scheduler.pop_due(Duration::from_secs(11)), None);
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

/// Smallest accepted repeat interval; a zero interval would never let
/// [`Scheduler::pop_due`] make progress.
const MIN_REPEAT_INTERVAL: Duration = Duration::from_millis(1);

/// Handle identifying one scheduled timer.
///
/// Ids are never reused by a scheduler, so a stale id can always be told
/// apart from a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw id.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Injected timer service.
///
/// All times are offsets from the scheduler's own origin.
pub trait Scheduler {
    /// Current time of this scheduler.
    fn now(&self) -> Duration;

    /// Schedules a timer that fires once, `delay` from now.
    fn schedule_once(&mut self, delay: Duration) -> TimerId;

    /// Schedules a timer that fires every `interval`, first after one interval.
    fn subscribe_repeating(&mut self, interval: Duration) -> TimerId;

    /// Cancels a timer. Returns false if it was unknown or already done.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Returns true if the timer is still scheduled.
    fn is_pending(&self, id: TimerId) -> bool;

    /// Pops the earliest timer due at or before `until`.
    ///
    /// Returns `None` once nothing else is due, at which point the scheduler
    /// clock has moved to `until`. Times earlier than the current clock are
    /// ignored; the clock never goes backwards.
    fn pop_due(&mut self, until: Duration) -> Option<TimerId>;
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    due: Duration,
    repeat: Option<Duration>,
}

/// Deadline-ordered scheduler driven by an external clock.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<TimerId, Entry>,
}

impl DeadlineScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers currently scheduled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    /// Due time of a pending timer.
    #[must_use]
    pub fn due_time(&self, id: TimerId) -> Option<Duration> {
        self.entries.get(&id).map(|entry| entry.due)
    }

    /// Drains every timer due within `by` from now, in firing order.
    ///
    /// Convenience for callers that do not cancel anything in between.
    pub fn advance_by(&mut self, by: Duration) -> Vec<TimerId> {
        let until = self.now + by;
        std::iter::from_fn(|| self.pop_due(until)).collect()
    }

    fn insert(&mut self, entry: Entry) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.entries.insert(id, entry);
        id
    }
}

impl Scheduler for DeadlineScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let due = self.now + delay;
        self.insert(Entry { due, repeat: None })
    }

    fn subscribe_repeating(&mut self, interval: Duration) -> TimerId {
        let interval = interval.max(MIN_REPEAT_INTERVAL);
        let due = self.now + interval;
        self.insert(Entry {
            due,
            repeat: Some(interval),
        })
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.entries.remove(&id).is_some()
    }

    fn is_pending(&self, id: TimerId) -> bool {
        self.entries.contains_key(&id)
    }

    fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let until = until.max(self.now);

        // Ties on the due time fire in scheduling order.
        let next = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, entry)| (*id, *entry));

        let Some((id, entry)) = next else {
            self.now = until;
            return None;
        };

        self.now = self.now.max(entry.due);

        match entry.repeat {
            Some(interval) => {
                // Intervals missed during a long gap collapse into this one firing.
                let mut due = entry.due + interval;
                if due <= until {
                    let missed = (until - entry.due).as_nanos() / interval.as_nanos();
                    let skip = u64::try_from(interval.as_nanos() * (missed + 1))
                        .unwrap_or(u64::MAX);
                    due = entry.due + Duration::from_nanos(skip);
                }
                self.entries.insert(
                    id,
                    Entry {
                        due,
                        repeat: Some(interval),
                    },
                );
            }
            None => {
                self.entries.remove(&id);
            }
        }

        Some(id)
    }
}
