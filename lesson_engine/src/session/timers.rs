//! Cancellable timers driving delayed slide transitions.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub Uuid);

impl TimerId {
    /// Create a new random timer ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct TimerEntry<T> {
    id: TimerId,
    due_at: Instant,
    payload: T,
}

/// Pending delayed actions, driven by an external clock.
///
/// The queue never fires on its own; the owner calls [`fire_due`] with
/// the current time and applies the payloads that came due. Everything
/// is cancellable up to the moment it fires, which is what keeps a
/// scheduled auto-advance from outliving the slide that scheduled it.
///
/// [`fire_due`]: TimerQueue::fire_due
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<TimerEntry<T>>,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule a payload to fire after the delay.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TimerId {
        let id = TimerId::new();
        self.entries.push(TimerEntry {
            id,
            due_at: now + delay,
            payload,
        });
        id
    }

    /// Cancel one timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    /// Cancel every pending timer. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    /// Remove and return every payload that is due, earliest first.
    pub fn fire_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.entries.len());

        for entry in self.entries.drain(..) {
            if entry.due_at <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by_key(|entry| entry.due_at);
        due.into_iter().map(|entry| entry.payload).collect()
    }

    /// Whether a timer is still pending.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Number of pending timers.
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    /// When the next timer fires, if any are pending.
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due_at).min()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
