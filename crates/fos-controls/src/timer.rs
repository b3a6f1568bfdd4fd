//! Timers
//!
//! `setTimeout`-style one-shot timers on a virtual clock advanced by the
//! host event loop.

use std::time::Duration;

/// Timer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Timer<A> {
    id: TimerId,
    deadline: Duration,
    action: A,
}

/// One-shot timer queue
#[derive(Debug)]
pub struct TimerQueue<A> {
    now: Duration,
    next_id: u64,
    pending: Vec<Timer<A>>,
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Current clock reading
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `action` once `delay` has elapsed
    pub fn schedule(&mut self, delay: Duration, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            deadline: self.now + delay,
            action,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() < before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance the clock and return the due timers as `(id, action)` in
    /// deadline order
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(TimerId, A)> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.deadline <= now);
        self.pending = pending;

        // Stable: equal deadlines fire in scheduling order
        due.sort_by_key(|t| t.deadline);
        due.into_iter().map(|t| (t.id, t.action)).collect()
    }
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}
