//! Timer scheduling over a virtual clock
//!
//! [`Scheduler`] is the seam between playback logic and time: owners ask for a
//! wake-up after a delay and get back a [`TimerToken`] they can cancel. The
//! host decides how time passes. [`TimerQueue`] keeps its own monotonic clock
//! that only moves when [`TimerQueue::advance`] is called, so the terminal UI
//! feeds it wall-clock deltas while tests feed it exact durations.
//!
//! Fired tokens are handed back to the host, which routes each one to the
//! owner that scheduled it. Owners ignore tokens they no longer wait on, so a
//! late or cancelled wake-up can never act on a newer run.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::Duration;

/// Handle for one scheduled wake-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Request a wake-up `delay` from now
    fn schedule(&mut self, delay: Duration) -> TimerToken;

    /// Drop a pending wake-up. Returns `false` if it already fired or was
    /// cancelled before.
    fn cancel(&mut self, token: TimerToken) -> bool;
}

/// Deterministic timer queue with a manually advanced clock
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    // (deadline, id) orders by deadline, then by scheduling order
    pending: BTreeMap<(Duration, u64), TimerToken>,
    deadlines: FxHashMap<TimerToken, Duration>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of wake-ups not yet fired or cancelled
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.deadlines.contains_key(&token)
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Move the clock forward and return every token whose deadline has
    /// passed, earliest first
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerToken> {
        self.now += elapsed;

        let mut fired = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            let token = entry.remove();
            self.deadlines.remove(&token);
            fired.push(token);
        }
        fired
    }

    /// Jump the clock to the earliest deadline and fire what is due there
    pub fn advance_to_next(&mut self) -> Vec<TimerToken> {
        match self.next_deadline() {
            Some(deadline) => {
                let elapsed = deadline.saturating_sub(self.now);
                self.advance(elapsed)
            }
            None => Vec::new(),
        }
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let id = self.next_id;
        self.next_id += 1;

        let token = TimerToken(id);
        let deadline = self.now + delay;
        self.pending.insert((deadline, id), token);
        self.deadlines.insert(token, deadline);
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        match self.deadlines.remove(&token) {
            Some(deadline) => {
                self.pending.remove(&(deadline, token.0));
                true
            }
            None => false,
        }
    }
}
