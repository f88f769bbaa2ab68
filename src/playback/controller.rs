//! Timer-driven replay of a precomputed step sequence
//!
//! The controller owns a [`StepSequence`] and an index counting how many
//! snapshots have been emitted. While running it keeps exactly one wake-up
//! pending with the scheduler; each wake-up emits the snapshot at the index
//! and advances it by one. Loading a new sequence, pausing, manual stepping
//! and reset all cancel the pending wake-up first, so two replays can never
//! interleave.

use super::scheduler::{Scheduler, TimerToken};
use crate::snapshot::StepSequence;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing loaded
    Idle,
    /// Wake-up pending, advancing on each tick
    Running,
    /// Loaded, stopped before the end
    Paused,
    /// Every snapshot has been emitted
    Finished,
}

#[derive(Debug)]
pub struct PlaybackController<S> {
    sequence: StepSequence<S>,
    index: usize,
    status: PlaybackStatus,
    pending: Option<TimerToken>,
    interval: Duration,
}

impl<S> PlaybackController<S> {
    pub fn new(interval: Duration) -> Self {
        PlaybackController {
            sequence: StepSequence::empty(),
            index: 0,
            status: PlaybackStatus::Idle,
            pending: None,
            interval,
        }
    }

    /// Replace whatever is loaded and start replaying from the beginning.
    ///
    /// An empty sequence finishes immediately without scheduling anything.
    pub fn load<Q: Scheduler + ?Sized>(&mut self, sequence: StepSequence<S>, scheduler: &mut Q) {
        self.cancel_pending(scheduler);
        self.sequence = sequence;
        self.index = 0;

        if self.sequence.is_empty() {
            self.status = PlaybackStatus::Finished;
        } else {
            self.status = PlaybackStatus::Running;
            self.pending = Some(scheduler.schedule(self.interval));
        }
        tracing::debug!(len = self.sequence.len(), "loaded step sequence");
    }

    /// Emit the snapshot at the current index and advance.
    ///
    /// Does nothing unless running. Reaching the end switches to
    /// [`PlaybackStatus::Finished`].
    pub fn tick(&mut self) -> Option<&S> {
        let emitted = self.advance()?;
        self.sequence.get(emitted)
    }

    /// Handle a fired wake-up. Tokens other than the pending one are stale
    /// and ignored.
    pub fn on_timer<Q: Scheduler + ?Sized>(
        &mut self,
        token: TimerToken,
        scheduler: &mut Q,
    ) -> Option<&S> {
        if self.pending != Some(token) {
            tracing::debug!(token = token.id(), "ignoring stale playback timer");
            return None;
        }
        self.pending = None;

        let emitted = self.advance()?;
        if self.status == PlaybackStatus::Running {
            self.pending = Some(scheduler.schedule(self.interval));
        }
        self.sequence.get(emitted)
    }

    fn advance(&mut self) -> Option<usize> {
        if self.status != PlaybackStatus::Running {
            return None;
        }
        if self.index >= self.sequence.len() {
            self.status = PlaybackStatus::Finished;
            return None;
        }

        let emitted = self.index;
        self.index += 1;
        if self.index == self.sequence.len() {
            self.status = PlaybackStatus::Finished;
        }
        tracing::trace!(index = emitted, total = self.sequence.len(), "playback tick");
        Some(emitted)
    }

    /// Stop advancing, keeping the position
    pub fn pause<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) {
        if self.status == PlaybackStatus::Running {
            self.cancel_pending(scheduler);
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Continue from a pause
    pub fn resume<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) {
        if self.status != PlaybackStatus::Paused {
            return;
        }
        if self.index >= self.sequence.len() {
            self.status = PlaybackStatus::Finished;
        } else {
            self.status = PlaybackStatus::Running;
            self.pending = Some(scheduler.schedule(self.interval));
        }
    }

    /// Emit the next snapshot right away and stay paused
    pub fn step_forward<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) -> Option<&S> {
        if self.status == PlaybackStatus::Idle {
            return None;
        }
        self.cancel_pending(scheduler);

        if self.index >= self.sequence.len() {
            self.status = PlaybackStatus::Finished;
            return None;
        }
        self.index += 1;
        self.status = if self.index == self.sequence.len() {
            PlaybackStatus::Finished
        } else {
            PlaybackStatus::Paused
        };
        self.sequence.get(self.index - 1)
    }

    /// Go back to the previously emitted snapshot and stay paused.
    ///
    /// Returns `None` when fewer than two snapshots have been emitted.
    pub fn step_backward<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) -> Option<&S> {
        if self.status == PlaybackStatus::Idle || self.index < 2 {
            return None;
        }
        self.cancel_pending(scheduler);
        self.index -= 1;
        self.status = PlaybackStatus::Paused;
        self.sequence.get(self.index - 1)
    }

    /// Back to before the first snapshot, paused
    pub fn rewind<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) {
        if self.status == PlaybackStatus::Idle {
            return;
        }
        self.cancel_pending(scheduler);
        self.index = 0;
        self.status = if self.sequence.is_empty() {
            PlaybackStatus::Finished
        } else {
            PlaybackStatus::Paused
        };
    }

    /// Emit nothing more and show the final snapshot
    pub fn jump_to_end<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) {
        if self.status == PlaybackStatus::Idle {
            return;
        }
        self.cancel_pending(scheduler);
        self.index = self.sequence.len();
        self.status = PlaybackStatus::Finished;
    }

    /// Drop the loaded sequence and return to idle
    pub fn reset<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) {
        self.cancel_pending(scheduler);
        self.sequence = StepSequence::empty();
        self.index = 0;
        self.status = PlaybackStatus::Idle;
    }

    fn cancel_pending<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
            tracing::debug!(token = token.id(), "cancelled pending playback timer");
        }
    }

    /// Most recently emitted snapshot
    pub fn current_snapshot(&self) -> Option<&S> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.sequence.get(i))
    }

    /// (snapshots emitted, total snapshots)
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.sequence.len())
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == PlaybackStatus::Running
    }

    pub fn is_finished(&self) -> bool {
        self.status == PlaybackStatus::Finished
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending
    }

    pub fn sequence(&self) -> &StepSequence<S> {
        &self.sequence
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Takes effect from the next scheduled tick
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}
