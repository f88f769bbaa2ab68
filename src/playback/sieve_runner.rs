//! Interleaved sieve execution
//!
//! The sieve is not precomputed: the runner resumes a [`SieveRun`] one step at
//! a time and waits on the scheduler between steps (the pivot delay after a
//! new pivot, the mark delay after each marking). Only one run is ever
//! active. Starting another aborts the current run's [`CancelSource`] and
//! cancels its pending wake-up; the run's signal is checked before every
//! resumption, and wake-ups that do not match the active run's pending token
//! are dropped.

use super::cancel::{CancelSignal, CancelSource};
use super::scheduler::{Scheduler, TimerToken};
use super::timing::PlaybackTiming;
use crate::algorithms::errors::InvalidInputError;
use crate::algorithms::sieve::{SieveEvent, SieveFrame, SieveRun};

/// One emitted sieve step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveUpdate<'a> {
    pub event: SieveEvent,
    pub frame: &'a SieveFrame,
}

#[derive(Debug)]
struct ActiveRun {
    id: u64,
    run: SieveRun,
    source: CancelSource,
    signal: CancelSignal,
    pending: Option<TimerToken>,
    steps: usize,
}

#[derive(Debug)]
pub struct SieveRunner {
    timing: PlaybackTiming,
    active: Option<ActiveRun>,
    runs_started: u64,
}

impl SieveRunner {
    pub fn new(timing: PlaybackTiming) -> Self {
        SieveRunner {
            timing,
            active: None,
            runs_started: 0,
        }
    }

    /// Abort any run in flight and start sieving up to `limit`.
    ///
    /// The first step (a pivot, or `Finished` when `limit < 4`) is emitted
    /// immediately. A limit that is out of range leaves the current run
    /// untouched.
    pub fn start<Q: Scheduler + ?Sized>(
        &mut self,
        limit: usize,
        scheduler: &mut Q,
    ) -> Result<Option<SieveUpdate<'_>>, InvalidInputError> {
        let run = SieveRun::new(limit)?;
        self.cancel(scheduler);

        self.runs_started += 1;
        let source = CancelSource::new();
        let signal = source.signal();
        self.active = Some(ActiveRun {
            id: self.runs_started,
            run,
            source,
            signal,
            pending: None,
            steps: 0,
        });
        tracing::info!(run = self.runs_started, limit, "sieve run started");

        Ok(self.step(scheduler))
    }

    /// Handle a fired wake-up, resuming the active run if it was waiting on
    /// `token`
    pub fn on_timer<Q: Scheduler + ?Sized>(
        &mut self,
        token: TimerToken,
        scheduler: &mut Q,
    ) -> Option<SieveUpdate<'_>> {
        let active = self.active.as_mut()?;
        if active.pending != Some(token) {
            tracing::debug!(token = token.id(), "ignoring stale sieve timer");
            return None;
        }
        active.pending = None;

        self.step(scheduler)
    }

    fn step<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) -> Option<SieveUpdate<'_>> {
        let timing = self.timing;
        let active = self.active.as_mut()?;
        if active.signal.is_cancelled() {
            return None;
        }

        let event = active.run.resume()?;
        active.steps += 1;

        let delay = match event {
            SieveEvent::Pivot(_) => Some(timing.sieve_pivot_delay),
            SieveEvent::Marked(_) => Some(timing.sieve_mark_delay),
            SieveEvent::Finished => None,
        };
        match delay {
            Some(delay) => active.pending = Some(scheduler.schedule(delay)),
            None => tracing::debug!(run = active.id, steps = active.steps, "sieve run finished"),
        }

        Some(SieveUpdate {
            event,
            frame: active.run.frame(),
        })
    }

    /// Abort the active run. Its last frame stays readable.
    pub fn cancel<Q: Scheduler + ?Sized>(&mut self, scheduler: &mut Q) {
        if let Some(active) = self.active.as_mut() {
            if let Some(token) = active.pending.take() {
                scheduler.cancel(token);
            }
            if !active.run.is_finished() && !active.source.is_cancelled() {
                tracing::info!(run = active.id, steps = active.steps, "sieve run aborted");
            }
            active.source.cancel();
        }
    }

    /// A run is in flight: started, not finished, not aborted
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| !a.run.is_finished() && !a.signal.is_cancelled())
    }

    pub fn is_finished(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.run.is_finished())
    }

    /// Frame of the active (or last aborted) run
    pub fn frame(&self) -> Option<&SieveFrame> {
        self.active.as_ref().map(|a| a.run.frame())
    }

    /// Signal of the active run, for observers that want to notice aborts
    pub fn signal(&self) -> Option<CancelSignal> {
        self.active.as_ref().map(|a| a.signal.clone())
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.active.as_ref().and_then(|a| a.pending)
    }

    /// Steps emitted by the active run
    pub fn steps_emitted(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.steps)
    }

    pub fn limit(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.run.limit())
    }

    pub fn timing(&self) -> PlaybackTiming {
        self.timing
    }
}
