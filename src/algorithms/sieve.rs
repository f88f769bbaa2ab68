//! Sieve of Eratosthenes as a resumable computation
//!
//! Unlike the other generators, the sieve is meant to be interleaved with real
//! delays: the computation suspends after choosing each pivot and after each
//! marking step. [`SieveRun`] makes those suspension points explicit; every
//! call to [`SieveRun::resume`] runs up to the next one and reports what
//! happened. [`crate::playback::SieveRunner`] drives it from a scheduler, and
//! [`sieve_steps`] drains it eagerly for deterministic replay.

use super::constants::MAX_SIEVE_LIMIT;
use super::errors::InvalidInputError;
use crate::snapshot::{SnapshotRecorder, StepSequence};

/// Observable sieve state at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveFrame {
    /// `is_prime[k]` for every `k` in `0..=limit`
    pub is_prime: Vec<bool>,
    /// Candidate prime currently marking its multiples
    pub pivot: Option<usize>,
}

impl SieveFrame {
    /// Indices still marked prime
    pub fn primes(&self) -> Vec<usize> {
        self.is_prime
            .iter()
            .enumerate()
            .filter_map(|(k, &p)| p.then_some(k))
            .collect()
    }
}

/// What one resumption did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveEvent {
    /// `i` was chosen as the next pivot
    Pivot(usize),
    /// `j` was crossed off as composite
    Marked(usize),
    /// Outer loop is done; pivot cleared
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Looking for the next pivot starting at `next`
    Scanning { next: usize },
    /// Marking multiples of `pivot`, `next` is the next multiple to cross off
    Marking { pivot: usize, next: usize },
    Done,
}

/// A sieve computation paused between steps
#[derive(Debug, Clone)]
pub struct SieveRun {
    limit: usize,
    frame: SieveFrame,
    phase: Phase,
}

impl SieveRun {
    /// Start a run over `0..=limit`.
    ///
    /// Fails when `limit` exceeds [`MAX_SIEVE_LIMIT`].
    pub fn new(limit: usize) -> Result<Self, InvalidInputError> {
        let limit = check_limit(limit)?;
        let mut is_prime = vec![true; limit + 1];
        for k in is_prime.iter_mut().take(2) {
            *k = false;
        }

        Ok(SieveRun {
            limit,
            frame: SieveFrame {
                is_prime,
                pivot: None,
            },
            phase: Phase::Scanning { next: 2 },
        })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// State as of the last resumption
    pub fn frame(&self) -> &SieveFrame {
        &self.frame
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Run to the next suspension point.
    ///
    /// Returns `None` once [`SieveEvent::Finished`] has been reported.
    pub fn resume(&mut self) -> Option<SieveEvent> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Scanning { next: i } => {
                    if i.checked_mul(i).map_or(true, |sq| sq > self.limit) {
                        self.frame.pivot = None;
                        self.phase = Phase::Done;
                        return Some(SieveEvent::Finished);
                    }
                    if self.frame.is_prime[i] {
                        self.frame.pivot = Some(i);
                        self.phase = Phase::Marking {
                            pivot: i,
                            next: i * i,
                        };
                        return Some(SieveEvent::Pivot(i));
                    }
                    self.phase = Phase::Scanning { next: i + 1 };
                }
                Phase::Marking { pivot, next: j } => {
                    if j > self.limit {
                        self.phase = Phase::Scanning { next: pivot + 1 };
                        continue;
                    }
                    self.frame.is_prime[j] = false;
                    self.phase = Phase::Marking {
                        pivot,
                        next: j + pivot,
                    };
                    return Some(SieveEvent::Marked(j));
                }
            }
        }
    }
}

/// Reject limits the sieve array cannot reasonably hold
pub fn check_limit(limit: usize) -> Result<usize, InvalidInputError> {
    if limit > MAX_SIEVE_LIMIT {
        return Err(InvalidInputError::LimitOutOfRange {
            limit,
            max: MAX_SIEVE_LIMIT,
        });
    }
    Ok(limit)
}

/// Run the sieve to completion, recording the frame after every event
pub fn sieve_steps(limit: usize) -> Result<StepSequence<SieveFrame>, InvalidInputError> {
    let mut run = SieveRun::new(limit)?;
    let mut recorder = SnapshotRecorder::new();

    while run.resume().is_some() {
        recorder.record(run.frame());
    }

    let steps = recorder.finish();
    tracing::debug!(limit, snapshots = steps.len(), "generated sieve steps");
    Ok(steps)
}

/// Events in the order a full run produces them
pub fn sieve_events(limit: usize) -> Result<Vec<SieveEvent>, InvalidInputError> {
    let mut run = SieveRun::new(limit)?;
    Ok(std::iter::from_fn(|| run.resume()).collect())
}
