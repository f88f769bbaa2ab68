// Playback cadence configuration

use crate::algorithms::constants::{SIEVE_MARK_DELAY_MS, SIEVE_PIVOT_DELAY_MS, TICK_INTERVAL_MS};
use std::time::Duration;

/// Delays used by the playback controller and the sieve runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTiming {
    /// Between replayed snapshots
    pub tick_interval: Duration,
    /// Sieve pause after choosing a pivot
    pub sieve_pivot_delay: Duration,
    /// Sieve pause after each marking
    pub sieve_mark_delay: Duration,
}

impl PlaybackTiming {
    pub fn from_millis(tick_interval: u64, sieve_pivot_delay: u64, sieve_mark_delay: u64) -> Self {
        PlaybackTiming {
            tick_interval: Duration::from_millis(tick_interval),
            sieve_pivot_delay: Duration::from_millis(sieve_pivot_delay),
            sieve_mark_delay: Duration::from_millis(sieve_mark_delay),
        }
    }
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self::from_millis(TICK_INTERVAL_MS, SIEVE_PIVOT_DELAY_MS, SIEVE_MARK_DELAY_MS)
    }
}
