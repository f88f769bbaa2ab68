// Constants for the step generators and playback cadence

/// Delay between replayed snapshots for sorts, Hanoi and traversals
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Sieve pause after a new pivot is chosen
pub const SIEVE_PIVOT_DELAY_MS: u64 = 2000;

/// Sieve pause after each composite is marked
pub const SIEVE_MARK_DELAY_MS: u64 = 500;

/// Largest disk count accepted by the Hanoi generator (2^20 - 1 moves)
pub const MAX_DISKS: usize = 20;

/// Largest sieve limit; every recorded frame copies the whole `0..=limit` array
pub const MAX_SIEVE_LIMIT: usize = 1000;

/// Disk count range the terminal UI clamps its input to
pub const UI_MIN_DISKS: usize = 1;
pub const UI_MAX_DISKS: usize = 6;

/// Pegs are indexed 0..PEG_COUNT
pub const PEG_COUNT: usize = 3;

/// Traversals always start here
pub const ROOT_NODE: usize = 1;
