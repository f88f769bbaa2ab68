//! # Introduction
//!
//! algoviz computes, one discrete state change at a time, the intermediate
//! states of a handful of classic algorithms and replays them to an observer
//! at a fixed cadence. A terminal UI built with
//! [ratatui](https://docs.rs/ratatui) renders each emitted snapshot.
//!
//! ## Pipeline
//!
//! ```text
//! Text input → Parsing → Generator → StepSequence → PlaybackController → TUI
//! ```
//!
//! 1. [`algorithms`]: input parsing, the error taxonomy, and the step
//!    generators: bubble/selection/insertion sort, Sieve of Eratosthenes,
//!    Tower of Hanoi, BFS/DFS and pre/in/post-order tree traversals.
//! 2. [`snapshot`]: [`snapshot::SnapshotRecorder`] copies the working state
//!    at chosen instants into an immutable [`snapshot::StepSequence`].
//! 3. [`playback`]: single-threaded, timer-driven replay: the
//!    [`playback::Scheduler`] seam, [`playback::PlaybackController`] for
//!    precomputed sequences and [`playback::SieveRunner`] for the sieve, whose
//!    computation is interleaved with its delays.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Generators are pure: identical input always yields an identical sequence.

pub mod algorithms;
pub mod playback;
pub mod snapshot;
pub mod ui;
