//! Replaying steps to an observer over time
//!
//! - [`scheduler`]: the [`Scheduler`] seam and a virtual-clock [`TimerQueue`]
//! - [`controller`]: [`PlaybackController`], fixed-interval replay of a
//!   precomputed sequence with pause and manual stepping
//! - [`sieve_runner`]: [`SieveRunner`], which interleaves sieve computation
//!   with its own delays
//! - [`cancel`]: cancellation flag checked by suspended computations
//! - [`timing`]: delay configuration
//!
//! # Scheduling Model
//!
//! Everything runs on one thread. Owners schedule wake-ups and keep the token;
//! the host advances the queue and routes each fired token back through
//! `on_timer`. An owner holds at most one pending token at a time, and any
//! token that does not match it is ignored.

pub mod cancel;
pub mod controller;
pub mod scheduler;
pub mod sieve_runner;
pub mod timing;

pub use cancel::{CancelSignal, CancelSource};
pub use controller::{PlaybackController, PlaybackStatus};
pub use scheduler::{Scheduler, TimerQueue, TimerToken};
pub use sieve_runner::{SieveRunner, SieveUpdate};
pub use timing::PlaybackTiming;
