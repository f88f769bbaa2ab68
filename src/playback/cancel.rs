//! Cooperative cancellation for suspended computations.
//!
//! Playback is single-threaded, so the flag is an `Rc<Cell<bool>>` rather
//! than an atomic. The source side aborts; every clone of the signal observes
//! it on its next check.

use std::cell::Cell;
use std::rc::Rc;

/// Control side: call [`CancelSource::cancel`] to abort
#[derive(Debug, Default)]
pub struct CancelSource {
    cancelled: Rc<Cell<bool>>,
}

/// Observer side, checked after each resumption
#[derive(Debug, Clone)]
pub struct CancelSignal {
    cancelled: Rc<Cell<bool>>,
}

impl CancelSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            cancelled: Rc::clone(&self.cancelled),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl CancelSignal {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_signal_sees_cancel() {
        let source = CancelSource::new();
        let a = source.signal();
        let b = a.clone();
        assert!(!a.is_cancelled());

        source.cancel();
        assert!(source.is_cancelled());
        assert!(a.is_cancelled());
        assert!(b.is_cancelled());
    }

    #[test]
    fn test_sources_are_independent() {
        let first = CancelSource::new();
        let second = CancelSource::new();
        let signal = second.signal();

        first.cancel();
        assert!(!signal.is_cancelled());
    }
}
