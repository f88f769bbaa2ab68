// Snapshot recording for step-by-step replay

/// An ordered, immutable sequence of snapshots produced by one generator run
#[derive(Debug, Clone, PartialEq)]
pub struct StepSequence<S> {
    snapshots: Vec<S>,
}

impl<S> StepSequence<S> {
    /// An empty sequence (zero nodes, empty arrays)
    pub fn empty() -> Self {
        StepSequence {
            snapshots: Vec::new(),
        }
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&S> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> Option<&S> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.snapshots.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.snapshots
    }

    pub fn into_vec(self) -> Vec<S> {
        self.snapshots
    }
}

impl<S> Default for StepSequence<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> From<Vec<S>> for StepSequence<S> {
    fn from(snapshots: Vec<S>) -> Self {
        StepSequence { snapshots }
    }
}

impl<'a, S> IntoIterator for &'a StepSequence<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// Builds a [`StepSequence`] by copying the live working state whenever the
/// caller decides a meaningful mutation has happened.
///
/// Each recorded snapshot is an owned clone, so later mutation of the working
/// state never reaches snapshots already taken.
#[derive(Debug)]
pub struct SnapshotRecorder<S> {
    snapshots: Vec<S>,
}

impl<S: Clone> SnapshotRecorder<S> {
    pub fn new() -> Self {
        SnapshotRecorder {
            snapshots: Vec::new(),
        }
    }

    /// Copy `state` and append it to the sequence under construction
    pub fn record(&mut self, state: &S) {
        self.snapshots.push(state.clone());
    }

    /// Record a state that is already owned (no extra clone)
    pub fn record_owned(&mut self, state: S) {
        self.snapshots.push(state);
    }

    /// Number of snapshots recorded so far
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Freeze the recorded snapshots into a sequence
    pub fn finish(self) -> StepSequence<S> {
        StepSequence {
            snapshots: self.snapshots,
        }
    }
}

impl<S: Clone> Default for SnapshotRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_snapshot_is_detached_from_live_state() {
        let mut live = vec![3, 1, 2];
        let mut recorder = SnapshotRecorder::new();

        recorder.record(&live);
        live.swap(0, 1);
        recorder.record(&live);
        live[2] = 99;

        let seq = recorder.finish();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(0), Some(&vec![3, 1, 2]));
        assert_eq!(seq.get(1), Some(&vec![1, 3, 2]));
    }

    #[test]
    fn test_empty_recorder_yields_empty_sequence() {
        let recorder: SnapshotRecorder<Vec<i32>> = SnapshotRecorder::new();
        assert!(recorder.is_empty());
        let seq = recorder.finish();
        assert!(seq.is_empty());
        assert_eq!(seq, StepSequence::empty());
    }
}
