//! Comparison sort step generators
//!
//! Each generator copies its input into a working array, sorts it in place,
//! and records the whole array after every mutation:
//!
//! - Bubble and selection sort record once per swap. Comparisons that do not
//!   swap leave no frame.
//! - Insertion sort records after every shift and once more when the key is
//!   placed, so each outer pass ends with a frame even if nothing moved.
//!
//! Swaps only happen on strict inequality, so equal elements never trade
//! places.

use super::errors::StepError;
use super::input::parse_number_list;
use crate::snapshot::{SnapshotRecorder, StepSequence};
use std::fmt;
use std::str::FromStr;

/// Full array state after one mutation
pub type SortFrame = Vec<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
    ];

    /// Generate the step sequence for `values`
    pub fn generate(self, values: &[f64]) -> StepSequence<SortFrame> {
        let steps = match self {
            SortAlgorithm::Bubble => bubble_sort_steps(values),
            SortAlgorithm::Selection => selection_sort_steps(values),
            SortAlgorithm::Insertion => insertion_sort_steps(values),
        };
        tracing::debug!(
            algorithm = %self,
            len = values.len(),
            snapshots = steps.len(),
            "generated sort steps"
        );
        steps
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortAlgorithm::Bubble => "Bubble",
            SortAlgorithm::Selection => "Selection",
            SortAlgorithm::Insertion => "Insertion",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "insertion" => Ok(SortAlgorithm::Insertion),
            other => Err(format!("unknown sort algorithm: {}", other)),
        }
    }
}

/// Parse a comma-separated list and generate its sort steps
pub fn generate_sort_from_text(
    algorithm: SortAlgorithm,
    text: &str,
) -> Result<StepSequence<SortFrame>, StepError> {
    let values = parse_number_list(text)?;
    Ok(algorithm.generate(&values))
}

pub fn bubble_sort_steps(values: &[f64]) -> StepSequence<SortFrame> {
    let mut temp = values.to_vec();
    let mut recorder = SnapshotRecorder::new();
    let n = temp.len();

    for i in 0..n {
        for j in 0..n.saturating_sub(i + 1) {
            if temp[j] > temp[j + 1] {
                temp.swap(j, j + 1);
                recorder.record(&temp);
            }
        }
    }

    recorder.finish()
}

pub fn selection_sort_steps(values: &[f64]) -> StepSequence<SortFrame> {
    let mut temp = values.to_vec();
    let mut recorder = SnapshotRecorder::new();
    let n = temp.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if temp[j] < temp[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            temp.swap(i, min_idx);
            recorder.record(&temp);
        }
    }

    recorder.finish()
}

pub fn insertion_sort_steps(values: &[f64]) -> StepSequence<SortFrame> {
    let mut temp = values.to_vec();
    let mut recorder = SnapshotRecorder::new();

    for i in 1..temp.len() {
        let key = temp[i];
        // `j` is one past the slot being compared, so it never underflows
        let mut j = i;
        while j > 0 && temp[j - 1] > key {
            temp[j] = temp[j - 1];
            j -= 1;
            recorder.record(&temp);
        }
        temp[j] = key;
        recorder.record(&temp);
    }

    recorder.finish()
}
