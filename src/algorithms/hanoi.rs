//! Tower of Hanoi move generation
//!
//! [`hanoi_moves`] produces the classic recursive solution. [`generate_hanoi`]
//! replays those moves on a [`Towers`] value and records a frame after each
//! one. Every move goes through [`Towers::apply`], which refuses to take from
//! an empty peg or to put a disk on a smaller one, so the descending-stack
//! rule is checked on every frame rather than taken on faith.

use super::constants::{MAX_DISKS, PEG_COUNT};
use super::errors::{InvalidInputError, MoveError, StepError};
use crate::snapshot::{SnapshotRecorder, StepSequence};

/// A move of the top disk from one peg to another (pegs are 0..3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Self {
        Move { from, to }
    }
}

impl From<(usize, usize)> for Move {
    fn from((from, to): (usize, usize)) -> Self {
        Move { from, to }
    }
}

/// The three pegs. The top of each peg is its last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    pegs: [Vec<u32>; PEG_COUNT],
}

impl Towers {
    /// Disks `disks..=1` stacked on peg 0, largest at the bottom
    pub fn new(disks: usize) -> Self {
        let first: Vec<u32> = (1..=disks as u32).rev().collect();
        Towers {
            pegs: [first, Vec::new(), Vec::new()],
        }
    }

    pub fn pegs(&self) -> &[Vec<u32>; PEG_COUNT] {
        &self.pegs
    }

    pub fn peg(&self, index: usize) -> Option<&[u32]> {
        self.pegs.get(index).map(Vec::as_slice)
    }

    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Move the top disk of `mv.from` onto `mv.to`, returning the disk moved
    pub fn apply(&mut self, mv: Move) -> Result<u32, MoveError> {
        for peg in [mv.from, mv.to] {
            if peg >= PEG_COUNT {
                return Err(MoveError::NoSuchPeg { peg });
            }
        }

        let disk = *self.pegs[mv.from]
            .last()
            .ok_or(MoveError::EmptyPeg { peg: mv.from })?;

        if let Some(&top) = self.pegs[mv.to].last() {
            if top < disk {
                return Err(MoveError::LargerOnSmaller {
                    disk,
                    top,
                    to: mv.to,
                });
            }
        }

        self.pegs[mv.from].pop();
        self.pegs[mv.to].push(disk);
        Ok(disk)
    }

    /// Every peg is strictly descending bottom to top and the pegs together
    /// hold exactly the disks `1..=n`
    pub fn is_valid(&self) -> bool {
        let descending = self
            .pegs
            .iter()
            .all(|peg| peg.windows(2).all(|w| w[0] > w[1]));

        let mut all: Vec<u32> = self.pegs.iter().flatten().copied().collect();
        all.sort_unstable();
        let partition = all.iter().enumerate().all(|(i, &d)| d == i as u32 + 1);

        descending && partition
    }
}

/// Tower state after a move (or the initial state, with no move)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HanoiFrame {
    pub towers: Towers,
    pub last_move: Option<Move>,
}

/// Moves for `n` disks from `from` to `to` using `aux`; `n == 0` yields none
pub fn hanoi_moves(n: usize, from: usize, to: usize, aux: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    push_moves(n, from, to, aux, &mut moves);
    moves
}

fn push_moves(n: usize, from: usize, to: usize, aux: usize, out: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    push_moves(n - 1, from, aux, to, out);
    out.push(Move::new(from, to));
    push_moves(n - 1, aux, to, from, out);
}

/// Solve `disks` disks from peg 0 to peg 2.
///
/// The sequence starts with the initial tower and then holds one frame per
/// move, so its length is `2^disks`.
pub fn generate_hanoi(disks: usize) -> Result<StepSequence<HanoiFrame>, StepError> {
    if disks < 1 || disks > MAX_DISKS {
        return Err(InvalidInputError::DiskCountOutOfRange {
            disks,
            max: MAX_DISKS,
        }
        .into());
    }

    let moves = hanoi_moves(disks, 0, 2, 1);
    let mut frame = HanoiFrame {
        towers: Towers::new(disks),
        last_move: None,
    };

    let mut recorder = SnapshotRecorder::new();
    recorder.record(&frame);

    for mv in moves {
        frame.towers.apply(mv)?;
        frame.last_move = Some(mv);
        recorder.record(&frame);
    }

    let steps = recorder.finish();
    tracing::debug!(disks, snapshots = steps.len(), "generated hanoi steps");
    Ok(steps)
}
