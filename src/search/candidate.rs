//! Candidate runs and the per-start window expansion
//!
//! A [`Candidate`] is the outcome of expanding one starting house: either a
//! contiguous [`Run`] whose total stays within capacity, or no run at all
//! when the starting house alone already exceeds it.

use std::cmp::Ordering;
use std::fmt;

/// A contiguous, non-wrapping run of houses (0-based, inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// Total candy collected over the run
    pub sum: u64,
    /// First house of the run
    pub start: usize,
    /// Last house of the run
    pub end: usize,
}

/// Outcome of evaluating one starting house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Candidate {
    run: Option<Run>,
}

impl Candidate {
    /// The "no solution" sentinel
    pub const NONE: Candidate = Candidate { run: None };

    pub fn found(sum: u64, start: usize, end: usize) -> Self {
        Self {
            run: Some(Run { sum, start, end }),
        }
    }

    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    pub fn is_none(&self) -> bool {
        self.run.is_none()
    }

    /// Sum of the run; `None` ranks below every real sum, including zero.
    pub fn sum(&self) -> Option<u64> {
        self.run.map(|r| r.sum)
    }

    pub fn start(&self) -> Option<usize> {
        self.run.map(|r| r.start)
    }

    /// `(sum, start, end)` with `-1` standing in for "no solution".
    pub fn as_triple(&self) -> (i64, i64, i64) {
        match self.run {
            Some(r) => (r.sum as i64, r.start as i64, r.end as i64),
            None => (-1, -1, -1),
        }
    }

    /// Whether this candidate exactly fills the bag
    pub fn fills(&self, capacity: u32) -> bool {
        self.sum() == Some(u64::from(capacity))
    }

    /// Fold a freshly evaluated candidate into a worker's running best.
    ///
    /// Only a strictly larger sum replaces the current best, so on ties the
    /// candidate this worker saw first is kept.
    pub fn absorb_local(&mut self, candidate: Candidate) {
        if candidate.sum() > self.sum() {
            *self = candidate;
        }
    }

    /// Fold another worker's finalist into the global answer.
    ///
    /// Larger sums win; equal sums go to the smaller start index. Workers
    /// finish in arbitrary order, so the start index is the only stable
    /// tie-break across them.
    pub fn absorb_global(&mut self, candidate: Candidate) {
        let replace = match candidate.sum().cmp(&self.sum()) {
            Ordering::Greater => true,
            Ordering::Equal => match (candidate.start(), self.start()) {
                (Some(theirs), Some(ours)) => theirs < ours,
                _ => false,
            },
            Ordering::Less => false,
        };
        if replace {
            *self = candidate;
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sum, start, end) = self.as_triple();
        write!(f, "({}, {}, {})", sum, start, end)
    }
}

/// Expand rightward from `start`, collecting as much candy as fits.
///
/// The street does not wrap: the last house has no successor. When the
/// final step overshoots `capacity` it is undone.
///
/// # Panics
/// If `start` is not a valid house index.
pub fn expand(pieces: &[u32], start: usize, capacity: u32) -> Candidate {
    let capacity = u64::from(capacity);
    let first = u64::from(pieces[start]);
    if first > capacity {
        return Candidate::NONE;
    }

    let last = pieces.len() - 1;
    let mut sum = first;
    let mut end = start;

    while sum <= capacity && end < last {
        end += 1;
        sum += u64::from(pieces[end]);
    }

    // pieces[start] fits, so an overshoot always happened at end > start
    if sum > capacity {
        sum -= u64::from(pieces[end]);
        end -= 1;
    }

    Candidate::found(sum, start, end)
}

/// Combine per-worker finalists into the final answer.
pub fn combine<I>(finalists: I) -> Candidate
where
    I: IntoIterator<Item = Candidate>,
{
    let mut best = Candidate::NONE;
    for candidate in finalists {
        best.absorb_global(candidate);
    }
    best
}
