//! Single-threaded reference search
//!
//! Scans starting houses left to right and stops at the first run that
//! fills the bag exactly. The parallel search must always agree with it.

use crate::input::Neighborhood;
use crate::search::candidate::{Candidate, expand};
use crate::search::config::SearchConfig;
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::{Algorithm, SearchAlgorithm};
use std::time::Instant;
use tracing::debug;

/// Reference answer for `pieces` and `capacity`
pub fn solve_serial(pieces: &[u32], capacity: u32) -> Candidate {
    scan(pieces, capacity).0
}

/// Returns the best candidate and how many starts were expanded.
fn scan(pieces: &[u32], capacity: u32) -> (Candidate, u64) {
    let mut best = Candidate::NONE;
    let mut evaluated = 0;

    for start in 0..pieces.len() {
        let candidate = expand(pieces, start, capacity);
        evaluated += 1;
        if candidate.fills(capacity) {
            return (candidate, evaluated);
        }
        best.absorb_local(candidate);
    }

    (best, evaluated)
}

/// Serial search over every starting house
pub struct SerialSearch {
    statistics: SearchStatistics,
}

impl SerialSearch {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Algorithm::Serial),
        }
    }
}

impl Default for SerialSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for SerialSearch {
    fn search(&mut self, neighborhood: &Neighborhood, config: &SearchConfig) -> SearchResult {
        self.reset();
        let start_time = Instant::now();

        let (best, evaluated) = scan(&neighborhood.pieces, neighborhood.capacity);

        self.statistics.homes = neighborhood.homes();
        self.statistics.workers = 1;
        self.statistics.starts_evaluated = evaluated;
        self.statistics.stopped_early = best.fills(neighborhood.capacity);
        self.statistics.elapsed_time = start_time.elapsed();

        if config.verbose {
            debug!(
                evaluated,
                homes = neighborhood.homes(),
                best = %best,
                "Serial scan finished"
            );
        }

        SearchResult::new(best, self.statistics.clone())
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Serial);
    }
}
