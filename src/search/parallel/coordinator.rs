//! Parallel search coordinator that manages the worker team.
//!
//! Every worker loops: check the stop signal, claim a start, expand it, fold
//! it into a private best. The worker that expands a start filling the bag
//! exactly raises the stop signal; the others finish the start they hold
//! and then stop claiming. After the team joins, the private bests are
//! combined by sum and then by smallest start.

use crate::input::Neighborhood;
use crate::search::SearchAlgorithm;
use crate::search::candidate::{Candidate, combine, expand};
use crate::search::config::{Algorithm, SearchConfig};
use crate::search::parallel::config::ParallelConfig;
use crate::search::parallel::shared::{StopSignal, WorkCursor};
use crate::search::result::{SearchResult, SearchStatistics};
use crossbeam_utils::CachePadded;
use std::time::Instant;
use tracing::{debug, warn};

/// Per-worker counters, reported after the team joins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerStatistics {
    pub worker_id: usize,
    /// Starting houses this worker expanded
    pub starts_evaluated: u64,
    /// Whether this worker raised the stop signal
    pub found_optimum: bool,
}

/// Result from parallel search execution.
#[derive(Debug)]
pub struct ParallelResult {
    /// The combined answer and aggregated statistics.
    pub best_result: SearchResult,
    /// Per-worker statistics, in worker id order.
    pub worker_statistics: Vec<WorkerStatistics>,
}

/// Everything a worker reads while searching. Handed to each thread at spawn.
#[derive(Clone, Copy)]
struct WorkerContext<'a> {
    pieces: &'a [u32],
    capacity: u32,
    cursor: &'a WorkCursor,
    stop: &'a StopSignal,
}

/// Best run for `pieces` under `capacity`, searched by `num_workers` threads.
///
/// Always returns the same answer as the serial scan, whatever the team size.
pub fn solve_parallel(pieces: &[u32], capacity: u32, num_workers: usize) -> Candidate {
    let config = ParallelConfig::default().with_workers(num_workers);
    run_team(pieces, capacity, &SearchConfig::default(), &config)
        .best_result
        .best
}

/// Run parallel search with the given configuration.
pub fn run_parallel_search(
    neighborhood: &Neighborhood,
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
) -> ParallelResult {
    run_team(
        &neighborhood.pieces,
        neighborhood.capacity,
        search_config,
        parallel_config,
    )
}

fn run_team(
    pieces: &[u32],
    capacity: u32,
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
) -> ParallelResult {
    let start_time = Instant::now();
    let num_workers = parallel_config.num_workers.max(1);

    let cursor = WorkCursor::new(pieces.len());
    let stop = StopSignal::new();
    let ctx = WorkerContext {
        pieces,
        capacity,
        cursor: &cursor,
        stop: &stop,
    };

    // One slot per worker, padded so neighbouring writes don't share a line
    let mut slots: Vec<CachePadded<Candidate>> = (0..num_workers)
        .map(|_| CachePadded::new(Candidate::NONE))
        .collect();

    let mut worker_statistics: Vec<WorkerStatistics> = std::thread::scope(|s| {
        let handles: Vec<_> = slots
            .iter_mut()
            .enumerate()
            .filter_map(|(worker_id, slot)| {
                let spawned = std::thread::Builder::new()
                    .name(format!("candyrun-worker-{}", worker_id))
                    .spawn_scoped(s, move || run_worker(worker_id, ctx, slot));
                match spawned {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        warn!(worker_id, error = %e, "Failed to spawn worker, continuing without it");
                        None
                    }
                }
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect()
    });

    // Not a single thread could be spawned: do the work here instead
    if worker_statistics.is_empty() {
        warn!("No worker threads available, searching on the calling thread");
        worker_statistics.push(run_worker(0, ctx, &mut slots[0]));
    }

    let best = combine(slots.into_iter().map(CachePadded::into_inner));

    let mut statistics = SearchStatistics::new(Algorithm::Parallel);
    statistics.homes = pieces.len();
    statistics.workers = worker_statistics.len();
    statistics.starts_evaluated = worker_statistics.iter().map(|w| w.starts_evaluated).sum();
    statistics.stopped_early = stop.is_cancelled();
    statistics.elapsed_time = start_time.elapsed();

    if search_config.verbose {
        for worker in &worker_statistics {
            debug!(
                worker_id = worker.worker_id,
                evaluated = worker.starts_evaluated,
                found_optimum = worker.found_optimum,
                "Worker finished"
            );
        }
    }

    ParallelResult {
        best_result: SearchResult::new(best, statistics),
        worker_statistics,
    }
}

/// Worker loop. Writes the worker's best into `slot` before returning.
fn run_worker(
    worker_id: usize,
    ctx: WorkerContext<'_>,
    slot: &mut Candidate,
) -> WorkerStatistics {
    let mut local_best = Candidate::NONE;
    let mut stats = WorkerStatistics {
        worker_id,
        ..Default::default()
    };

    while !ctx.stop.is_cancelled() {
        let Some(start) = ctx.cursor.claim() else {
            break;
        };

        let candidate = expand(ctx.pieces, start, ctx.capacity);
        stats.starts_evaluated += 1;

        if candidate.fills(ctx.capacity) {
            local_best = candidate;
            stats.found_optimum = true;
            ctx.stop.cancel();
            debug!(worker_id, run = %candidate, "Capacity reached exactly, stopping team");
            break;
        }

        local_best.absorb_local(candidate);
    }

    *slot = local_best;
    stats
}

/// Parallel search over every starting house
pub struct ParallelSearch {
    config: ParallelConfig,
    statistics: SearchStatistics,
    worker_statistics: Vec<WorkerStatistics>,
}

impl ParallelSearch {
    pub fn new(config: ParallelConfig) -> Self {
        Self {
            config,
            statistics: SearchStatistics::new(Algorithm::Parallel),
            worker_statistics: Vec::new(),
        }
    }

    /// Per-worker statistics from the most recent search
    pub fn worker_statistics(&self) -> &[WorkerStatistics] {
        &self.worker_statistics
    }
}

impl Default for ParallelSearch {
    fn default() -> Self {
        Self::new(ParallelConfig::default())
    }
}

impl SearchAlgorithm for ParallelSearch {
    fn search(&mut self, neighborhood: &Neighborhood, config: &SearchConfig) -> SearchResult {
        self.reset();
        let result = run_parallel_search(neighborhood, config, &self.config);
        self.statistics = result.best_result.statistics.clone();
        self.worker_statistics = result.worker_statistics;
        result.best_result
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Parallel);
        self.worker_statistics.clear();
    }
}
