//! Shared state for the worker team: the work cursor and the stop signal.
//!
//! These are the only mutable values the workers share. Both are plain
//! atomics; there are no locks or channels between workers.

use crossbeam_utils::CachePadded;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Hands out starting houses `0..homes`, each exactly once.
#[derive(Debug)]
pub struct WorkCursor {
    next: CachePadded<AtomicUsize>,
    homes: usize,
}

impl WorkCursor {
    pub fn new(homes: usize) -> Self {
        Self {
            next: CachePadded::new(AtomicUsize::new(0)),
            homes,
        }
    }

    /// Claim the next unclaimed starting house, or `None` once all are taken.
    ///
    /// Claims are issued in increasing index order. A worker stops after its
    /// first `None`, so the counter overshoots `homes` by at most the team
    /// size.
    pub fn claim(&self) -> Option<usize> {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        (index < self.homes).then_some(index)
    }

    pub fn homes(&self) -> usize {
        self.homes
    }
}

/// Cooperative cancellation flag. Set at most once, never reset.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: AtomicBool,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a worker should stop claiming new starts.
    pub fn is_cancelled(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Ask every worker to stop at its next claim. Idempotent.
    pub fn cancel(&self) {
        self.stopped.store(true, Ordering::Release);
    }
}
