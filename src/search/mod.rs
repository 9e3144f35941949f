//! Search algorithms for finding the best run of houses
//!
//! This module provides two algorithms that always agree on the answer:
//! - Serial: left-to-right scan over starting houses, used as the reference
//! - Parallel: a thread team claiming starts from a shared atomic cursor,
//!   with cooperative early stop on an exact capacity hit

pub mod candidate;
pub mod config;
pub mod parallel;
pub mod result;
pub mod serial;

pub use candidate::Candidate;
pub use config::{Algorithm, SearchConfig};
pub use parallel::{ParallelConfig, ParallelSearch};
pub use result::{SearchResult, SearchStatistics};
pub use serial::SerialSearch;

use crate::input::Neighborhood;

/// Trait for search algorithms that find the best run of houses
pub trait SearchAlgorithm {
    /// Search for the largest run total not exceeding the capacity
    ///
    /// # Arguments
    /// * `neighborhood` - Candy per house and the bag capacity
    /// * `config` - Search configuration parameters
    ///
    /// # Returns
    /// A SearchResult containing the best run (if any) and statistics
    fn search(&mut self, neighborhood: &Neighborhood, config: &SearchConfig) -> SearchResult;

    /// Get statistics from the most recent search
    fn statistics(&self) -> SearchStatistics;

    /// Reset the search state for a new search
    fn reset(&mut self);
}
