//! Parallel search execution over a fixed team of worker threads.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **work cursor** that hands out starting houses in increasing order,
//!   one fetch-and-increment per claim
//! - A **stop signal** raised by the first worker whose run fills the bag
//!   exactly; workers poll it between starts, never mid-expansion
//! - **Workers** that each keep a private best run in their own slot
//! - A **coordinator** that spawns the team, joins it, and combines the
//!   slots by sum, then by smallest start
//!
//! # Example
//!
//! ```ignore
//! use candyrun::search::parallel::{ParallelConfig, run_parallel_search};
//!
//! let config = ParallelConfig::default().with_workers(4);
//! let result = run_parallel_search(&neighborhood, &search_config, &config);
//! println!("{}", result.best_result);
//! ```

pub mod config;
pub mod coordinator;
pub mod shared;

pub use config::ParallelConfig;
pub use coordinator::{
    ParallelResult, ParallelSearch, WorkerStatistics, run_parallel_search, solve_parallel,
};
