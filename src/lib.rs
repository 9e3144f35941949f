//! candyrun - best contiguous run of houses under a candy capacity
//!
//! Given the candy held by each house on a (non-wrapping) street and the
//! capacity of a bag, finds the run of consecutive houses collecting the
//! most candy without exceeding the capacity, preferring the earliest
//! starting house on ties.
//!
//! The answer is computed either by a serial scan or by a thread team that
//! claims starting houses from a shared atomic cursor and stops
//! cooperatively once a run fills the bag exactly. Both always agree.

pub mod error;
pub mod input;
pub mod search;

pub use error::{CandyError, Result};
pub use input::{Neighborhood, load_neighborhood, parse_neighborhood};
pub use search::candidate::{Candidate, Run, expand};
pub use search::parallel::solve_parallel;
pub use search::serial::solve_serial;
