//! Search result types and statistics

use crate::search::candidate::Candidate;
use crate::search::config::Algorithm;
use std::time::Duration;

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best run found, or the "no solution" sentinel
    pub best: Candidate,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn new(best: Candidate, statistics: SearchStatistics) -> Self {
        Self { best, statistics }
    }

    /// Whether any run fits under the capacity
    pub fn found_solution(&self) -> bool {
        !self.best.is_none()
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Algorithm used for the search
    pub algorithm: Algorithm,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of houses on the street
    pub homes: usize,
    /// Number of starting houses expanded
    pub starts_evaluated: u64,
    /// Number of threads that took part
    pub workers: usize,
    /// Whether the search stopped early on an exact capacity hit
    pub stopped_early: bool,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Fraction of starting houses that were expanded (0.0 to 1.0)
    pub fn coverage(&self) -> f64 {
        if self.homes == 0 {
            0.0
        } else {
            self.starts_evaluated as f64 / self.homes as f64
        }
    }

    /// Get starts evaluated per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.starts_evaluated as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        if self.workers > 0 {
            s.push_str(&format!("Workers: {}\n", self.workers));
        }
        s.push_str(&format!(
            "Starts evaluated: {} of {} ({:.1}%)\n",
            self.starts_evaluated,
            self.homes,
            self.coverage() * 100.0
        ));
        s.push_str(&format!(
            "Throughput: {:.0} starts/sec\n",
            self.throughput()
        ));
        if self.stopped_early {
            s.push_str("Stopped early: capacity reached exactly\n");
        }
        s
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.best.run() {
            Some(run) => write!(
                f,
                "Start at home {} and go to home {} getting {} pieces of candy.",
                run.start + 1,
                run.end + 1,
                run.sum
            ),
            None => write!(f, "There are no solutions."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_found() {
        let result = SearchResult::new(
            Candidate::found(9, 0, 2),
            SearchStatistics::new(Algorithm::Serial),
        );
        assert!(result.found_solution());
        assert_eq!(
            result.to_string(),
            "Start at home 1 and go to home 3 getting 9 pieces of candy."
        );
    }

    #[test]
    fn test_display_no_solution() {
        let result = SearchResult::new(Candidate::NONE, SearchStatistics::default());
        assert!(!result.found_solution());
        assert_eq!(result.to_string(), "There are no solutions.");
    }

    #[test]
    fn test_statistics_coverage() {
        let mut stats = SearchStatistics::new(Algorithm::Parallel);
        stats.homes = 200;
        stats.starts_evaluated = 50;

        assert!((stats.coverage() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_throughput() {
        let mut stats = SearchStatistics::default();
        stats.starts_evaluated = 10000;
        stats.elapsed_time = Duration::from_secs(10);

        assert!((stats.throughput() - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_zero_division() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.coverage(), 0.0);
        assert_eq!(stats.throughput(), 0.0);
    }

    #[test]
    fn test_format_summary() {
        let mut stats = SearchStatistics::new(Algorithm::Parallel);
        stats.homes = 10;
        stats.starts_evaluated = 4;
        stats.workers = 2;
        stats.stopped_early = true;

        let summary = stats.format_summary();
        assert!(summary.contains("Algorithm: parallel"));
        assert!(summary.contains("Workers: 2"));
        assert!(summary.contains("Starts evaluated: 4 of 10"));
        assert!(summary.contains("Stopped early"));
    }
}
