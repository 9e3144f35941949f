//! Configuration types for search algorithms

/// Search algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Single-threaded left-to-right scan (reference answer)
    Serial,
    /// Thread team sharing an atomic work cursor
    #[default]
    Parallel,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Serial => write!(f, "serial"),
            Algorithm::Parallel => write!(f, "parallel"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serial" | "sequential" | "seq" => Ok(Algorithm::Serial),
            "parallel" | "par" => Ok(Algorithm::Parallel),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: serial, parallel",
                s
            )),
        }
    }
}

/// Main search configuration
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Search algorithm to use
    pub algorithm: Algorithm,
    /// Log per-worker progress at debug level
    pub verbose: bool,
}

impl SearchConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
