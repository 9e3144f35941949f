//! Random neighborhood generation for benchmarking and stress tests

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::{CandyError, Result};
use crate::input::Neighborhood;

/// Configuration for random neighborhood generation
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Number of houses to generate
    pub homes: usize,
    /// Candy capacity written to the header
    pub capacity: u32,
    /// Largest candy amount a single house may hold
    pub max_piece: u32,
    /// Seed for reproducibility (None = random seed)
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            homes: 10_000,
            capacity: 1_000,
            max_piece: 1_000,
            seed: None,
        }
    }
}

impl GenerateConfig {
    pub fn with_homes(mut self, homes: usize) -> Self {
        self.homes = homes;
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_max_piece(mut self, max_piece: u32) -> Self {
        self.max_piece = max_piece;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Generate a neighborhood with candy amounts drawn uniformly from `0..=max_piece`
pub fn generate_neighborhood(config: &GenerateConfig) -> Neighborhood {
    let mut rng: ChaCha8Rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let pieces = (0..config.homes)
        .map(|_| rng.random_range(0..=config.max_piece))
        .collect();

    Neighborhood::new(config.capacity, pieces)
}

/// Generate a neighborhood and write it to `path` in the input file format
pub fn write_generated(path: &Path, config: &GenerateConfig) -> Result<Neighborhood> {
    let neighborhood = generate_neighborhood(config);
    std::fs::write(path, neighborhood.to_string()).map_err(|e| CandyError::io(path, e))?;

    info!(
        path = %path.display(),
        homes = config.homes,
        capacity = config.capacity,
        seed = ?config.seed,
        "Wrote generated neighborhood"
    );

    Ok(neighborhood)
}
