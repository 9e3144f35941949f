//! Neighborhood input files
//!
//! The file format is one integer per line: the number of homes, the candy
//! capacity, then one candy amount per home. Blank lines are skipped.

pub mod generate;

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::{CandyError, Result};

/// Houses on the street and the candy capacity of the bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    /// Largest amount of candy a run may collect
    pub capacity: u32,
    /// Candy available at each house, in street order
    pub pieces: Vec<u32>,
}

impl Neighborhood {
    pub fn new(capacity: u32, pieces: Vec<u32>) -> Self {
        Self { capacity, pieces }
    }

    /// Number of houses on the street
    pub fn homes(&self) -> usize {
        self.pieces.len()
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.homes())?;
        writeln!(f, "{}", self.capacity)?;
        for piece in &self.pieces {
            writeln!(f, "{}", piece)?;
        }
        Ok(())
    }
}

/// Parse one line as a non-negative integer
fn parse_value<T>(line_number: usize, text: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    text.parse::<T>()
        .map_err(|e| CandyError::parse(line_number, format!("'{}': {}", text, e)))
}

/// Parse a neighborhood from the contents of an input file
pub fn parse_neighborhood(content: &str) -> Result<Neighborhood> {
    let values: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if values.len() < 2 {
        return Err(CandyError::MissingHeader {
            found: values.len(),
        });
    }

    let (homes_line, homes_text) = values[0];
    let declared: usize = parse_value(homes_line, homes_text)?;
    let (capacity_line, capacity_text) = values[1];
    let capacity: u32 = parse_value(capacity_line, capacity_text)?;

    let pieces = values[2..]
        .iter()
        .map(|&(line_number, text)| parse_value::<u32>(line_number, text))
        .collect::<Result<Vec<_>>>()?;

    if pieces.len() != declared {
        return Err(CandyError::CountMismatch {
            declared,
            found: pieces.len(),
        });
    }

    Ok(Neighborhood::new(capacity, pieces))
}

/// Load a neighborhood from a file on disk
pub fn load_neighborhood(path: &Path) -> Result<Neighborhood> {
    if !path.exists() {
        return Err(CandyError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| CandyError::io(path, e))?;
    let neighborhood = parse_neighborhood(&content)?;

    debug!(
        path = %path.display(),
        homes = neighborhood.homes(),
        capacity = neighborhood.capacity,
        "Loaded neighborhood"
    );

    Ok(neighborhood)
}
