use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tiles per region edge.
pub const GRID_SIZE: usize = 50;
/// Tiles per region.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({x}, {y}) is outside the {size}x{size} grid", size = GRID_SIZE)]
    OutOfBounds { x: usize, y: usize },

    #[error("Expected {expected} cells, got {0}", expected = GRID_CELLS)]
    BadLength(usize),
}

/// Read access to a 50×50 grid of small non-negative costs.
pub trait CostLookup {
    /// Cost at `(x, y)`; both indices are in `0..GRID_SIZE`.
    fn get(&self, x: usize, y: usize) -> u8;

    /// Largest cost anywhere in the grid.
    fn max_value(&self) -> u8;
}

/// Owned row-major cost grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostGrid {
    bits: Vec<u8>,
}

impl CostGrid {
    pub fn new() -> Self {
        Self {
            bits: vec![0; GRID_CELLS],
        }
    }

    pub fn from_bits(bits: Vec<u8>) -> Result<Self, GridError> {
        if bits.len() != GRID_CELLS {
            return Err(GridError::BadLength(bits.len()));
        }
        Ok(Self { bits })
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), GridError> {
        let idx = Self::index(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        self.bits[idx] = value;
        Ok(())
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    fn index(x: usize, y: usize) -> Option<usize> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Some(y * GRID_SIZE + x)
        } else {
            None
        }
    }
}

impl Default for CostGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CostLookup for CostGrid {
    fn get(&self, x: usize, y: usize) -> u8 {
        Self::index(x, y).map_or(0, |idx| self.bits[idx])
    }

    fn max_value(&self) -> u8 {
        self.bits.iter().copied().max().unwrap_or(0)
    }
}
