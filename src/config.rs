use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::GenError;

/// Every tunable parameter of one generation run. Owned by the caller and
/// read-only to the pipeline; a run never mutates or retains it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Interior grid width, before the border is added.
    pub width: i32,
    /// Interior grid height, before the border is added.
    pub height: i32,
    /// Thickness of the solid tree ring wrapped around the finished interior.
    pub border_size: i32,
    /// Keeps the start point this far from the ends of its edge.
    pub checkpoint_offset: i32,
    /// Seed string; hashed to the numeric stream seed.
    pub seed: String,
    /// Replace `seed` with a time-derived string before hashing.
    pub use_random_seed: bool,
    /// Chance in [0,100] that an interior cell starts as a tree.
    pub fill_percent: i32,
    /// How many circular clearings to carve.
    pub num_clearings: i32,
    /// Radius of each clearing, in cells.
    pub clearing_radius: i32,
    /// Smoothing passes of the neighbor-count automaton.
    pub smoothing_iterations: i32,
    /// Largest perpendicular midpoint displacement for trail curves.
    pub max_deviation: f32,
    /// Recursive subdivision depth for trail curves. 0 gives straight trails.
    pub segments: i32,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            width: 64,
            height: 64,
            border_size: 2,
            checkpoint_offset: 8,
            seed: "into-the-woods".to_string(),
            use_random_seed: false,
            fill_percent: 50,
            num_clearings: 6,
            clearing_radius: 5,
            smoothing_iterations: 5,
            max_deviation: 8.0,
            segments: 4,
        }
    }
}

impl GenConfig {
    pub fn from_file <P: AsRef<Path>>(path: P) -> Result<GenConfig, GenError> {
        let raw = std::fs::read_to_string(path)?;
        let config: GenConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Rejects configurations no stage could work with. Runs before any
    /// generation work so a bad config never produces a partial grid.
    pub fn validate (&self) -> Result<(), GenError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GenError::InvalidConfig(
                format!("grid dimensions must be positive, got {}x{}", self.width, self.height)));
        }
        if self.fill_percent < 0 || self.fill_percent > 100 {
            return Err(GenError::InvalidConfig(
                format!("fill_percent must be within [0,100], got {}", self.fill_percent)));
        }
        if self.clearing_radius <= 0 {
            return Err(GenError::InvalidConfig(
                format!("clearing_radius must be positive, got {}", self.clearing_radius)));
        }
        if self.border_size < 0 {
            return Err(GenError::InvalidConfig(
                format!("border_size must not be negative, got {}", self.border_size)));
        }
        if self.num_clearings < 0 {
            return Err(GenError::InvalidConfig(
                format!("num_clearings must not be negative, got {}", self.num_clearings)));
        }
        if self.smoothing_iterations < 0 {
            return Err(GenError::InvalidConfig(
                format!("smoothing_iterations must not be negative, got {}", self.smoothing_iterations)));
        }
        if self.segments < 0 {
            return Err(GenError::InvalidConfig(
                format!("segments must not be negative, got {}", self.segments)));
        }
        if !(self.max_deviation >= 0.0) || !self.max_deviation.is_finite() {
            return Err(GenError::InvalidConfig(
                format!("max_deviation must be finite and non-negative, got {}", self.max_deviation)));
        }
        if self.checkpoint_offset < 0 {
            return Err(GenError::InvalidConfig(
                format!("checkpoint_offset must not be negative, got {}", self.checkpoint_offset)));
        }
        if self.checkpoint_offset * 2 >= self.width || self.checkpoint_offset * 2 >= self.height {
            return Err(GenError::InvalidConfig(
                format!("checkpoint_offset {} leaves no room along a {}x{} edge",
                    self.checkpoint_offset, self.width, self.height)));
        }
        Ok(())
    }
}
