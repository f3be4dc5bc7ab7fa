//! Batch derivation over stored measurement series
//!
//! The dashboard graphs derived heights across hours or days of stored
//! readings. Each height is an independent pure computation, so the batch
//! fans out across cores; results keep their input order and per-input
//! failures stay per-input rather than aborting the series.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core_types::units::Meters;
use crate::core_types::Measurement;
use crate::error::Result;
use crate::physics::parcel::Level;

/// Compute the requested saturation level for every measurement.
///
/// Output order matches input order. An element is `Err` exactly when the
/// same single-measurement call would fail for that input.
#[must_use]
pub fn lifting_levels(measurements: &[Measurement], level: Level) -> Vec<Result<Meters>> {
    measurements
        .par_iter()
        .map(|m| m.lifting_level(level))
        .collect()
}

/// Range and mean of the successful heights in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightSummary {
    /// Successful computations contributing to the statistics
    pub count: usize,
    /// Inputs rejected with a contract error
    pub rejected: usize,
    /// Lowest derived height
    pub min: Meters,
    /// Highest derived height
    pub max: Meters,
    /// Arithmetic mean of the derived heights
    pub mean: Meters,
}

impl HeightSummary {
    /// Reduce a batch result to its summary statistics.
    ///
    /// Returns `None` when no input produced a height.
    #[must_use]
    pub fn from_results(results: &[Result<Meters>]) -> Option<Self> {
        let heights: Vec<f64> = results
            .iter()
            .copied()
            .filter_map(Result::ok)
            .map(Meters::value)
            .collect();
        if heights.is_empty() {
            return None;
        }

        let min = heights.iter().copied().fold(f64::INFINITY, f64::min);
        let max = heights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = heights.iter().sum::<f64>() / heights.len() as f64;

        Some(Self {
            count: heights.len(),
            rejected: results.len() - heights.len(),
            min: Meters::new(min),
            max: Meters::new(max),
            mean: Meters::new(mean),
        })
    }
}
