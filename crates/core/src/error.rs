use thiserror::Error;

/// Input-contract violations surfaced by the parcel computations.
///
/// Both variants are caller errors detected before any height is derived:
/// they are never retried and never recovered internally, and no numeric
/// sentinel stands in for them. Negative heights are legitimate outputs
/// (a deposition level can sit below the station), so failures must be
/// unmistakable.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("exactly one humidity interpretation must be supplied, got {supplied}")]
    InvalidHumiditySpec { supplied: usize },

    #[error("vapor pressure {vapor_pressure:.3} Pa exceeds total pressure {pressure:.3} Pa")]
    VaporPressureExceedsTotal { vapor_pressure: f64, pressure: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
