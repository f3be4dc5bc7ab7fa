//! Atmospheric parcel physics
//!
//! Pure functions only: every computation here is a function of its
//! numeric inputs and the process-wide constants, safe to call from any
//! number of threads without coordination.

pub mod constants;
pub mod lambert_w;
pub mod parcel;

pub use parcel::{
    dew_point, lifting_level, saturation_vapor_pressure_ice, saturation_vapor_pressure_liquid,
    HumiditySpec, Level,
};
