//! Thermodynamic constants for moist-air parcel calculations
//!
//! The parcel model treats air as a mixture of dry air and water vapor with
//! constant specific heats, anchored at the triple point of water. The
//! values are the parameter set of the exact cloud-base solution and must
//! be used together; mixing in constants from other tabulations shifts the
//! computed levels by tens of meters.
//!
//! # Scientific References
//! - Romps, D.M. (2017). "Exact expression for the lifting condensation
//!   level." Journal of the Atmospheric Sciences, 74(12), 3891-3900.
//! - ICAO Standard Atmosphere (1993), for the sea-level reference values.

/// Triple point temperature of water (K)
pub const T_TRIPLE: f64 = 273.16;

/// Triple point pressure of water vapor (Pa)
pub const P_TRIPLE: f64 = 611.65;

/// Latent heat of vaporization of water at the triple point (J/kg)
pub const E0V: f64 = 2.3740e6;

/// Latent heat of sublimation of ice at the triple point (J/kg)
pub const E0S: f64 = 0.3337e6;

/// Standard acceleration due to gravity (m/s²)
pub const GRAVITY: f64 = 9.80665;

/// Specific gas constant of dry air (J/kg/K)
pub const R_DRY_AIR: f64 = 287.04;

/// Specific gas constant of water vapor (J/kg/K)
pub const R_VAPOR: f64 = 461.0;

/// Specific heat capacity of dry air at constant volume (J/kg/K)
pub const CV_DRY_AIR: f64 = 719.0;

/// Specific heat capacity of water vapor at constant volume (J/kg/K)
pub const CV_VAPOR: f64 = 1418.0;

/// Specific heat capacity of liquid water (J/kg/K)
pub const CV_LIQUID: f64 = 4119.0;

/// Specific heat capacity of solid ice (J/kg/K)
pub const CV_ICE: f64 = 1861.0;

/// Specific heat capacity of dry air at constant pressure (J/kg/K)
pub const CP_DRY_AIR: f64 = CV_DRY_AIR + R_DRY_AIR;

/// Specific heat capacity of water vapor at constant pressure (J/kg/K)
pub const CP_VAPOR: f64 = CV_VAPOR + R_VAPOR;

// ============================================================================
// STANDARD ATMOSPHERE (sea-level pressure reduction, pressure altitude)
// ============================================================================

/// ICAO standard atmosphere sea-level pressure (Pa)
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101_325.0;

/// ICAO standard atmosphere sea-level temperature (K)
pub const ISA_SEA_LEVEL_TEMPERATURE: f64 = 288.15;

/// ICAO standard atmosphere temperature lapse rate (K/m)
pub const ISA_LAPSE_RATE: f64 = 0.0065;

/// Exponent of the barometric formula, g / (R_dry * lapse rate)
pub const ISA_PRESSURE_EXPONENT: f64 = GRAVITY / (R_DRY_AIR * ISA_LAPSE_RATE);
