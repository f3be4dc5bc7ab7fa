//! Cloud-base derivation core for an ESP32 weather-station backend
//!
//! The stations upload raw surface readings (temperature, humidity,
//! pressure); this crate turns one reading into the quantities the
//! dashboard shows — above all the cloud-base height, computed with the
//! exact closed-form lifting-condensation-level solution rather than the
//! usual empirical approximations.
//!
//! ## What lives here
//!
//! - Immutable [`Measurement`] values with named factories for raw sensor
//!   fields and persisted reading rows
//! - The parcel physics: exact LCL/LDL heights via the Lambert W function,
//!   saturation vapor pressures over liquid and ice, dewpoint estimation
//! - Standard-atmosphere helpers (sea-level pressure reduction, pressure
//!   altitude)
//! - Parallel batch derivation for dashboard graph series

// Core types and utilities
pub mod core_types;

// Atmospheric parcel physics
pub mod physics;

// Derived analytics over measurement series
pub mod analysis;

// Typed input-contract errors
pub mod error;

// Re-export core types
pub use core_types::units::{
    Celsius, Feet, Fraction, HectoPascals, Kelvin, Meters, Pascals, Percent,
};
pub use core_types::{Measurement, StoredReading};

// Re-export the physics entry points
pub use physics::{HumiditySpec, Level};

// Re-export the error surface
pub use error::{Error, Result};
