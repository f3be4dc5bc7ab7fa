//! Core value types exchanged with the surrounding backend layers

pub mod measurement;
pub mod reading;
pub mod units;

pub use measurement::Measurement;
pub use reading::StoredReading;
pub use units::{Celsius, Feet, Fraction, HectoPascals, Kelvin, Meters, Pascals, Percent};
