//! A single timestamped set of environmental measurements
//!
//! [`Measurement`] is the value the rest of the backend passes around: the
//! surface state of the air at one station at one instant, plus the
//! optional context (dewpoint, station altitude, sea-level pressure) that
//! some stations report and others do not. It is immutable once built —
//! the named factories below replace construction-by-overload, and the
//! `with_*` adjuncts return a new value rather than mutating.

use serde::{Deserialize, Serialize};

use crate::core_types::reading::StoredReading;
use crate::core_types::units::{Celsius, Feet, Fraction, Meters, Pascals};
use crate::error::Result;
use crate::physics::constants::{
    ISA_LAPSE_RATE, ISA_PRESSURE_EXPONENT, ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMPERATURE,
};
use crate::physics::parcel::{self, HumiditySpec, Level};

/// Immutable environmental measurement from one station at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Air temperature (°C)
    temperature: Celsius,

    /// Ambient relative humidity (0-1)
    humidity: Fraction,

    /// Absolute station pressure (Pa)
    pressure: Pascals,

    /// Sensor dewpoint, when the station reported one (°C)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dewpoint: Option<Celsius>,

    /// Station altitude above sea level (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    altitude: Option<Meters>,

    /// Sea-level-corrected pressure (QNH), when known (Pa)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sea_level_pressure: Option<Pascals>,

    /// UTC ISO-8601 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl Measurement {
    // ========================================================================
    // FACTORIES
    // ========================================================================

    /// Build a measurement from raw sensor fields, with no optional context.
    #[must_use]
    pub fn from_raw_fields(temperature: Celsius, humidity: Fraction, pressure: Pascals) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
            dewpoint: None,
            altitude: None,
            sea_level_pressure: None,
            timestamp: None,
        }
    }

    /// Build a measurement from a persisted reading row.
    #[must_use]
    pub fn from_persisted_reading(reading: &StoredReading) -> Self {
        Self::from_raw_fields(
            reading.temperature,
            reading.relative_humidity,
            reading.pressure,
        )
        .with_dewpoint(reading.dewpoint)
        .with_timestamp(reading.timestamp.clone())
    }

    /// Build a measurement from a persisted reading row for a station whose
    /// altitude is known (from its device registration).
    #[must_use]
    pub fn from_persisted_reading_with_altitude(
        reading: &StoredReading,
        altitude: Meters,
    ) -> Self {
        Self::from_persisted_reading(reading).with_altitude(altitude)
    }

    /// Attach a sensor dewpoint.
    #[must_use]
    pub fn with_dewpoint(mut self, dewpoint: Celsius) -> Self {
        self.dewpoint = Some(dewpoint);
        self
    }

    /// Attach the station altitude.
    #[must_use]
    pub fn with_altitude(mut self, altitude: Meters) -> Self {
        self.altitude = Some(altitude);
        self
    }

    /// Attach a known sea-level-corrected pressure (QNH).
    #[must_use]
    pub fn with_sea_level_pressure(mut self, qnh: Pascals) -> Self {
        self.sea_level_pressure = Some(qnh);
        self
    }

    /// Attach the ingest timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: String) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Air temperature (°C)
    #[must_use]
    pub fn temperature(&self) -> Celsius {
        self.temperature
    }

    /// Ambient relative humidity (0-1)
    #[must_use]
    pub fn humidity(&self) -> Fraction {
        self.humidity
    }

    /// Absolute station pressure (Pa)
    #[must_use]
    pub fn pressure(&self) -> Pascals {
        self.pressure
    }

    /// Sensor dewpoint, if the station reported one
    #[must_use]
    pub fn dewpoint(&self) -> Option<Celsius> {
        self.dewpoint
    }

    /// Station altitude above sea level, if known
    #[must_use]
    pub fn altitude(&self) -> Option<Meters> {
        self.altitude
    }

    /// Stored sea-level-corrected pressure, if known
    #[must_use]
    pub fn sea_level_pressure(&self) -> Option<Pascals> {
        self.sea_level_pressure
    }

    /// UTC ISO-8601 timestamp, if assigned
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    // ========================================================================
    // DERIVED QUANTITIES
    // ========================================================================

    /// Height of the requested saturation level above the station.
    ///
    /// The sensor humidity is ambient-referenced (liquid above the triple
    /// point, ice below), matching how combined sensors report.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::VaporPressureExceedsTotal`] for readings
    /// whose humidity is inconsistent with their pressure; the ambient
    /// humidity input built here always carries exactly one interpretation.
    pub fn lifting_level(&self, level: Level) -> Result<Meters> {
        parcel::lifting_level(
            self.pressure,
            self.temperature.to_kelvin(),
            &HumiditySpec::ambient(self.humidity),
            level,
        )
    }

    /// Cloud-base height (lifting condensation level) above the station.
    ///
    /// # Errors
    ///
    /// Same contract as [`Measurement::lifting_level`].
    pub fn cloud_base(&self) -> Result<Meters> {
        self.lifting_level(Level::Lcl)
    }

    /// Cloud-base height in feet, the unit the dashboard displays.
    ///
    /// # Errors
    ///
    /// Same contract as [`Measurement::lifting_level`].
    pub fn cloud_base_feet(&self) -> Result<Feet> {
        Ok(self.cloud_base()?.to_feet())
    }

    /// The sensor dewpoint when present, otherwise a Magnus-form estimate
    /// from temperature and humidity.
    #[must_use]
    pub fn dew_point_or_estimate(&self) -> Celsius {
        self.dewpoint
            .unwrap_or_else(|| parcel::dew_point(self.temperature, self.humidity))
    }

    /// The stored sea-level pressure when present, otherwise the barometric
    /// reduction through the station altitude. `None` when neither the QNH
    /// nor the altitude is known.
    #[must_use]
    pub fn sea_level_pressure_or_estimate(&self) -> Option<Pascals> {
        self.sea_level_pressure.or_else(|| {
            self.altitude.map(|altitude| {
                let height = altitude.value();
                let t = self.temperature.value();
                // Reduction of station pressure to sea level assuming the
                // standard lapse rate between the two
                let column = ISA_LAPSE_RATE * height;
                let factor = (1.0 - column / (t + column + 273.15)).powf(-ISA_PRESSURE_EXPONENT);
                Pascals::new(self.pressure.value() * factor)
            })
        })
    }

    /// Pressure altitude: where the standard atmosphere places this
    /// station pressure. Used to sanity-check a station's registered
    /// altitude against what its barometer implies.
    #[must_use]
    pub fn pressure_altitude(&self) -> Meters {
        let ratio = self.pressure.value() / ISA_SEA_LEVEL_PRESSURE;
        let height =
            ISA_SEA_LEVEL_TEMPERATURE / ISA_LAPSE_RATE * (1.0 - ratio.powf(1.0 / ISA_PRESSURE_EXPONENT));
        Meters::new(height)
    }
}
