//! Persisted sensor reading row
//!
//! The acquisition layer (out of scope here) stores one row per report a
//! station uploads. This DTO mirrors that row so stored history can be
//! turned back into [`Measurement`](crate::core_types::Measurement) values
//! without this crate touching the database.

use serde::{Deserialize, Serialize};

use crate::core_types::units::{Celsius, Fraction, Pascals};

/// One persisted sensor report: station identity plus raw sensor values.
///
/// Field names match the stored columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReading {
    /// MAC address identifying the reporting station
    pub mac: String,

    /// Air temperature (°C)
    pub temperature: Celsius,

    /// Ambient relative humidity (0-1)
    pub relative_humidity: Fraction,

    /// Absolute station pressure (Pa)
    pub pressure: Pascals,

    /// Sensor-reported dewpoint (°C)
    pub dewpoint: Celsius,

    /// UTC ISO-8601 timestamp assigned at ingest
    pub timestamp: String,

    /// Sky image captured with the reading, when the camera was up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}
