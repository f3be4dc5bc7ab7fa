//! Measurement Behaviour Suite
//!
//! Exercises the measurement value object the way the surrounding backend
//! does: built from raw upload fields or stored rows, serialized across
//! the JSON boundary, and asked for the derived dashboard quantities.

use approx::assert_relative_eq;
use cloudbase_core::analysis::{lifting_levels, HeightSummary};
use cloudbase_core::physics::lifting_level;
use cloudbase_core::{
    Celsius, Fraction, HumiditySpec, Level, Measurement, Meters, Pascals, StoredReading,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn stored_row() -> StoredReading {
    StoredReading {
        mac: "34:85:18:41:59:14".to_owned(),
        temperature: Celsius::new(5.0),
        relative_humidity: Fraction::new(0.87),
        pressure: Pascals::new(100_400.0),
        dewpoint: Celsius::new(3.1),
        timestamp: "2024-03-11T06:20:00".to_owned(),
        image_path: Some("uploads/2024-03-11-06-20-00.jpg".to_owned()),
    }
}

/// The measurement wrapper must agree exactly with the physics entry point
/// it delegates to, including the Celsius-to-Kelvin conversion.
#[test]
fn measurement_level_matches_direct_physics_call() {
    let m = Measurement::from_persisted_reading(&stored_row());
    let direct = lifting_level(
        Pascals::new(100_400.0),
        Celsius::new(5.0).to_kelvin(),
        &HumiditySpec::ambient(Fraction::new(0.87)),
        Level::Lcl,
    )
    .unwrap();
    assert_eq!(m.cloud_base().unwrap(), direct);
}

/// The dashboard displays feet; the conversion factor is fixed.
#[test]
fn cloud_base_feet_uses_the_dashboard_factor() {
    let m = Measurement::from_persisted_reading(&stored_row());
    let meters = m.cloud_base().unwrap();
    let feet = m.cloud_base_feet().unwrap();
    assert_relative_eq!(feet.value(), meters.value() * 3.28084, max_relative = 1e-14);
}

/// Station uploads carry only the three raw fields; everything else is
/// optional and defaults off the wire.
#[test]
fn minimal_upload_payload_deserializes() {
    let payload = r#"{
        "temperature": 4.0,
        "humidity": 0.93,
        "pressure": 100100.0
    }"#;
    let m: Measurement = serde_json::from_str(payload).unwrap();
    assert_eq!(m.temperature(), Celsius::new(4.0));
    assert_eq!(m.dewpoint(), None);
    assert_eq!(m.altitude(), None);
    assert!(m.cloud_base().is_ok());
}

/// A wire payload naming two humidity frames is a contract violation the
/// type system cannot rule out; it must surface as the typed error.
#[test]
fn conflicting_wire_humidity_is_rejected_at_compute_time() {
    let payload = r#"{
        "relative_humidity": 0.5,
        "relative_humidity_ice": 0.4
    }"#;
    let spec: HumiditySpec = serde_json::from_str(payload).unwrap();
    let result = lifting_level(Pascals::new(1e5), Celsius::new(10.0).to_kelvin(), &spec, Level::Lcl);
    assert!(result.is_err(), "two humidity frames must not produce a height");
}

/// A row-backed measurement with the station's registered altitude yields
/// every dashboard quantity.
#[test]
fn full_dashboard_row_derives_all_quantities() {
    let m = Measurement::from_persisted_reading_with_altitude(&stored_row(), Meters::new(173.0));

    assert_eq!(m.dew_point_or_estimate(), Celsius::new(3.1));
    let qnh = m.sea_level_pressure_or_estimate().unwrap();
    assert!(qnh > m.pressure());
    assert!(m.cloud_base_feet().unwrap().value() > 0.0);
}

/// Batch derivation over a stored series matches the per-row calls and the
/// summary counts failures instead of dropping them silently.
#[test]
fn series_summary_counts_rejections() {
    let good = Measurement::from_persisted_reading(&stored_row());
    // A corrupted row: saturated humidity at a pressure far below the
    // vapor pressure it implies
    let bad = Measurement::from_raw_fields(
        Celsius::new(46.9),
        Fraction::ONE,
        Pascals::new(8_000.0),
    );

    let results = lifting_levels(&[good.clone(), bad, good], Level::Lcl);
    assert!(results[0].is_ok() && results[2].is_ok());
    assert!(results[1].is_err());

    let summary = HeightSummary::from_results(&results).unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.min, summary.max);
}
