//! Cloud-Base Reference Validation Suite
//!
//! Validates the exact lifting-level solution against the published
//! reference values and the analytic properties of the closed form.
//!
//! # Test Categories
//! 1. Published reference levels (liquid and ice frames, both branches)
//! 2. Dry-parcel degenerate case (no transcendental solve)
//! 3. Mode semantics (minimum of the two branches)
//! 4. Input-contract rejection (humidity cardinality, vapor pressure)
//! 5. Determinism
//!
//! # References
//! - Romps (2017): Journal of the Atmospheric Sciences 74(12), 3891-3900,
//!   whose parameter set and check values are used verbatim
//!
//! Run tests with: `cargo test --test lcl_reference_validation`

use approx::assert_relative_eq;
use cloudbase_core::physics::constants::{CP_DRY_AIR, GRAVITY};
use cloudbase_core::physics::lifting_level;
use cloudbase_core::{Error, Fraction, HumiditySpec, Kelvin, Level, Pascals};

/// Install an env-filtered subscriber once so failing runs can be rerun
/// with `RUST_LOG=debug` to see the rejection diagnostics.
#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn level(p: f64, t: f64, spec: &HumiditySpec, mode: Level) -> f64 {
    lifting_level(Pascals::new(p), Kelvin::new(t), spec, mode)
        .expect("reference inputs are physically valid")
        .value()
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: PUBLISHED REFERENCE LEVELS
// All values from the closed-form solution's published self-check table,
// verified to 1e-10 relative tolerance.
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn condensation_level_warm_liquid_frame() {
    let h = level(1e5, 300.0, &HumiditySpec::liquid(Fraction::new(0.5)), Level::Lcl);
    assert_relative_eq!(h, 1433.844139279, max_relative = 1e-10);
}

#[test]
fn condensation_level_warm_ice_frame() {
    let h = level(1e5, 300.0, &HumiditySpec::ice(Fraction::new(0.5)), Level::Lcl);
    assert_relative_eq!(h, 923.2222457185, max_relative = 1e-10);
}

#[test]
fn condensation_level_cold_liquid_frame() {
    let h = level(1e5, 200.0, &HumiditySpec::liquid(Fraction::new(0.5)), Level::Lcl);
    assert_relative_eq!(h, 542.8017712435, max_relative = 1e-10);
}

#[test]
fn condensation_level_cold_ice_frame() {
    let h = level(1e5, 200.0, &HumiditySpec::ice(Fraction::new(0.5)), Level::Lcl);
    assert_relative_eq!(h, 1061.585301941, max_relative = 1e-10);
}

#[test]
fn deposition_level_warm_liquid_frame() {
    let h = level(1e5, 300.0, &HumiditySpec::liquid(Fraction::new(0.5)), Level::Ldl);
    assert_relative_eq!(h, 1639.249726127, max_relative = 1e-10);
}

#[test]
fn deposition_level_warm_ice_frame() {
    let h = level(1e5, 300.0, &HumiditySpec::ice(Fraction::new(0.5)), Level::Ldl);
    assert_relative_eq!(h, 1217.336637217, max_relative = 1e-10);
}

#[test]
fn deposition_level_cold_liquid_frame_is_below_station() {
    // Cold air at 50% liquid-frame humidity is already past ice saturation
    // at the surface; the deposition level is (slightly) negative, which is
    // exactly why failures must be typed rather than sentinel heights
    let h = level(1e5, 200.0, &HumiditySpec::liquid(Fraction::new(0.5)), Level::Ldl);
    assert_relative_eq!(h, -8.609834216556, max_relative = 1e-10);
}

#[test]
fn deposition_level_cold_ice_frame() {
    let h = level(1e5, 200.0, &HumiditySpec::ice(Fraction::new(0.5)), Level::Ldl);
    assert_relative_eq!(h, 508.6366558898, max_relative = 1e-10);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: DRY-PARCEL DEGENERATE CASE
// ═══════════════════════════════════════════════════════════════════════════════

/// A parcel with zero humidity never saturates; the closed form reduces to
/// the full adiabatic ascent `cp·T/g` with the dry-air heat capacity, and
/// the result must equal it exactly (no Lambert evaluation involved).
#[test]
fn dry_parcel_reduces_to_adiabatic_ascent() {
    for &(p, t) in &[(1e5, 300.0), (1e5, 200.0), (85_000.0, 260.0)] {
        let h = level(p, t, &HumiditySpec::ambient(Fraction::ZERO), Level::Lcl);
        assert_eq!(h, CP_DRY_AIR * t / GRAVITY);
    }
}

/// The dry shortcut applies in every humidity frame, not just ambient.
#[test]
fn dry_parcel_is_frame_independent() {
    let ambient = level(1e5, 280.0, &HumiditySpec::ambient(Fraction::ZERO), Level::Lcl);
    let liquid = level(1e5, 280.0, &HumiditySpec::liquid(Fraction::ZERO), Level::Lcl);
    let ice = level(1e5, 280.0, &HumiditySpec::ice(Fraction::ZERO), Level::Lcl);
    assert_eq!(ambient, liquid);
    assert_eq!(ambient, ice);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: MODE SEMANTICS
// ═══════════════════════════════════════════════════════════════════════════════

/// The min mode must agree with taking the minimum of the two branch
/// results for identical inputs.
#[test]
fn min_mode_is_the_lower_branch() {
    for &(t, rh) in &[(300.0, 0.5), (273.0, 0.8), (200.0, 0.5), (250.0, 0.3)] {
        let spec = HumiditySpec::liquid(Fraction::new(rh));
        let lcl = level(1e5, t, &spec, Level::Lcl);
        let ldl = level(1e5, t, &spec, Level::Ldl);
        let min = level(1e5, t, &spec, Level::MinOfBoth);
        assert_eq!(min, lcl.min(ldl), "min mode diverged at T={t}, rh={rh}");
    }
}

/// Warm parcels condense below where they would deposit; cold parcels the
/// other way around. The published table shows both orderings.
#[test]
fn branch_ordering_flips_with_temperature() {
    let spec = HumiditySpec::liquid(Fraction::new(0.5));
    let warm_lcl = level(1e5, 300.0, &spec, Level::Lcl);
    let warm_ldl = level(1e5, 300.0, &spec, Level::Ldl);
    assert!(warm_lcl < warm_ldl);

    let cold_lcl = level(1e5, 200.0, &spec, Level::Lcl);
    let cold_ldl = level(1e5, 200.0, &spec, Level::Ldl);
    assert!(cold_ldl < cold_lcl);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: INPUT-CONTRACT REJECTION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn missing_humidity_is_always_rejected() {
    let result = lifting_level(
        Pascals::new(1e5),
        Kelvin::new(300.0),
        &HumiditySpec::default(),
        Level::Lcl,
    );
    assert_eq!(result, Err(Error::InvalidHumiditySpec { supplied: 0 }));
}

#[test]
fn saturated_air_above_its_own_vapor_pressure_is_rejected() {
    // At 320 K the saturation vapor pressure is ~10.5 kPa; a total pressure
    // of 8 kPa below it cannot carry that much vapor
    let result = lifting_level(
        Pascals::new(8_000.0),
        Kelvin::new(320.0),
        &HumiditySpec::ambient(Fraction::ONE),
        Level::Lcl,
    );
    match result {
        Err(Error::VaporPressureExceedsTotal {
            vapor_pressure,
            pressure,
        }) => {
            assert!(vapor_pressure > pressure);
            assert_eq!(pressure, 8_000.0);
        }
        other => panic!("expected a vapor-pressure rejection, got {other:?}"),
    }
}

/// The rejection must hold in every mode — no mode may fall back to a
/// numeric value for inconsistent input.
#[test]
fn inconsistent_input_is_rejected_in_every_mode() {
    for mode in [Level::Lcl, Level::Ldl, Level::MinOfBoth] {
        let result = lifting_level(
            Pascals::new(8_000.0),
            Kelvin::new(320.0),
            &HumiditySpec::ambient(Fraction::ONE),
            mode,
        );
        assert!(result.is_err(), "mode {mode:?} produced a value");
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 5: DETERMINISM
// ═══════════════════════════════════════════════════════════════════════════════

/// Pure function: repeated evaluation is bit-identical, with no internal
/// state to drift.
#[test]
fn repeated_calls_are_bit_identical() {
    let spec = HumiditySpec::liquid(Fraction::new(0.5));
    let first = level(1e5, 300.0, &spec, Level::Lcl);
    for _ in 0..100 {
        let again = level(1e5, 300.0, &spec, Level::Lcl);
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

/// Concurrent callers see the same results as sequential ones; there is no
/// shared mutable state to coordinate.
#[test]
fn concurrent_evaluation_matches_sequential() {
    let spec = HumiditySpec::liquid(Fraction::new(0.5));
    let expected = level(1e5, 300.0, &spec, Level::Lcl);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(move || {
                level(1e5, 300.0, &HumiditySpec::liquid(Fraction::new(0.5)), Level::Lcl)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().to_bits(), expected.to_bits());
    }
}
