//! Cloud-base heights for an adiabatically lifted surface parcel
//!
//! Implements the exact closed-form solution for the lifting condensation
//! level (LCL) and its ice analogue, the lifting deposition level (LDL):
//! the height at which a rising, adiabatically cooling parcel saturates
//! with respect to liquid water or ice. The solution reduces the moist
//! thermodynamics to a single evaluation of the Lambert W function on its
//! lower real branch, so no iteration over the sounding is needed.
//!
//! # Scientific References
//!
//! - Romps, D.M. (2017). "Exact expression for the lifting condensation
//!   level." Journal of the Atmospheric Sciences, 74(12), 3891-3900.
//! - Wagner, W. and Pruss, A. (1993), for the form of the saturation
//!   vapor pressure expressions.
//! - Alduchov, O.A. and Eskridge, R.E. (1996). "Improved Magnus Form
//!   Approximation of Saturation Vapor Pressure." Journal of Applied
//!   Meteorology, 35(4), 601-609 (dewpoint estimate).

use nalgebra::Complex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::units::{Celsius, Fraction, Kelvin, Meters, Pascals};
use crate::error::{Error, Result};
use crate::physics::constants::{
    CP_DRY_AIR, CP_VAPOR, CV_ICE, CV_LIQUID, CV_VAPOR, E0S, E0V, GRAVITY, P_TRIPLE, R_DRY_AIR,
    R_VAPOR, T_TRIPLE,
};
use crate::physics::lambert_w::lambert_w_m1;

/// Which saturation level a computation should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    /// Lifting condensation level: saturation with respect to liquid water
    #[default]
    Lcl,
    /// Lifting deposition level: saturation with respect to ice
    Ldl,
    /// The lower of the condensation and deposition levels
    MinOfBoth,
}

/// Relative-humidity input, in exactly one of three reference frames.
///
/// Station payloads carry humidity as an optional field per frame, so the
/// exactly-one contract is a runtime property of the data and is validated
/// when a level is computed, not encoded in the type:
///
/// - **ambient**: referenced to liquid water above the triple point and to
///   ice below it (what a combined sensor reports),
/// - **liquid**: explicitly referenced to liquid-water saturation,
/// - **ice**: explicitly referenced to ice saturation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HumiditySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relative_humidity: Option<Fraction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    relative_humidity_liquid: Option<Fraction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    relative_humidity_ice: Option<Fraction>,
}

impl HumiditySpec {
    /// Humidity referenced to the ambient-appropriate phase
    #[must_use]
    pub fn ambient(humidity: Fraction) -> Self {
        Self {
            relative_humidity: Some(humidity),
            ..Self::default()
        }
    }

    /// Humidity referenced to liquid-water saturation
    #[must_use]
    pub fn liquid(humidity: Fraction) -> Self {
        Self {
            relative_humidity_liquid: Some(humidity),
            ..Self::default()
        }
    }

    /// Humidity referenced to ice saturation
    #[must_use]
    pub fn ice(humidity: Fraction) -> Self {
        Self {
            relative_humidity_ice: Some(humidity),
            ..Self::default()
        }
    }

    /// Number of interpretations carried; valid input has exactly one
    fn supplied_count(&self) -> usize {
        usize::from(self.relative_humidity.is_some())
            + usize::from(self.relative_humidity_liquid.is_some())
            + usize::from(self.relative_humidity_ice.is_some())
    }
}

/// Saturation vapor pressure over liquid water.
///
/// Constant-specific-heat form anchored at the triple point; exact partner
/// of the closed-form level solution below.
#[must_use]
pub fn saturation_vapor_pressure_liquid(temperature: Kelvin) -> Pascals {
    let t = temperature.value();
    let value = P_TRIPLE
        * (t / T_TRIPLE).powf((CP_VAPOR - CV_LIQUID) / R_VAPOR)
        * ((E0V - (CV_VAPOR - CV_LIQUID) * T_TRIPLE) / R_VAPOR * (1.0 / T_TRIPLE - 1.0 / t)).exp();
    Pascals::new(value)
}

/// Saturation vapor pressure over solid ice.
#[must_use]
pub fn saturation_vapor_pressure_ice(temperature: Kelvin) -> Pascals {
    let t = temperature.value();
    let value = P_TRIPLE
        * (t / T_TRIPLE).powf((CP_VAPOR - CV_ICE) / R_VAPOR)
        * ((E0V + E0S - (CV_VAPOR - CV_ICE) * T_TRIPLE) / R_VAPOR * (1.0 / T_TRIPLE - 1.0 / t))
            .exp();
    Pascals::new(value)
}

/// Humidity restated in every reference frame, plus the vapor pressure it
/// implies. All three frames describe the same parcel.
struct ResolvedHumidity {
    vapor_pressure: f64,
    liquid: f64,
    ice: f64,
}

/// Derive the actual vapor pressure from whichever interpretation was
/// supplied and restate the humidity in the other frames.
fn resolve(spec: &HumiditySpec, t: f64) -> Result<ResolvedHumidity> {
    let pv_star_liquid = saturation_vapor_pressure_liquid(Kelvin::new(t)).value();
    let pv_star_ice = saturation_vapor_pressure_ice(Kelvin::new(t)).value();

    match (
        spec.relative_humidity,
        spec.relative_humidity_liquid,
        spec.relative_humidity_ice,
    ) {
        (Some(ambient), None, None) => {
            let ambient = ambient.value();
            let vapor_pressure = if t > T_TRIPLE {
                ambient * pv_star_liquid
            } else {
                ambient * pv_star_ice
            };
            Ok(ResolvedHumidity {
                vapor_pressure,
                liquid: vapor_pressure / pv_star_liquid,
                ice: vapor_pressure / pv_star_ice,
            })
        }
        (None, Some(liquid), None) => {
            let liquid = liquid.value();
            let vapor_pressure = liquid * pv_star_liquid;
            Ok(ResolvedHumidity {
                vapor_pressure,
                liquid,
                ice: vapor_pressure / pv_star_ice,
            })
        }
        (None, None, Some(ice)) => {
            let ice = ice.value();
            let vapor_pressure = ice * pv_star_ice;
            Ok(ResolvedHumidity {
                vapor_pressure,
                liquid: vapor_pressure / pv_star_liquid,
                ice,
            })
        }
        _ => {
            let supplied = spec.supplied_count();
            debug!(supplied, "rejecting humidity input: exactly one interpretation required");
            Err(Error::InvalidHumiditySpec { supplied })
        }
    }
}

/// Height of the requested saturation level for a surface parcel.
///
/// The parcel starts at `pressure` and `temperature` with the humidity
/// described by `spec`, rises adiabatically, and saturates at the returned
/// height in meters above the station. The height can be negative when the
/// parcel is already past saturation in the requested frame at the surface.
///
/// A completely dry parcel (zero vapor pressure) never saturates; the
/// conventional value `cpm·T/g` — the height at which the parcel's
/// temperature reaches absolute zero — is returned without entering the
/// transcendental solve.
///
/// # Errors
///
/// - [`Error::InvalidHumiditySpec`] when `spec` carries no interpretation
///   or more than one,
/// - [`Error::VaporPressureExceedsTotal`] when the implied vapor pressure
///   exceeds the total pressure, which no physical parcel can do.
pub fn lifting_level(
    pressure: Pascals,
    temperature: Kelvin,
    spec: &HumiditySpec,
    level: Level,
) -> Result<Meters> {
    let p = pressure.value();
    let t = temperature.value();

    let humidity = resolve(spec, t)?;
    let pv = humidity.vapor_pressure;
    if pv > p {
        debug!(
            vapor_pressure = pv,
            pressure = p,
            "rejecting physically inconsistent input: vapor pressure above total"
        );
        return Err(Error::VaporPressureExceedsTotal {
            vapor_pressure: pv,
            pressure: p,
        });
    }

    // Mass mixing ratio of vapor and the mass-weighted mixture coefficients
    let qv = R_DRY_AIR * pv / (R_VAPOR * p + (R_DRY_AIR - R_VAPOR) * pv);
    let r_mix = (1.0 - qv) * R_DRY_AIR + qv * R_VAPOR;
    let cp_mix = (1.0 - qv) * CP_DRY_AIR + qv * CP_VAPOR;

    if pv == 0.0 {
        return Ok(Meters::new(cp_mix * t / GRAVITY));
    }

    let lcl = branch_height(t, cp_mix, r_mix, humidity.liquid, CV_LIQUID, E0V);
    let ldl = branch_height(t, cp_mix, r_mix, humidity.ice, CV_ICE, E0V + E0S);

    Ok(Meters::new(match level {
        Level::Lcl => lcl,
        Level::Ldl => ldl,
        Level::MinOfBoth => lcl.min(ldl),
    }))
}

/// One saturation branch of the closed-form solution.
///
/// `saturation_ratio` is the parcel humidity referenced to this branch's
/// condensed phase, `cv_condensed` the condensate's specific heat and
/// `latent_heat` the matching latent heat at the triple point.
fn branch_height(
    t: f64,
    cp_mix: f64,
    r_mix: f64,
    saturation_ratio: f64,
    cv_condensed: f64,
    latent_heat: f64,
) -> f64 {
    let a = -(CP_VAPOR - cv_condensed) / R_VAPOR + cp_mix / r_mix;
    let b = -(latent_heat - (CV_VAPOR - cv_condensed) * T_TRIPLE) / (R_VAPOR * t);
    let c = saturation_ratio * b.exp();

    let argument = Complex::new(b / a * c.powf(1.0 / a), 0.0);
    let w = lambert_w_m1(argument).re;

    cp_mix * t / GRAVITY * (1.0 - b / (a * w))
}

/// Dewpoint estimate from temperature and ambient relative humidity.
///
/// Magnus-form approximation with the Alduchov & Eskridge (1996)
/// coefficients; used for readings whose sensor did not report a dewpoint.
/// Humidity is floored well below any real sensor resolution to keep the
/// logarithm finite.
#[must_use]
pub fn dew_point(temperature: Celsius, humidity: Fraction) -> Celsius {
    const MAGNUS_A: f64 = 17.625;
    const MAGNUS_B: f64 = 243.04; // °C
    const MIN_HUMIDITY: f64 = 1e-3;

    let t = temperature.value();
    let rh = humidity.value().max(MIN_HUMIDITY);
    let gamma = MAGNUS_A * t / (MAGNUS_B + t) + rh.ln();
    Celsius::new(MAGNUS_B * gamma / (MAGNUS_A - gamma))
}
