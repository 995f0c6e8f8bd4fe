//! # Array Load Calculation
//!
//! Characteristic (unfactored) wind, snow and dead loads on a whole PV
//! array, in kN. Each function validates only the inputs it reads and
//! returns a typed error instead of a silent zero.
//!
//! ## Assumptions
//!
//! - Terrain category B, gust factor βz = 1.0
//! - Wind acts on the panel area projected onto a vertical plane; pressure
//!   and suction are treated alike (magnitude only)
//! - Snow acts on the panel area projected onto the horizontal plane
//! - Frame self-weight is a fixed share of the panel weight

use tracing::debug;

use super::coefficients::{height_pressure_coefficient, snow_distribution_coefficient};
use crate::calculations::MountInput;
use crate::errors::{ensure_finite, CalcResult};
use crate::reference::ReferenceData;
use crate::units::{Degrees, KiloNewtons, Kilograms, Radians, SqM};

/// Wind-induced vibration factor βz, taken as 1.0 for low, stiff frames
pub const GUST_FACTOR: f64 = 1.0;

/// Frame self-weight as a fraction of panel weight (typical range 25-40 %)
pub const STRUCTURE_WEIGHT_RATIO: f64 = 0.3;

/// Mass to force conversion used on drawings (1 kg ≈ 0.0098 kN)
pub const KG_TO_KN: f64 = 0.0098;

/// Characteristic wind load on the array (kN, magnitude)
///
/// `μs × μz × w0 × sin(tilt) × L × W × panels`
pub fn wind_load(input: &MountInput, data: &ReferenceData) -> CalcResult<f64> {
    input.validate_tilt()?;
    input.validate_height()?;
    input.validate_panel_geometry()?;

    let w0 = data.cities.resolve(&input.location).entry.basic_wind_pressure_kn_m2;
    let mu_z = height_pressure_coefficient(input.mounting_height_m);
    let mu_s = data.roof_coefficients.shape_coefficient(input.roof_type);

    let tilt: Radians = Degrees(input.tilt_angle_deg).into();
    let projected = SqM(tilt.sin() * input.pv_length_m * input.pv_width_m);

    let wind = KiloNewtons(GUST_FACTOR * mu_s * mu_z * w0 * projected.value() * input.panel_count());
    let wind = ensure_finite("wind_load", wind.value().abs())?;

    debug!(mu_s, mu_z, w0, projected_m2 = projected.value(), wind_kn = wind, "wind load");
    Ok(wind)
}

/// Characteristic snow load on the array (kN)
///
/// `μr × s0 × cos(tilt) × L × W × panels`
pub fn snow_load(input: &MountInput, data: &ReferenceData) -> CalcResult<f64> {
    input.validate_tilt()?;
    input.validate_panel_geometry()?;

    let s0 = data.cities.resolve(&input.location).entry.basic_snow_pressure_kn_m2;
    let mu_r = snow_distribution_coefficient(input.tilt_angle_deg);

    let tilt: Radians = Degrees(input.tilt_angle_deg).into();
    let horizontal = SqM(input.pv_length_m * input.pv_width_m * tilt.cos());

    let snow = KiloNewtons(mu_r * s0 * horizontal.value() * input.panel_count());
    // cos(90°) is a hair below zero in floating point
    let snow = ensure_finite("snow_load", snow.value().max(0.0))?;

    debug!(mu_r, s0, horizontal_m2 = horizontal.value(), snow_kn = snow, "snow load");
    Ok(snow)
}

/// Dead load of panels plus frame (kN)
///
/// `(panel mass × (1 + 0.3)) × 0.0098`
pub fn dead_load(input: &MountInput) -> CalcResult<f64> {
    input.validate_panel_weight()?;
    input.validate_counts()?;

    let panels = Kilograms(input.pv_weight_kg * input.panel_count());
    let structure = panels * STRUCTURE_WEIGHT_RATIO;
    let dead = ensure_finite("dead_load", (panels + structure).value() * KG_TO_KN)?;

    debug!(panel_mass_kg = panels.value(), structure_mass_kg = structure.value(), dead_kn = dead, "dead load");
    Ok(dead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::RoofType;

    fn data() -> &'static ReferenceData {
        ReferenceData::builtin()
    }

    #[test]
    fn test_default_wind_load() {
        let wind = wind_load(&MountInput::default(), data()).unwrap();
        // 1.0 × 1.0 × 0.40 × 0.85 m² × 200
        assert!((wind - 68.0).abs() < 1e-9, "wind = {}", wind);
    }

    #[test]
    fn test_default_snow_load() {
        let snow = snow_load(&MountInput::default(), data()).unwrap();
        // 0.8 × 0.35 × 1.7 × cos30° × 200
        assert!((snow - 82.45).abs() < 0.01, "snow = {}", snow);
    }

    #[test]
    fn test_default_dead_load() {
        let dead = dead_load(&MountInput::default()).unwrap();
        // 4000 kg × 1.3 × 0.0098
        assert!((dead - 50.96).abs() < 1e-9, "dead = {}", dead);
    }

    #[test]
    fn test_wind_scales_with_roof_and_height() {
        let flat = wind_load(&MountInput::default(), data()).unwrap();

        let single = MountInput {
            roof_type: RoofType::SingleSlope,
            ..MountInput::default()
        };
        assert!((wind_load(&single, data()).unwrap() - flat * 1.3).abs() < 1e-9);

        let tall = MountInput {
            mounting_height_m: 12.0,
            ..MountInput::default()
        };
        assert!((wind_load(&tall, data()).unwrap() - flat * 1.14).abs() < 1e-9);
    }

    #[test]
    fn test_horizontal_panels_have_no_wind_full_snow() {
        let input = MountInput {
            tilt_angle_deg: 0.0,
            ..MountInput::default()
        };
        assert_eq!(wind_load(&input, data()).unwrap(), 0.0);
        // 1.0 × 0.35 × 1.7 × 200
        assert!((snow_load(&input, data()).unwrap() - 119.0).abs() < 1e-9);
    }

    #[test]
    fn test_steep_panels_shed_snow() {
        let input = MountInput {
            tilt_angle_deg: 60.0,
            ..MountInput::default()
        };
        assert_eq!(snow_load(&input, data()).unwrap(), 0.0);

        let vertical = MountInput {
            tilt_angle_deg: 90.0,
            ..MountInput::default()
        };
        assert_eq!(snow_load(&vertical, data()).unwrap(), 0.0);
        assert!((wind_load(&vertical, data()).unwrap() - 136.0).abs() < 1e-9);
    }

    #[test]
    fn test_city_pressures_used() {
        let input = MountInput {
            location: "Urumqi".to_string(),
            tilt_angle_deg: 20.0,
            ..MountInput::default()
        };
        let snow = snow_load(&input, data()).unwrap();
        let expected = 0.80 * 1.7 * 20f64.to_radians().cos() * 200.0;
        assert!((snow - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_location_uses_default_pressures() {
        let input = MountInput {
            location: "Gotham".to_string(),
            ..MountInput::default()
        };
        assert!((wind_load(&input, data()).unwrap() - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_tilt_is_an_error_not_zero() {
        let input = MountInput {
            tilt_angle_deg: 120.0,
            ..MountInput::default()
        };
        let err = wind_load(&input, data()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(snow_load(&input, data()).is_err());
        // Dead load does not read the tilt
        assert!(dead_load(&input).is_ok());
    }

    #[test]
    fn test_zero_rows_rejected() {
        let input = MountInput {
            num_rows: 0,
            ..MountInput::default()
        };
        assert!(dead_load(&input).is_err());
        assert!(wind_load(&input, data()).is_err());
    }

    #[test]
    fn test_nan_weight_rejected() {
        let input = MountInput {
            pv_weight_kg: f64::NAN,
            ..MountInput::default()
        };
        assert!(dead_load(&input).is_err());
    }
}
