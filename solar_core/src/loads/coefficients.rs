//! Banded load coefficients (GB 50009-2012, simplified)

/// Height-pressure coefficient μz for terrain category B (open country).
///
/// Step function of height above ground (m):
/// ≤ 10 m → 1.00, ≤ 15 m → 1.14, above → 1.25.
///
/// ```
/// use solar_core::loads::coefficients::height_pressure_coefficient;
///
/// assert_eq!(height_pressure_coefficient(10.0), 1.0);
/// assert_eq!(height_pressure_coefficient(10.01), 1.14);
/// ```
pub fn height_pressure_coefficient(height_m: f64) -> f64 {
    // Table 8.2.1 gives 1.00 for both the 5 m and 10 m rows
    if height_m <= 5.0 {
        1.0
    } else if height_m <= 10.0 {
        1.0
    } else if height_m <= 15.0 {
        1.14
    } else {
        1.25
    }
}

/// Tilt below which the full ground snow stays on the panels (degrees)
pub const SNOW_FULL_RETENTION_DEG: f64 = 25.0;

/// Tilt at and above which snow slides off entirely (degrees)
pub const SNOW_ZERO_RETENTION_DEG: f64 = 50.0;

/// Snow distribution coefficient μr for an inclined plane (Table 7.2.1).
///
/// 1.0 up to 25°, linear to 0 at 50°, 0 beyond.
///
/// ```
/// use solar_core::loads::coefficients::snow_distribution_coefficient;
///
/// assert_eq!(snow_distribution_coefficient(37.5), 0.5);
/// ```
pub fn snow_distribution_coefficient(tilt_deg: f64) -> f64 {
    if tilt_deg <= SNOW_FULL_RETENTION_DEG {
        1.0
    } else if tilt_deg <= SNOW_ZERO_RETENTION_DEG {
        1.0 - (tilt_deg - SNOW_FULL_RETENTION_DEG) / (SNOW_ZERO_RETENTION_DEG - SNOW_FULL_RETENTION_DEG)
    } else {
        0.0
    }
}
