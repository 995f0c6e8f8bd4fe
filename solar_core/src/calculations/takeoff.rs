//! # Steel Take-off
//!
//! Rough steel quantity for the whole array, derived from the column section.
//! Beams and connections are not sized; they are estimated as fixed
//! fractions of the column steel.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MountInput;
use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::materials::SteelSection;
use crate::reference::ReferenceData;
use crate::units::{Kilograms, Meters, SqCm, SqM};

/// Column length over mounting height (embedment plus freeboard)
pub const COLUMN_LENGTH_FACTOR: f64 = 1.2;

/// Beam steel as a fraction of column steel
pub const BEAM_WEIGHT_RATIO: f64 = 0.6;

/// Connection steel as a fraction of column plus beam steel
pub const CONNECTION_WEIGHT_RATIO: f64 = 0.15;

/// Estimated steel quantities (kg)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelTakeoff {
    /// Section the quantities are based on
    pub section_id: String,
    /// Number of columns
    pub total_columns: u64,
    /// Length of one column (m)
    pub column_length_m: f64,
    pub column_weight_kg: f64,
    pub beam_weight_kg: f64,
    pub connection_weight_kg: f64,
    pub total_steel_kg: f64,
}

impl SteelTakeoff {
    /// Empty take-off, used when the estimate could not run
    pub fn zero(section_id: impl Into<String>) -> Self {
        SteelTakeoff {
            section_id: section_id.into(),
            total_columns: 0,
            column_length_m: 0.0,
            column_weight_kg: 0.0,
            beam_weight_kg: 0.0,
            connection_weight_kg: 0.0,
            total_steel_kg: 0.0,
        }
    }
}

/// Estimate column, beam and connection steel for the array
///
/// # Example
///
/// ```rust
/// use solar_core::calculations::{takeoff, MountInput};
/// use solar_core::reference::ReferenceData;
///
/// let data = ReferenceData::builtin();
/// let c80 = data.sections.lookup("C80x40x15x2.0").unwrap();
/// let steel = takeoff::estimate_steel(&MountInput::default(), c80, data).unwrap();
///
/// // 80 columns × 3.6 m × 3.33 kg/m
/// assert!((steel.column_weight_kg - 958.6).abs() < 0.1);
/// ```
pub fn estimate_steel(
    input: &MountInput,
    section: &SteelSection,
    data: &ReferenceData,
) -> CalcResult<SteelTakeoff> {
    input.validate_height()?;
    let total_columns = input.total_columns()?;
    if !(section.area_cm2.is_finite() && section.area_cm2 > 0.0) {
        return Err(CalcError::invalid_input(
            "section_area_cm2",
            section.area_cm2.to_string(),
            format!("Section '{}' must have a positive area", section.id),
        ));
    }

    let area: SqM = SqCm(section.area_cm2).into();
    let column_length = Meters(input.mounting_height_m) * COLUMN_LENGTH_FACTOR;

    let column = Kilograms(
        area.value() * column_length.value() * data.steel.density_kg_m3 * total_columns as f64,
    );
    let beam = column * BEAM_WEIGHT_RATIO;
    let connection = (column + beam) * CONNECTION_WEIGHT_RATIO;
    let total = column + beam + connection;

    let total_steel_kg = ensure_finite("steel_takeoff", total.value())?;
    debug!(section = %section.id, total_columns, total_steel_kg, "steel take-off");

    Ok(SteelTakeoff {
        section_id: section.id.clone(),
        total_columns,
        column_length_m: column_length.value(),
        column_weight_kg: column.value(),
        beam_weight_kg: beam.value(),
        connection_weight_kg: connection.value(),
        total_steel_kg,
    })
}

/// Same as [`estimate_steel`], looking the section up by designation
pub fn estimate_steel_by_id(
    input: &MountInput,
    section_id: &str,
    data: &ReferenceData,
) -> CalcResult<SteelTakeoff> {
    let section = data.sections.lookup(section_id)?;
    estimate_steel(input, section, data)
}
