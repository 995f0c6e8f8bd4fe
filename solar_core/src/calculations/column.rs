//! # Column Section Selection
//!
//! Sizes the frame columns by a plain axial-stress check and picks the
//! lightest adequate catalog section.
//!
//! ## Assumptions
//!
//! - The design load is shared equally by every column of the array
//! - Columns are checked for axial compression only, σ = N/A ≤ fy/γ
//!   (no buckling, bending or deflection check)
//! - `ceil(span / spacing)` columns per row, at least one column overall
//!
//! ## Example
//!
//! ```rust
//! use solar_core::calculations::{column, MountInput};
//! use solar_core::reference::ReferenceData;
//!
//! let input = MountInput::default();
//! let selection = column::select_column_section(250.72, &input, ReferenceData::builtin()).unwrap();
//!
//! assert_eq!(selection.total_columns, 80);
//! assert_eq!(selection.section.id, "C80x40x15x2.0");
//! assert!(selection.adequate);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::MountInput;
use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::materials::SteelSection;
use crate::reference::ReferenceData;
use crate::units::{KiloNewtons, Megapascals, Newtons, SqCm};

/// Section reported when selection cannot run at all
pub const DEFAULT_SECTION_ID: &str = "SHS100x100x3.5";

/// Outcome of the column sizing step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSelection {
    /// Chosen section
    pub section: SteelSection,

    /// Number of columns sharing the design load
    pub total_columns: u64,

    /// Axial force per column (N)
    pub axial_force_n: f64,

    /// Allowable stress fy/γ (N/mm²)
    pub allowable_stress_mpa: f64,

    /// Minimum area to keep σ ≤ fy/γ (cm²)
    pub required_area_cm2: f64,

    /// False when no section was large enough and the largest was returned
    pub adequate: bool,
}

impl SectionSelection {
    /// Required area over provided area; above 1.0 the column is overstressed
    pub fn utilization(&self) -> f64 {
        self.required_area_cm2 / self.section.area_cm2
    }
}

/// Minimum steel area (cm²) for one column carrying its share of the design load.
///
/// Returns `(axial_force_n, required_area_cm2)`.
pub fn required_area_cm2(
    design_load_kn: f64,
    total_columns: u64,
    data: &ReferenceData,
) -> CalcResult<(f64, f64)> {
    if !design_load_kn.is_finite() || design_load_kn < 0.0 {
        return Err(CalcError::invalid_input(
            "design_load_kn",
            design_load_kn.to_string(),
            "Design load must be a finite, non-negative force",
        ));
    }
    if total_columns == 0 {
        return Err(CalcError::invalid_input(
            "total_columns",
            "0",
            "At least one column is required",
        ));
    }

    let axial: Newtons = KiloNewtons(design_load_kn / total_columns as f64).into();
    let allowable = Megapascals(data.allowable_stress_mpa());
    let required: SqCm = (axial / allowable).into();

    let required_cm2 = ensure_finite("column_required_area", required.value())?;
    Ok((axial.value(), required_cm2))
}

/// Select the smallest catalog section that carries the design load (kN).
///
/// Scans the catalog in ascending area order and stops at the first section
/// whose area is at least the required area. When none qualifies, the
/// largest section is returned with `adequate = false`.
pub fn select_column_section(
    design_load_kn: f64,
    input: &MountInput,
    data: &ReferenceData,
) -> CalcResult<SectionSelection> {
    let total_columns = input.total_columns()?;
    let (axial_force_n, required_area_cm2) = required_area_cm2(design_load_kn, total_columns, data)?;

    let (section, adequate) = match data.sections.first_fit(required_area_cm2) {
        Some(section) => (section, true),
        None => {
            let largest = data.sections.largest().ok_or_else(|| {
                CalcError::calculation_failed("column_selection", "section catalog is empty")
            })?;
            warn!(
                required_area_cm2,
                largest = %largest.id,
                "no catalog section is large enough, using the largest"
            );
            (largest, false)
        }
    };

    debug!(
        total_columns,
        axial_force_n,
        required_area_cm2,
        section = %section.id,
        "column section selected"
    );

    Ok(SectionSelection {
        section: section.clone(),
        total_columns,
        axial_force_n,
        allowable_stress_mpa: data.allowable_stress_mpa(),
        required_area_cm2,
        adequate,
    })
}
