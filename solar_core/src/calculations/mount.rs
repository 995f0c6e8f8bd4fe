//! # PV Mounting Frame Calculation
//!
//! Runs the full pipeline for one array: loads, combinations, column
//! section, steel take-off.
//!
//! Two entry points are provided:
//!
//! - [`calculate`] stops at the first failing step and returns its error.
//! - [`calculate_lenient`] always produces a [`MountResult`]. A failing step
//!   contributes zero (or the default section) and is recorded in
//!   [`MountResult::faults`], so a computed zero and a failed step stay
//!   distinguishable.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::calculations::{calculate, MountInput};
//! use solar_core::reference::{ReferenceData, RoofType};
//!
//! let input = MountInput {
//!     location: "Harbin".to_string(),
//!     roof_type: RoofType::DoubleSlope,
//!     tilt_angle_deg: 35.0,
//!     ..MountInput::default()
//! };
//!
//! let result = calculate(&input, ReferenceData::builtin()).unwrap();
//! println!("Design load: {:.2} kN", result.design_load_kn);
//! println!("Column: {}", result.selected_section);
//! assert!(result.faults.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::column::{select_column_section, SectionSelection, DEFAULT_SECTION_ID};
use super::takeoff::{estimate_steel, estimate_steel_by_id, SteelTakeoff};
use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::loads::{calculator, combine, CombinedLoads, LoadCase, LoadType};
use crate::reference::{ReferenceData, RoofType, DEFAULT_LOCATION};

/// Input parameters for one PV array.
///
/// Fields missing from JSON/TOML take the values of [`MountInput::default`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "location": "Beijing",
///   "roof_type": "flat",
///   "tilt_angle_deg": 30.0,
///   "mounting_height_m": 3.0,
///   "pv_length_m": 1.7,
///   "pv_width_m": 1.0,
///   "pv_weight_kg": 20.0,
///   "pv_per_row": 10,
///   "num_rows": 20,
///   "column_spacing_m": 2.5,
///   "span_length_m": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountInput {
    /// Project location, resolved against the city table
    pub location: String,

    /// Roof the array sits on
    pub roof_type: RoofType,

    /// Panel tilt from horizontal (degrees, 0-90)
    pub tilt_angle_deg: f64,

    /// Mounting height above ground (m)
    pub mounting_height_m: f64,

    /// Panel length (m)
    pub pv_length_m: f64,

    /// Panel width (m)
    pub pv_width_m: f64,

    /// Mass of one panel (kg)
    pub pv_weight_kg: f64,

    /// Panels per row
    pub pv_per_row: u32,

    /// Number of rows
    pub num_rows: u32,

    /// Column spacing along a row (m)
    pub column_spacing_m: f64,

    /// Main beam span carried by one row of columns (m)
    pub span_length_m: f64,
}

impl Default for MountInput {
    fn default() -> Self {
        MountInput {
            location: DEFAULT_LOCATION.to_string(),
            roof_type: RoofType::Flat,
            tilt_angle_deg: 30.0,
            mounting_height_m: 3.0,
            pv_length_m: 1.7,
            pv_width_m: 1.0,
            pv_weight_kg: 20.0,
            pv_per_row: 10,
            num_rows: 20,
            column_spacing_m: 2.5,
            span_length_m: 10.0,
        }
    }
}

fn check_positive(field: &str, value: f64, what: &str) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be positive", what),
        ));
    }
    Ok(())
}

fn check_count(field: &str, value: u32, what: &str) -> CalcResult<()> {
    if value == 0 {
        return Err(CalcError::invalid_input(
            field,
            "0",
            format!("{} must be at least 1", what),
        ));
    }
    Ok(())
}

impl MountInput {
    /// Validate every field.
    pub fn validate(&self) -> CalcResult<()> {
        self.validate_tilt()?;
        self.validate_height()?;
        self.validate_panel_geometry()?;
        self.validate_panel_weight()?;
        self.validate_layout()
    }

    /// Tilt must lie within 0-90 degrees
    pub fn validate_tilt(&self) -> CalcResult<()> {
        if !self.tilt_angle_deg.is_finite() || !(0.0..=90.0).contains(&self.tilt_angle_deg) {
            return Err(CalcError::invalid_input(
                "tilt_angle_deg",
                self.tilt_angle_deg.to_string(),
                "Tilt must be within 0-90 degrees",
            ));
        }
        Ok(())
    }

    pub fn validate_height(&self) -> CalcResult<()> {
        check_positive("mounting_height_m", self.mounting_height_m, "Mounting height")
    }

    /// Panel dimensions and panel counts
    pub fn validate_panel_geometry(&self) -> CalcResult<()> {
        check_positive("pv_length_m", self.pv_length_m, "Panel length")?;
        check_positive("pv_width_m", self.pv_width_m, "Panel width")?;
        self.validate_counts()
    }

    pub fn validate_panel_weight(&self) -> CalcResult<()> {
        if !self.pv_weight_kg.is_finite() || self.pv_weight_kg < 0.0 {
            return Err(CalcError::invalid_input(
                "pv_weight_kg",
                self.pv_weight_kg.to_string(),
                "Panel weight cannot be negative",
            ));
        }
        Ok(())
    }

    pub fn validate_counts(&self) -> CalcResult<()> {
        check_count("pv_per_row", self.pv_per_row, "Panels per row")?;
        check_count("num_rows", self.num_rows, "Number of rows")
    }

    /// Column spacing, span and row count
    pub fn validate_layout(&self) -> CalcResult<()> {
        check_positive("column_spacing_m", self.column_spacing_m, "Column spacing")?;
        check_positive("span_length_m", self.span_length_m, "Span length")?;
        self.validate_counts()
    }

    /// Total number of panels
    pub fn panel_count(&self) -> f64 {
        self.pv_per_row as f64 * self.num_rows as f64
    }

    /// Area of one panel (m²)
    pub fn panel_area_m2(&self) -> f64 {
        self.pv_length_m * self.pv_width_m
    }

    /// Area of all panels (m²)
    pub fn total_panel_area_m2(&self) -> f64 {
        self.panel_area_m2() * self.panel_count()
    }

    /// Columns in one row, `ceil(span / spacing)`
    pub fn columns_per_row(&self) -> CalcResult<u64> {
        self.validate_layout()?;
        let per_row = (self.span_length_m / self.column_spacing_m).ceil();
        ensure_finite("columns_per_row", per_row)?;
        // u64::MAX rounds up to 2^64 as f64, so this also rejects 2^64 itself
        if per_row >= u64::MAX as f64 {
            return Err(CalcError::calculation_failed(
                "columns_per_row",
                format!("{} columns per row is not a countable number", per_row),
            ));
        }
        Ok(per_row as u64)
    }

    /// Columns in the whole array, never less than one
    pub fn total_columns(&self) -> CalcResult<u64> {
        let per_row = self.columns_per_row()?;
        let total = per_row.checked_mul(u64::from(self.num_rows)).ok_or_else(|| {
            CalcError::calculation_failed(
                "total_columns",
                format!("{} columns x {} rows overflows the column count", per_row, self.num_rows),
            )
        })?;
        Ok(total.max(1))
    }
}

/// Calculation step that can fail independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    WindLoad,
    SnowLoad,
    DeadLoad,
    LoadCombination,
    SectionSelection,
    SteelTakeoff,
}

impl Component {
    pub fn display_name(&self) -> &'static str {
        match self {
            Component::WindLoad => "wind load",
            Component::SnowLoad => "snow load",
            Component::DeadLoad => "dead load",
            Component::LoadCombination => "load combination",
            Component::SectionSelection => "column section selection",
            Component::SteelTakeoff => "steel take-off",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A step that failed and was replaced by a default value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentFault {
    pub component: Component,
    pub error: CalcError,
}

/// Results for one PV array.
///
/// ## JSON Example
///
/// ```json
/// {
///   "location": "default",
///   "location_fell_back": false,
///   "wind_load_kn": 68.0,
///   "snow_load_kn": 82.45,
///   "dead_load_kn": 50.96,
///   "combo1_kn": 156.35,
///   "combo2_kn": 176.58,
///   "combo3_kn": 250.72,
///   "design_load_kn": 250.72,
///   "governing_combination": "GB-3",
///   "selected_section": "C80x40x15x2.0",
///   "section_area_cm2": 4.24,
///   "required_area_cm2": 0.2,
///   "section_adequate": true,
///   "section_utilization": 0.047,
///   "total_columns": 80,
///   "total_panel_area_m2": 340.0,
///   "column_weight_kg": 958.58,
///   "beam_weight_kg": 575.15,
///   "connection_weight_kg": 230.06,
///   "total_steel_kg": 1763.79,
///   "faults": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountResult {
    /// Name of the city entry the pressures came from
    pub location: String,
    /// True when the requested location was unknown and the default was used
    pub location_fell_back: bool,

    /// Characteristic wind load (kN)
    pub wind_load_kn: f64,
    /// Characteristic snow load (kN)
    pub snow_load_kn: f64,
    /// Dead load (kN)
    pub dead_load_kn: f64,

    /// 1.2D + 1.4W (kN)
    pub combo1_kn: f64,
    /// 1.2D + 1.4S (kN)
    pub combo2_kn: f64,
    /// 1.2D + 0.9×1.4(W + S) (kN)
    pub combo3_kn: f64,
    /// Governing combination value (kN)
    pub design_load_kn: f64,
    /// Name of the governing combination
    pub governing_combination: String,

    /// Recommended column section
    pub selected_section: String,
    /// Area of the recommended section (cm²)
    pub section_area_cm2: f64,
    /// Area the axial check requires (cm²)
    pub required_area_cm2: f64,
    /// False when even the largest section is too small
    pub section_adequate: bool,
    /// Required over provided area (0 when selection failed)
    pub section_utilization: f64,
    /// Number of columns in the array
    pub total_columns: u64,
    /// Total panel area (m²)
    pub total_panel_area_m2: f64,

    pub column_weight_kg: f64,
    pub beam_weight_kg: f64,
    pub connection_weight_kg: f64,
    pub total_steel_kg: f64,

    /// Steps that failed and were replaced by defaults (lenient mode only)
    #[serde(default)]
    pub faults: Vec<ComponentFault>,
}

impl MountResult {
    /// True when every step produced its own value
    pub fn is_complete(&self) -> bool {
        self.faults.is_empty()
    }

    /// Fault recorded for a step, if any
    pub fn fault(&self, component: Component) -> Option<&ComponentFault> {
        self.faults.iter().find(|f| f.component == component)
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        input: &MountInput,
        location: String,
        location_fell_back: bool,
        loads: (f64, f64, f64),
        combined: CombinedLoads,
        selection: Option<&SectionSelection>,
        takeoff: SteelTakeoff,
        faults: Vec<ComponentFault>,
    ) -> Self {
        let (wind_load_kn, snow_load_kn, dead_load_kn) = loads;
        MountResult {
            location,
            location_fell_back,
            wind_load_kn,
            snow_load_kn,
            dead_load_kn,
            combo1_kn: combined.combo1_kn,
            combo2_kn: combined.combo2_kn,
            combo3_kn: combined.combo3_kn,
            design_load_kn: combined.design_load_kn,
            governing_combination: combined.governing,
            selected_section: takeoff.section_id.clone(),
            section_area_cm2: selection.map(|s| s.section.area_cm2).unwrap_or(0.0),
            required_area_cm2: selection.map(|s| s.required_area_cm2).unwrap_or(0.0),
            section_adequate: selection.map(|s| s.adequate).unwrap_or(false),
            section_utilization: selection.map(|s| s.utilization()).unwrap_or(0.0),
            total_columns: selection
                .map(|s| s.total_columns)
                .unwrap_or(takeoff.total_columns),
            total_panel_area_m2: input.total_panel_area_m2(),
            column_weight_kg: takeoff.column_weight_kg,
            beam_weight_kg: takeoff.beam_weight_kg,
            connection_weight_kg: takeoff.connection_weight_kg,
            total_steel_kg: takeoff.total_steel_kg,
            faults,
        }
    }
}

/// Combine the three loads after checking they are usable magnitudes
pub fn combine_loads(dead_kn: f64, wind_kn: f64, snow_kn: f64) -> CalcResult<CombinedLoads> {
    LoadCase::new("Array")
        .with_load(LoadType::Dead, dead_kn)
        .with_load(LoadType::Wind, wind_kn)
        .with_load(LoadType::Snow, snow_kn)
        .validate()?;
    let combined = combine(dead_kn, wind_kn, snow_kn);
    ensure_finite("load_combination", combined.design_load_kn)?;
    Ok(combined)
}

fn resolve_location(input: &MountInput, data: &ReferenceData) -> (String, bool) {
    let resolved = data.cities.resolve(&input.location);
    if resolved.fell_back {
        warn!(
            requested = %input.location,
            using = %resolved.entry.name,
            "no wind/snow data for location, using default entry"
        );
    }
    (resolved.entry.name.clone(), resolved.fell_back)
}

/// Run every step, returning the first error.
pub fn calculate(input: &MountInput, data: &ReferenceData) -> CalcResult<MountResult> {
    input.validate()?;
    let (location, fell_back) = resolve_location(input, data);

    let wind = calculator::wind_load(input, data)?;
    let snow = calculator::snow_load(input, data)?;
    let dead = calculator::dead_load(input)?;

    let combined = combine_loads(dead, wind, snow)?;
    let selection = select_column_section(combined.design_load_kn, input, data)?;
    let takeoff = estimate_steel(input, &selection.section, data)?;

    info!(
        design_load_kn = combined.design_load_kn,
        section = %selection.section.id,
        total_steel_kg = takeoff.total_steel_kg,
        "mount calculation complete"
    );

    Ok(MountResult::assemble(
        input,
        location,
        fell_back,
        (wind, snow, dead),
        combined,
        Some(&selection),
        takeoff,
        Vec::new(),
    ))
}

fn recover<T>(
    component: Component,
    result: CalcResult<T>,
    fallback: impl FnOnce() -> T,
    faults: &mut Vec<ComponentFault>,
) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            warn!(%component, %error, "calculation step failed, substituting default");
            faults.push(ComponentFault { component, error });
            fallback()
        }
    }
}

/// Run every step, substituting defaults for failed steps.
///
/// Substitutions: failed loads → 0 kN, failed combination → all zeros,
/// failed selection → [`DEFAULT_SECTION_ID`], failed take-off → 0 kg.
/// Each substitution is listed in [`MountResult::faults`].
pub fn calculate_lenient(input: &MountInput, data: &ReferenceData) -> MountResult {
    let mut faults = Vec::new();
    let (location, fell_back) = resolve_location(input, data);

    let wind = recover(Component::WindLoad, calculator::wind_load(input, data), || 0.0, &mut faults);
    let snow = recover(Component::SnowLoad, calculator::snow_load(input, data), || 0.0, &mut faults);
    let dead = recover(Component::DeadLoad, calculator::dead_load(input), || 0.0, &mut faults);

    let combined = recover(
        Component::LoadCombination,
        combine_loads(dead, wind, snow),
        CombinedLoads::zero,
        &mut faults,
    );

    let selection = match select_column_section(combined.design_load_kn, input, data) {
        Ok(selection) => Some(selection),
        Err(error) => {
            warn!(%error, default = DEFAULT_SECTION_ID, "column selection failed, using default section");
            faults.push(ComponentFault {
                component: Component::SectionSelection,
                error,
            });
            None
        }
    };

    let takeoff_result = match &selection {
        Some(selection) => estimate_steel(input, &selection.section, data),
        None => estimate_steel_by_id(input, DEFAULT_SECTION_ID, data),
    };
    let section_id = selection
        .as_ref()
        .map(|s| s.section.id.clone())
        .unwrap_or_else(|| DEFAULT_SECTION_ID.to_string());
    let takeoff = recover(
        Component::SteelTakeoff,
        takeoff_result,
        || SteelTakeoff::zero(section_id),
        &mut faults,
    );

    MountResult::assemble(
        input,
        location,
        fell_back,
        (wind, snow, dead),
        combined,
        selection.as_ref(),
        takeoff,
        faults,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> &'static ReferenceData {
        ReferenceData::builtin()
    }

    #[test]
    fn test_default_input_is_valid() {
        assert!(MountInput::default().validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let cases = [
            MountInput { tilt_angle_deg: -1.0, ..MountInput::default() },
            MountInput { tilt_angle_deg: 90.5, ..MountInput::default() },
            MountInput { mounting_height_m: 0.0, ..MountInput::default() },
            MountInput { pv_length_m: f64::INFINITY, ..MountInput::default() },
            MountInput { pv_width_m: -1.0, ..MountInput::default() },
            MountInput { pv_weight_kg: -0.1, ..MountInput::default() },
            MountInput { pv_per_row: 0, ..MountInput::default() },
            MountInput { column_spacing_m: 0.0, ..MountInput::default() },
            MountInput { span_length_m: f64::NAN, ..MountInput::default() },
        ];
        for input in cases {
            let err = input.validate().unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "{:?}", input);
        }
    }

    #[test]
    fn test_tilt_bounds_inclusive() {
        assert!(MountInput { tilt_angle_deg: 0.0, ..MountInput::default() }.validate().is_ok());
        assert!(MountInput { tilt_angle_deg: 90.0, ..MountInput::default() }.validate().is_ok());
    }

    #[test]
    fn test_geometry_helpers() {
        let input = MountInput::default();
        assert_eq!(input.panel_count(), 200.0);
        assert!((input.panel_area_m2() - 1.7).abs() < 1e-12);
        assert!((input.total_panel_area_m2() - 340.0).abs() < 1e-9);
        assert_eq!(input.columns_per_row().unwrap(), 4);
        assert_eq!(input.total_columns().unwrap(), 80);
    }

    #[test]
    fn test_column_count_out_of_range() {
        let huge_span = MountInput {
            span_length_m: 1e25,
            column_spacing_m: 1.0,
            num_rows: 2,
            ..MountInput::default()
        };
        let err = huge_span.total_columns().unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");

        // Fits per row, overflows once multiplied by the rows
        let many_rows = MountInput {
            span_length_m: 1e19,
            column_spacing_m: 1.0,
            num_rows: 4,
            ..MountInput::default()
        };
        assert_eq!(many_rows.columns_per_row().unwrap(), 10_000_000_000_000_000_000);
        let err = many_rows.total_columns().unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_huge_span_is_a_fault_not_a_panic() {
        let input = MountInput {
            span_length_m: 1e25,
            num_rows: 2,
            ..MountInput::default()
        };
        let err = calculate(&input, data()).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");

        let result = calculate_lenient(&input, data());
        assert_eq!(result.selected_section, DEFAULT_SECTION_ID);
        assert_eq!(result.total_steel_kg, 0.0);
        let failed: Vec<Component> = result.faults.iter().map(|f| f.component).collect();
        assert_eq!(failed, vec![Component::SectionSelection, Component::SteelTakeoff]);
    }

    #[test]
    fn test_strict_default_scenario() {
        let result = calculate(&MountInput::default(), data()).unwrap();
        assert_eq!(result.location, "default");
        assert!(!result.location_fell_back);
        assert_eq!(result.governing_combination, "GB-3");
        assert_eq!(result.selected_section, "C80x40x15x2.0");
        assert_eq!(result.section_area_cm2, 4.24);
        assert!(result.section_adequate);
        assert!(result.is_complete());
    }

    #[test]
    fn test_strict_propagates_first_error() {
        let input = MountInput {
            tilt_angle_deg: 100.0,
            ..MountInput::default()
        };
        let err = calculate(&input, data()).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "tilt_angle_deg"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_lenient_matches_strict_on_valid_input() {
        let input = MountInput {
            location: "Lhasa".to_string(),
            roof_type: RoofType::SingleSlope,
            ..MountInput::default()
        };
        let strict = calculate(&input, data()).unwrap();
        let lenient = calculate_lenient(&input, data());
        assert_eq!(strict, lenient);
    }

    #[test]
    fn test_lenient_records_load_faults() {
        let input = MountInput {
            tilt_angle_deg: 100.0,
            ..MountInput::default()
        };
        let result = calculate_lenient(&input, data());

        assert!(!result.is_complete());
        assert_eq!(result.wind_load_kn, 0.0);
        assert_eq!(result.snow_load_kn, 0.0);
        assert!(result.fault(Component::WindLoad).is_some());
        assert!(result.fault(Component::SnowLoad).is_some());
        // Dead load does not depend on tilt and is still computed
        assert!(result.fault(Component::DeadLoad).is_none());
        assert!((result.dead_load_kn - 50.96).abs() < 1e-9);
        // 1.2 × 50.96
        assert!((result.design_load_kn - 61.152).abs() < 1e-9);
        assert_eq!(result.selected_section, "C80x40x15x2.0");
    }

    #[test]
    fn test_lenient_selection_failure_uses_default_section() {
        let input = MountInput {
            column_spacing_m: 0.0,
            ..MountInput::default()
        };
        let result = calculate_lenient(&input, data());

        assert_eq!(result.selected_section, DEFAULT_SECTION_ID);
        assert!(result.fault(Component::SectionSelection).is_some());
        // Take-off needs the column count too, so it fails as well
        assert!(result.fault(Component::SteelTakeoff).is_some());
        assert_eq!(result.total_steel_kg, 0.0);
        // Loads are unaffected by column spacing
        assert!((result.wind_load_kn - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_lenient_never_panics_on_garbage() {
        let input = MountInput {
            location: String::new(),
            tilt_angle_deg: f64::NAN,
            mounting_height_m: f64::NAN,
            pv_length_m: -3.0,
            pv_width_m: 0.0,
            pv_weight_kg: f64::NAN,
            pv_per_row: 0,
            num_rows: 0,
            column_spacing_m: -1.0,
            span_length_m: 0.0,
            ..MountInput::default()
        };
        let result = calculate_lenient(&input, data());
        assert_eq!(result.design_load_kn, 0.0);
        assert_eq!(result.total_steel_kg, 0.0);
        assert_eq!(result.selected_section, DEFAULT_SECTION_ID);
        assert_eq!(result.faults.len(), 5);
    }

    #[test]
    fn test_unknown_location_flagged() {
        let input = MountInput {
            location: "Springfield".to_string(),
            ..MountInput::default()
        };
        let result = calculate(&input, data()).unwrap();
        assert!(result.location_fell_back);
        assert_eq!(result.location, "default");
        // A fallback is not a fault
        assert!(result.is_complete());
    }

    #[test]
    fn test_combine_loads_rejects_negative() {
        assert!(combine_loads(-1.0, 0.0, 0.0).is_err());
        assert!(combine_loads(1.0, f64::NAN, 0.0).is_err());
        assert!(combine_loads(0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_input_partial_json_uses_defaults() {
        let input: MountInput = serde_json::from_str(r#"{ "location": "Beijing", "num_rows": 5 }"#).unwrap();
        assert_eq!(input.location, "Beijing");
        assert_eq!(input.num_rows, 5);
        assert_eq!(input.tilt_angle_deg, 30.0);
        assert_eq!(input.roof_type, RoofType::Flat);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate_lenient(&MountInput { num_rows: 0, ..MountInput::default() }, data());
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"component\": \"wind_load\""));
        let roundtrip: MountResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.faults, result.faults);
        assert_eq!(roundtrip.selected_section, result.selected_section);
        assert!((roundtrip.design_load_kn - result.design_load_kn).abs() < 1e-9);
    }
}
