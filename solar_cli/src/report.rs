//! Plain-text and JSON renderings of a calculation.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use solar_core::{MountInput, MountResult};

const RULE: &str = "==================================================";
const THIN_RULE: &str = "--------------------------------------------------";

/// JSON document written by `--json`
#[derive(Debug, Serialize)]
pub struct ReportEnvelope<'a> {
    pub generated_at: DateTime<Utc>,
    pub tool: &'static str,
    pub version: &'static str,
    pub reference_data: &'a str,
    pub input: &'a MountInput,
    pub result: &'a MountResult,
}

impl<'a> ReportEnvelope<'a> {
    pub fn new(input: &'a MountInput, result: &'a MountResult, reference_data: &'a str) -> Self {
        ReportEnvelope {
            generated_at: Utc::now(),
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            reference_data,
            input,
            result,
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

/// Human-readable report of one run
pub fn format_report(input: &MountInput, result: &MountResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, input, result);
    out
}

fn write_report(out: &mut String, input: &MountInput, result: &MountResult) -> std::fmt::Result {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  PV MOUNTING FRAME RESULTS")?;
    writeln!(out, "{}", RULE)?;

    if result.location_fell_back {
        writeln!(
            out,
            "Location:        {} (no data, using '{}' pressures)",
            input.location, result.location
        )?;
    } else {
        writeln!(out, "Location:        {}", result.location)?;
    }
    writeln!(out, "Roof type:       {}", input.roof_type)?;
    writeln!(out, "Panel tilt:      {}°", input.tilt_angle_deg)?;
    writeln!(out, "Mounting height: {} m", input.mounting_height_m)?;
    writeln!(
        out,
        "Array:           {} rows x {} panels/row",
        input.num_rows, input.pv_per_row
    )?;
    writeln!(out, "Total PV area:   {:.2} m²", result.total_panel_area_m2)?;

    writeln!(out, "{}", THIN_RULE)?;
    writeln!(out, "Loads:")?;
    writeln!(out, "  Dead load (D):  {:.2} kN", result.dead_load_kn)?;
    writeln!(out, "  Wind load (W):  {:.2} kN", result.wind_load_kn)?;
    writeln!(out, "  Snow load (S):  {:.2} kN", result.snow_load_kn)?;
    writeln!(out, "  GB-1 (1.2D + 1.4W):           {:.2} kN", result.combo1_kn)?;
    writeln!(out, "  GB-2 (1.2D + 1.4S):           {:.2} kN", result.combo2_kn)?;
    writeln!(out, "  GB-3 (1.2D + 0.9×1.4(W + S)): {:.2} kN", result.combo3_kn)?;
    if result.governing_combination.is_empty() {
        writeln!(out, "  Design load (max):  {:.2} kN", result.design_load_kn)?;
    } else {
        writeln!(
            out,
            "  Design load (max):  {:.2} kN (governs: {})",
            result.design_load_kn, result.governing_combination
        )?;
    }

    writeln!(out, "{}", THIN_RULE)?;
    writeln!(out, "Column selection:")?;
    writeln!(
        out,
        "  Section:        {} {}",
        result.selected_section,
        status_icon(result.section_adequate)
    )?;
    writeln!(
        out,
        "  Area:           {:.2} cm² (required {:.2} cm²)",
        result.section_area_cm2, result.required_area_cm2
    )?;
    writeln!(out, "  Utilization:    {:.2}", result.section_utilization)?;
    writeln!(out, "  Columns:        {}", result.total_columns)?;
    writeln!(out, "Estimated steel:  {:.2} kg", result.total_steel_kg)?;
    writeln!(out, "  - Columns:      {:.2} kg", result.column_weight_kg)?;
    writeln!(out, "  - Main beams:   {:.2} kg", result.beam_weight_kg)?;
    writeln!(out, "  - Connections:  {:.2} kg", result.connection_weight_kg)?;

    if !result.faults.is_empty() {
        writeln!(out, "{}", THIN_RULE)?;
        writeln!(out, "Steps that failed (default values shown):")?;
        for fault in &result.faults {
            writeln!(out, "  - {}: {}", fault.component, fault.error)?;
        }
    }

    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "Note: preliminary estimate only; a detailed structural design is required."
    )?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}
