//! Roof types and wind shape coefficients (GB 50009-2012 Table 8.3.1, simplified)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Roof geometry the array is mounted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofType {
    /// Mono-pitch roof
    SingleSlope,
    /// Duo-pitch (gable) roof
    DoubleSlope,
    /// Flat roof or open ground
    #[default]
    Flat,
}

impl RoofType {
    pub const ALL: [RoofType; 3] = [RoofType::SingleSlope, RoofType::DoubleSlope, RoofType::Flat];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofType::SingleSlope => "Single-slope",
            RoofType::DoubleSlope => "Double-slope",
            RoofType::Flat => "Flat",
        }
    }

    /// Name as written on Chinese drawings
    pub fn chinese_name(&self) -> &'static str {
        match self {
            RoofType::SingleSlope => "单坡",
            RoofType::DoubleSlope => "双坡",
            RoofType::Flat => "平顶",
        }
    }
}

impl std::fmt::Display for RoofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for RoofType {
    type Err = CalcError;

    /// Accepts "single-slope", "single_slope", "single", "mono", the Chinese
    /// names and the like, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "singleslope" | "single" | "mono" | "monopitch" | "单坡" => Ok(RoofType::SingleSlope),
            "doubleslope" | "double" | "gable" | "duopitch" | "双坡" => Ok(RoofType::DoubleSlope),
            "flat" | "ground" | "平顶" => Ok(RoofType::Flat),
            _ => Err(CalcError::invalid_input(
                "roof_type",
                s,
                "Expected single-slope, double-slope or flat",
            )),
        }
    }
}

/// Wind shape coefficient μs per roof type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofCoefficients {
    pub single_slope: f64,
    pub double_slope: f64,
    pub flat: f64,
}

impl RoofCoefficients {
    /// Shape coefficient μs for a roof type
    pub fn shape_coefficient(&self, roof: RoofType) -> f64 {
        match roof {
            RoofType::SingleSlope => self.single_slope,
            RoofType::DoubleSlope => self.double_slope,
            RoofType::Flat => self.flat,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        for roof in RoofType::ALL {
            let mu_s = self.shape_coefficient(roof);
            if !mu_s.is_finite() {
                return Err(CalcError::invalid_reference(
                    "roof_coefficients",
                    format!("{} coefficient is not finite", roof),
                ));
            }
        }
        Ok(())
    }
}

impl Default for RoofCoefficients {
    fn default() -> Self {
        RoofCoefficients {
            single_slope: 1.3,
            double_slope: 0.9,
            flat: 1.0,
        }
    }
}
