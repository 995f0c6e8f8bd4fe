//! # Materials
//!
//! Structural steel grade properties and the cold-formed section catalog.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::materials::SteelGrade;
//!
//! let q235 = SteelGrade::q235b();
//! // 235 MPa / 1.5 = 156.67 N/mm²
//! assert!((q235.allowable_stress_mpa(1.5) - 156.667).abs() < 1e-3);
//! ```

pub mod steel;

pub use steel::{builtin_pv_sections, SectionCatalog, SectionProfile, SteelSection};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Structural steel grade (GB/T 700 designation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelGrade {
    /// Grade designation (e.g., "Q235B")
    pub name: String,

    /// Yield strength fy (MPa)
    pub yield_strength_mpa: f64,

    /// Density (kg/m³)
    pub density_kg_m3: f64,
}

impl SteelGrade {
    /// Q235B carbon structural steel: fy = 235 MPa, ρ = 7850 kg/m³
    pub fn q235b() -> Self {
        SteelGrade {
            name: "Q235B".to_string(),
            yield_strength_mpa: 235.0,
            density_kg_m3: 7850.0,
        }
    }

    /// Allowable axial stress fy / γ (MPa = N/mm²)
    pub fn allowable_stress_mpa(&self, safety_factor: f64) -> f64 {
        self.yield_strength_mpa / safety_factor
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !(self.yield_strength_mpa.is_finite() && self.yield_strength_mpa > 0.0) {
            return Err(CalcError::invalid_reference(
                "steel",
                format!("yield strength must be positive, got {}", self.yield_strength_mpa),
            ));
        }
        if !(self.density_kg_m3.is_finite() && self.density_kg_m3 > 0.0) {
            return Err(CalcError::invalid_reference(
                "steel",
                format!("density must be positive, got {}", self.density_kg_m3),
            ));
        }
        Ok(())
    }
}

impl Default for SteelGrade {
    fn default() -> Self {
        SteelGrade::q235b()
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (fy={} MPa)", self.name, self.yield_strength_mpa)
    }
}
