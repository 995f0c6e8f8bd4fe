//! # Reference Data
//!
//! Code-tabulated inputs for the calculations: city wind/snow pressures,
//! roof shape coefficients, the steel grade, the design safety factor and the
//! section catalog.
//!
//! A [`ReferenceData`] value is immutable and is passed explicitly to every
//! calculation, so an alternate regional dataset can be loaded (it is
//! serde-serializable) and used side by side with the built-in one.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::reference::{ReferenceData, RoofType};
//!
//! let data = ReferenceData::builtin();
//! assert_eq!(data.roof_coefficients.shape_coefficient(RoofType::SingleSlope), 1.3);
//! assert_eq!(data.cities.resolve("Shanghai").entry.basic_wind_pressure_kn_m2, 0.55);
//! assert_eq!(data.sections.smallest().unwrap().id, "C80x40x15x2.0");
//! ```

pub mod city_loads;
pub mod roof;

pub use city_loads::{builtin_city_loads, CityLoadEntry, CityLoadTable, ResolvedLocation, DEFAULT_LOCATION};
pub use roof::{RoofCoefficients, RoofType};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{builtin_pv_sections, SectionCatalog, SteelGrade};

/// Safety factor γ applied to the yield strength for the axial check
pub const DEFAULT_SAFETY_FACTOR: f64 = 1.5;

static BUILTIN: Lazy<ReferenceData> = Lazy::new(ReferenceData::gb50009_simplified);

/// Complete dataset consumed by the calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Dataset label (e.g., "GB 50009-2012 simplified")
    pub name: String,

    /// Basic wind/snow pressures by location
    pub cities: CityLoadTable,

    /// Wind shape coefficients by roof type
    #[serde(default)]
    pub roof_coefficients: RoofCoefficients,

    /// Steel grade used for columns, beams and connections
    #[serde(default)]
    pub steel: SteelGrade,

    /// Safety factor γ on yield strength
    #[serde(default = "default_safety_factor")]
    pub safety_factor: f64,

    /// Section catalog, ascending by area
    pub sections: SectionCatalog,
}

fn default_safety_factor() -> f64 {
    DEFAULT_SAFETY_FACTOR
}

impl ReferenceData {
    /// Shared built-in dataset, initialised on first use
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    /// Build the simplified GB 50009-2012 / Q235B dataset
    pub fn gb50009_simplified() -> Self {
        ReferenceData {
            name: "GB 50009-2012 simplified".to_string(),
            cities: builtin_city_loads(),
            roof_coefficients: RoofCoefficients::default(),
            steel: SteelGrade::q235b(),
            safety_factor: DEFAULT_SAFETY_FACTOR,
            sections: builtin_pv_sections(),
        }
    }

    /// Allowable axial stress for the configured grade (N/mm²)
    pub fn allowable_stress_mpa(&self) -> f64 {
        self.steel.allowable_stress_mpa(self.safety_factor)
    }

    /// Check every table. Call after loading a dataset from outside the crate.
    pub fn validate(&self) -> CalcResult<()> {
        self.cities.validate()?;
        self.roof_coefficients.validate()?;
        self.steel.validate()?;
        if !(self.safety_factor.is_finite() && self.safety_factor > 0.0) {
            return Err(CalcError::invalid_reference(
                "safety_factor",
                format!("must be positive, got {}", self.safety_factor),
            ));
        }
        self.sections.validate()
    }

    /// Parse a dataset from JSON and validate it
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let data: ReferenceData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        ReferenceData::gb50009_simplified()
    }
}
