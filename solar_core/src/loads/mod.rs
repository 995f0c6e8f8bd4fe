//! Array loads and load combinations per GB 50009-2012
//!
//! # Overview
//!
//! - [`LoadType`] - Load categories acting on the frame (D, W, S)
//! - [`LoadCase`] - Unfactored load values for one array
//! - [`LoadCombination`] - Factors for the fundamental combinations
//! - [`calculator`] - Wind, snow and dead load for a [`MountInput`](crate::calculations::MountInput)
//! - [`coefficients`] - μz and μr banding
//!
//! # Example
//!
//! ```
//! use solar_core::calculations::MountInput;
//! use solar_core::loads::{calculator, combine};
//! use solar_core::reference::ReferenceData;
//!
//! let input = MountInput::default();
//! let data = ReferenceData::builtin();
//!
//! let wind = calculator::wind_load(&input, data).unwrap();
//! let snow = calculator::snow_load(&input, data).unwrap();
//! let dead = calculator::dead_load(&input).unwrap();
//!
//! let combined = combine(dead, wind, snow);
//! assert!(combined.design_load_kn >= combined.combo1_kn);
//! ```

pub mod calculator;
pub mod coefficients;
pub mod combinations;
pub mod load_types;

pub use load_types::LoadType;
pub use combinations::{
    combine,
    find_governing_combination,
    gb50009_combinations,
    CombinedLoads,
    LoadCombination,
};

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::errors::{CalcError, CalcResult};

/// A collection of unfactored load values by type (kN)
///
/// # Example
/// ```
/// use solar_core::loads::{LoadCase, LoadType};
///
/// let case = LoadCase::new("Row A")
///     .with_load(LoadType::Dead, 20.0)
///     .with_load(LoadType::Wind, 35.0);
///
/// assert_eq!(case.get(LoadType::Dead), 20.0);
/// assert_eq!(case.get(LoadType::Snow), 0.0);  // Not specified, defaults to 0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    /// Label for this load case
    pub label: String,

    /// Load values keyed by type (kN)
    pub loads: HashMap<LoadType, f64>,
}

impl LoadCase {
    /// Create a new empty load case with a label
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: HashMap::new(),
        }
    }

    /// Add or update a load value (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, value: f64) -> Self {
        self.loads.insert(load_type, value);
        self
    }

    /// Get the load value for a type, defaulting to 0.0 if not set
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Validate the load case
    ///
    /// All loads are magnitudes here, so every value must be finite and non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        for load_type in LoadType::ALL {
            let value = self.get(load_type);
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("load_{}", load_type.code()),
                    value.to_string(),
                    format!("{} must be a non-negative magnitude", load_type.description()),
                ));
            }
        }
        Ok(())
    }
}
