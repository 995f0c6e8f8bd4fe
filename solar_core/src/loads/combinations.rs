//! GB 50009-2012 Load Combinations
//!
//! Fundamental combinations for the ultimate limit state, simplified to the
//! three cases that govern an open PV frame:
//!
//! | Name | Equation |
//! |------|----------|
//! | GB-1 | 1.2D + 1.4W |
//! | GB-2 | 1.2D + 1.4S |
//! | GB-3 | 1.2D + 0.9×1.4(W + S) |
//!
//! Wind enters as a positive magnitude; pressure and suction are not
//! distinguished.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use super::load_types::LoadType;
use super::LoadCase;

/// Partial factor on permanent load
pub const DEAD_FACTOR: f64 = 1.2;

/// Partial factor on a variable load
pub const VARIABLE_FACTOR: f64 = 1.4;

/// Combination factor ψc when wind and snow act together
pub const COMBINATION_FACTOR: f64 = 0.9;

/// A load combination with factors for each load type
///
/// # Example
/// ```
/// use solar_core::loads::{LoadCombination, LoadCase, LoadType};
///
/// let combo = LoadCombination::new("GB-1", "1.2D + 1.4W")
///     .with_factor(LoadType::Dead, 1.2)
///     .with_factor(LoadType::Wind, 1.4);
///
/// let case = LoadCase::new("Array")
///     .with_load(LoadType::Dead, 10.0)
///     .with_load(LoadType::Wind, 5.0);
///
/// assert!((combo.apply(&case) - 19.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "GB-1")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.2D + 1.4W")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: HashMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a LoadCase, returning the total factored load
    ///
    /// Load types missing from either side contribute nothing.
    pub fn apply(&self, case: &LoadCase) -> f64 {
        // Fixed order keeps the floating-point sum reproducible
        LoadType::ALL
            .iter()
            .map(|lt| self.get_factor(*lt) * case.get(*lt))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }
}

/// The three fundamental combinations, in GB-1, GB-2, GB-3 order
///
/// # Example
/// ```
/// use solar_core::loads::{gb50009_combinations, LoadType};
///
/// let combos = gb50009_combinations();
/// assert_eq!(combos.len(), 3);
/// assert_eq!(combos[0].get_factor(LoadType::Wind), 1.4);
/// ```
pub fn gb50009_combinations() -> Vec<LoadCombination> {
    let concurrent = COMBINATION_FACTOR * VARIABLE_FACTOR;
    vec![
        // 1. Wind governs
        LoadCombination::new("GB-1", "1.2D + 1.4W")
            .with_factor(LoadType::Dead, DEAD_FACTOR)
            .with_factor(LoadType::Wind, VARIABLE_FACTOR),

        // 2. Snow governs
        LoadCombination::new("GB-2", "1.2D + 1.4S")
            .with_factor(LoadType::Dead, DEAD_FACTOR)
            .with_factor(LoadType::Snow, VARIABLE_FACTOR),

        // 3. Wind and snow together, reduced by ψc
        LoadCombination::new("GB-3", "1.2D + 0.9×1.4(W + S)")
            .with_factor(LoadType::Dead, DEAD_FACTOR)
            .with_factor(LoadType::Wind, concurrent)
            .with_factor(LoadType::Snow, concurrent),
    ]
}

/// Find the governing (maximum) load combination result
///
/// Returns the maximum factored load and the governing combination name.
/// On a tie the earlier combination wins.
pub fn find_governing_combination(
    case: &LoadCase,
    combinations: &[LoadCombination],
) -> (f64, String) {
    let mut best: Option<(f64, &str)> = None;
    for combo in combinations {
        let load = combo.apply(case);
        if best.map_or(true, |(max, _)| load > max) {
            best = Some((load, combo.name.as_str()));
        }
    }
    best.map(|(load, name)| (load, name.to_string()))
        .unwrap_or((0.0, String::new()))
}

/// Results of the three fundamental combinations (kN)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedLoads {
    /// GB-1: 1.2D + 1.4W
    pub combo1_kn: f64,
    /// GB-2: 1.2D + 1.4S
    pub combo2_kn: f64,
    /// GB-3: 1.2D + 0.9×1.4(W + S)
    pub combo3_kn: f64,
    /// Maximum of the three
    pub design_load_kn: f64,
    /// Name of the governing combination
    pub governing: String,
}

impl CombinedLoads {
    /// All zeros, used when the combination step could not run
    pub fn zero() -> Self {
        CombinedLoads {
            combo1_kn: 0.0,
            combo2_kn: 0.0,
            combo3_kn: 0.0,
            design_load_kn: 0.0,
            governing: String::new(),
        }
    }
}

/// Combine dead, wind and snow loads (kN) into the design load
///
/// # Example
/// ```
/// use solar_core::loads::combine;
///
/// let combined = combine(50.96, 68.0, 82.45);
/// assert_eq!(combined.governing, "GB-3");
/// assert!((combined.design_load_kn - 250.719).abs() < 0.01);
/// ```
pub fn combine(dead_kn: f64, wind_kn: f64, snow_kn: f64) -> CombinedLoads {
    let case = LoadCase::new("Array")
        .with_load(LoadType::Dead, dead_kn)
        .with_load(LoadType::Wind, wind_kn)
        .with_load(LoadType::Snow, snow_kn);

    let combos = gb50009_combinations();
    let results: Vec<f64> = combos.iter().map(|c| c.apply(&case)).collect();
    let (design_load_kn, governing) = find_governing_combination(&case, &combos);

    CombinedLoads {
        combo1_kn: results[0],
        combo2_kn: results[1],
        combo3_kn: results[2],
        design_load_kn,
        governing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_count() {
        assert_eq!(gb50009_combinations().len(), 3);
    }

    #[test]
    fn test_concurrent_factor() {
        let combos = gb50009_combinations();
        let gb3 = combos.iter().find(|c| c.name == "GB-3").unwrap();
        assert!((gb3.get_factor(LoadType::Wind) - 1.26).abs() < 1e-12);
        assert!((gb3.get_factor(LoadType::Snow) - 1.26).abs() < 1e-12);
        assert_eq!(gb3.get_factor(LoadType::Dead), 1.2);
    }

    #[test]
    fn test_default_scenario_combinations() {
        let combined = combine(50.96, 68.0, 82.45);
        // 1.2×50.96 + 1.4×68 = 61.152 + 95.2
        assert!((combined.combo1_kn - 156.352).abs() < 1e-9);
        // 61.152 + 1.4×82.45
        assert!((combined.combo2_kn - 176.582).abs() < 1e-9);
        // 61.152 + 1.26×150.45
        assert!((combined.combo3_kn - 250.719).abs() < 1e-9);
        assert_eq!(combined.design_load_kn, combined.combo3_kn);
        assert_eq!(combined.governing, "GB-3");
    }

    #[test]
    fn test_wind_only_governs_gb1() {
        // Without snow, GB-1 (1.4W) beats GB-3 (1.26W)
        let combined = combine(10.0, 20.0, 0.0);
        assert_eq!(combined.governing, "GB-1");
        assert!((combined.design_load_kn - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_snow_only_governs_gb2() {
        let combined = combine(10.0, 0.0, 20.0);
        assert_eq!(combined.governing, "GB-2");
    }

    #[test]
    fn test_dead_only_tie_goes_to_first() {
        let combined = combine(10.0, 0.0, 0.0);
        assert_eq!(combined.governing, "GB-1");
        assert!((combined.design_load_kn - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_design_load_monotonic() {
        let base = combine(20.0, 30.0, 40.0).design_load_kn;
        assert!(combine(21.0, 30.0, 40.0).design_load_kn >= base);
        assert!(combine(20.0, 31.0, 40.0).design_load_kn >= base);
        assert!(combine(20.0, 30.0, 41.0).design_load_kn >= base);
    }

    #[test]
    fn test_empty_combination_list() {
        let case = LoadCase::new("Empty");
        let (load, name) = find_governing_combination(&case, &[]);
        assert_eq!(load, 0.0);
        assert!(name.is_empty());
    }

    #[test]
    fn test_combination_serialization() {
        let combo = LoadCombination::new("GB-1", "1.2D + 1.4W")
            .with_factor(LoadType::Dead, 1.2);

        let json = serde_json::to_string(&combo).unwrap();
        let parsed: LoadCombination = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.name, "GB-1");
        assert_eq!(parsed.get_factor(LoadType::Dead), 1.2);
    }
}
