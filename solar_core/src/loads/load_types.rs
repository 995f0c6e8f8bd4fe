//! Load type definitions per GB 50009-2012
//!
//! Only the load categories that act on a PV mounting frame are modelled.

use serde::{Deserialize, Serialize};

/// Load categories per GB 50009-2012 Chapter 3
///
/// # Example
/// ```
/// use solar_core::loads::LoadType;
///
/// let dead = LoadType::Dead;
/// assert_eq!(dead.code(), "D");
/// assert_eq!(dead.description(), "Dead load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Permanent load (panels plus frame self-weight)
    Dead,
    /// W - Wind load on the panel plane
    Wind,
    /// S - Snow load on the panel plane
    Snow,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 3] = [LoadType::Dead, LoadType::Wind, LoadType::Snow];

    /// Standard abbreviation code (D, W, S)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Wind => "W",
            LoadType::Snow => "S",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Wind => "Wind load",
            LoadType::Snow => "Snow load",
        }
    }

}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_type_codes() {
        assert_eq!(LoadType::Dead.code(), "D");
        assert_eq!(LoadType::Wind.code(), "W");
        assert_eq!(LoadType::Snow.code(), "S");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadType::Snow).unwrap();
        assert_eq!(json, "\"Snow\"");
        let parsed: LoadType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LoadType::Snow);
    }
}
