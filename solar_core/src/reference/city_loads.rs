//! Basic wind and snow pressures by city (GB 50009-2012 Appendix E, 50-year
//! return period, simplified).

use serde::{Deserialize, Serialize};
use crate::errors::{CalcError, CalcResult};

/// Name under which the fallback entry is addressed
pub const DEFAULT_LOCATION: &str = "default";

/// Site pressures for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLoadEntry {
    /// Canonical location name
    pub name: String,

    /// Alternative spellings accepted on lookup (e.g., the Chinese name)
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Basic wind pressure w0 (kN/m²)
    pub basic_wind_pressure_kn_m2: f64,

    /// Basic snow pressure s0 (kN/m²)
    pub basic_snow_pressure_kn_m2: f64,
}

impl CityLoadEntry {
    pub fn new(name: impl Into<String>, wind_kn_m2: f64, snow_kn_m2: f64) -> Self {
        CityLoadEntry {
            name: name.into(),
            aliases: Vec::new(),
            basic_wind_pressure_kn_m2: wind_kn_m2,
            basic_snow_pressure_kn_m2: snow_kn_m2,
        }
    }

    /// Add an accepted alias (builder pattern)
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Whether `query` names this entry (case-insensitive, surrounding whitespace ignored)
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.eq_ignore_ascii_case(query)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
    }

    fn validate(&self) -> CalcResult<()> {
        if self.name.trim().is_empty() {
            return Err(CalcError::missing_field("cities.name"));
        }
        for (what, value) in [
            ("basic wind pressure", self.basic_wind_pressure_kn_m2),
            ("basic snow pressure", self.basic_snow_pressure_kn_m2),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CalcError::invalid_reference(
                    "cities",
                    format!("{} for '{}' must be non-negative, got {}", what, self.name, value),
                ));
            }
        }
        Ok(())
    }
}

/// Outcome of resolving a location name against the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLocation<'a> {
    pub entry: &'a CityLoadEntry,
    /// True when the name was not found and the default entry was substituted
    pub fell_back: bool,
}

/// City pressure table.
///
/// The default entry is a separate field, so every table has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLoadTable {
    /// Entry used for unknown or unspecified locations
    pub default: CityLoadEntry,

    /// Named locations
    #[serde(default)]
    pub entries: Vec<CityLoadEntry>,
}

impl CityLoadTable {
    pub fn new(default: CityLoadEntry, entries: Vec<CityLoadEntry>) -> Self {
        CityLoadTable { default, entries }
    }

    /// Find a named entry without falling back
    pub fn find(&self, name: &str) -> Option<&CityLoadEntry> {
        self.entries.iter().find(|e| e.matches(name))
    }

    /// Resolve a location, falling back to the default entry.
    ///
    /// An empty name or the default entry's own name resolves to the default
    /// without counting as a fallback.
    pub fn resolve(&self, name: &str) -> ResolvedLocation<'_> {
        if name.trim().is_empty() || self.default.matches(name) {
            return ResolvedLocation {
                entry: &self.default,
                fell_back: false,
            };
        }
        match self.find(name) {
            Some(entry) => ResolvedLocation {
                entry,
                fell_back: false,
            },
            None => ResolvedLocation {
                entry: &self.default,
                fell_back: true,
            },
        }
    }

    /// Names of all named entries (default excluded)
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.default.validate()?;
        for entry in &self.entries {
            entry.validate()?;
        }
        Ok(())
    }
}

/// Simplified GB 50009-2012 table for major cities
pub fn builtin_city_loads() -> CityLoadTable {
    CityLoadTable::new(
        CityLoadEntry::new(DEFAULT_LOCATION, 0.40, 0.35).with_alias("默认"),
        vec![
            CityLoadEntry::new("Beijing", 0.45, 0.40).with_alias("北京"),
            CityLoadEntry::new("Shanghai", 0.55, 0.20).with_alias("上海"),
            CityLoadEntry::new("Guangzhou", 0.50, 0.00).with_alias("广州"),
            CityLoadEntry::new("Harbin", 0.55, 0.45).with_alias("哈尔滨"),
            CityLoadEntry::new("Urumqi", 0.60, 0.80).with_alias("乌鲁木齐"),
            CityLoadEntry::new("Lhasa", 0.30, 0.15).with_alias("拉萨"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_city() {
        let table = builtin_city_loads();
        let resolved = table.resolve("Beijing");
        assert!(!resolved.fell_back);
        assert_eq!(resolved.entry.basic_wind_pressure_kn_m2, 0.45);
        assert_eq!(resolved.entry.basic_snow_pressure_kn_m2, 0.40);
    }

    #[test]
    fn test_resolve_alias_and_case() {
        let table = builtin_city_loads();
        assert_eq!(table.resolve("乌鲁木齐").entry.name, "Urumqi");
        assert_eq!(table.resolve("  harbin ").entry.name, "Harbin");
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let table = builtin_city_loads();
        let resolved = table.resolve("Atlantis");
        assert!(resolved.fell_back);
        assert_eq!(resolved.entry.name, DEFAULT_LOCATION);
        assert_eq!(resolved.entry.basic_wind_pressure_kn_m2, 0.40);
        assert_eq!(resolved.entry.basic_snow_pressure_kn_m2, 0.35);
    }

    #[test]
    fn test_resolve_default_is_not_fallback() {
        let table = builtin_city_loads();
        assert!(!table.resolve("").fell_back);
        assert!(!table.resolve("default").fell_back);
        assert!(!table.resolve("默认").fell_back);
    }

    #[test]
    fn test_guangzhou_has_no_snow() {
        let table = builtin_city_loads();
        assert_eq!(table.resolve("广州").entry.basic_snow_pressure_kn_m2, 0.0);
    }

    #[test]
    fn test_validate() {
        let mut table = builtin_city_loads();
        assert!(table.validate().is_ok());
        assert_eq!(table.names().len(), 6);

        table.entries.push(CityLoadEntry::new("Nowhere", -0.1, 0.2));
        let err = table.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_REFERENCE_DATA");
    }

    #[test]
    fn test_unnamed_entry_rejected() {
        let mut table = builtin_city_loads();
        table.entries.push(CityLoadEntry::new("  ", 0.3, 0.2));
        let err = table.validate().unwrap_err();
        assert_eq!(err, CalcError::missing_field("cities.name"));
    }
}
