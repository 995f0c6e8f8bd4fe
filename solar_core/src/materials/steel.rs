//! Cold-Formed Steel Section Catalog
//!
//! Section properties for the light-gauge shapes commonly used in PV
//! mounting frames: lipped C-channels and square hollow sections (SHS).
//!
//! ## Ordering
//!
//! Column selection scans the catalog smallest-first and stops at the first
//! adequate section. [`SectionCatalog`] therefore sorts its sections by
//! ascending cross-sectional area whenever it is built or deserialized;
//! the order in which sections are supplied never matters.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::materials::steel::builtin_pv_sections;
//!
//! let catalog = builtin_pv_sections();
//! let c80 = catalog.lookup("C80x40x15x2.0").unwrap();
//! assert_eq!(c80.area_cm2, 4.24);
//!
//! // Smallest section with at least 6 cm² is the 60 mm tube, not the C100
//! let fit = catalog.first_fit(6.0).unwrap();
//! assert_eq!(fit.id, "SHS60x60x2.5");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Cross-section geometry. Dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SectionProfile {
    /// Lipped C-channel: web height x flange width x lip x thickness
    LippedChannel {
        height_mm: f64,
        width_mm: f64,
        lip_mm: f64,
        thickness_mm: f64,
    },
    /// Square hollow section: side x side x thickness
    SquareTube { side_mm: f64, thickness_mm: f64 },
}

/// A catalog steel section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelSection {
    /// Section designation (e.g., "C80x40x15x2.0", "SHS100x100x3.5")
    pub id: String,

    /// Other designations accepted on lookup (e.g., "□100x100x3.5")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Raw dimensions
    pub profile: SectionProfile,

    /// Cross-sectional area (cm²)
    pub area_cm2: f64,

    /// Moment of inertia about the strong axis (cm⁴)
    pub ix_cm4: f64,
}

impl SteelSection {
    pub fn new(id: impl Into<String>, profile: SectionProfile, area_cm2: f64, ix_cm4: f64) -> Self {
        SteelSection {
            id: id.into(),
            aliases: Vec::new(),
            profile,
            area_cm2,
            ix_cm4,
        }
    }

    /// Add a lookup alias (builder pattern)
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Whether `designation` names this section (case-insensitive)
    pub fn matches(&self, designation: &str) -> bool {
        let designation = designation.trim();
        self.id.eq_ignore_ascii_case(designation)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(designation))
    }
}

impl std::fmt::Display for SteelSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.2} cm², Ix={:.2} cm⁴)",
            self.id, self.area_cm2, self.ix_cm4
        )
    }
}

/// Steel sections held in ascending order of cross-sectional area
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<SteelSection>", into = "Vec<SteelSection>")]
pub struct SectionCatalog {
    sections: Vec<SteelSection>,
}

impl SectionCatalog {
    /// Build a catalog, sorting the sections by area.
    ///
    /// The sort is stable, so sections of equal area keep their supplied order.
    pub fn new(mut sections: Vec<SteelSection>) -> Self {
        sections.sort_by(|a, b| a.area_cm2.total_cmp(&b.area_cm2));
        SectionCatalog { sections }
    }

    /// Look up a section by designation or alias
    ///
    /// Matching is case-insensitive.
    pub fn lookup(&self, id: &str) -> CalcResult<&SteelSection> {
        self.sections
            .iter()
            .find(|s| s.matches(id))
            .ok_or_else(|| CalcError::section_not_found(id))
    }

    /// First section (smallest area first) whose area is at least `required_cm2`
    pub fn first_fit(&self, required_cm2: f64) -> Option<&SteelSection> {
        self.sections.iter().find(|s| s.area_cm2 >= required_cm2)
    }

    /// Section with the smallest area
    pub fn smallest(&self) -> Option<&SteelSection> {
        self.sections.first()
    }

    /// Section with the largest area
    pub fn largest(&self) -> Option<&SteelSection> {
        self.sections.last()
    }

    /// Sections in ascending area order
    pub fn iter(&self) -> impl Iterator<Item = &SteelSection> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Check that every section has positive, finite properties and a unique id
    pub fn validate(&self) -> CalcResult<()> {
        if self.sections.is_empty() {
            return Err(CalcError::invalid_reference("sections", "catalog is empty"));
        }
        for (i, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(CalcError::missing_field(format!("sections[{}].id", i)));
            }
            if !(section.area_cm2.is_finite() && section.area_cm2 > 0.0) {
                return Err(CalcError::invalid_reference(
                    "sections",
                    format!("section '{}' has non-positive area {}", section.id, section.area_cm2),
                ));
            }
            if !(section.ix_cm4.is_finite() && section.ix_cm4 > 0.0) {
                return Err(CalcError::invalid_reference(
                    "sections",
                    format!("section '{}' has non-positive Ix {}", section.id, section.ix_cm4),
                ));
            }
            if self.sections[..i].iter().any(|s| s.matches(&section.id)) {
                return Err(CalcError::invalid_reference(
                    "sections",
                    format!("duplicate section id '{}'", section.id),
                ));
            }
        }
        Ok(())
    }
}

impl From<Vec<SteelSection>> for SectionCatalog {
    fn from(sections: Vec<SteelSection>) -> Self {
        SectionCatalog::new(sections)
    }
}

impl From<SectionCatalog> for Vec<SteelSection> {
    fn from(catalog: SectionCatalog) -> Self {
        catalog.sections
    }
}

// ============================================================================
// Built-in Sections
// ============================================================================

/// Common cold-formed sections for ground and rooftop PV frames.
///
/// Listed here by family; the catalog reorders them by area. Tubes also
/// answer to the "□" designations used on Chinese drawings.
pub fn builtin_pv_sections() -> SectionCatalog {
    // (id, height, width, lip, thickness, A cm², Ix cm⁴)
    let channels = [
        ("C80x40x15x2.0", 80.0, 40.0, 15.0, 2.0, 4.24, 43.92),
        ("C100x50x20x2.5", 100.0, 50.0, 20.0, 2.5, 6.78, 112.12),
        ("C120x50x20x2.5", 120.0, 50.0, 20.0, 2.5, 7.18, 198.60),
        ("C140x50x20x3.0", 140.0, 50.0, 20.0, 3.0, 8.64, 322.55),
    ];

    // (id, side, thickness, A cm², Ix cm⁴)
    let tubes = [
        ("SHS60x60x2.5", 60.0, 2.5, 5.67, 34.45),
        ("SHS80x80x3.0", 80.0, 3.0, 8.76, 73.49),
        ("SHS100x100x3.5", 100.0, 3.5, 13.20, 178.08),
        ("SHS120x120x4.0", 120.0, 4.0, 18.18, 346.36),
    ];

    let mut sections = Vec::with_capacity(channels.len() + tubes.len());
    for (id, height_mm, width_mm, lip_mm, thickness_mm, area, ix) in channels {
        sections.push(SteelSection::new(
            id,
            SectionProfile::LippedChannel {
                height_mm,
                width_mm,
                lip_mm,
                thickness_mm,
            },
            area,
            ix,
        ));
    }
    for (id, side_mm, thickness_mm, area, ix) in tubes {
        let drawing_name = id.replacen("SHS", "□", 1);
        sections.push(
            SteelSection::new(
                id,
                SectionProfile::SquareTube {
                    side_mm,
                    thickness_mm,
                },
                area,
                ix,
            )
            .with_alias(drawing_name),
        );
    }

    SectionCatalog::new(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tube(id: &str, area: f64) -> SteelSection {
        SteelSection::new(
            id,
            SectionProfile::SquareTube {
                side_mm: 50.0,
                thickness_mm: 2.0,
            },
            area,
            10.0,
        )
    }

    #[test]
    fn test_builtin_catalog_sorted() {
        let catalog = builtin_pv_sections();
        assert_eq!(catalog.len(), 8);

        let areas: Vec<f64> = catalog.iter().map(|s| s.area_cm2).collect();
        assert!(areas.windows(2).all(|w| w[0] <= w[1]), "areas = {:?}", areas);

        assert_eq!(catalog.smallest().unwrap().id, "C80x40x15x2.0");
        assert_eq!(catalog.largest().unwrap().id, "SHS120x120x4.0");
    }

    #[test]
    fn test_sorting_ignores_supplied_order() {
        let catalog = SectionCatalog::new(vec![tube("B", 9.0), tube("A", 3.0), tube("C", 6.0)]);
        let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_first_fit() {
        let catalog = builtin_pv_sections();
        // Tube 5.67 sits between C80 (4.24) and C100 (6.78)
        assert_eq!(catalog.first_fit(5.0).unwrap().id, "SHS60x60x2.5");
        assert_eq!(catalog.first_fit(6.0).unwrap().id, "C100x50x20x2.5");
        // Exactly equal area qualifies
        assert_eq!(catalog.first_fit(8.64).unwrap().id, "C140x50x20x3.0");
        assert!(catalog.first_fit(18.19).is_none());
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let catalog = builtin_pv_sections();
        assert_eq!(catalog.lookup("shs100x100x3.5").unwrap().area_cm2, 13.20);
        let err = catalog.lookup("W14X90").unwrap_err();
        assert_eq!(err.error_code(), "SECTION_NOT_FOUND");
    }

    #[test]
    fn test_lookup_drawing_designation() {
        let catalog = builtin_pv_sections();
        assert_eq!(catalog.lookup("□60x60x2.5").unwrap().id, "SHS60x60x2.5");
        assert_eq!(catalog.lookup(" □120x120x4.0 ").unwrap().id, "SHS120x120x4.0");
        assert!(catalog.lookup("□70x70x3.0").is_err());
    }

    #[test]
    fn test_alias_roundtrip() {
        let catalog = builtin_pv_sections();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("□100x100x3.5"));
        // Channels carry no aliases and omit the key
        assert!(!json.contains(r#""id":"C80x40x15x2.0","aliases""#));
        let parsed: SectionCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.lookup("□100x100x3.5").unwrap().area_cm2, 13.20);
    }

    #[test]
    fn test_validate() {
        assert!(builtin_pv_sections().validate().is_ok());
        assert!(SectionCatalog::default().validate().is_err());
        assert!(SectionCatalog::new(vec![tube("A", 0.0)]).validate().is_err());
        assert!(SectionCatalog::new(vec![tube("A", 1.0), tube("a", 2.0)]).validate().is_err());

        let err = SectionCatalog::new(vec![tube(" ", 1.0)]).validate().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_deserialize_sorts() {
        let json = serde_json::to_string(&vec![tube("big", 9.0), tube("small", 1.0)]).unwrap();
        let catalog: SectionCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog.smallest().unwrap().id, "small");
    }

    #[test]
    fn test_display() {
        let catalog = builtin_pv_sections();
        let text = catalog.lookup("C80x40x15x2.0").unwrap().to_string();
        assert_eq!(text, "C80x40x15x2.0 (A=4.24 cm², Ix=43.92 cm⁴)");
    }
}
