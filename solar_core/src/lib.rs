//! # solar_core - PV Mounting Frame Calculation Engine
//!
//! `solar_core` estimates the loads on a ground or roof mounted photovoltaic
//! array, selects a steel column section, and estimates the steel quantity.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and reference data and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not silent zeros
//! - **Swappable Data**: City pressures, roof coefficients and the section
//!   catalog live in [`ReferenceData`], not in the formulas
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_core::{calculate, MountInput, ReferenceData};
//!
//! let input = MountInput {
//!     location: "Beijing".to_string(),
//!     ..MountInput::default()
//! };
//! let result = calculate(&input, ReferenceData::builtin()).unwrap();
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("design_load_kn"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Mount pipeline, column selection and steel take-off
//! - [`loads`] - Wind, snow and dead loads plus GB 50009 combinations
//! - [`reference`] - City pressures, roof coefficients, section catalog
//! - [`materials`] - Steel grade and section definitions
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod reference;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_lenient, MountInput, MountResult};
pub use errors::{CalcError, CalcResult};
pub use reference::{ReferenceData, RoofType};
