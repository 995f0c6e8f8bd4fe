//! # Frame Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, data) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`mount`] - Full pipeline for one PV array
//! - [`column`] - Axial sizing and catalog selection of the columns
//! - [`takeoff`] - Steel quantity estimate

pub mod column;
pub mod mount;
pub mod takeoff;

// Re-export commonly used types
pub use column::{select_column_section, SectionSelection, DEFAULT_SECTION_ID};
pub use mount::{
    calculate,
    calculate_lenient,
    combine_loads,
    Component,
    ComponentFault,
    MountInput,
    MountResult,
};
pub use takeoff::{estimate_steel, estimate_steel_by_id, SteelTakeoff};
