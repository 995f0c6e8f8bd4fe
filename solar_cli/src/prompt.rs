//! Interactive acquisition of a [`MountInput`].
//!
//! Every field is read with a bounded number of attempts; after the last
//! failed attempt the default is used. Reading and writing go through
//! generic `BufRead`/`Write` handles so the prompts can be driven from tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use solar_core::reference::{CityLoadTable, RoofType};
use solar_core::MountInput;
use thiserror::Error;
use tracing::warn;

/// Attempts allowed per field before the default is substituted
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// End of input reached while a value was expected
    #[error("input closed")]
    Closed,
}

/// Accepted range for a numeric field (inclusive)
#[derive(Debug, Clone, Copy)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

pub const TILT_RANGE: Range<f64> = Range { min: 0.0, max: 90.0 };
pub const HEIGHT_RANGE: Range<f64> = Range { min: 0.1, max: 50.0 };
pub const PANEL_LENGTH_RANGE: Range<f64> = Range { min: 0.5, max: 3.0 };
pub const PANEL_WIDTH_RANGE: Range<f64> = Range { min: 0.5, max: 2.0 };
pub const PANEL_WEIGHT_RANGE: Range<f64> = Range { min: 1.0, max: 50.0 };
pub const PANELS_PER_ROW_RANGE: Range<u32> = Range { min: 1, max: 100 };
pub const ROWS_RANGE: Range<u32> = Range { min: 1, max: 1000 };
pub const SPACING_RANGE: Range<f64> = Range { min: 0.5, max: 10.0 };
pub const SPAN_RANGE: Range<f64> = Range { min: 1.0, max: 50.0 };

pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Print a line to the prompt output
    pub fn say(&mut self, line: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer or the attempts run out.
    ///
    /// An empty answer takes the default immediately.
    fn ask<T, F>(&mut self, prompt: &str, default: T, parse: F) -> Result<T, PromptError>
    where
        T: Display + Clone,
        F: Fn(&str) -> Result<T, String>,
    {
        let full_prompt = format!("{} [default: {}]: ", prompt, default);
        for attempt in 1..=self.max_attempts {
            let answer = self.read_answer(&full_prompt)?;
            if answer.is_empty() {
                self.say(format!("Using default: {}", default))?;
                return Ok(default);
            }
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    self.say(format!("Error: {}", reason))?;
                    let remaining = self.max_attempts - attempt;
                    if remaining > 0 {
                        self.say(format!("Please try again ({} attempts left)", remaining))?;
                    } else {
                        self.say("Maximum attempts reached")?;
                    }
                }
            }
        }

        warn!(field = prompt, %default, "no valid answer, using default");
        self.say(format!("Using default: {}", default))?;
        Ok(default)
    }

    /// Ask for a number within `range`
    pub fn number<T>(&mut self, label: &str, range: Range<T>, default: T) -> Result<T, PromptError>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        let prompt = format!("{} ({}-{})", label, range.min, range.max);
        self.ask(&prompt, default, |answer| {
            let value: T = answer
                .parse()
                .map_err(|_| format!("'{}' is not a valid number", answer))?;
            if value < range.min {
                return Err(format!("value cannot be less than {}", range.min));
            }
            if value > range.max {
                return Err(format!("value cannot be greater than {}", range.max));
            }
            Ok(value)
        })
    }

    /// Ask for the roof type; English and Chinese names are accepted
    pub fn roof_type(&mut self, default: RoofType) -> Result<RoofType, PromptError> {
        self.ask(
            "Roof type (single-slope/double-slope/flat, 单坡/双坡/平顶)",
            default,
            |answer| answer.parse::<RoofType>().map_err(|e| e.to_string()),
        )
    }

    /// Ask for the project location. Unknown names are kept but warned about,
    /// since the calculation will use the default pressures.
    pub fn location(&mut self, default: &str, cities: &CityLoadTable) -> Result<String, PromptError> {
        let answer = self.read_answer(&format!(
            "Project location (e.g. {}) [default: {}]: ",
            cities.names().join(", "),
            default
        ))?;
        let location = if answer.is_empty() {
            default.to_string()
        } else {
            answer
        };

        if cities.resolve(&location).fell_back {
            self.say(format!(
                "Warning: no wind/snow data for '{}', using default pressures",
                location
            ))?;
        }
        Ok(location)
    }

    /// Yes/no question; anything but yes counts as no
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let answer = self.read_answer(&format!("{} (y/n): ", question))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes" | "是"))
    }

    /// Ask for every field of a mount input, offering `defaults`
    pub fn mount_input(
        &mut self,
        defaults: &MountInput,
        cities: &CityLoadTable,
    ) -> Result<MountInput, PromptError> {
        Ok(MountInput {
            location: self.location(&defaults.location, cities)?,
            roof_type: self.roof_type(defaults.roof_type)?,
            tilt_angle_deg: self.number("Panel tilt (deg)", TILT_RANGE, defaults.tilt_angle_deg)?,
            mounting_height_m: self.number(
                "Mounting height (m)",
                HEIGHT_RANGE,
                defaults.mounting_height_m,
            )?,
            pv_length_m: self.number("Panel length (m)", PANEL_LENGTH_RANGE, defaults.pv_length_m)?,
            pv_width_m: self.number("Panel width (m)", PANEL_WIDTH_RANGE, defaults.pv_width_m)?,
            pv_weight_kg: self.number("Panel weight (kg)", PANEL_WEIGHT_RANGE, defaults.pv_weight_kg)?,
            pv_per_row: self.number("Panels per row", PANELS_PER_ROW_RANGE, defaults.pv_per_row)?,
            num_rows: self.number("Number of rows", ROWS_RANGE, defaults.num_rows)?,
            column_spacing_m: self.number(
                "Column spacing (m)",
                SPACING_RANGE,
                defaults.column_spacing_m,
            )?,
            span_length_m: self.number("Main beam span (m)", SPAN_RANGE, defaults.span_length_m)?,
        })
    }
}
