//! Boundary unit conversions
//!
//! The engine computes in one canonical unit system: millimetres, cubic
//! millimetres, revolutions per minute, and minutes. External sources
//! (vendor feed/speed tables are usually imperial: SFM, IPT, inches) are
//! converted here at ingestion, never inside the rate formulas - unit
//! mismatches are a primary source of silent estimation error.

use serde::{Deserialize, Serialize};

pub const MM_PER_INCH: f64 = 25.4;

/// Unit system of an external record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum UnitSystem {
    /// mm, mm^3, mm/min
    #[default]
    Metric,
    /// in, in^3, SFM/IPT
    Imperial,
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "in" | "inch" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Invalid unit system: {}. Use metric or imperial", s)),
        }
    }
}

/// Inches to millimetres
pub fn mm_from_in(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Cubic inches to cubic millimetres
pub fn mm3_from_in3(cubic_inches: f64) -> f64 {
    cubic_inches * MM_PER_INCH * MM_PER_INCH * MM_PER_INCH
}

/// Seconds to minutes
pub fn min_from_s(seconds: f64) -> f64 {
    seconds / 60.0
}

/// Inches-per-minute feed to mm/min
pub fn mm_per_min_from_ipm(ipm: f64) -> f64 {
    ipm * MM_PER_INCH
}

/// Surface feet per minute to spindle rpm for a given tool diameter
///
/// rpm = (sfm * 12 in/ft * 25.4 mm/in) / (pi * diameter_mm)
pub fn rpm_from_sfm(sfm: f64, tool_diameter_mm: f64) -> f64 {
    sfm * 12.0 * MM_PER_INCH / (std::f64::consts::PI * tool_diameter_mm)
}
