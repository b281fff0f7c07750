//! Material profile - machinability reference data for raw stock

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{EstimateError, RecordKind};

/// Broad material family, used for grouping and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    NonFerrous,
    LowAlloySteel,
    ToolSteel,
    StainlessSteel,
    CastIron,
    Titanium,
    Superalloy,
    Plastic,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialCategory::NonFerrous => write!(f, "non-ferrous"),
            MaterialCategory::LowAlloySteel => write!(f, "low-alloy steel"),
            MaterialCategory::ToolSteel => write!(f, "tool steel"),
            MaterialCategory::StainlessSteel => write!(f, "stainless steel"),
            MaterialCategory::CastIron => write!(f, "cast iron"),
            MaterialCategory::Titanium => write!(f, "titanium"),
            MaterialCategory::Superalloy => write!(f, "superalloy"),
            MaterialCategory::Plastic => write!(f, "plastic"),
        }
    }
}

/// Hardness class, a coarse bucket for process planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum HardnessClass {
    Soft,
    #[default]
    Medium,
    Hard,
    Hardened,
}

impl std::fmt::Display for HardnessClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HardnessClass::Soft => write!(f, "soft"),
            HardnessClass::Medium => write!(f, "medium"),
            HardnessClass::Hard => write!(f, "hard"),
            HardnessClass::Hardened => write!(f, "hardened"),
        }
    }
}

impl std::str::FromStr for HardnessClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "soft" => Ok(HardnessClass::Soft),
            "medium" => Ok(HardnessClass::Medium),
            "hard" => Ok(HardnessClass::Hard),
            "hardened" => Ok(HardnessClass::Hardened),
            _ => Err(format!(
                "Invalid hardness class: {}. Use soft, medium, hard, or hardened",
                s
            )),
        }
    }
}

/// A material reference record
///
/// Immutable at estimation time; created and updated only by administrative
/// data maintenance. The machinability coefficient is a dimensionless
/// multiplier on achievable removal rate, relative to a reference material
/// at 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// Unique identifier (e.g., "al-6061-t6")
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Material family
    pub category: MaterialCategory,

    /// Hardness bucket
    #[serde(default)]
    pub hardness: HardnessClass,

    /// Brinell hardness number, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardness_hb: Option<u32>,

    /// Dimensionless cutting-speed multiplier relative to the reference material
    pub machinability: f64,

    /// Density in g/cm^3, for mass-based stock costing
    pub density_g_cm3: f64,

    /// Specific cutting energy in J/mm^3, for power/torque-bound operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_cutting_energy_j_mm3: Option<f64>,

    /// Raw stock price per kilogram
    pub unit_cost_per_kg: f64,

    /// Record revision, incremented by administrative maintenance
    #[serde(default = "default_revision")]
    pub entity_revision: u32,

    /// When the record was last maintained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

fn default_revision() -> u32 {
    1
}

impl MaterialProfile {
    /// Mass in kilograms of a given stock volume
    pub fn stock_mass_kg(&self, volume_mm3: f64) -> f64 {
        // g/cm^3 * mm^3 -> g requires /1000; kg requires a further /1000
        self.density_g_cm3 * volume_mm3 / 1.0e6
    }

    /// Raw material cost of a given stock volume
    pub fn stock_cost(&self, volume_mm3: f64) -> f64 {
        self.stock_mass_kg(volume_mm3) * self.unit_cost_per_kg
    }

    /// Check the record for non-physical values at ingestion
    pub fn validate(&self) -> Result<(), EstimateError> {
        let problem = if !(self.machinability.is_finite() && self.machinability > 0.0) {
            Some(format!("machinability must be positive, got {}", self.machinability))
        } else if !(self.density_g_cm3.is_finite() && self.density_g_cm3 > 0.0) {
            Some(format!("density must be positive, got {}", self.density_g_cm3))
        } else if !(self.unit_cost_per_kg.is_finite() && self.unit_cost_per_kg >= 0.0) {
            Some(format!(
                "unit cost must be non-negative, got {}",
                self.unit_cost_per_kg
            ))
        } else {
            match self.specific_cutting_energy_j_mm3 {
                Some(e) if !(e.is_finite() && e > 0.0) => {
                    Some(format!("specific cutting energy must be positive, got {}", e))
                }
                _ => None,
            }
        };

        match problem {
            Some(problem) => Err(EstimateError::Validation {
                record: RecordKind::Material,
                key: self.id.clone(),
                problem,
            }),
            None => Ok(()),
        }
    }
}
