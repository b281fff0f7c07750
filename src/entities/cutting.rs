//! Cutting parameter sets - per (material, operation, work center) defaults

use serde::{Deserialize, Serialize};

use crate::core::error::{EstimateError, RecordKind};

/// Machining operation kind
///
/// New kinds are added by extending this enum and the corresponding rate
/// formula in `core::mrr`; nothing else needs to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Milling,
    Turning,
    Drilling,
    Grinding,
}

impl OperationKind {
    /// All known operation kinds
    pub fn all() -> &'static [OperationKind] {
        &[
            OperationKind::Milling,
            OperationKind::Turning,
            OperationKind::Drilling,
            OperationKind::Grinding,
        ]
    }

    /// Whether the removal rate for this kind is volumetric (mm^3/min)
    /// rather than length-based (mm/min)
    pub fn is_volumetric(&self) -> bool {
        !matches!(self, OperationKind::Turning)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Milling => "milling",
            OperationKind::Turning => "turning",
            OperationKind::Drilling => "drilling",
            OperationKind::Grinding => "grinding",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "milling" | "mill" => Ok(OperationKind::Milling),
            "turning" | "turn" => Ok(OperationKind::Turning),
            "drilling" | "drill" => Ok(OperationKind::Drilling),
            "grinding" | "grind" => Ok(OperationKind::Grinding),
            _ => Err(format!(
                "Invalid operation kind: {}. Use milling, turning, drilling, or grinding",
                s
            )),
        }
    }
}

/// A cutting parameter record
///
/// Scoped to a (material, operation, work center) triple. Looked up, never
/// mutated, by the engine. All values are stored in canonical units
/// (millimetres, rpm); imperial sources are converted at import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuttingParameters {
    /// Material this record applies to
    pub material: String,

    /// Operation kind this record applies to
    pub operation: OperationKind,

    /// Work center this record applies to
    pub work_center: String,

    /// Operating spindle speed in rpm
    pub spindle_speed_rpm: f64,

    /// Allowed spindle speed range [min, max], when the machine is bounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spindle_speed_limits: Option<[f64; 2]>,

    /// Feed per tooth in mm (milling/drilling)
    pub feed_per_tooth_mm: f64,

    /// Feed per revolution in mm (turning/grinding)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_per_rev_mm: Option<f64>,

    /// Operating depth of cut in mm
    pub depth_of_cut_mm: f64,

    /// Allowed depth of cut range [min, max]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_of_cut_limits: Option<[f64; 2]>,

    /// Tool diameter in mm
    pub tool_diameter_mm: f64,

    /// Number of cutting flutes
    pub flute_count: u32,

    /// Named tool this record assumes (e.g., "T3-endmill-10"); used for
    /// tool-change boundary detection when features reference it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
}

impl CuttingParameters {
    /// Lookup key string for error reporting
    pub fn key(&self) -> String {
        format!("{}/{}/{}", self.material, self.operation, self.work_center)
    }

    /// Check the record for non-physical or out-of-bounds values at ingestion
    ///
    /// A bad parameter record silently corrupts every downstream time
    /// estimate, so registries refuse them outright instead of clamping.
    pub fn validate(&self) -> Result<(), EstimateError> {
        let mut problem = None;

        if !(self.spindle_speed_rpm.is_finite() && self.spindle_speed_rpm > 0.0) {
            problem = Some(format!(
                "spindle speed must be positive, got {}",
                self.spindle_speed_rpm
            ));
        } else if !(self.feed_per_tooth_mm.is_finite() && self.feed_per_tooth_mm > 0.0) {
            problem = Some(format!(
                "feed per tooth must be positive, got {}",
                self.feed_per_tooth_mm
            ));
        } else if !(self.depth_of_cut_mm.is_finite() && self.depth_of_cut_mm > 0.0) {
            problem = Some(format!(
                "depth of cut must be positive, got {}",
                self.depth_of_cut_mm
            ));
        } else if !(self.tool_diameter_mm.is_finite() && self.tool_diameter_mm > 0.0) {
            problem = Some(format!(
                "tool diameter must be positive, got {}",
                self.tool_diameter_mm
            ));
        } else if self.flute_count == 0 {
            problem = Some("flute count must be at least 1".to_string());
        }

        if problem.is_none() {
            match self.feed_per_rev_mm {
                Some(f) if !(f.is_finite() && f > 0.0) => {
                    problem = Some(format!("feed per rev must be positive, got {}", f));
                }
                None if self.operation == OperationKind::Turning
                    || self.operation == OperationKind::Grinding =>
                {
                    problem = Some(format!(
                        "{} parameters require feed_per_rev_mm",
                        self.operation
                    ));
                }
                _ => {}
            }
        }

        if problem.is_none() {
            if let Some([min, max]) = self.spindle_speed_limits {
                if self.spindle_speed_rpm < min || self.spindle_speed_rpm > max {
                    problem = Some(format!(
                        "spindle speed {} outside limits [{}, {}]",
                        self.spindle_speed_rpm, min, max
                    ));
                }
            }
        }
        if problem.is_none() {
            if let Some([min, max]) = self.depth_of_cut_limits {
                if self.depth_of_cut_mm < min || self.depth_of_cut_mm > max {
                    problem = Some(format!(
                        "depth of cut {} outside limits [{}, {}]",
                        self.depth_of_cut_mm, min, max
                    ));
                }
            }
        }

        match problem {
            Some(problem) => Err(EstimateError::Validation {
                record: RecordKind::CuttingParameters,
                key: self.key(),
                problem,
            }),
            None => Ok(()),
        }
    }
}
