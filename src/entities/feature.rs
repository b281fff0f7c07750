//! Machining features - ordered stock-removal requirements for one part

use serde::{Deserialize, Serialize};

use crate::entities::cutting::OperationKind;

/// Target surface finish class
///
/// Finer finishes add finishing passes; the factor scales cutting time and
/// is always >= 1.0 so that estimates never shrink with tighter requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum SurfaceFinish {
    #[default]
    AsMachined,
    Smooth,
    Fine,
    Mirror,
}

impl SurfaceFinish {
    /// Multiplier applied to cutting time
    pub fn time_factor(&self) -> f64 {
        match self {
            SurfaceFinish::AsMachined => 1.0,
            SurfaceFinish::Smooth => 1.1,
            SurfaceFinish::Fine => 1.25,
            SurfaceFinish::Mirror => 1.6,
        }
    }
}

impl std::fmt::Display for SurfaceFinish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceFinish::AsMachined => write!(f, "as_machined"),
            SurfaceFinish::Smooth => write!(f, "smooth"),
            SurfaceFinish::Fine => write!(f, "fine"),
            SurfaceFinish::Mirror => write!(f, "mirror"),
        }
    }
}

/// Dimensional tolerance class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum ToleranceClass {
    Coarse,
    #[default]
    Medium,
    Fine,
    Precision,
}

impl ToleranceClass {
    /// Multiplier applied to cutting time
    pub fn time_factor(&self) -> f64 {
        match self {
            ToleranceClass::Coarse => 1.0,
            ToleranceClass::Medium => 1.0,
            ToleranceClass::Fine => 1.15,
            ToleranceClass::Precision => 1.3,
        }
    }
}

impl std::fmt::Display for ToleranceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToleranceClass::Coarse => write!(f, "coarse"),
            ToleranceClass::Medium => write!(f, "medium"),
            ToleranceClass::Fine => write!(f, "fine"),
            ToleranceClass::Precision => write!(f, "precision"),
        }
    }
}

/// The stock-removal requirement of a feature, tagged by operation kind
///
/// Volumetric kinds record removed volume; turning records the cut length
/// along the axis. Adding an operation kind means adding a variant here and
/// a rate formula in `core::mrr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Removal {
    Milling { volume_mm3: f64 },
    Drilling { volume_mm3: f64 },
    Grinding { volume_mm3: f64 },
    Turning { length_mm: f64 },
}

impl Removal {
    /// The operation kind of this removal
    pub fn kind(&self) -> OperationKind {
        match self {
            Removal::Milling { .. } => OperationKind::Milling,
            Removal::Drilling { .. } => OperationKind::Drilling,
            Removal::Grinding { .. } => OperationKind::Grinding,
            Removal::Turning { .. } => OperationKind::Turning,
        }
    }

    /// The removal quantity (mm^3 for volumetric kinds, mm for turning)
    pub fn quantity(&self) -> f64 {
        match self {
            Removal::Milling { volume_mm3 }
            | Removal::Drilling { volume_mm3 }
            | Removal::Grinding { volume_mm3 } => *volume_mm3,
            Removal::Turning { length_mm } => *length_mm,
        }
    }

    /// Removed volume in mm^3, when this removal is volumetric
    pub fn volume_mm3(&self) -> Option<f64> {
        match self {
            Removal::Milling { volume_mm3 }
            | Removal::Drilling { volume_mm3 }
            | Removal::Grinding { volume_mm3 } => Some(*volume_mm3),
            Removal::Turning { .. } => None,
        }
    }
}

/// A single stock-removal requirement derived upstream (pocket, bore,
/// turned diameter)
///
/// Features arrive pre-extracted as an ordered sequence; order is
/// significant because the machining sequence drives tool-change counting.
/// Read-only input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachiningFeature {
    /// Short label for traceability in estimates and errors
    pub label: String,

    /// What is removed, tagged by operation kind
    #[serde(flatten)]
    pub removal: Removal,

    /// Target surface finish
    #[serde(default)]
    pub surface_finish: SurfaceFinish,

    /// Dimensional tolerance class
    #[serde(default)]
    pub tolerance_class: ToleranceClass,

    /// Named tool this feature requires; when absent the operation kind
    /// stands in for tool-change boundary detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    /// Rapid-traverse approach distance in mm, added to the fixed
    /// repositioning term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach_mm: Option<f64>,
}

impl MachiningFeature {
    /// Create a milling feature removing the given volume
    pub fn milling(label: impl Into<String>, volume_mm3: f64) -> Self {
        Self::new(label, Removal::Milling { volume_mm3 })
    }

    /// Create a drilling feature removing the given volume
    pub fn drilling(label: impl Into<String>, volume_mm3: f64) -> Self {
        Self::new(label, Removal::Drilling { volume_mm3 })
    }

    /// Create a grinding feature removing the given volume
    pub fn grinding(label: impl Into<String>, volume_mm3: f64) -> Self {
        Self::new(label, Removal::Grinding { volume_mm3 })
    }

    /// Create a turning feature cutting along the given length
    pub fn turning(label: impl Into<String>, length_mm: f64) -> Self {
        Self::new(label, Removal::Turning { length_mm })
    }

    fn new(label: impl Into<String>, removal: Removal) -> Self {
        Self {
            label: label.into(),
            removal,
            surface_finish: SurfaceFinish::default(),
            tolerance_class: ToleranceClass::default(),
            tool: None,
            approach_mm: None,
        }
    }

    /// Set the named tool
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Set the surface finish class
    pub fn with_finish(mut self, finish: SurfaceFinish) -> Self {
        self.surface_finish = finish;
        self
    }

    /// Set the tolerance class
    pub fn with_tolerance(mut self, tolerance: ToleranceClass) -> Self {
        self.tolerance_class = tolerance;
        self
    }

    /// Set the rapid-traverse approach distance
    pub fn with_approach(mut self, approach_mm: f64) -> Self {
        self.approach_mm = Some(approach_mm);
        self
    }

    /// The identity used for tool-change boundary detection: the named tool
    /// when present, else the operation kind
    pub fn tool_key(&self) -> &str {
        self.tool
            .as_deref()
            .unwrap_or_else(|| self.removal.kind().as_str())
    }
}
