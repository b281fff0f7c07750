//! Work center reference records - machine rates and overheads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{EstimateError, RecordKind};

/// Currency code for machine rates and estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cny,
    Jpy,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Eur => write!(f, "EUR"),
            Currency::Gbp => write!(f, "GBP"),
            Currency::Cny => write!(f, "CNY"),
            Currency::Jpy => write!(f, "JPY"),
        }
    }
}

/// A work center (machine) reference record
///
/// Supplies the non-cutting overheads and the hourly rate the orchestrator
/// converts time into money with. Immutable at estimation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkCenter {
    /// Unique identifier (e.g., "vmc-01")
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Machine hourly rate
    pub hourly_rate: f64,

    /// Currency of the hourly rate
    #[serde(default)]
    pub currency: Currency,

    /// Rapid traverse rate in mm/min, for approach-distance repositioning
    #[serde(default = "default_rapid_rate")]
    pub rapid_rate_mm_min: f64,

    /// Fixed repositioning/engagement time per feature, in minutes.
    /// Strictly positive: even a zero-removal feature costs machine time.
    #[serde(default = "default_reposition")]
    pub reposition_min: f64,

    /// Tool-change time in minutes, charged once per contiguous tool run
    #[serde(default = "default_tool_change")]
    pub tool_change_min: f64,

    /// Default one-time batch setup time in minutes (fixturing, presetting);
    /// callers may override per part
    #[serde(default = "default_setup")]
    pub setup_time_min: f64,

    /// Record revision, incremented by administrative maintenance
    #[serde(default = "default_revision")]
    pub entity_revision: u32,

    /// When the record was last maintained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

fn default_rapid_rate() -> f64 {
    10_000.0
}

fn default_reposition() -> f64 {
    0.5
}

fn default_tool_change() -> f64 {
    1.5
}

fn default_setup() -> f64 {
    30.0
}

fn default_revision() -> u32 {
    1
}

impl WorkCenter {
    /// Create a work center with default overheads
    pub fn new(id: impl Into<String>, name: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hourly_rate,
            currency: Currency::default(),
            rapid_rate_mm_min: default_rapid_rate(),
            reposition_min: default_reposition(),
            tool_change_min: default_tool_change(),
            setup_time_min: default_setup(),
            entity_revision: 1,
            updated: None,
        }
    }

    /// Check the record for non-physical values at ingestion
    pub fn validate(&self) -> Result<(), EstimateError> {
        let problem = if !(self.hourly_rate.is_finite() && self.hourly_rate >= 0.0) {
            Some(format!("hourly rate must be non-negative, got {}", self.hourly_rate))
        } else if !(self.rapid_rate_mm_min.is_finite() && self.rapid_rate_mm_min > 0.0) {
            Some(format!(
                "rapid traverse rate must be positive, got {}",
                self.rapid_rate_mm_min
            ))
        } else if !(self.reposition_min.is_finite() && self.reposition_min > 0.0) {
            Some(format!(
                "repositioning time must be positive, got {}",
                self.reposition_min
            ))
        } else if !(self.tool_change_min.is_finite() && self.tool_change_min >= 0.0) {
            Some(format!(
                "tool-change time must be non-negative, got {}",
                self.tool_change_min
            ))
        } else if !(self.setup_time_min.is_finite() && self.setup_time_min >= 0.0) {
            Some(format!(
                "setup time must be non-negative, got {}",
                self.setup_time_min
            ))
        } else {
            None
        };

        match problem {
            Some(problem) => Err(EstimateError::Validation {
                record: RecordKind::WorkCenter,
                key: self.id.clone(),
                problem,
            }),
            None => Ok(()),
        }
    }
}
