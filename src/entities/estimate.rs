//! Derived estimate records - immutable results of one estimation run
//!
//! Every struct here is constructed once and never mutated, and carries
//! enough of its inputs to reproduce the calculation deterministically.

use serde::{Deserialize, Serialize};

use crate::entities::cutting::{CuttingParameters, OperationKind};
use crate::entities::work_center::Currency;

/// Time breakdown for one machining feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationEstimate {
    /// Label of the feature this estimate covers
    pub feature: String,

    /// Operation kind performed
    pub operation: OperationKind,

    /// Removal rate achieved (mm^3/min for volumetric kinds, mm/min for
    /// turning), after the machinability coefficient is applied
    pub removal_rate: f64,

    /// Time spent cutting, in minutes (finish/tolerance factors included)
    pub cutting_time_min: f64,

    /// Repositioning/engagement time, in minutes
    pub reposition_time_min: f64,

    /// Tool-change time charged to this feature, in minutes; zero unless the
    /// feature opens a new tool run
    pub tool_change_time_min: f64,

    /// Total machine time for this feature, in minutes
    pub total_time_min: f64,

    /// The cutting parameters actually used, recorded for auditability and
    /// what-if recalculation
    pub parameters: CuttingParameters,
}

impl OperationEstimate {
    /// Non-cutting time: repositioning plus any tool change
    pub fn non_cutting_time_min(&self) -> f64 {
        self.reposition_time_min + self.tool_change_time_min
    }
}

/// Batch-level aggregation for one part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEstimate {
    /// Batch quantity
    pub quantity: u32,

    /// One-time setup time, in minutes
    pub setup_time_min: f64,

    /// Per-piece cycle time (sum of operation totals), in minutes
    pub cycle_time_min: f64,

    /// Batch total: setup + quantity x cycle, in minutes
    pub batch_total_min: f64,

    /// Amortized per-unit time: batch total / quantity, in minutes
    pub per_unit_min: f64,
}

impl BatchEstimate {
    /// Batch total expressed in hours, for rate conversion
    pub fn batch_total_hours(&self) -> f64 {
        self.batch_total_min / 60.0
    }
}

/// The externally visible estimate: time converted to money, with the full
/// per-operation breakdown retained for traceability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Material the part is cut from
    pub material: String,

    /// Work center the estimate targets
    pub work_center: String,

    /// Currency of all monetary amounts
    pub currency: Currency,

    /// Machine hourly rate applied
    pub hourly_rate: f64,

    /// Machine time cost: hourly rate x batch hours
    pub machine_cost: f64,

    /// Raw material cost for the whole batch
    pub material_cost: f64,

    /// Grand total
    pub total_cost: f64,

    /// Batch aggregation
    pub batch: BatchEstimate,

    /// Ordered per-feature breakdown
    pub operations: Vec<OperationEstimate>,
}

impl CostEstimate {
    /// Cost per unit across the batch
    pub fn cost_per_unit(&self) -> f64 {
        self.total_cost / f64::from(self.batch.quantity)
    }
}
