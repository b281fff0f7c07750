//! Estimation orchestrator - the public entry point
//!
//! Sequences all operations for a part, aggregates times, and converts the
//! result into money. This is the only component that touches cost; the
//! models underneath stay purely physical/temporal. Stateless per call:
//! identical inputs always yield an identical `CostEstimate`.

use serde::{Deserialize, Serialize};

use crate::core::batch;
use crate::core::error::EstimateError;
use crate::core::operation::{estimate_operation, tool_change_flags};
use crate::entities::estimate::CostEstimate;
use crate::entities::feature::MachiningFeature;
use crate::registry::ParameterRegistry;

/// One part's worth of estimation inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Material the part is cut from
    pub material: String,

    /// Target work center
    pub work_center: String,

    /// Ordered machining features (order drives tool-change counting)
    pub features: Vec<MachiningFeature>,

    /// Batch quantity; must be positive
    pub quantity: u32,

    /// Part-specific setup time override, in minutes; falls back to the
    /// work center default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_time_min: Option<f64>,

    /// Per-piece raw stock volume in mm^3, for material costing; falls back
    /// to the part's total removal volume (a lower bound)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_volume_mm3: Option<f64>,
}

impl EstimateRequest {
    /// Create a request with no overrides
    pub fn new(
        material: impl Into<String>,
        work_center: impl Into<String>,
        features: Vec<MachiningFeature>,
        quantity: u32,
    ) -> Self {
        Self {
            material: material.into(),
            work_center: work_center.into(),
            features,
            quantity,
            setup_time_min: None,
            stock_volume_mm3: None,
        }
    }

    /// Total removal volume across volumetric features, in mm^3
    fn total_removal_volume(&self) -> f64 {
        self.features
            .iter()
            .filter_map(|f| f.removal.volume_mm3())
            .sum()
    }
}

/// The estimation engine, generic over its read-only registry
///
/// Holds only a shared reference to reference data, so any number of
/// estimators (or calls on one) can run in parallel.
pub struct Estimator<'a, R: ParameterRegistry + ?Sized> {
    registry: &'a R,
}

impl<'a, R: ParameterRegistry + ?Sized> Estimator<'a, R> {
    /// Create an estimator over the given registry
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Produce a full cost estimate for one part and batch quantity
    ///
    /// Any per-feature resolution or rate failure aborts the whole estimate
    /// (wrapped as `IncompleteEstimate` with the feature index); a partial
    /// total is never reported as if complete.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<CostEstimate, EstimateError> {
        // Contract check before any computation
        if request.quantity == 0 {
            return Err(EstimateError::InvalidQuantity {
                quantity: request.quantity,
            });
        }

        let material = self.registry.lookup_material(&request.material)?;
        let work_center = self.registry.lookup_work_center(&request.work_center)?;

        let flags = tool_change_flags(&request.features);
        let mut operations = Vec::with_capacity(request.features.len());
        for (index, feature) in request.features.iter().enumerate() {
            let op = self
                .registry
                .lookup(&request.material, feature.removal.kind(), &request.work_center)
                .and_then(|params| {
                    estimate_operation(feature, params, material, work_center, flags[index])
                })
                .map_err(|source| EstimateError::IncompleteEstimate {
                    index,
                    feature: feature.label.clone(),
                    source: Box::new(source),
                })?;
            operations.push(op);
        }

        let setup_time_min = request
            .setup_time_min
            .unwrap_or(work_center.setup_time_min);
        let batch = batch::aggregate(&operations, request.quantity, setup_time_min)?;

        let machine_cost = work_center.hourly_rate * batch.batch_total_hours();
        let stock_volume_mm3 = request
            .stock_volume_mm3
            .unwrap_or_else(|| request.total_removal_volume());
        let material_cost =
            material.stock_cost(stock_volume_mm3) * f64::from(request.quantity);
        let total_cost = machine_cost + material_cost;

        Ok(CostEstimate {
            material: material.id.clone(),
            work_center: work_center.id.clone(),
            currency: work_center.currency,
            hourly_rate: work_center.hourly_rate,
            machine_cost,
            material_cost,
            total_cost,
            batch,
            operations,
        })
    }
}
