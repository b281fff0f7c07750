//! Operation time model
//!
//! Wraps MRR-derived cutting time with the non-cutting overhead of the
//! operation: repositioning/engagement per feature, and tool-change time
//! charged once per contiguous run of features sharing a tool.

use crate::core::error::EstimateError;
use crate::core::mrr;
use crate::entities::cutting::CuttingParameters;
use crate::entities::estimate::OperationEstimate;
use crate::entities::feature::MachiningFeature;
use crate::entities::material::MaterialProfile;
use crate::entities::work_center::WorkCenter;

/// Decide, per feature, whether a tool change is charged
///
/// A change is charged at sequence start and wherever the tool key differs
/// from the previous feature's. Non-contiguous reuse of a tool is charged
/// again: without toolpath knowledge, assuming the machine still holds a
/// previously used tool would understate time.
pub fn tool_change_flags(features: &[MachiningFeature]) -> Vec<bool> {
    features
        .iter()
        .enumerate()
        .map(|(idx, feat)| idx == 0 || features[idx - 1].tool_key() != feat.tool_key())
        .collect()
}

/// Repositioning/engagement time for one feature, in minutes
///
/// A fixed work-center term plus rapid traverse over the approach distance.
/// Always positive: a feature with near-zero removal still costs machine
/// time.
pub fn reposition_time(feature: &MachiningFeature, work_center: &WorkCenter) -> f64 {
    let approach = feature
        .approach_mm
        .map(|mm| mm / work_center.rapid_rate_mm_min)
        .unwrap_or(0.0);
    work_center.reposition_min + approach
}

/// Build the full time breakdown for one feature
pub fn estimate_operation(
    feature: &MachiningFeature,
    params: &CuttingParameters,
    material: &MaterialProfile,
    work_center: &WorkCenter,
    charge_tool_change: bool,
) -> Result<OperationEstimate, EstimateError> {
    let raw = mrr::cutting_time(&feature.removal, params, material)?;

    let cutting_time_min = raw.minutes
        * feature.surface_finish.time_factor()
        * feature.tolerance_class.time_factor();

    let reposition_time_min = reposition_time(feature, work_center);
    let tool_change_time_min = if charge_tool_change {
        work_center.tool_change_min
    } else {
        0.0
    };

    let total_time_min = cutting_time_min + reposition_time_min + tool_change_time_min;
    if !(total_time_min.is_finite() && total_time_min > 0.0) {
        return Err(EstimateError::NonPhysicalParameter {
            quantity: "operation time",
            value: total_time_min,
            context: format!("feature '{}' ({})", feature.label, params.key()),
        });
    }

    Ok(OperationEstimate {
        feature: feature.label.clone(),
        operation: feature.removal.kind(),
        removal_rate: raw.rate,
        cutting_time_min,
        reposition_time_min,
        tool_change_time_min,
        total_time_min,
        parameters: params.clone(),
    })
}
