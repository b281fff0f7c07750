//! Material removal rate (MRR) model
//!
//! Converts cutting parameters plus the material's machinability coefficient
//! into a removal rate, and divides the feature's required removal by that
//! rate to obtain raw cutting time. Everything here is in canonical units
//! (mm, mm^3, minutes); see `core::units` for boundary conversions.

use crate::core::error::EstimateError;
use crate::entities::cutting::{CuttingParameters, OperationKind};
use crate::entities::feature::Removal;
use crate::entities::material::MaterialProfile;

/// Removal rate and the raw cutting time derived from it
#[derive(Debug, Clone, Copy)]
pub struct CuttingTime {
    /// mm^3/min for volumetric kinds, mm/min for turning
    pub rate: f64,
    /// Raw cutting time in minutes, before finish/tolerance factors
    pub minutes: f64,
}

/// Compute the removal rate for an operation kind
///
/// - Volumetric (milling, drilling, grinding):
///   `feed x flutes x rpm x depth_of_cut x machinability` in mm^3/min,
///   where grinding substitutes feed-per-rev for feed-per-tooth x flutes
///   (a wheel has no discrete flutes).
/// - Length-based (turning):
///   `feed_per_rev x rpm x machinability` in mm/min.
pub fn removal_rate(
    params: &CuttingParameters,
    machinability: f64,
) -> Result<f64, EstimateError> {
    let rate = match params.operation {
        OperationKind::Milling | OperationKind::Drilling => {
            params.feed_per_tooth_mm
                * f64::from(params.flute_count)
                * params.spindle_speed_rpm
                * params.depth_of_cut_mm
                * machinability
        }
        OperationKind::Grinding => {
            let feed = params.feed_per_rev_mm.unwrap_or(params.feed_per_tooth_mm);
            feed * params.spindle_speed_rpm * params.depth_of_cut_mm * machinability
        }
        OperationKind::Turning => {
            let feed = params.feed_per_rev_mm.ok_or(EstimateError::NonPhysicalParameter {
                quantity: "feed per rev",
                value: 0.0,
                context: params.key(),
            })?;
            feed * params.spindle_speed_rpm * machinability
        }
    };

    // A zero or negative rate would turn into an infinite or negative time;
    // refuse it here rather than report a wrong quote.
    if !(rate.is_finite() && rate > 0.0) {
        return Err(EstimateError::NonPhysicalParameter {
            quantity: "removal rate",
            value: rate,
            context: params.key(),
        });
    }

    Ok(rate)
}

/// Compute raw cutting time for a feature's removal
///
/// Zero removal is legal and yields zero cutting time; the operation time
/// model adds the non-cutting floor on top.
pub fn cutting_time(
    removal: &Removal,
    params: &CuttingParameters,
    material: &MaterialProfile,
) -> Result<CuttingTime, EstimateError> {
    let quantity = removal.quantity();
    if !(quantity.is_finite() && quantity >= 0.0) {
        return Err(EstimateError::NonPhysicalParameter {
            quantity: "removal quantity",
            value: quantity,
            context: params.key(),
        });
    }

    let rate = removal_rate(params, material.machinability)?;
    let minutes = quantity / rate;

    if !minutes.is_finite() {
        return Err(EstimateError::NonPhysicalParameter {
            quantity: "cutting time",
            value: minutes,
            context: params.key(),
        });
    }

    Ok(CuttingTime { rate, minutes })
}
