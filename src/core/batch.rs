//! Batch aggregation - setup amortization over a batch quantity

use crate::core::error::EstimateError;
use crate::entities::estimate::{BatchEstimate, OperationEstimate};

/// Aggregate per-feature estimates into batch totals
///
/// Per-piece cycle time is the sum of all operation totals; setup is a
/// one-time charge amortized across the quantity. Quantity zero is a
/// contract violation caught before any arithmetic.
pub fn aggregate(
    operations: &[OperationEstimate],
    quantity: u32,
    setup_time_min: f64,
) -> Result<BatchEstimate, EstimateError> {
    if quantity == 0 {
        return Err(EstimateError::InvalidQuantity { quantity });
    }

    let cycle_time_min: f64 = operations.iter().map(|op| op.total_time_min).sum();
    let batch_total_min = setup_time_min + f64::from(quantity) * cycle_time_min;
    let per_unit_min = batch_total_min / f64::from(quantity);

    if !(batch_total_min.is_finite() && batch_total_min >= 0.0) {
        return Err(EstimateError::NonPhysicalParameter {
            quantity: "batch total time",
            value: batch_total_min,
            context: format!("{} operations, quantity {}", operations.len(), quantity),
        });
    }

    Ok(BatchEstimate {
        quantity,
        setup_time_min,
        cycle_time_min,
        batch_total_min,
        per_unit_min,
    })
}
