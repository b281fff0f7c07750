//! End-to-end estimation tests - time models, batch math, cost conversion

mod common;

use chipload::{
    EstimateError, EstimateRequest, Estimator, MachiningFeature, SurfaceFinish, ToleranceClass,
    WorkCenter,
};
use common::{reference_milling_params, reference_registry};

fn one_pocket_request(quantity: u32) -> EstimateRequest {
    EstimateRequest::new(
        "ref-steel",
        "vmc-ref",
        vec![MachiningFeature::milling("pocket", 10_000.0)],
        quantity,
    )
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_single_pocket_quantity_one() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);

    let estimate = estimator.estimate(&one_pocket_request(1)).unwrap();

    // 10,000 mm^3 at 1600 mm^3/min = 6.25 min cutting, + 0.5 min reposition
    let op = &estimate.operations[0];
    assert!((op.removal_rate - 1600.0).abs() < 1e-9);
    assert!((op.cutting_time_min - 6.25).abs() < 1e-9);
    assert!((op.total_time_min - 6.75).abs() < 1e-9);

    // 30 min setup + 1 x 6.75
    assert!((estimate.batch.batch_total_min - 36.75).abs() < 1e-9);
    assert!((estimate.batch.per_unit_min - 36.75).abs() < 1e-9);
}

#[test]
fn test_single_pocket_quantity_hundred() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);

    let estimate = estimator.estimate(&one_pocket_request(100)).unwrap();
    assert!((estimate.batch.batch_total_min - 705.0).abs() < 1e-9);
    assert!((estimate.batch.per_unit_min - 7.05).abs() < 1e-9);
}

#[test]
fn test_cost_conversion() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);

    let estimate = estimator.estimate(&one_pocket_request(1)).unwrap();

    // 36.75 min at 90/hr
    assert!((estimate.machine_cost - 36.75 / 60.0 * 90.0).abs() < 1e-9);
    // Stock defaults to removal volume: 10,000 mm^3 of 7.85 g/cm^3 at 2/kg
    assert!((estimate.material_cost - 0.0785 * 2.0).abs() < 1e-9);
    assert!(
        (estimate.total_cost - (estimate.machine_cost + estimate.material_cost)).abs() < 1e-12
    );
    assert!((estimate.cost_per_unit() - estimate.total_cost).abs() < 1e-12);
    assert_eq!(estimate.hourly_rate, 90.0);
}

// ============================================================================
// Estimation Properties
// ============================================================================

#[test]
fn test_determinism_identical_inputs_identical_output() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);
    let request = EstimateRequest::new(
        "ref-steel",
        "vmc-ref",
        vec![
            MachiningFeature::milling("pocket", 10_000.0).with_tool("T1"),
            MachiningFeature::drilling("holes", 850.0).with_tool("T4"),
            MachiningFeature::milling("chamfer", 120.0)
                .with_tool("T1")
                .with_finish(SurfaceFinish::Fine),
        ],
        40,
    );

    let a = estimator.estimate(&request).unwrap();
    let b = estimator.estimate(&request).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_more_removal_takes_more_time() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);

    let mut last = 0.0;
    for volume in [100.0, 1_000.0, 10_000.0, 100_000.0] {
        let request = EstimateRequest::new(
            "ref-steel",
            "vmc-ref",
            vec![MachiningFeature::milling("pocket", volume)],
            1,
        );
        let estimate = estimator.estimate(&request).unwrap();
        assert!(estimate.batch.cycle_time_min > last);
        last = estimate.batch.cycle_time_min;
    }
}

#[test]
fn test_setup_amortizes_with_quantity() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);

    let mut last = f64::INFINITY;
    for quantity in [1, 5, 25, 125, 625] {
        let estimate = estimator.estimate(&one_pocket_request(quantity)).unwrap();
        assert!(estimate.batch.per_unit_min < last);
        last = estimate.batch.per_unit_min;
    }
    // Never below the cycle time itself
    assert!(last > 6.75);
}

#[test]
fn test_zero_removal_feature_still_costs_time() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);
    let request = EstimateRequest::new(
        "ref-steel",
        "vmc-ref",
        vec![MachiningFeature::milling("spot-face", 0.0)],
        1,
    );

    let estimate = estimator.estimate(&request).unwrap();
    let op = &estimate.operations[0];
    assert_eq!(op.cutting_time_min, 0.0);
    assert!(op.total_time_min > 0.0);
}

#[test]
fn test_finish_and_tolerance_slow_cutting_only() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);

    let plain = estimator.estimate(&one_pocket_request(1)).unwrap();

    let request = EstimateRequest::new(
        "ref-steel",
        "vmc-ref",
        vec![MachiningFeature::milling("pocket", 10_000.0)
            .with_finish(SurfaceFinish::Mirror)
            .with_tolerance(ToleranceClass::Precision)],
        1,
    );
    let tight = estimator.estimate(&request).unwrap();

    let plain_op = &plain.operations[0];
    let tight_op = &tight.operations[0];
    assert!((tight_op.cutting_time_min - 6.25 * 1.6 * 1.3).abs() < 1e-9);
    // Non-cutting overhead is unchanged
    assert!(
        (tight_op.non_cutting_time_min() - plain_op.non_cutting_time_min()).abs() < 1e-12
    );
}

// ============================================================================
// Tool-Change Accounting
// ============================================================================

fn tool_change_registry() -> chipload::InMemoryRegistry {
    let mut registry = reference_registry();
    let mut wc = WorkCenter::new("vmc-tc", "VMC with tool charge", 90.0);
    wc.reposition_min = 0.5;
    wc.tool_change_min = 2.0;
    wc.setup_time_min = 30.0;
    registry.insert_work_center(wc).unwrap();

    let mut milling = reference_milling_params();
    milling.work_center = "vmc-tc".to_string();
    registry.insert_parameters(milling).unwrap();
    registry
}

#[test]
fn test_contiguous_tool_run_charged_once() {
    let registry = tool_change_registry();
    let estimator = Estimator::new(&registry);
    let request = EstimateRequest::new(
        "ref-steel",
        "vmc-tc",
        vec![
            MachiningFeature::milling("rough", 8_000.0).with_tool("T1"),
            MachiningFeature::milling("finish", 1_500.0).with_tool("T1"),
            MachiningFeature::milling("chamfer", 500.0).with_tool("T1"),
        ],
        1,
    );

    let estimate = estimator.estimate(&request).unwrap();
    let charged: f64 = estimate
        .operations
        .iter()
        .map(|op| op.tool_change_time_min)
        .sum();
    assert!((charged - 2.0).abs() < 1e-12);
}

#[test]
fn test_non_contiguous_reuse_charged_again() {
    let registry = tool_change_registry();
    let estimator = Estimator::new(&registry);
    let request = EstimateRequest::new(
        "ref-steel",
        "vmc-tc",
        vec![
            MachiningFeature::milling("rough", 8_000.0).with_tool("T1"),
            MachiningFeature::milling("slot", 2_000.0).with_tool("T2"),
            MachiningFeature::milling("finish", 1_500.0).with_tool("T1"),
        ],
        1,
    );

    let estimate = estimator.estimate(&request).unwrap();
    let flags: Vec<bool> = estimate
        .operations
        .iter()
        .map(|op| op.tool_change_time_min > 0.0)
        .collect();
    assert_eq!(flags, vec![true, true, true]);
}

#[test]
fn test_feature_order_changes_total() {
    let registry = tool_change_registry();
    let estimator = Estimator::new(&registry);

    let grouped = EstimateRequest::new(
        "ref-steel",
        "vmc-tc",
        vec![
            MachiningFeature::milling("a", 1_000.0).with_tool("T1"),
            MachiningFeature::milling("b", 1_000.0).with_tool("T1"),
            MachiningFeature::milling("c", 1_000.0).with_tool("T2"),
        ],
        1,
    );
    let interleaved = EstimateRequest::new(
        "ref-steel",
        "vmc-tc",
        vec![
            MachiningFeature::milling("a", 1_000.0).with_tool("T1"),
            MachiningFeature::milling("c", 1_000.0).with_tool("T2"),
            MachiningFeature::milling("b", 1_000.0).with_tool("T1"),
        ],
        1,
    );

    let grouped = estimator.estimate(&grouped).unwrap();
    let interleaved = estimator.estimate(&interleaved).unwrap();
    assert!(
        (interleaved.batch.cycle_time_min - grouped.batch.cycle_time_min - 2.0).abs() < 1e-9
    );
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn test_unknown_material_fails_whole_estimate() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);
    let request = EstimateRequest::new("unobtanium", "vmc-ref", Vec::new(), 1);

    let err = estimator.estimate(&request).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("unobtanium"));
}

#[test]
fn test_missing_parameters_name_the_feature() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);
    let request = EstimateRequest::new(
        "ref-steel",
        "vmc-ref",
        vec![
            MachiningFeature::milling("pocket", 10_000.0),
            MachiningFeature::grinding("seal-face", 40.0),
        ],
        1,
    );

    let err = estimator.estimate(&request).unwrap_err();
    match err {
        EstimateError::IncompleteEstimate { index, ref feature, .. } => {
            assert_eq!(index, 1);
            assert_eq!(feature, "seal-face");
        }
        other => panic!("expected IncompleteEstimate, got {:?}", other),
    }
}

#[test]
fn test_zero_quantity_rejected() {
    let registry = reference_registry();
    let estimator = Estimator::new(&registry);
    let err = estimator.estimate(&one_pocket_request(0)).unwrap_err();
    assert!(matches!(err, EstimateError::InvalidQuantity { quantity: 0 }));
}
