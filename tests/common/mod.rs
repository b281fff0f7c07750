//! Shared test helpers for integration tests

#![allow(dead_code)]

use chipload::{
    CuttingParameters, HardnessClass, InMemoryRegistry, MaterialCategory, MaterialProfile,
    OperationKind, WorkCenter,
};

/// Reference material: machinability 1.0, steel density, 2.00/kg
pub fn reference_material() -> MaterialProfile {
    MaterialProfile {
        id: "ref-steel".to_string(),
        name: "Reference Steel".to_string(),
        category: MaterialCategory::LowAlloySteel,
        hardness: HardnessClass::Medium,
        hardness_hb: Some(126),
        machinability: 1.0,
        density_g_cm3: 7.85,
        specific_cutting_energy_j_mm3: None,
        unit_cost_per_kg: 2.0,
        entity_revision: 1,
        updated: None,
    }
}

/// Work center with the reference overheads: 0.5 min reposition,
/// 30 min setup, no tool-change charge
pub fn reference_work_center() -> WorkCenter {
    let mut wc = WorkCenter::new("vmc-ref", "Reference VMC", 90.0);
    wc.reposition_min = 0.5;
    wc.tool_change_min = 0.0;
    wc.setup_time_min = 30.0;
    wc
}

/// Milling parameters that yield exactly 1600 mm^3/min at machinability 1.0
pub fn reference_milling_params() -> CuttingParameters {
    CuttingParameters {
        material: "ref-steel".to_string(),
        operation: OperationKind::Milling,
        work_center: "vmc-ref".to_string(),
        spindle_speed_rpm: 2000.0,
        spindle_speed_limits: None,
        feed_per_tooth_mm: 0.1,
        feed_per_rev_mm: None,
        depth_of_cut_mm: 2.0,
        depth_of_cut_limits: None,
        tool_diameter_mm: 10.0,
        flute_count: 4,
        tool: None,
    }
}

/// Registry holding the reference material, work center, and milling plus
/// drilling parameters
pub fn reference_registry() -> InMemoryRegistry {
    let mut registry = InMemoryRegistry::new();
    registry.insert_material(reference_material()).unwrap();
    registry
        .insert_work_center(reference_work_center())
        .unwrap();
    registry
        .insert_parameters(reference_milling_params())
        .unwrap();

    let mut drilling = reference_milling_params();
    drilling.operation = OperationKind::Drilling;
    drilling.flute_count = 2;
    drilling.tool_diameter_mm = 8.0;
    registry.insert_parameters(drilling).unwrap();

    registry
}
