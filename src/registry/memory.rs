//! In-memory registry backing store

use std::collections::HashMap;

use crate::core::error::{EstimateError, RecordKind};
use crate::entities::cutting::{CuttingParameters, OperationKind};
use crate::entities::material::MaterialProfile;
use crate::entities::work_center::WorkCenter;
use crate::registry::ParameterRegistry;

/// Hash-map backed registry of materials, work centers, and cutting parameters
///
/// Every insert validates the record first, so anything resolvable through
/// a lookup is already known to be physically plausible. Re-inserting an
/// existing key replaces the record (last load wins, which lets a shop
/// overlay the embedded baseline with its own numbers).
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistry {
    materials: HashMap<String, MaterialProfile>,
    work_centers: HashMap<String, WorkCenter>,
    parameters: HashMap<String, CuttingParameters>,
}

impl InMemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a material profile
    pub fn insert_material(&mut self, material: MaterialProfile) -> Result<(), EstimateError> {
        material.validate()?;
        self.materials.insert(material.id.clone(), material);
        Ok(())
    }

    /// Validate and insert a work center
    pub fn insert_work_center(&mut self, work_center: WorkCenter) -> Result<(), EstimateError> {
        work_center.validate()?;
        self.work_centers.insert(work_center.id.clone(), work_center);
        Ok(())
    }

    /// Validate and insert a cutting parameter record
    pub fn insert_parameters(&mut self, params: CuttingParameters) -> Result<(), EstimateError> {
        params.validate()?;
        self.parameters.insert(params.key(), params);
        Ok(())
    }

    /// Number of material profiles
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Number of work centers
    pub fn work_center_count(&self) -> usize {
        self.work_centers.len()
    }

    /// Number of cutting parameter records
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Iterate material profiles in unspecified order
    pub fn materials(&self) -> impl Iterator<Item = &MaterialProfile> {
        self.materials.values()
    }

    /// Iterate work centers in unspecified order
    pub fn work_centers(&self) -> impl Iterator<Item = &WorkCenter> {
        self.work_centers.values()
    }
}

impl ParameterRegistry for InMemoryRegistry {
    fn lookup_material(&self, id: &str) -> Result<&MaterialProfile, EstimateError> {
        self.materials.get(id).ok_or_else(|| EstimateError::NotFound {
            record: RecordKind::Material,
            key: id.to_string(),
        })
    }

    fn lookup_work_center(&self, id: &str) -> Result<&WorkCenter, EstimateError> {
        self.work_centers
            .get(id)
            .ok_or_else(|| EstimateError::NotFound {
                record: RecordKind::WorkCenter,
                key: id.to_string(),
            })
    }

    fn lookup(
        &self,
        material: &str,
        operation: OperationKind,
        work_center: &str,
    ) -> Result<&CuttingParameters, EstimateError> {
        let key = format!("{}/{}/{}", material, operation.as_str(), work_center);
        self.parameters
            .get(&key)
            .ok_or(EstimateError::NotFound {
                record: RecordKind::CuttingParameters,
                key,
            })
    }
}
