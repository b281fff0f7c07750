//! Parameter registry - reference data resolution
//!
//! The estimation engine never carries its own data; every call resolves
//! materials, work centers, and cutting parameters through a registry
//! handed in by the caller. `InMemoryRegistry` is the standard backing
//! store; it can be filled by hand, from the embedded baseline dataset,
//! from a YAML directory, or from CSV imports.

pub mod embedded;
pub mod import;
pub mod memory;

pub use import::{import_cutting_csv, load_yaml_dir, ImportStats};
pub use memory::InMemoryRegistry;

use crate::core::error::EstimateError;
use crate::entities::cutting::{CuttingParameters, OperationKind};
use crate::entities::material::MaterialProfile;
use crate::entities::work_center::WorkCenter;

/// Read-only resolution of reference records by key
///
/// `Sync` so one registry can serve concurrent estimates. Lookups return
/// borrowed records; all mutation happens before estimation starts.
pub trait ParameterRegistry: Sync {
    /// Resolve a material profile by id
    fn lookup_material(&self, id: &str) -> Result<&MaterialProfile, EstimateError>;

    /// Resolve a work center by id
    fn lookup_work_center(&self, id: &str) -> Result<&WorkCenter, EstimateError>;

    /// Resolve cutting parameters for a material/operation/work-center triple
    fn lookup(
        &self,
        material: &str,
        operation: OperationKind,
        work_center: &str,
    ) -> Result<&CuttingParameters, EstimateError>;
}
