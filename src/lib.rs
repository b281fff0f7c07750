//! Chipload: physics-based machining time and cost estimation
//!
//! Turns part geometry (ordered machining features with removal volumes)
//! plus reference data (materials, work centers, cutting parameters) into
//! deterministic batch time and cost estimates for quoting.
//!
//! ```no_run
//! use chipload::{EstimateRequest, Estimator, InMemoryRegistry, MachiningFeature};
//!
//! # fn main() -> Result<(), chipload::EstimateError> {
//! let registry = InMemoryRegistry::with_builtin()?;
//! let estimator = Estimator::new(&registry);
//!
//! let request = EstimateRequest::new(
//!     "al-6061",
//!     "vmc-3axis",
//!     vec![MachiningFeature::milling("pocket", 12_500.0)],
//!     25,
//! );
//! let estimate = estimator.estimate(&request)?;
//! println!("{:.2} {} per part", estimate.cost_per_unit(), estimate.currency);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod entities;
pub mod registry;

pub use crate::core::{EstimateError, EstimateRequest, Estimator, RecordKind, UnitSystem};
pub use entities::{
    BatchEstimate, CostEstimate, CuttingParameters, Currency, HardnessClass, MachiningFeature,
    MaterialCategory, MaterialProfile, OperationEstimate, OperationKind, Removal, SurfaceFinish,
    ToleranceClass, WorkCenter,
};
pub use registry::{
    import_cutting_csv, load_yaml_dir, ImportStats, InMemoryRegistry, ParameterRegistry,
};
