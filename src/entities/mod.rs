//! Entity type definitions

pub mod cutting;
pub mod estimate;
pub mod feature;
pub mod material;
pub mod work_center;

pub use cutting::{CuttingParameters, OperationKind};
pub use estimate::{BatchEstimate, CostEstimate, OperationEstimate};
pub use feature::{MachiningFeature, Removal, SurfaceFinish, ToleranceClass};
pub use material::{HardnessClass, MaterialCategory, MaterialProfile};
pub use work_center::{Currency, WorkCenter};
