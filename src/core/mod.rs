//! Core module - the estimation engine and its numeric models

pub mod batch;
pub mod error;
pub mod estimator;
pub mod mrr;
pub mod operation;
pub mod units;

pub use batch::aggregate;
pub use error::{EstimateError, RecordKind};
pub use estimator::{EstimateRequest, Estimator};
pub use mrr::{cutting_time, removal_rate, CuttingTime};
pub use operation::{estimate_operation, reposition_time, tool_change_flags};
pub use units::UnitSystem;
