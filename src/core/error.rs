//! Error taxonomy for the estimation engine
//!
//! No error is retried (all inputs are deterministic and local) and none is
//! swallowed: everything propagates to the orchestrator boundary with enough
//! context to produce an actionable message.

use miette::Diagnostic;
use thiserror::Error;

/// Kind of reference record involved in a lookup or validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Material,
    CuttingParameters,
    WorkCenter,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Material => write!(f, "material"),
            RecordKind::CuttingParameters => write!(f, "cutting parameters"),
            RecordKind::WorkCenter => write!(f, "work center"),
        }
    }
}

/// Errors produced by the estimation engine and its data layer
#[derive(Debug, Error, Diagnostic)]
pub enum EstimateError {
    /// A required reference record is missing. Always fatal to the current
    /// estimate; missing data is never defaulted.
    #[error("{record} not found: {key}")]
    #[diagnostic(code(chipload::not_found))]
    NotFound { record: RecordKind, key: String },

    /// A computed rate or time came out non-positive or non-finite
    #[error("non-physical {quantity} ({value}) while estimating {context}")]
    #[diagnostic(code(chipload::non_physical))]
    NonPhysicalParameter {
        quantity: &'static str,
        value: f64,
        context: String,
    },

    /// Batch quantity contract violation, caught before any computation
    #[error("batch quantity must be a positive integer, got {quantity}")]
    #[diagnostic(code(chipload::invalid_quantity))]
    InvalidQuantity { quantity: u32 },

    /// One feature failed resolution, so the whole part estimate is aborted.
    /// A total that silently omits an operation is never reported.
    #[error("estimate aborted at feature {index} ('{feature}')")]
    #[diagnostic(code(chipload::incomplete_estimate))]
    IncompleteEstimate {
        index: usize,
        feature: String,
        #[source]
        source: Box<EstimateError>,
    },

    /// A reference record failed ingestion validation
    #[error("invalid {record} record '{key}': {problem}")]
    #[diagnostic(code(chipload::validation))]
    Validation {
        record: RecordKind,
        key: String,
        problem: String,
    },

    /// A data file could not be read
    #[error("failed to read {path}")]
    #[diagnostic(code(chipload::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A YAML record could not be parsed
    #[error("failed to parse {path}")]
    #[diagnostic(code(chipload::yaml))]
    Yaml {
        path: String,
        #[source]
        source: serde_yml::Error,
    },

    /// A CSV row could not be imported
    #[error("import error in {path} at row {row}: {problem}")]
    #[diagnostic(code(chipload::import))]
    Import {
        path: String,
        row: usize,
        problem: String,
    },
}

impl EstimateError {
    /// Whether this error (or, for an aborted estimate, its cause) is a
    /// missing-record failure
    pub fn is_not_found(&self) -> bool {
        match self {
            EstimateError::NotFound { .. } => true,
            EstimateError::IncompleteEstimate { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}
