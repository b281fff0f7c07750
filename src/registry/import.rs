//! Registry loading from the filesystem
//!
//! Two ingestion paths:
//! - YAML directories, one record per file, sorted by subdirectory
//!   (`materials/`, `work_centers/`, `cutting_parameters/`)
//! - CSV feed/speed tables, the format vendor data usually arrives in,
//!   with a `units` column so imperial rows (SFM, inches) are converted
//!   to canonical units at the boundary

use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::core::error::EstimateError;
use crate::core::units::{self, UnitSystem};
use crate::entities::cutting::{CuttingParameters, OperationKind};
use crate::entities::material::MaterialProfile;
use crate::entities::work_center::WorkCenter;
use crate::registry::InMemoryRegistry;

/// Outcome of a bulk load
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub materials: usize,
    pub work_centers: usize,
    pub parameters: usize,
    pub skipped: usize,
    /// One message per skipped record, with file/row context
    pub errors: Vec<String>,
}

impl ImportStats {
    /// Total records accepted
    pub fn imported(&self) -> usize {
        self.materials + self.work_centers + self.parameters
    }
}

fn read_yaml<T: serde::de::DeserializeOwned + 'static>(path: &Path) -> Result<T, EstimateError> {
    let content = std::fs::read_to_string(path).map_err(|source| EstimateError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_yml::from_str(&content).map_err(|source| EstimateError::Yaml {
        path: path.display().to_string(),
        source,
    })
}

/// Load every YAML record under a registry directory
///
/// Walks the tree and classifies each `.yaml`/`.yml` file by its parent
/// directory name. Files in unrecognized directories are counted as
/// skipped rather than failing the load; a record that fails to parse or
/// validate is skipped with its error recorded.
pub fn load_yaml_dir(
    registry: &mut InMemoryRegistry,
    root: &Path,
) -> Result<ImportStats, EstimateError> {
    let mut stats = ImportStats::default();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| EstimateError::Io {
            path: root.display().to_string(),
            source: e.into(),
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => {}
            _ => continue,
        }

        let kind = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("");

        let result = match kind {
            "materials" => read_yaml::<MaterialProfile>(path)
                .and_then(|m| registry.insert_material(m))
                .map(|_| &mut stats.materials),
            "work_centers" => read_yaml::<WorkCenter>(path)
                .and_then(|wc| registry.insert_work_center(wc))
                .map(|_| &mut stats.work_centers),
            "cutting_parameters" => read_yaml::<CuttingParameters>(path)
                .and_then(|p| registry.insert_parameters(p))
                .map(|_| &mut stats.parameters),
            _ => {
                stats.skipped += 1;
                continue;
            }
        };

        match result {
            Ok(counter) => *counter += 1,
            Err(e) => {
                stats.skipped += 1;
                stats.errors.push(format!("{}: {}", path.display(), e));
            }
        }
    }

    Ok(stats)
}

/// One row of a vendor feed/speed CSV
#[derive(Debug, Deserialize)]
struct CuttingRow {
    material: String,
    operation: String,
    work_center: String,
    #[serde(default)]
    units: Option<String>,
    /// rpm for metric rows; imperial rows may give `surface_speed` instead
    #[serde(default)]
    spindle_speed: Option<f64>,
    /// SFM, converted to rpm using the tool diameter
    #[serde(default)]
    surface_speed: Option<f64>,
    feed_per_tooth: f64,
    #[serde(default)]
    feed_per_rev: Option<f64>,
    depth_of_cut: f64,
    tool_diameter: f64,
    flutes: u32,
    #[serde(default)]
    tool: Option<String>,
}

impl CuttingRow {
    fn into_parameters(self, path: &str, row: usize) -> Result<CuttingParameters, EstimateError> {
        let bad = |problem: String| EstimateError::Import {
            path: path.to_string(),
            row,
            problem,
        };

        let operation: OperationKind =
            self.operation.parse().map_err(bad)?;
        let system: UnitSystem = match &self.units {
            Some(u) => u.parse().map_err(bad)?,
            None => UnitSystem::Metric,
        };

        let (feed_per_tooth_mm, feed_per_rev_mm, depth_of_cut_mm, tool_diameter_mm) = match system
        {
            UnitSystem::Metric => (
                self.feed_per_tooth,
                self.feed_per_rev,
                self.depth_of_cut,
                self.tool_diameter,
            ),
            UnitSystem::Imperial => (
                units::mm_from_in(self.feed_per_tooth),
                self.feed_per_rev.map(units::mm_from_in),
                units::mm_from_in(self.depth_of_cut),
                units::mm_from_in(self.tool_diameter),
            ),
        };

        let spindle_speed_rpm = match (self.spindle_speed, self.surface_speed) {
            (Some(rpm), _) => rpm,
            (None, Some(sfm)) => units::rpm_from_sfm(sfm, tool_diameter_mm),
            (None, None) => {
                return Err(bad("missing spindle_speed or surface_speed".to_string()))
            }
        };

        Ok(CuttingParameters {
            material: self.material,
            operation,
            work_center: self.work_center,
            spindle_speed_rpm,
            spindle_speed_limits: None,
            feed_per_tooth_mm,
            feed_per_rev_mm,
            depth_of_cut_mm,
            depth_of_cut_limits: None,
            tool_diameter_mm,
            flute_count: self.flutes,
            tool: self.tool,
        })
    }
}

/// Import cutting parameters from a CSV feed/speed table
///
/// Malformed or non-physical rows are skipped and recorded in the stats;
/// a well-formed file never fails part-way through.
pub fn import_cutting_csv(
    registry: &mut InMemoryRegistry,
    path: &Path,
) -> Result<ImportStats, EstimateError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| EstimateError::Import {
        path: path.display().to_string(),
        row: 0,
        problem: e.to_string(),
    })?;

    let display = path.display().to_string();
    let mut stats = ImportStats::default();

    for (idx, record) in reader.deserialize::<CuttingRow>().enumerate() {
        // Row 1 is the header
        let row = idx + 2;
        let result = record
            .map_err(|e| EstimateError::Import {
                path: display.clone(),
                row,
                problem: e.to_string(),
            })
            .and_then(|r| r.into_parameters(&display, row))
            .and_then(|params| registry.insert_parameters(params));

        match result {
            Ok(()) => stats.parameters += 1,
            Err(e) => {
                stats.skipped += 1;
                stats.errors.push(e.to_string());
            }
        }
    }

    Ok(stats)
}
