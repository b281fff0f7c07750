//! Embedded baseline dataset
//!
//! A small, vetted set of common shop materials, work centers, and cutting
//! parameters compiled into the binary, so the engine can estimate out of
//! the box. Shops overlay their own records on top; later inserts replace
//! baseline entries with the same key.

use rust_embed::Embed;
use serde::de::DeserializeOwned;

use crate::core::error::EstimateError;
use crate::registry::InMemoryRegistry;

#[derive(Embed)]
#[folder = "data/"]
struct EmbeddedData;

fn parse_embedded<T: DeserializeOwned + 'static>(filename: &str) -> Result<Vec<T>, EstimateError> {
    let file = EmbeddedData::get(filename).ok_or_else(|| EstimateError::Io {
        path: filename.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "embedded file missing"),
    })?;
    serde_yml::from_slice(&file.data).map_err(|source| EstimateError::Yaml {
        path: filename.to_string(),
        source,
    })
}

impl InMemoryRegistry {
    /// Create a registry seeded with the embedded baseline dataset
    pub fn with_builtin() -> Result<Self, EstimateError> {
        let mut registry = Self::new();

        for material in parse_embedded("materials.yaml")? {
            registry.insert_material(material)?;
        }
        for work_center in parse_embedded("work_centers.yaml")? {
            registry.insert_work_center(work_center)?;
        }
        for params in parse_embedded("cutting_parameters.yaml")? {
            registry.insert_parameters(params)?;
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::cutting::OperationKind;
    use crate::registry::ParameterRegistry;

    #[test]
    fn test_builtin_dataset_loads() {
        let registry = InMemoryRegistry::with_builtin().unwrap();
        assert!(registry.material_count() >= 6);
        assert!(registry.work_center_count() >= 3);
        assert!(registry.parameter_count() >= 8);
    }

    #[test]
    fn test_builtin_records_resolve() {
        let registry = InMemoryRegistry::with_builtin().unwrap();
        let aluminum = registry.lookup_material("al-6061").unwrap();
        assert!(aluminum.machinability > 1.0);

        registry.lookup_work_center("vmc-3axis").unwrap();
        registry
            .lookup("al-6061", OperationKind::Milling, "vmc-3axis")
            .unwrap();
    }

    #[test]
    fn test_builtin_machinability_ordering() {
        // Aluminum cuts faster than mild steel, which cuts faster than
        // stainless. The baseline must respect that ordering.
        let registry = InMemoryRegistry::with_builtin().unwrap();
        let al = registry.lookup_material("al-6061").unwrap().machinability;
        let steel = registry.lookup_material("steel-1018").unwrap().machinability;
        let ss = registry.lookup_material("ss-304").unwrap().machinability;
        assert!(al > steel);
        assert!(steel > ss);
    }
}
