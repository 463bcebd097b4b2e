use std::collections::HashMap;
use std::path::Path;

use campusmap_shared::{
    loader,
    models::{DatasetKind, FieldEntry},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AssetError;

/// Read-only data served by the API, loaded once at startup.
pub struct Assets {
    pub fields: Vec<FieldEntry>,
    datasets: HashMap<DatasetKind, Value>,
}

impl Assets {
    /// Load `fields.json` and one `<kind>.json` per dataset kind from `assets_dir`.
    pub fn load(assets_dir: &Path) -> Result<Self, AssetError> {
        let fields: Vec<FieldEntry> = read_json(&assets_dir.join("fields.json"))?;

        let mut datasets = HashMap::new();
        for kind in DatasetKind::ALL {
            let data: Value = read_json(&assets_dir.join(format!("{kind}.json")))?;
            datasets.insert(kind, data);
        }

        let assets = Self::from_parts(fields, datasets)?;
        tracing::info!(
            fields = assets.fields.len(),
            datasets = assets.datasets.len(),
            "Loaded campus assets"
        );
        Ok(assets)
    }

    /// Assemble from already-parsed data, rejecting datasets that do not flatten.
    pub fn from_parts(
        fields: Vec<FieldEntry>,
        datasets: HashMap<DatasetKind, Value>,
    ) -> Result<Self, AssetError> {
        for (kind, data) in &datasets {
            let campuses = loader::flatten_dataset(data)
                .map_err(|source| AssetError::Shape { kind: *kind, source })?;
            tracing::debug!(%kind, campuses = campuses.len(), "Validated dataset");
        }
        Ok(Self { fields, datasets })
    }

    pub fn dataset(&self, kind: DatasetKind) -> Option<&Value> {
        self.datasets.get(&kind)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AssetError> {
    let data = std::fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| AssetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
