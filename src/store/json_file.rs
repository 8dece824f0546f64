use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Product;

use super::traits::CatalogStore;
use super::StoreError;

/// Catalog store backed by a single JSON file.
///
/// Reads happen per request and writes go straight through; there is no
/// process-lifetime cache to go stale. A missing file is an empty catalog,
/// so first boot needs no setup step. Legacy bare-string stock units in an
/// existing file are normalized to the structured form on load and written
/// back structured on the next save.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(products)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
