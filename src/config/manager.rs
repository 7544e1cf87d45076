use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{account::AccountConfig, common::CommonConfig};
use crate::error::{ConfigToolError, Result};

/// The full persisted configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    pub common: CommonConfig,
    pub account_configs: Vec<AccountConfig>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Storage collaborator. The reconciliation core only needs read/write;
/// format and location stay behind this trait so the tests can swap in an
/// in-memory store.
pub trait ConfigStore {
    fn read(&self) -> Result<ConfigDocument>;
    fn write(&self, doc: &ConfigDocument) -> Result<()>;
}

/// On-disk TOML storage, the format the helper itself consumes.
pub struct TomlStore {
    path: PathBuf,
}

impl TomlStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for TomlStore {
    fn read(&self) -> Result<ConfigDocument> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| ConfigToolError::StorageUnavailable(e.to_string()))?;

        toml::from_str(&contents).map_err(|e| ConfigToolError::StorageUnavailable(e.to_string()))
    }

    fn write(&self, doc: &ConfigDocument) -> Result<()> {
        let toml_str = toml::to_string_pretty(doc)
            .map_err(|e| ConfigToolError::StorageWriteFailed(e.to_string()))?;

        std::fs::write(&self.path, toml_str)
            .map_err(|e| ConfigToolError::StorageWriteFailed(e.to_string()))
    }
}
