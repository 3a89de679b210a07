mod defaults;
mod types;

pub use types::*;

use crate::comments::{CommandCommentStore, CommentStore, FileCommentStore};
use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            document_id: None,
            document: None,
            store: StoreConfig::default(),
            table: TableConfig::default(),
            report_dir: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the settings needed to fetch comments
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.document_id()?;

        match self.store.kind {
            StoreKind::File if self.store.path.is_none() => Err(ConfigError::IncompleteStore {
                kind: self.store.kind.to_string(),
                field: "path",
            }),
            StoreKind::Command if self.store.binary.is_none() => {
                Err(ConfigError::IncompleteStore {
                    kind: self.store.kind.to_string(),
                    field: "binary",
                })
            }
            _ => Ok(()),
        }
    }

    pub fn document_id(&self) -> Result<&str, ConfigError> {
        self.document_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingDocumentId)
    }

    pub fn document(&self) -> Result<&Path, ConfigError> {
        self.document.as_deref().ok_or(ConfigError::MissingDocument)
    }

    /// Build the configured comment store. Call [`Config::validate`] first.
    pub fn comment_store(&self) -> Result<Box<dyn CommentStore>, ConfigError> {
        let store = &self.store;
        match store.kind {
            StoreKind::File => {
                let path = store.path.clone().ok_or(ConfigError::IncompleteStore {
                    kind: store.kind.to_string(),
                    field: "path",
                })?;
                Ok(Box::new(FileCommentStore::new(path)))
            }
            StoreKind::Command => {
                let binary = store.binary.clone().ok_or(ConfigError::IncompleteStore {
                    kind: store.kind.to_string(),
                    field: "binary",
                })?;
                Ok(Box::new(CommandCommentStore::new(
                    binary,
                    store.args.clone(),
                    store.page_token_flag.clone(),
                    store.include_deleted_flag.clone(),
                )))
            }
        }
    }
}
