use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Identifier of the document whose comments are scanned.
    #[serde(default)]
    pub document_id: Option<String>,

    /// Text document holding the rendered status table.
    #[serde(default)]
    pub document: Option<PathBuf>,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub table: TableConfig,

    /// Where `status` writes roster reports, if anywhere.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// JSON export of comment pages on disk.
    #[default]
    File,
    /// External command printing one JSON page per invocation.
    Command,
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::File => write!(f, "file"),
            StoreKind::Command => write!(f, "command"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct StoreConfig {
    #[serde(default)]
    pub kind: StoreKind,

    /// Comment export (file store).
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Lister binary (command store).
    #[serde(default)]
    pub binary: Option<PathBuf>,

    /// Arguments; `{document_id}` and `{fields}` are substituted.
    #[serde(default = "default_store_args")]
    pub args: Vec<String>,

    #[serde(default = "default_page_token_flag")]
    pub page_token_flag: String,

    #[serde(default = "default_include_deleted_flag")]
    pub include_deleted_flag: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::default(),
            path: None,
            binary: None,
            args: default_store_args(),
            page_token_flag: default_page_token_flag(),
            include_deleted_flag: default_include_deleted_flag(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct TableConfig {
    /// Marker text replaced by the table on first sync.
    #[serde(default = "default_anchor")]
    pub anchor: String,

    /// First header cell identifying the rendered table.
    #[serde(default = "default_header")]
    pub header: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
            header: default_header(),
        }
    }
}
