use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to write config file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file '{0}' already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("No document id configured")]
    MissingDocumentId,

    #[error("No rendered document configured")]
    MissingDocument,

    #[error("Comment store '{kind}' requires '{field}'")]
    IncompleteStore { kind: String, field: &'static str },
}

/// Failures of the comment-store capability. Always fatal: no retry and
/// no partial roster.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read comment file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse comments: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No page for token '{0}'")]
    UnknownPageToken(String),

    #[error("Failed to launch '{binary}': {source}")]
    Spawn {
        binary: PathBuf,
        source: std::io::Error,
    },

    #[error("Comment command failed with exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write document '{path}': {source}")]
    WriteDocument {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
