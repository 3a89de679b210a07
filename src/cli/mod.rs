pub mod check;
pub mod init;
pub mod schema;
pub mod status;
pub mod sync;

use crate::comments::fetch_all;
use crate::config::Config;
use crate::review::{aggregate, ReviewerInfoStatus};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "docreview")]
#[command(
    author,
    version,
    about = "Track document review sign-off from reviewer annotations in comments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch comments and print the review roster
    Status(StatusArgs),

    /// Exit 1 if the document's status table is stale or missing (CI mode)
    Check(CheckArgs),

    /// Create or refresh the status table in the document
    Sync(SyncArgs),

    /// Write a starter config file
    Init(InitArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct SourceArgs {
    /// Path to config file
    #[arg(short, long, default_value = "docreview.yaml", env = "DOCREVIEW_CONFIG")]
    pub config: PathBuf,

    /// Override the document id
    #[arg(long)]
    pub document_id: Option<String>,
}

#[derive(Parser, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the roster as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write roster.json and roster.md into this directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Override the document holding the status table
    #[arg(long)]
    pub document: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct SyncArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Override the document holding the status table
    #[arg(long)]
    pub document: Option<PathBuf>,

    /// Show the outcome without writing the document
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the config
    #[arg(short, long, default_value = "docreview.yaml")]
    pub config: PathBuf,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

impl SourceArgs {
    /// Load the config file and apply CLI overrides.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        info!("Loading config from {:?}", self.config);
        let mut config = Config::load(&self.config)?;

        if let Some(document_id) = &self.document_id {
            config.document_id = Some(document_id.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Fetch every comment of the configured document and aggregate the roster.
pub fn fetch_roster(config: &Config) -> anyhow::Result<Vec<ReviewerInfoStatus>> {
    let document_id = config.document_id()?;
    let store = config.comment_store()?;

    info!(
        "Fetching comments for document {} from {} store",
        document_id, config.store.kind
    );
    let comments = fetch_all(store.as_ref(), document_id)?;
    let roster = aggregate(&comments);
    info!(
        "Found {} reviewers in {} comments",
        roster.len(),
        comments.len()
    );

    Ok(roster)
}
