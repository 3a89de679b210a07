use crate::cli::InitArgs;
use crate::error::ConfigError;
use tracing::info;

const STARTER_CONFIG: &str = r##"version: 1

# Document whose comments carry reviewer annotations such as
#   @jane@example.com (Jane Doe), approver, Security
document_id: "REPLACE_ME"

# Text document that holds the status table. `sync` replaces the anchor
# line with the table, then keeps the table current on later runs.
document: review.md

store:
  # file: read a JSON export of comment pages
  # command: run a lister that prints one JSON page per call
  kind: file
  path: comments.json
  # binary: drive-comments
  # args: ["list", "{document_id}", "--fields", "{fields}"]
  # page_token_flag: "--page-token"
  # include_deleted_flag: "--include-deleted"

table:
  anchor: "#insertDocReviewTable"
  header: "#DocReview"
"##;

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    if args.config.exists() && !args.force {
        return Err(ConfigError::AlreadyExists(args.config).into());
    }

    std::fs::write(&args.config, STARTER_CONFIG).map_err(|e| ConfigError::WriteFile {
        path: args.config.clone(),
        source: e,
    })?;

    info!("Wrote starter config to {:?}", args.config);
    println!("Created {}", args.config.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, StoreKind};

    #[test]
    fn test_starter_config_parses() {
        let config: Config = serde_yaml::from_str(STARTER_CONFIG).unwrap();
        assert_eq!(config.document_id.as_deref(), Some("REPLACE_ME"));
        assert_eq!(config.store.kind, StoreKind::File);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docreview.yaml");
        std::fs::write(&path, "keep me").unwrap();

        let err = execute(InitArgs {
            config: path.clone(),
            force: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        execute(InitArgs {
            config: path.clone(),
            force: true,
        })
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), STARTER_CONFIG);
    }
}
