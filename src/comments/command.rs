use super::{CommentPage, CommentStore, ListRequest};
use crate::error::StoreError;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Comment store that shells out to an external lister (a Drive API
/// wrapper, a `gcloud`/`gws` script, ...) and reads one JSON page from its
/// stdout.
///
/// `{document_id}` and `{fields}` in `args` are substituted; the page token
/// and the include-deleted switch are appended as flags.
pub struct CommandCommentStore {
    binary: PathBuf,
    args: Vec<String>,
    page_token_flag: String,
    include_deleted_flag: Option<String>,
}

impl CommandCommentStore {
    pub fn new(
        binary: PathBuf,
        args: Vec<String>,
        page_token_flag: String,
        include_deleted_flag: Option<String>,
    ) -> Self {
        Self {
            binary,
            args,
            page_token_flag,
            include_deleted_flag,
        }
    }

    fn build_args(&self, document_id: &str, request: &ListRequest) -> Vec<String> {
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|a| {
                a.replace("{document_id}", document_id)
                    .replace("{fields}", request.fields)
            })
            .collect();

        if request.include_deleted {
            if let Some(flag) = &self.include_deleted_flag {
                args.push(flag.clone());
            }
        }

        if let Some(token) = &request.page_token {
            args.push(self.page_token_flag.clone());
            args.push(token.clone());
        }

        args
    }
}

impl CommentStore for CommandCommentStore {
    fn list(&self, document_id: &str, request: &ListRequest) -> Result<CommentPage, StoreError> {
        let args = self.build_args(document_id, request);
        debug!("Running {} {:?}", self.binary.display(), args);

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|e| StoreError::Spawn {
                binary: self.binary.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StoreError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
