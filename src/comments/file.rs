use super::{Comment, CommentPage, CommentStore, ListRequest};
use crate::error::StoreError;
use serde::Deserialize;
use std::path::PathBuf;

/// Comment store backed by a JSON export of comment pages.
///
/// The file holds `{"pages": [...]}` where each page carries the
/// `pageToken` that requests it (absent for the first page), or a single
/// bare page. The file is re-read on every call so that repeated runs see
/// edits to the export.
pub struct FileCommentStore {
    path: PathBuf,
}

enum CommentExport {
    Paged(Vec<ExportPage>),
    Single(CommentPage),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PagedExport {
    pages: Vec<ExportPage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ExportPage {
    #[serde(default)]
    page_token: Option<String>,
    #[serde(default)]
    comments: Option<Vec<Comment>>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl From<ExportPage> for CommentPage {
    fn from(page: ExportPage) -> Self {
        CommentPage {
            comments: page.comments,
            next_page_token: page.next_page_token,
        }
    }
}

impl FileCommentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<CommentExport, StoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| StoreError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        // Shape is decided by the `pages` key alone.
        if value.get("pages").is_some() {
            let export: PagedExport = serde_json::from_value(value)?;
            Ok(CommentExport::Paged(export.pages))
        } else {
            Ok(CommentExport::Single(serde_json::from_value(value)?))
        }
    }
}

impl CommentStore for FileCommentStore {
    fn list(&self, _document_id: &str, request: &ListRequest) -> Result<CommentPage, StoreError> {
        match self.load()? {
            CommentExport::Single(page) => match &request.page_token {
                None => Ok(page),
                Some(token) => Err(StoreError::UnknownPageToken(token.clone())),
            },
            CommentExport::Paged(pages) => pages
                .into_iter()
                .find(|p| p.page_token == request.page_token)
                .map(CommentPage::from)
                .ok_or_else(|| {
                    StoreError::UnknownPageToken(request.page_token.clone().unwrap_or_default())
                }),
        }
    }
}
