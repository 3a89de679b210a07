//! Document comments as served by a comment store.
//!
//! Field names follow the Drive comments resource (`displayName`,
//! `nextPageToken`, ...) so store output can be deserialized directly.

mod command;
mod fetch;
mod file;

pub use command::CommandCommentStore;
pub use fetch::fetch_all;
pub use file::FileCommentStore;

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Projection requested from the store. Only these fields are consumed.
pub const COMMENT_FIELDS: &str = "nextPageToken, comments(deleted, resolved, content, author(displayName, emailAddress), replies(deleted, content, action, author(displayName)))";

/// Reply action recorded when a thread is resolved.
pub const RESOLVE_ACTION: &str = "resolve";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl Reply {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref()?.display_name.as_deref()
    }

    pub fn is_resolve(&self) -> bool {
        self.action.as_deref() == Some(RESOLVE_ACTION)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref()?.display_name.as_deref()
    }
}

/// One page of a comment listing.
///
/// Unknown top-level keys are rejected: the store is asked for the
/// `COMMENT_FIELDS` projection only, so anything else (an `error` object,
/// a differently shaped export) means the page did not come back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommentPage {
    /// Absent when the store has nothing on this page.
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Parameters of a single `list` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub page_token: Option<String>,
    pub include_deleted: bool,
    pub fields: &'static str,
}

impl ListRequest {
    pub fn first_page() -> Self {
        Self {
            page_token: None,
            include_deleted: true,
            fields: COMMENT_FIELDS,
        }
    }

    pub fn with_page_token(token: String) -> Self {
        Self {
            page_token: Some(token),
            ..Self::first_page()
        }
    }
}

/// Read-only, paged access to the comments of a document.
pub trait CommentStore {
    fn list(&self, document_id: &str, request: &ListRequest) -> Result<CommentPage, StoreError>;
}
