use super::{Comment, CommentStore, ListRequest};
use crate::error::StoreError;
use tracing::debug;

/// Fetch every comment of a document, following page tokens until the
/// store stops returning one. Pages are requested sequentially; the first
/// failure aborts the whole fetch.
pub fn fetch_all<S>(store: &S, document_id: &str) -> Result<Vec<Comment>, StoreError>
where
    S: CommentStore + ?Sized,
{
    let mut comments = Vec::new();
    let mut request = ListRequest::first_page();
    let mut pages = 0;

    loop {
        let page = store.list(document_id, &request)?;
        pages += 1;

        let page_comments = page.comments.unwrap_or_default();
        debug!(
            "Fetched page {} of {} ({} comments)",
            pages,
            document_id,
            page_comments.len()
        );
        comments.extend(page_comments);

        match page.next_page_token.filter(|t| !t.is_empty()) {
            Some(token) => request = ListRequest::with_page_token(token),
            None => break,
        }
    }

    debug!(
        "Fetched {} comments across {} pages",
        comments.len(),
        pages
    );
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::testing::{comment, MemoryStore};
    use crate::comments::CommentPage;

    #[test]
    fn test_single_page() {
        let store = MemoryStore::single_page(vec![comment("a", "Me"), comment("b", "You")]);
        let comments = fetch_all(&store, "doc-1").unwrap();
        assert_eq!(comments.len(), 2);

        let requests = store.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "doc-1");
        assert_eq!(requests[0].1, ListRequest::first_page());
    }

    #[test]
    fn test_follows_page_tokens_in_order() {
        let mut store = MemoryStore::default();
        store.pages.insert(
            None,
            CommentPage {
                comments: Some(vec![comment("1", "A"), comment("2", "A")]),
                next_page_token: Some("page2".to_string()),
            },
        );
        store.pages.insert(
            Some("page2".to_string()),
            CommentPage {
                comments: Some(vec![comment("3", "B")]),
                next_page_token: Some("page3".to_string()),
            },
        );
        store.pages.insert(
            Some("page3".to_string()),
            CommentPage {
                comments: Some(vec![comment("4", "C")]),
                next_page_token: None,
            },
        );

        let comments = fetch_all(&store, "doc").unwrap();
        let contents: Vec<_> = comments
            .iter()
            .map(|c| c.content.clone().unwrap())
            .collect();
        assert_eq!(contents, vec!["1", "2", "3", "4"]);

        let tokens: Vec<_> = store
            .requests
            .borrow()
            .iter()
            .map(|(_, r)| r.page_token.clone())
            .collect();
        assert_eq!(
            tokens,
            vec![None, Some("page2".to_string()), Some("page3".to_string())]
        );
        assert!(store.requests.borrow().iter().all(|(_, r)| r.include_deleted));
    }

    #[test]
    fn test_empty_token_ends_pagination() {
        let mut store = MemoryStore::default();
        store.pages.insert(
            None,
            CommentPage {
                comments: Some(vec![comment("1", "A")]),
                next_page_token: Some(String::new()),
            },
        );
        assert_eq!(fetch_all(&store, "doc").unwrap().len(), 1);
        assert_eq!(store.requests.borrow().len(), 1);
    }

    #[test]
    fn test_page_without_comments_still_paginates() {
        let mut store = MemoryStore::default();
        store.pages.insert(
            None,
            CommentPage {
                comments: None,
                next_page_token: Some("page2".to_string()),
            },
        );
        store.pages.insert(
            Some("page2".to_string()),
            CommentPage {
                comments: Some(vec![comment("late", "A")]),
                next_page_token: None,
            },
        );
        let comments = fetch_all(&store, "doc").unwrap();
        assert_eq!(comments.len(), 1);
    }

    #[test]
    fn test_page_failure_is_fatal() {
        let mut store = MemoryStore::default();
        store.pages.insert(
            None,
            CommentPage {
                comments: Some(vec![comment("1", "A")]),
                next_page_token: Some("missing".to_string()),
            },
        );
        let err = fetch_all(&store, "doc").unwrap_err();
        assert!(matches!(err, StoreError::UnknownPageToken(ref t) if t == "missing"));
    }
}
