//! Roster aggregation over a document's comment history.

use super::{parse_annotation, ReviewStatus, ReviewerInfo, ReviewerInfoStatus};
use crate::comments::Comment;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Build the reviewer roster from every comment of a document, in fetch
/// order.
///
/// - Deleted comments are ignored entirely.
/// - Every comment author counts as having reviewed the document.
/// - The first annotation for a name wins; later ones are discarded.
/// - A reviewer is approved when an annotation thread naming them is
///   resolved and a resolve reply was written by the reviewer themself.
///
/// The roster is sorted by reviewer name.
pub fn aggregate(comments: &[Comment]) -> Vec<ReviewerInfoStatus> {
    let mut info_by_name: HashMap<String, ReviewerInfo> = HashMap::new();
    let mut reviewed: HashSet<String> = HashSet::new();
    let mut approved: HashSet<String> = HashSet::new();

    for comment in comments {
        let id = comment.id.as_deref().unwrap_or("-");

        if comment.deleted {
            debug!("Skipping deleted comment {}", id);
            continue;
        }

        if let Some(author) = comment.author_name().filter(|n| !n.is_empty()) {
            reviewed.insert(author.to_string());
        }

        let Some(content) = comment.content.as_deref().filter(|c| !c.is_empty()) else {
            debug!("Skipping comment {} without content", id);
            continue;
        };

        let Some(info) = parse_annotation(content) else {
            debug!("Comment {} is not a review request", id);
            continue;
        };

        if info_by_name.contains_key(&info.name) {
            warn!(
                "Duplicate comments getting review from ({}, {})",
                info.email, info.name
            );
            continue;
        }

        // Resolved threads always carry at least one reply.
        if comment.resolved && !comment.replies.is_empty() {
            // Only the reply list as it is now is inspected; a thread that was
            // resolved, reopened and resolved again is not tracked.
            let self_resolved = comment
                .replies
                .iter()
                .filter(|r| !r.deleted && r.is_resolve())
                .any(|r| r.author_name() == Some(info.name.as_str()));
            if self_resolved {
                debug!("{} resolved their own review request", info.name);
                approved.insert(info.name.clone());
            }
        }

        info_by_name.insert(info.name.clone(), info);
    }

    let mut infos: Vec<ReviewerInfo> = info_by_name.into_values().collect();
    infos.sort_by(|a, b| a.name.cmp(&b.name));

    infos
        .into_iter()
        .map(|info| {
            let status = if approved.contains(&info.name) {
                ReviewStatus::Approved
            } else if reviewed.contains(&info.name) {
                ReviewStatus::InProgress
            } else {
                ReviewStatus::NotStarted
            };
            ReviewerInfoStatus { info, status }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::testing::{comment, resolve_reply, MemoryStore};
    use crate::comments::{fetch_all, CommentPage};
    use crate::review::ReviewerType;

    fn john(status: ReviewStatus) -> ReviewerInfoStatus {
        ReviewerInfoStatus {
            info: ReviewerInfo {
                email: "x@x.com".to_string(),
                name: "John".to_string(),
                reviewer_type: ReviewerType::Reviewer,
                team: "CEO".to_string(),
            },
            status,
        }
    }

    const JOHN_REQUEST: &str = "@x@x.com(John),reviewer,CEO";

    #[test]
    fn test_unactioned_request() {
        let comments = vec![comment(JOHN_REQUEST, "Me")];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::NotStarted)]);
    }

    #[test]
    fn test_ongoing_review() {
        let comments = vec![
            comment(JOHN_REQUEST, "Me"),
            comment("Check this line you got a typo", "John"),
        ];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::InProgress)]);
    }

    #[test]
    fn test_plain_comment_before_request_counts() {
        let comments = vec![
            comment("Looks fine so far", "John"),
            comment(JOHN_REQUEST, "Me"),
        ];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::InProgress)]);
    }

    #[test]
    fn test_resolved_by_reviewer() {
        let mut request = comment(JOHN_REQUEST, "Me");
        request.resolved = true;
        request.replies.push(resolve_reply("John"));
        let comments = vec![request, comment("Check this line you got a typo", "John")];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::Approved)]);
    }

    #[test]
    fn test_resolved_by_someone_else() {
        let mut request = comment(JOHN_REQUEST, "Me");
        request.resolved = true;
        request.replies.push(resolve_reply("Me"));
        assert_eq!(aggregate(&[request]), vec![john(ReviewStatus::NotStarted)]);
    }

    #[test]
    fn test_resolve_reply_on_unresolved_thread_is_ignored() {
        let mut request = comment(JOHN_REQUEST, "Me");
        request.resolved = false;
        request.replies.push(resolve_reply("John"));
        assert_eq!(aggregate(&[request]), vec![john(ReviewStatus::InProgress)]);
    }

    #[test]
    fn test_deleted_or_non_resolve_replies_are_ignored() {
        let mut request = comment(JOHN_REQUEST, "Me");
        request.resolved = true;
        let mut deleted = resolve_reply("John");
        deleted.deleted = true;
        let mut plain = resolve_reply("John");
        plain.action = None;
        let mut reopen = resolve_reply("John");
        reopen.action = Some("reopen".to_string());
        request.replies = vec![deleted, plain, reopen];
        assert_eq!(aggregate(&[request]), vec![john(ReviewStatus::InProgress)]);
    }

    #[test]
    fn test_deleted_request() {
        let mut request = comment(JOHN_REQUEST, "Me");
        request.deleted = true;
        assert!(aggregate(&[request]).is_empty());
    }

    #[test]
    fn test_deleted_plain_comment() {
        let mut typo = comment("Check this line you got a typo", "John");
        typo.deleted = true;
        let comments = vec![comment(JOHN_REQUEST, "Me"), typo];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::NotStarted)]);
    }

    #[test]
    fn test_first_annotation_wins() {
        let comments = vec![
            comment(JOHN_REQUEST, "Me"),
            comment("@john@other.com(John),approver,Board", "Someone"),
        ];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::NotStarted)]);
    }

    #[test]
    fn test_duplicate_resolved_by_reviewer_does_not_approve() {
        let mut duplicate = comment("@john@other.com(John),approver,Board", "Someone");
        duplicate.resolved = true;
        duplicate.replies.push(resolve_reply("John"));
        let comments = vec![comment(JOHN_REQUEST, "Me"), duplicate];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::NotStarted)]);
    }

    #[test]
    fn test_approval_not_demoted_by_later_comments() {
        let mut request = comment(JOHN_REQUEST, "Me");
        request.resolved = true;
        request.replies.push(resolve_reply("John"));
        let comments = vec![
            comment("first pass", "John"),
            request,
            comment("one more nit", "John"),
            comment("and another", "John"),
        ];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::Approved)]);
    }

    #[test]
    fn test_comment_without_author_or_content() {
        let mut anonymous = comment(JOHN_REQUEST, "");
        anonymous.author = None;
        let mut empty = comment("", "John");
        empty.content = None;
        let comments = vec![anonymous, empty];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::InProgress)]);
    }

    #[test]
    fn test_every_skip_path_with_comment_ids() {
        let mut deleted = comment(JOHN_REQUEST, "Kate");
        deleted.id = Some("c1".to_string());
        deleted.deleted = true;
        let mut empty = comment("", "Vlad");
        empty.id = Some("c2".to_string());
        let mut plain = comment("typo in section 2", "John");
        plain.id = Some("c3".to_string());
        let mut request = comment(JOHN_REQUEST, "Me");
        request.id = Some("c4".to_string());

        let comments = vec![deleted, empty, plain, request];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::InProgress)]);
    }

    #[test]
    fn test_annotation_author_counts_as_reviewed() {
        // A self-requested review is at least in progress.
        let comments = vec![comment(JOHN_REQUEST, "John")];
        assert_eq!(aggregate(&comments), vec![john(ReviewStatus::InProgress)]);
    }

    #[test]
    fn test_sorted_by_name() {
        let comments = vec![
            comment("@z@x.com(Zed),reviewer,A", "Me"),
            comment("@a@x.com(Mia),reviewer,B", "Me"),
            comment("@m@x.com(Al),approver,C", "Me"),
        ];
        let names: Vec<_> = aggregate(&comments)
            .into_iter()
            .map(|r| r.info.name)
            .collect();
        assert_eq!(names, vec!["Al", "Mia", "Zed"]);
    }

    #[test]
    fn test_idempotent() {
        let mut request = comment(JOHN_REQUEST, "Me");
        request.resolved = true;
        request.replies.push(resolve_reply("John"));
        let comments = vec![request, comment("@k@x.com(Kate),approver,CTO", "Me")];
        assert_eq!(aggregate(&comments), aggregate(&comments));
    }

    /// Two pages mixing requests, plain comments, a deleted request and a
    /// resolved plain thread.
    #[test]
    fn test_mixed_paginated_document() {
        let mut resolved_request = comment(JOHN_REQUEST, "Me");
        resolved_request.resolved = true;
        resolved_request.replies.push(resolve_reply("John"));
        let mut deleted_request = comment("@j@x.com(Jeff),reviewer,Janitor", "Me");
        deleted_request.deleted = true;
        let mut resolved_plain = comment("A spare key needs to be kept in the safe", "Vlad");
        resolved_plain.resolved = true;
        resolved_plain.replies.push(resolve_reply("Vlad"));

        let mut store = MemoryStore::default();
        store.pages.insert(
            None,
            CommentPage {
                comments: Some(vec![
                    resolved_request,
                    comment("@y@x.com(Ximi),reviewer,CFO", "Me"),
                    comment("@z@x.com(Kate),approver,CTO", "Me"),
                    deleted_request,
                    comment("Check this line you got a typo", "John"),
                ]),
                next_page_token: Some("page2".to_string()),
            },
        );
        store.pages.insert(
            Some("page2".to_string()),
            CommentPage {
                comments: Some(vec![
                    comment("We need to get a better revenue estimate here", "Ximi"),
                    comment("@secure@x.com(Vlad),approver,Security", "Me"),
                    resolved_plain,
                ]),
                next_page_token: None,
            },
        );

        let roster = aggregate(&fetch_all(&store, "mock-id-123").unwrap());
        let got: Vec<_> = roster
            .iter()
            .map(|r| (r.info.name.as_str(), r.info.email.as_str(), r.status))
            .collect();
        assert_eq!(
            got,
            vec![
                ("John", "x@x.com", ReviewStatus::Approved),
                ("Kate", "z@x.com", ReviewStatus::NotStarted),
                ("Vlad", "secure@x.com", ReviewStatus::InProgress),
                ("Ximi", "y@x.com", ReviewStatus::InProgress),
            ]
        );
        assert_eq!(roster[1].info.reviewer_type, ReviewerType::Approver);
        assert_eq!(roster[2].info.team, "Security");
    }
}
