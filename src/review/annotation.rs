//! Review-request annotation grammar.
//!
//! An annotation is a whole comment body of the form
//! `@EMAIL(NAME),TYPE,TEAM`, e.g. `@pewpew@gmail.com(Xiao Ming),reviewer,xfn`.
//! Whitespace is tolerated around the parentheses and the commas.

use super::{ReviewerInfo, ReviewerType};
use regex::Regex;
use std::sync::OnceLock;

const EMAIL_EXP: &str = r"[a-z0-9+_.-]+@[a-z0-9.-]+\.[a-z0-9]{2,}";
const NAME_EXP: &str = r"[a-z]+(?:[\s.]+[a-z]+)*";
const TYPE_EXP: &str = r"reviewer|approver";
const TEAM_EXP: &str = r"[a-z0-9]+(?:[\s.]+[a-z0-9]+)*";

static ANNOTATION_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn annotation_regex() -> Option<&'static Regex> {
    ANNOTATION_RE
        .get_or_init(|| {
            let pattern = format!(
                r"(?i-u)^@({EMAIL_EXP})\s*\(\s*({NAME_EXP})\s*\)\s*,\s*({TYPE_EXP})\s*,\s*({TEAM_EXP})$"
            );
            Regex::new(&pattern).ok()
        })
        .as_ref()
}

/// Parse a comment body as a review-request annotation.
///
/// Returns `None` for anything that does not match the grammar exactly;
/// that is a plain comment, not an error.
pub fn parse_annotation(text: &str) -> Option<ReviewerInfo> {
    let caps = annotation_regex()?.captures(text)?;

    let email = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str();
    let reviewer_type = if caps.get(3)?.as_str().eq_ignore_ascii_case("reviewer") {
        ReviewerType::Reviewer
    } else {
        ReviewerType::Approver
    };
    let team = caps.get(4)?.as_str();

    Some(ReviewerInfo {
        email: email.to_string(),
        name: name.to_string(),
        reviewer_type,
        team: team.to_string(),
    })
}
