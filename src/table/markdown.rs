//! Markdown rendering and recovery of the status table.
//!
//! Layout: `| #DocReview | Team | Type | Status |`, a separator row, then
//! one row per reviewer with the name and status in bold.

use crate::review::{ReviewStatus, ReviewerInfo, ReviewerInfoStatus, ReviewerType};
use std::ops::Range;

/// Render a roster as a Markdown table whose first header cell is `header`.
pub fn render_table(header: &str, roster: &[ReviewerInfoStatus]) -> String {
    let mut md = String::new();

    md.push_str(&format!("| {} | Team | Type | Status |\n", header));
    md.push_str("|---|---|---|---|\n");

    for reviewer in roster {
        md.push_str(&format!(
            "| **{}** | {} | {} | **{}** |\n",
            reviewer.info.name, reviewer.info.team, reviewer.info.reviewer_type, reviewer.status
        ));
    }

    md
}

/// Index of the first line containing the insertion anchor.
pub fn find_anchor(lines: &[&str], anchor: &str) -> Option<usize> {
    lines.iter().position(|l| l.contains(anchor))
}

/// Line range of the table whose first header cell is exactly `header`.
pub fn find_table(lines: &[&str], header: &str) -> Option<Range<usize>> {
    let start = lines.iter().position(|l| {
        is_table_row(l) && split_cells(l).first().map(String::as_str) == Some(header)
    })?;
    let len = lines[start..]
        .iter()
        .take_while(|l| is_table_row(l))
        .count();
    Some(start..start + len)
}

/// Recover a roster from table rows (header included). Emails are not
/// rendered, so they come back empty; unrecognised type and status cells
/// fall back to `Reviewer` and `Not Started`.
pub fn parse_table(rows: &[&str]) -> Vec<ReviewerInfoStatus> {
    rows.iter()
        .skip(1)
        .map(|row| split_cells(row))
        .filter(|cells| !is_separator(cells))
        .map(|cells| {
            let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");
            ReviewerInfoStatus {
                info: ReviewerInfo {
                    email: String::new(),
                    name: cell(0).to_string(),
                    reviewer_type: ReviewerType::from_table_cell(cell(2)),
                    team: cell(1).to_string(),
                },
                status: ReviewStatus::from_table_cell(cell(3)),
            }
        })
        .collect()
}

fn is_table_row(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

fn split_cells(row: &str) -> Vec<String> {
    let trimmed = row.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(strip_emphasis).collect()
}

fn strip_emphasis(cell: &str) -> String {
    cell.trim()
        .trim_start_matches("**")
        .trim_end_matches("**")
        .trim()
        .to_string()
}

fn is_separator(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}
