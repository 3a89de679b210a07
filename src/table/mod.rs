//! The rendered status table inside a text document.
//!
//! A document either carries an insertion anchor (first run) or a table
//! rendered by an earlier run. Syncing replaces the anchor line with a
//! fresh table, or replaces a stale table in place.

mod markdown;

pub use markdown::{find_anchor, find_table, parse_table, render_table};

use crate::config::TableConfig;
use crate::error::TableError;
use crate::review::{roster_equals, ReviewerInfoStatus};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The anchor was replaced by a new table.
    Inserted,
    /// An existing table was out of date and has been redrawn.
    Replaced,
    /// The existing table already matches the roster.
    Unchanged,
    /// Neither an anchor nor a table was found.
    NoTarget,
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncOutcome::Inserted => write!(f, "inserted"),
            SyncOutcome::Replaced => write!(f, "replaced"),
            SyncOutcome::Unchanged => write!(f, "unchanged"),
            SyncOutcome::NoTarget => write!(f, "no anchor or table found"),
        }
    }
}

#[derive(Debug)]
pub struct SyncResult {
    pub outcome: SyncOutcome,
    /// Document text after the sync. Equal to the input unless the outcome
    /// is `Inserted` or `Replaced`.
    pub document: String,
}

/// Roster recovered from the table in `document`, if there is one.
pub fn table_roster(document: &str, table: &TableConfig) -> Option<Vec<ReviewerInfoStatus>> {
    let lines: Vec<&str> = document.lines().collect();
    let range = find_table(&lines, &table.header)?;
    Some(parse_table(&lines[range]))
}

/// Bring the status table in `document` in line with `roster`.
///
/// The anchor takes precedence over an existing table. A table is only
/// redrawn when [`roster_equals`] reports a difference, so callers must
/// pass the roster in the order it is rendered.
pub fn sync_document(
    document: &str,
    roster: &[ReviewerInfoStatus],
    table: &TableConfig,
) -> SyncResult {
    let lines: Vec<&str> = document.lines().collect();

    if let Some(idx) = find_anchor(&lines, &table.anchor) {
        debug!("Found table anchor on line {}", idx + 1);
        return SyncResult {
            outcome: SyncOutcome::Inserted,
            document: splice(document, &lines, idx..idx + 1, roster, table),
        };
    }

    let Some(range) = find_table(&lines, &table.header) else {
        warn!(
            "Neither anchor '{}' nor table '{}' found in document",
            table.anchor, table.header
        );
        return SyncResult {
            outcome: SyncOutcome::NoTarget,
            document: document.to_string(),
        };
    };

    let current = parse_table(&lines[range.clone()]);
    if roster_equals(roster, &current) {
        return SyncResult {
            outcome: SyncOutcome::Unchanged,
            document: document.to_string(),
        };
    }

    debug!(
        "Table on lines {}-{} is stale ({} rows, roster has {})",
        range.start + 1,
        range.end,
        current.len(),
        roster.len()
    );
    SyncResult {
        outcome: SyncOutcome::Replaced,
        document: splice(document, &lines, range, roster, table),
    }
}

fn splice(
    original: &str,
    lines: &[&str],
    range: std::ops::Range<usize>,
    roster: &[ReviewerInfoStatus],
    table: &TableConfig,
) -> String {
    let rendered = render_table(&table.header, roster);

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + roster.len() + 2);
    out.extend_from_slice(&lines[..range.start]);
    out.extend(rendered.lines());
    out.extend_from_slice(&lines[range.end..]);

    let mut document = out.join("\n");
    if original.ends_with('\n') || range.end == lines.len() {
        document.push('\n');
    }
    document
}

pub fn read_document(path: &Path) -> Result<String, TableError> {
    std::fs::read_to_string(path).map_err(|e| TableError::ReadDocument {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn write_document(path: &Path, content: &str) -> Result<(), TableError> {
    std::fs::write(path, content).map_err(|e| TableError::WriteDocument {
        path: path.to_path_buf(),
        source: e,
    })
}
