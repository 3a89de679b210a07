use crate::error::OutputError;
use crate::review::{ReviewStatus, ReviewerInfoStatus, RosterSummary};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const JSON_REPORT: &str = "roster.json";
pub const MARKDOWN_REPORT: &str = "roster.md";

#[derive(Debug, Serialize, Deserialize)]
pub struct RosterReport {
    pub timestamp: String,
    pub document_id: String,
    pub summary: RosterSummary,
    pub all_approved: bool,
    pub reviewers: Vec<ReviewerInfoStatus>,
}

impl RosterReport {
    pub fn new(document_id: &str, roster: &[ReviewerInfoStatus]) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            document_id: document_id.to_string(),
            summary: RosterSummary::from_roster(roster),
            all_approved: RosterSummary::all_approved(roster),
            reviewers: roster.to_vec(),
        }
    }
}

/// Write `roster.json` and `roster.md` into `report_dir`, returning the
/// paths written.
pub fn write_roster_report(
    report_dir: &Path,
    document_id: &str,
    roster: &[ReviewerInfoStatus],
) -> Result<Vec<PathBuf>, OutputError> {
    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let report = RosterReport::new(document_id, roster);

    let json_path = report_dir.join(JSON_REPORT);
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&json_path, json).map_err(OutputError::WriteReport)?;

    let md_path = report_dir.join(MARKDOWN_REPORT);
    fs::write(&md_path, build_report_markdown(&report)).map_err(OutputError::WriteReport)?;

    Ok(vec![json_path, md_path])
}

fn build_report_markdown(report: &RosterReport) -> String {
    let mut md = String::new();

    md.push_str("# Document Review Status\n\n");
    md.push_str(&format!("**Generated:** {}\n", report.timestamp));
    md.push_str(&format!("**Document:** {}\n", report.document_id));
    md.push_str(&format!(
        "**Signed off:** {}\n\n",
        if report.all_approved { "yes" } else { "no" }
    ));

    md.push_str("## Totals\n\n");
    md.push_str("| Status | Count |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| {} | {} |\n", ReviewStatus::Approved, report.summary.approved));
    md.push_str(&format!("| {} | {} |\n", ReviewStatus::InProgress, report.summary.in_progress));
    md.push_str(&format!("| {} | {} |\n", ReviewStatus::NotStarted, report.summary.not_started));
    md.push_str(&format!("| Total | {} |\n\n", report.summary.total));

    md.push_str("## Reviewers\n\n");
    if report.reviewers.is_empty() {
        md.push_str("*No reviewers requested*\n");
        return md;
    }

    md.push_str("| Reviewer | Email | Team | Type | Status |\n");
    md.push_str("|----------|-------|------|------|--------|\n");
    for reviewer in &report.reviewers {
        let icon = match reviewer.status {
            ReviewStatus::Approved => "✅",
            ReviewStatus::InProgress => "💬",
            ReviewStatus::NotStarted => "⏳",
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} {} |\n",
            reviewer.info.name,
            reviewer.info.email,
            reviewer.info.team,
            reviewer.info.reviewer_type,
            icon,
            reviewer.status
        ));
    }

    md
}
