use crate::cli::{fetch_roster, StatusArgs};
use crate::output::write_roster_report;
use crate::review::{ReviewerInfoStatus, RosterSummary};
use tracing::info;

pub fn execute(args: StatusArgs) -> anyhow::Result<()> {
    let mut config = args.source.load_config()?;
    if let Some(report_dir) = args.report_dir {
        config.report_dir = Some(report_dir);
    }

    let roster = fetch_roster(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
    } else {
        print_roster(&roster);
    }

    if let Some(report_dir) = &config.report_dir {
        let written = write_roster_report(report_dir, config.document_id()?, &roster)?;
        info!("Wrote {} report files to {:?}", written.len(), report_dir);
    }

    Ok(())
}

fn print_roster(roster: &[ReviewerInfoStatus]) {
    if roster.is_empty() {
        println!("No reviewers requested.");
        return;
    }

    let name_width = roster
        .iter()
        .map(|r| r.info.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Reviewer".len());

    println!(
        "{:<name_width$}  {:<8}  {:<11}  Team",
        "Reviewer", "Type", "Status"
    );
    for reviewer in roster {
        println!(
            "{:<name_width$}  {:<8}  {:<11}  {}",
            reviewer.info.name,
            reviewer.info.reviewer_type.to_string(),
            reviewer.status.to_string(),
            reviewer.info.team
        );
    }

    let summary = RosterSummary::from_roster(roster);
    println!(
        "\n{} reviewers: {} approved, {} in progress, {} not started",
        summary.total, summary.approved, summary.in_progress, summary.not_started
    );
    if RosterSummary::all_approved(roster) {
        println!("All approvers have signed off.");
    }
}
