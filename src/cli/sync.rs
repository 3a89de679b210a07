use crate::cli::{fetch_roster, SyncArgs};
use crate::table::{read_document, render_table, sync_document, write_document, SyncOutcome};
use tracing::info;

pub fn execute(args: SyncArgs) -> anyhow::Result<()> {
    let mut config = args.source.load_config()?;
    if let Some(document) = args.document {
        config.document = Some(document);
    }

    let document_path = config.document()?;
    let roster = fetch_roster(&config)?;
    let document = read_document(document_path)?;

    let result = sync_document(&document, &roster, &config.table);

    match result.outcome {
        SyncOutcome::Inserted | SyncOutcome::Replaced if args.dry_run => {
            info!("DRY RUN - document will not be written");
            println!(
                "Would update {} ({}):",
                document_path.display(),
                result.outcome
            );
            print!("{}", render_table(&config.table.header, &roster));
        }
        SyncOutcome::Inserted | SyncOutcome::Replaced => {
            write_document(document_path, &result.document)?;
            println!(
                "Status table {} in {} ({} reviewers)",
                result.outcome,
                document_path.display(),
                roster.len()
            );
        }
        SyncOutcome::Unchanged => {
            println!("Status table in {} is up to date", document_path.display());
        }
        SyncOutcome::NoTarget => {
            println!(
                "Nothing to do: {} has no '{}' anchor or '{}' table",
                document_path.display(),
                config.table.anchor,
                config.table.header
            );
        }
    }

    Ok(())
}
