use crate::cli::{fetch_roster, CheckArgs};
use crate::review::roster_equals;
use crate::table::{read_document, table_roster};
use tracing::{info, warn};

pub fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let mut config = args.source.load_config()?;
    if let Some(document) = args.document {
        config.document = Some(document);
    }

    let document_path = config.document()?;
    let roster = fetch_roster(&config)?;

    info!("Reading status table from {:?}", document_path);
    let document = read_document(document_path)?;

    let Some(current) = table_roster(&document, &config.table) else {
        warn!("No '{}' table in {:?}", config.table.header, document_path);
        println!(
            "Status table missing from {} (run `docreview sync`)",
            document_path.display()
        );
        std::process::exit(1);
    };

    if !roster_equals(&roster, &current) {
        println!(
            "Status table in {} is stale: {} rows in document, {} reviewers in comments",
            document_path.display(),
            current.len(),
            roster.len()
        );
        std::process::exit(1);
    }

    println!("Status table in {} is up to date", document_path.display());
    Ok(())
}
