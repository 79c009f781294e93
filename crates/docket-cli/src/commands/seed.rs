use docket_db::{DocketDb, seed};

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `docket seed`.
pub async fn handle(db: &DocketDb, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = seed::populate(db).await?;

    if !flags.quiet {
        eprintln!("Database populated successfully!");
        eprintln!("Sample cases created:");
        for case in &summary.cases {
            eprintln!(
                "- Case {} ({}) - Access code: {}",
                case.case_number, case.client_name, case.access_code
            );
        }
    }
    output(&summary, flags.format)
}
