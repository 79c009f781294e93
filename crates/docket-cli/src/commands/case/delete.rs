use docket_db::DocketDb;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn run(case_number: &str, db: &DocketDb, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = db.delete_case(case_number).await?;
    output(&response, flags.format)
}
