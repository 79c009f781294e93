use docket_db::DocketDb;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn run_case(case_number: &str, db: &DocketDb, flags: &GlobalFlags) -> anyhow::Result<()> {
    let case = db.get_case_by_number(case_number).await?;
    output(&case, flags.format)
}

pub async fn run_overview(
    case_number: &str,
    db: &DocketDb,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let overview = db.case_overview(case_number).await?;
    output(&overview, flags.format)
}

pub async fn run_timeline(
    case_number: &str,
    db: &DocketDb,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let case = db.get_case_by_number(case_number).await?;
    let timeline = db.timeline_for_case(case.id).await?;
    output(&timeline, flags.format)
}

pub async fn run_documents(
    case_number: &str,
    db: &DocketDb,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let case = db.get_case_by_number(case_number).await?;
    let documents = db.documents_for_case(case.id).await?;
    output(&documents, flags.format)
}
