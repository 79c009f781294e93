use anyhow::Context;
use docket_db::DocketDb;
use docket_db::updates::case::{CaseStatusUpdate, CaseStatusUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_datetime;
use crate::output::output;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    case_number: &str,
    status: Option<&str>,
    step: Option<i64>,
    payment: Option<&str>,
    hearing: Option<&str>,
    clear_hearing: bool,
    db: &DocketDb,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(status, step, payment, hearing, clear_hearing)?;
    if update.is_empty() {
        tracing::warn!(case_number, "no status fields given; nothing to update");
    }
    let case = db
        .update_case_status(case_number, update)
        .await
        .with_context(|| format!("failed to update case {case_number}"))?;
    output(&case, flags.format)
}

fn build_update(
    status: Option<&str>,
    step: Option<i64>,
    payment: Option<&str>,
    hearing: Option<&str>,
    clear_hearing: bool,
) -> anyhow::Result<CaseStatusUpdate> {
    let mut builder = CaseStatusUpdateBuilder::new();
    if let Some(status) = status {
        builder = builder.current_status(status);
    }
    if let Some(step) = step {
        builder = builder.current_step(step);
    }
    if let Some(payment) = payment {
        builder = builder.payment_status(payment);
    }
    if let Some(hearing) = hearing {
        builder = builder.hearing_date(Some(parse_datetime(hearing, "hearing")?));
    } else if clear_hearing {
        builder = builder.hearing_date(None);
    }
    Ok(builder.build())
}
