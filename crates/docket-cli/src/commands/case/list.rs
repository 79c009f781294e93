use docket_config::DocketConfig;
use docket_db::DocketDb;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::output::output;

pub async fn run(db: &DocketDb, config: &DocketConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, config.general.default_limit);
    let cases = db.list_cases(limit).await?;
    output(&cases, flags.format)
}
