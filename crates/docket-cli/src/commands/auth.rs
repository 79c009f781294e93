use docket_core::responses::AuthResponse;
use docket_db::DocketDb;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuthArgs;
use crate::output::output;

/// Handle `docket auth`.
pub async fn handle(args: &AuthArgs, db: &DocketDb, flags: &GlobalFlags) -> anyhow::Result<()> {
    let case = db.authenticate(&args.case_number, &args.access_code).await?;
    output(
        &AuthResponse {
            success: true,
            case,
        },
        flags.format,
    )
}
