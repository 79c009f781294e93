mod create;
mod delete;
mod get;
mod list;
mod status;

use docket_config::DocketConfig;
use docket_db::DocketDb;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CaseCommands;

/// Handle `docket case`.
pub async fn handle(
    action: &CaseCommands,
    db: &DocketDb,
    config: &DocketConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CaseCommands::Create {
            case_number,
            client,
            address,
            access_code,
            tenant,
            county,
            court,
            case_type,
            status,
            step,
            total_steps,
            filed,
            notice_served,
            hearing,
            response_deadline,
            payment,
        } => {
            let args = create::CreateArgs {
                case_number: case_number.as_str(),
                client: client.as_str(),
                address: address.as_str(),
                access_code: access_code.as_str(),
                tenant: tenant.as_deref(),
                county: county.as_deref(),
                court: court.as_deref(),
                case_type: case_type.as_deref(),
                status: status.as_deref(),
                step: *step,
                total_steps: *total_steps,
                filed: filed.as_deref(),
                notice_served: notice_served.as_deref(),
                hearing: hearing.as_deref(),
                response_deadline: response_deadline.as_deref(),
                payment: payment.as_deref(),
            };
            create::run(&args, db, flags).await
        }
        CaseCommands::List => list::run(db, config, flags).await,
        CaseCommands::Get { case_number } => get::run_case(case_number, db, flags).await,
        CaseCommands::Overview { case_number } => get::run_overview(case_number, db, flags).await,
        CaseCommands::Timeline { case_number } => get::run_timeline(case_number, db, flags).await,
        CaseCommands::Documents { case_number } => {
            get::run_documents(case_number, db, flags).await
        }
        CaseCommands::Status {
            case_number,
            status,
            step,
            payment,
            hearing,
            clear_hearing,
        } => {
            status::run(
                case_number,
                status.as_deref(),
                *step,
                payment.as_deref(),
                hearing.as_deref(),
                *clear_hearing,
                db,
                flags,
            )
            .await
        }
        CaseCommands::Delete { case_number } => delete::run(case_number, db, flags).await,
    }
}
