use docket_core::entities::NewDocument;
use docket_core::enums::DocumentStatus;
use docket_db::DocketDb;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::output::output;

/// Handle `docket document`.
pub async fn handle(
    action: &DocumentCommands,
    db: &DocketDb,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DocumentCommands::Add {
            case_number,
            name,
            document_type,
            file_path,
            file_size,
            status,
            uploaded,
        } => {
            let case = db.get_case_by_number(case_number).await?;
            let mut new = NewDocument::new(case.id, name.as_str(), document_type.as_str());
            if let Some(path) = file_path {
                new = new.file_path(path.as_str());
            }
            if let Some(size) = file_size {
                new = new.file_size(*size);
            }
            if let Some(status) = status {
                new = new.status(parse_enum::<DocumentStatus>(status, "status")?);
            }
            if let Some(uploaded) = uploaded {
                new = new.uploaded_date(parse_date(uploaded, "uploaded")?);
            }

            let document = db.add_document(new).await?;
            output(&document, flags.format)
        }
    }
}
