use docket_core::entities::NewTimelineEvent;
use docket_core::enums::TimelineStatus;
use docket_db::DocketDb;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EventCommands;
use crate::commands::shared::parse::{parse_enum, parse_optional_date};
use crate::output::output;

/// Handle `docket event`.
pub async fn handle(action: &EventCommands, db: &DocketDb, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        EventCommands::Add {
            case_number,
            step,
            title,
            description,
            status,
            date,
            estimated,
        } => {
            let case = db.get_case_by_number(case_number).await?;
            let mut new = NewTimelineEvent::new(case.id, *step, title.as_str())
                .event_date(parse_optional_date(date.as_deref(), "date")?)
                .estimated_date(parse_optional_date(estimated.as_deref(), "estimated")?);
            if let Some(description) = description {
                new = new.description(description.as_str());
            }
            if let Some(status) = status {
                new = new.status(parse_enum::<TimelineStatus>(status, "status")?);
            }

            let event = db.add_timeline_event(new).await?;
            output(&event, flags.format)
        }
    }
}
