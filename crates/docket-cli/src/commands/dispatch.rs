use docket_config::DocketConfig;
use docket_db::DocketDb;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    db: &DocketDb,
    config: &DocketConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Seed => commands::seed::handle(db, flags).await,
        Commands::Auth(args) => commands::auth::handle(&args, db, flags).await,
        Commands::Case { action } => commands::case::handle(&action, db, config, flags).await,
        Commands::Event { action } => commands::event::handle(&action, db, flags).await,
        Commands::Document { action } => commands::document::handle(&action, db, flags).await,
    }
}
