use anyhow::Context;
use docket_config::DocketConfig;
use docket_db::DocketDb;

use crate::cli::GlobalFlags;

/// Load layered config (`.env` included) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DocketConfig> {
    let mut config = DocketConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut DocketConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.database {
        tracing::debug!(path, "database path overridden on the command line");
        config.database.path.clone_from(path);
    }
}

pub async fn open_database(config: &DocketConfig) -> anyhow::Result<DocketDb> {
    if config.database.is_in_memory() {
        tracing::warn!("using an in-memory database; nothing will persist");
    }
    Ok(DocketDb::open_local(&config.database.path).await?)
}
