use clap::Subcommand;

/// Timeline event commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EventCommands {
    /// Add a timeline event to a case.
    Add {
        case_number: String,
        #[arg(long)]
        step: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// pending, current, or completed
        #[arg(long)]
        status: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        estimated: Option<String>,
    },
}
