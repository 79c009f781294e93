use clap::Subcommand;

/// Document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// Record a document for a case.
    Add {
        case_number: String,
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        document_type: String,
        #[arg(long)]
        file_path: Option<String>,
        #[arg(long)]
        file_size: Option<i64>,
        /// available, pending, or processing
        #[arg(long)]
        status: Option<String>,
        /// YYYY-MM-DD; defaults to today
        #[arg(long)]
        uploaded: Option<String>,
    },
}
