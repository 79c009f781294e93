use clap::Subcommand;

/// Case commands. Cases are addressed by case number.
#[derive(Clone, Debug, Subcommand)]
pub enum CaseCommands {
    /// Create a case.
    Create {
        case_number: String,
        #[arg(long)]
        client: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        access_code: String,
        #[arg(long)]
        tenant: Option<String>,
        #[arg(long)]
        county: Option<String>,
        #[arg(long)]
        court: Option<String>,
        #[arg(long)]
        case_type: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        step: Option<i64>,
        #[arg(long)]
        total_steps: Option<i64>,
        /// YYYY-MM-DD
        #[arg(long)]
        filed: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        notice_served: Option<String>,
        /// YYYY-MM-DDTHH:MM:SS
        #[arg(long)]
        hearing: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        response_deadline: Option<String>,
        #[arg(long)]
        payment: Option<String>,
    },
    /// List cases.
    List,
    /// Get a case.
    Get { case_number: String },
    /// Case, progress, timeline, and documents in one response.
    Overview { case_number: String },
    /// Timeline ordered by step.
    Timeline { case_number: String },
    /// Documents, most recent first.
    Documents { case_number: String },
    /// Update status fields; omitted fields are left alone.
    Status {
        case_number: String,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        step: Option<i64>,
        #[arg(long)]
        payment: Option<String>,
        /// YYYY-MM-DDTHH:MM:SS
        #[arg(long, conflicts_with = "clear_hearing")]
        hearing: Option<String>,
        /// Remove the scheduled hearing.
        #[arg(long)]
        clear_hearing: bool,
    },
    /// Delete a case with its timeline and documents.
    Delete { case_number: String },
}
