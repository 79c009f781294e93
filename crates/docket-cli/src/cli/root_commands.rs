use clap::{Args, Subcommand};

use crate::cli::subcommands::{CaseCommands, DocumentCommands, EventCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Reset the database and load the demo cases.
    Seed,
    /// Check a case number and access code.
    Auth(AuthArgs),
    /// Cases.
    Case {
        #[command(subcommand)]
        action: CaseCommands,
    },
    /// Timeline events.
    Event {
        #[command(subcommand)]
        action: EventCommands,
    },
    /// Documents.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct AuthArgs {
    #[arg(long)]
    pub case_number: String,
    #[arg(long)]
    pub access_code: String,
}
