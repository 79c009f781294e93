use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `docket` binary.
#[derive(Debug, Parser)]
#[command(name = "docket", version, about = "Docket - eviction case status tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides `database.path` from config)
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            database: self.database.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{CaseCommands, DocumentCommands, EventCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "docket", "--format", "raw", "--limit", "10", "--verbose", "seed",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Seed));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["docket", "seed", "--database", "demo.db", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.database.as_deref(), Some("demo.db"));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Seed));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["docket", "--format", "xml", "seed"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn auth_requires_both_values() {
        let cli = Cli::try_parse_from([
            "docket",
            "auth",
            "--case-number",
            "21456",
            "--access-code",
            "test123",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Auth(args) => {
                assert_eq!(args.case_number, "21456");
                assert_eq!(args.access_code, "test123");
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["docket", "auth", "--case-number", "21456"]).is_err());
    }

    #[test]
    fn case_status_parses_partial_update() {
        let cli = Cli::try_parse_from([
            "docket", "case", "status", "21456", "--step", "5", "--status", "Judgment",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Case {
                action:
                    CaseCommands::Status {
                        case_number,
                        status,
                        step,
                        payment,
                        hearing,
                        clear_hearing,
                    },
            } => {
                assert_eq!(case_number, "21456");
                assert_eq!(status.as_deref(), Some("Judgment"));
                assert_eq!(step, Some(5));
                assert_eq!(payment, None);
                assert_eq!(hearing, None);
                assert!(!clear_hearing);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn hearing_and_clear_hearing_conflict() {
        let parsed = Cli::try_parse_from([
            "docket",
            "case",
            "status",
            "21456",
            "--hearing",
            "2023-05-15T09:00:00",
            "--clear-hearing",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn event_and_document_add_parse() {
        let event = Cli::try_parse_from([
            "docket", "event", "add", "21457", "--step", "2", "--title", "Filing Suit",
        ])
        .expect("cli should parse");
        assert!(matches!(
            event.command,
            Commands::Event {
                action: EventCommands::Add { step: 2, .. }
            }
        ));

        let document = Cli::try_parse_from([
            "docket", "document", "add", "21457", "--name", "Lease", "--type", "PDF",
        ])
        .expect("cli should parse");
        assert!(matches!(
            document.command,
            Commands::Document {
                action: DocumentCommands::Add { .. }
            }
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["docket", "--database", "/tmp/demo.db", "case", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.database.as_deref(), Some("/tmp/demo.db"));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
