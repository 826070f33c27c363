use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `labfolder` binary.
#[derive(Debug, Parser)]
#[command(
    name = "labfolder",
    version,
    about = "Read and write Labfolder notebook entries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Labfolder server URL (overrides config)
    #[arg(long, global = true)]
    pub server: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            server: self.server.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{
        AuthCommands, DataCommands, EntryCommands, SchemaTarget, TableCommands,
    };
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "labfolder",
            "--format",
            "table",
            "--verbose",
            "auth",
            "status",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["labfolder", "entry", "get", "118", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        let Commands::Entry {
            action: EntryCommands::Get(args),
        } = cli.command
        else {
            panic!("expected entry get");
        };
        assert_eq!(args.id, "118");
        assert!(!args.raw);
        assert!(!args.no_header);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["labfolder", "--format", "xml", "auth", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_server() {
        let cli = Cli::try_parse_from([
            "labfolder",
            "--server",
            "https://eln.example.org",
            "auth",
            "logout",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.server.as_deref(), Some("https://eln.example.org"));
    }

    #[test]
    fn entry_create_collects_repeated_tags() {
        let cli = Cli::try_parse_from([
            "labfolder", "entry", "create", "--project", "3", "--title", "Day 1", "--tag", "a",
            "--tag", "b",
        ])
        .expect("cli should parse");
        let Commands::Entry {
            action: EntryCommands::Create(args),
        } = cli.command
        else {
            panic!("expected entry create");
        };
        assert_eq!(args.project, "3");
        assert_eq!(args.tag, ["a", "b"]);
    }

    #[test]
    fn entry_create_requires_project() {
        let parsed = Cli::try_parse_from(["labfolder", "entry", "create", "--title", "Day 1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn data_add_accepts_items() {
        let cli = Cli::try_parse_from([
            "labfolder",
            "data",
            "add",
            "118",
            "--item",
            "Solution=ACSF",
            "--group",
            "Recording",
        ])
        .expect("cli should parse");
        let Commands::Data {
            action: DataCommands::Add(args),
        } = cli.command
        else {
            panic!("expected data add");
        };
        assert_eq!(args.item, ["Solution=ACSF"]);
        assert_eq!(args.group.as_deref(), Some("Recording"));
    }

    #[test]
    fn table_add_requires_csv() {
        let parsed = Cli::try_parse_from(["labfolder", "table", "add", "118", "--title", "Rin"]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from([
            "labfolder", "table", "add", "118", "--title", "Rin", "--csv", "a.csv", "--csv",
            "b.csv",
        ])
        .expect("cli should parse");
        let Commands::Table {
            action: TableCommands::Add(args),
        } = cli.command
        else {
            panic!("expected table add");
        };
        assert_eq!(args.csv.len(), 2);
    }

    #[test]
    fn schema_target_is_validated() {
        let cli = Cli::try_parse_from(["labfolder", "schema", "data-item"]).expect("parse");
        assert!(matches!(
            cli.command,
            Commands::Schema(ref args) if args.target == SchemaTarget::DataItem
        ));
        assert!(Cli::try_parse_from(["labfolder", "schema", "project"]).is_err());
    }
}
