use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `kghost` binary.
#[derive(Debug, Parser)]
#[command(
    name = "kghost",
    version,
    about = "Kanban Ghost - a board that tells you what to do next"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Board file to use instead of `<data_dir>/<slot>.json`
    #[arg(short, long, global = true)]
    pub board: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            board: self.board.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use ghost_core::enums::{Column, Priority};

    use super::subcommands::TaskCommands;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "kghost", "--format", "json", "--board", "/tmp/b.json", "--verbose", "suggest",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(
            cli.global_flags().board.as_deref(),
            Some(std::path::Path::new("/tmp/b.json"))
        );
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Suggest));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["kghost", "metrics", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Metrics));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["kghost", "--format", "xml", "suggest"]).is_err());
    }

    #[test]
    fn task_add_parses_priority() {
        let cli = Cli::try_parse_from(["kghost", "task", "add", "fix login bug", "--priority", "high"])
            .expect("cli should parse");
        let Commands::Task { action } = cli.command else {
            panic!("expected task command");
        };
        assert!(matches!(
            action,
            TaskCommands::Add { ref text, priority: Some(Priority::High) } if text == "fix login bug"
        ));
    }

    #[test]
    fn task_move_accepts_legacy_column_name() {
        let cli = Cli::try_parse_from(["kghost", "task", "move", "t1", "todo"])
            .expect("cli should parse");
        let Commands::Task { action } = cli.command else {
            panic!("expected task command");
        };
        assert!(matches!(
            action,
            TaskCommands::Move { column: Column::Backlog, .. }
        ));
    }

    #[test]
    fn task_move_rejects_unknown_column() {
        assert!(Cli::try_parse_from(["kghost", "task", "move", "t1", "archive"]).is_err());
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["kghost", "ask", "what", "should", "I", "do?"])
            .expect("cli should parse");
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask command");
        };
        assert_eq!(args.text(), "what should I do?");
    }

    #[test]
    fn serve_port_override() {
        let cli = Cli::try_parse_from(["kghost", "serve", "--port", "9000"])
            .expect("cli should parse");
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, Some(9000));
        assert!(args.host.is_none());
    }
}
