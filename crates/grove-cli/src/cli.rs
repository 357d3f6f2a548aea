//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use grove_engine::LayoutMode;
use std::path::PathBuf;

/// Grove CLI - Score relationship health and lay out the garden and tree views.
#[derive(Debug, Parser)]
#[command(name = "grove")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Engine configuration file (TOML)
    #[arg(short, long, global = true, env = "GROVE_ENGINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute garden or tree positions
    Layout(LayoutArgs),

    /// Rank tag groups by neglect
    Tribes(TribesArgs),

    /// List contacts due for a check-in
    Attention(AttentionArgs),

    /// Print the effective engine configuration
    Config,
}

/// Arguments for the layout command.
#[derive(Debug, Parser)]
pub struct LayoutArgs {
    /// JSON file holding the contact array ("-" for stdin)
    #[arg(short, long)]
    pub input: PathBuf,

    /// View to lay out
    #[arg(short, long, value_enum, default_value = "garden")]
    pub mode: ModeArg,

    /// Reference time (RFC 3339 or YYYY-MM-DD); defaults to the current time
    #[arg(long)]
    pub now: Option<String>,

    /// Append a per-tier summary
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for the tribes command.
#[derive(Debug, Parser)]
pub struct TribesArgs {
    /// JSON file holding the contact array ("-" for stdin)
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON file mapping contact id to tag list
    #[arg(short, long)]
    pub tags: PathBuf,

    /// Reference time (RFC 3339 or YYYY-MM-DD); defaults to the current time
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the attention command.
#[derive(Debug, Parser)]
pub struct AttentionArgs {
    /// JSON file holding the contact array ("-" for stdin)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Reference time (RFC 3339 or YYYY-MM-DD); defaults to the current time
    #[arg(long)]
    pub now: Option<String>,

    /// Maximum number of rows
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Layout mode argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// Concentric tier rings
    Garden,
    /// Category branch clusters
    Tree,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<ModeArg> for LayoutMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Garden => LayoutMode::Garden,
            ModeArg::Tree => LayoutMode::Tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_command() {
        let cli = Cli::parse_from([
            "grove",
            "layout",
            "--input",
            "contacts.json",
            "--mode",
            "tree",
        ]);
        match cli.command {
            Command::Layout(args) => {
                assert_eq!(args.input, PathBuf::from("contacts.json"));
                assert!(matches!(args.mode, ModeArg::Tree));
                assert!(args.now.is_none());
            }
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "grove",
            "attention",
            "-i",
            "c.json",
            "--format",
            "json",
            "--no-color",
            "-v",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn test_tribes_requires_tags() {
        let result = Cli::try_parse_from(["grove", "tribes", "--input", "c.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mode_conversion() {
        let mode: LayoutMode = ModeArg::Garden.into();
        assert_eq!(mode, LayoutMode::Garden);
    }
}
