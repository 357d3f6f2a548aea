//! Grove CLI - Command-line front end for the relationship layout engine.

use clap::Parser;
use grove_cli::commands;
use grove_cli::{Cli, Command, Config, Formatter};
use grove_engine::{EngineConfig, LayoutEngine};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> grove_cli::Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring CLI settings: {}", e);
        Config::default()
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let engine_config = match cli.config.or(config.settings.engine_config) {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let engine = LayoutEngine::new(engine_config)?;

    match cli.command {
        Command::Layout(args) => commands::execute_layout(args, &engine, &formatter)?,
        Command::Tribes(args) => commands::execute_tribes(args, &engine, &formatter)?,
        Command::Attention(args) => commands::execute_attention(args, &engine, &formatter)?,
        Command::Config => commands::execute_config(&engine)?,
    }

    Ok(())
}
