//! storelens - growth intelligence reports for ecommerce websites

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use storelens::cli::{Cli, Commands, ConfigCommands};
use storelens::error::Result;

mod commands;
mod utils;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    storelens::pipeline::quiet_panics();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("{}", hint.dimmed());
        }
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG overrides the -v level
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze { url, json, seed, timeout, offline } => {
            commands::cmd_analyze(&url, json, seed, timeout, offline)
        }
        Commands::Config(ConfigCommands::Show) => commands::cmd_config_show(),
        Commands::Config(ConfigCommands::Path) => commands::cmd_config_path(),
        Commands::Config(ConfigCommands::Init) => commands::cmd_config_init(),
        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
