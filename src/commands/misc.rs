//! Miscellaneous commands: config, completions

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

use storelens::cli::{Cli, CompletionShell};
use storelens::config::Config;
use storelens::error::Result;

/// Print the effective configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the config file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default config file unless one already exists
pub fn cmd_config_init() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("{} Config already exists at {}", "✓".green(), path.display());
        return Ok(());
    }
    Config::default().save()?;
    println!("{} Wrote default config to {}", "✓".green(), path.display());
    Ok(())
}

/// Generate shell completions
pub fn cmd_completions(shell: CompletionShell) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
    };
    generate(shell, &mut cmd, "storelens", &mut io::stdout());
    Ok(())
}
