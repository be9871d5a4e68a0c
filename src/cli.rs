use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "storelens")]
#[command(author, version, about = "Growth intelligence reports for ecommerce websites", long_about = None)]
#[command(after_help = r#"Examples:
  storelens analyze https://example-store.com           Analyze a store
  storelens analyze https://beautybox.com --offline     Skip retrieval, use domain intelligence
  storelens analyze https://shop.test --json | jq .industry
  storelens config show                                  Print effective configuration
"#)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a website and print a growth report
    #[command(after_help = r#"Examples:
  storelens analyze https://example.com
  storelens analyze https://example.com --seed 42       Reproducible figures
  storelens analyze https://example.com --timeout 30s
  storelens analyze https://example.com --json
"#)]
    Analyze {
        /// Website URL (including scheme)
        #[arg(value_name = "URL")]
        url: String,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Seed for the random figures (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Retrieval timeout (e.g., 10s, 1m) - overrides config
        #[arg(long)]
        timeout: Option<String>,

        /// Skip page retrieval entirely
        #[arg(long)]
        offline: bool,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration file if none exists
    Init,
}
