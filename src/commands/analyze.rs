//! The analyze command

use std::time::Duration;

use colored::Colorize;

use storelens::config::Config;
use storelens::error::Result;
use storelens::pipeline::{Analyzer, StatusBoard};
use storelens::render::render_report;

use crate::utils::parse_timeout_str;

/// Analyze a website and print the report
pub fn cmd_analyze(
    url: &str,
    json: bool,
    seed: Option<u64>,
    timeout: Option<String>,
    offline: bool,
) -> Result<()> {
    let mut config = Config::load()?;
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(timeout) = timeout {
        config.fetch.timeout_secs = parse_timeout_str(&timeout)?;
    }

    let mut analyzer = Analyzer::from_config(&config, offline);

    // Stage labels only make sense on an interactive terminal
    if !json && atty::is(atty::Stream::Stderr) {
        let board = StatusBoard::new(Duration::from_millis(config.status_clear_ms));
        analyzer = analyzer.with_observer(move |event| {
            board.observe(event);
            if let Some(label) = board.current() {
                eprintln!("  {} {}", "→".cyan(), label.dimmed());
            }
        });
    }

    let outcome = analyzer.analyze(url)?;

    if let Some(warning) = outcome.warning() {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(outcome.report())?);
    } else {
        print!("{}", render_report(outcome.report()));
    }

    Ok(())
}
