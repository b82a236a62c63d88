//! eurpln-outlook CLI - fetch EUR/PLN history and render the outlook figure
//!
//! ## Example Usage
//!
//! ```bash
//! # Render to the default path
//! eurpln-outlook
//!
//! # Render somewhere else, with debug logging
//! eurpln-outlook --output charts/eur_pln.png --verbose
//! ```

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use eurpln_outlook::pipeline;
use std::path::PathBuf;
use std::process;

/// eurpln-outlook: EUR/PLN exchange-rate history and next-year outlook
#[derive(Parser)]
#[command(name = "eurpln-outlook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "EUR/PLN exchange-rate history and next-year outlook", long_about = None)]
struct Cli {
    /// Output image path for the rendered figure
    #[arg(short, long, default_value = "eur_pln_outlook.png")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(&cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    pipeline::run(&cli.output)
        .await
        .with_context(|| format!("Failed to render figure to {}", cli.output.display()))?;

    println!(
        "{} Figure saved to: {}",
        "✓".green().bold(),
        cli.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["eurpln-outlook"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("eur_pln_outlook.png"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_output_flag() {
        let cli = Cli::try_parse_from(["eurpln-outlook", "--output", "out.png"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["eurpln-outlook", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
