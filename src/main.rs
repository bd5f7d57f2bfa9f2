//! faviconize - Turn a single source image into favicon and logo assets.

mod cli;
mod config;
mod image;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AssetConfig;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Err(err) = run(&cli) {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Generate { args } => {
            logger::set_verbose(args.verbose);
            let config = AssetConfig::load(cli, args)?;
            cli::generate::generate_assets(&args.source, &config).map(|_| ())
        }
        Commands::Inspect { source } => cli::inspect::run_inspect(source),
    }
}
