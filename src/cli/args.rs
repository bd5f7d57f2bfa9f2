//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::BackgroundMode;

/// Turn a single source image into favicon and logo assets
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for faviconize.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate favicon.ico and logo PNGs from a source image
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Print color mode, format and probe pixels of an image
    #[command(visible_alias = "i")]
    Inspect {
        /// Image to inspect
        #[arg(value_hint = clap::ValueHint::FilePath)]
        source: PathBuf,
    },
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Source image (format is detected from the file content)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub source: PathBuf,

    /// Output directory for the generated assets
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Per-channel tolerance when matching the background color
    #[arg(short, long)]
    pub tolerance: Option<u8>,

    /// Which background-colored pixels to clear
    #[arg(short, long, value_enum)]
    pub mode: Option<BackgroundMode>,

    /// Keep the background: only pad to a square and resize
    #[arg(short = 'k', long)]
    pub keep_background: bool,

    /// Do not crop to the visible content
    #[arg(long)]
    pub no_crop: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_generate(&self) -> bool {
        matches!(self.command, Commands::Generate { .. })
    }
    pub const fn is_inspect(&self) -> bool {
        matches!(self.command, Commands::Inspect { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["faviconize", "generate", "logo.png"]).unwrap();
        assert!(cli.is_generate());
        let Commands::Generate { args } = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.source, PathBuf::from("logo.png"));
        assert!(args.output.is_none());
        assert!(args.tolerance.is_none());
        assert!(!args.keep_background);
        assert!(!args.no_crop);
    }

    #[test]
    fn test_parse_generate_overrides() {
        let cli = Cli::try_parse_from([
            "faviconize",
            "g",
            "logo.png",
            "-o",
            "public",
            "-t",
            "24",
            "--mode",
            "connected",
            "--no-crop",
        ])
        .unwrap();
        let Commands::Generate { args } = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.output, Some(PathBuf::from("public")));
        assert_eq!(args.tolerance, Some(24));
        assert_eq!(args.mode, Some(BackgroundMode::Connected));
        assert!(args.no_crop);
    }

    #[test]
    fn test_tolerance_out_of_range_rejected() {
        let result = Cli::try_parse_from(["faviconize", "generate", "logo.png", "-t", "300"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from(["faviconize", "-C", "custom.toml", "i", "logo.png"]).unwrap();
        assert!(cli.is_inspect());
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
