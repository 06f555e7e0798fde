use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tokenwright_core::ExportFormat;

/// Generate design tokens from a few seed values.
#[derive(Debug, Parser)]
#[command(name = "tokenwright", version, about)]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the token bundle and write the exports.
    Generate(GenerateArgs),
    /// Print the 11-step scale for one color.
    Scale {
        /// Hex, CSS color name, rgb() or hsl().
        color: String,
    },
    /// List catalog fonts, optionally filtered.
    Fonts {
        query: Option<String>,
    },
    /// Write the default config file.
    Init {
        /// Destination (defaults to the user config path).
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Config file to read instead of the user config.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Primary seed color.
    #[arg(long)]
    pub primary: Option<String>,

    /// Secondary seed color.
    #[arg(long)]
    pub secondary: Option<String>,

    /// Base spacing unit in px.
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Body font family (bare name).
    #[arg(long)]
    pub font: Option<String>,

    /// Use the font family as given, without system fallbacks.
    #[arg(long)]
    pub no_fallback_stack: bool,

    /// Export formats: css, tailwind, json. Repeatable or comma-separated.
    #[arg(short, long = "format", value_delimiter = ',')]
    pub formats: Vec<ExportFormat>,

    /// Output directory for the exported files.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Print exports to stdout instead of writing files.
    #[arg(long, conflicts_with = "out_dir")]
    pub stdout: bool,
}
