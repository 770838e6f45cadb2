use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "modest-bundle")]
#[command(about = "Bundle a stylesheet and everything it @imports into one CSS file")]
#[command(long_about = "modest-bundle starts from an entry stylesheet (index.css by default), \
                       inlines every @import it finds, and writes the result with a generated header \
                       to dist/modest-components.css. Running it without a subcommand builds with defaults.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve imports starting at the entry file and write the bundle
    Build(BuildArgs),
}

/// Overrides for a single build; unset values come from configuration
#[derive(Args, Debug, Default, Clone)]
pub struct BuildArgs {
    /// Entry stylesheet
    #[arg(long, help = "Stylesheet to start from (default: index.css)")]
    pub entry: Option<PathBuf>,
    /// Output directory
    #[arg(long, help = "Directory to write the bundle into (default: dist)")]
    pub out_dir: Option<PathBuf>,
    /// Bundle file name
    #[arg(long, help = "File name of the bundle (default: modest-components.css)")]
    pub bundle_name: Option<String>,
    /// Resolve and report without touching the output directory
    #[arg(long, help = "Resolve imports and report the size without writing anything")]
    pub dry_run: bool,
    /// List included files and failed imports
    #[arg(long, short = 'v', help = "Show every included file and every failed import")]
    pub verbose: bool,
}
