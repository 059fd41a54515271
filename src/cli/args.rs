//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Prepares C header files by minifying and gzipping HTML, JS and CSS
/// source files.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Automatically find all source files in data/ and write C header
    /// files to src/
    #[arg(short, long, visible_alias = "all")]
    pub auto: bool,

    /// Source directory containing CSS, JS or HTML files OR one specific
    /// file to minify
    #[arg(short, long, visible_alias = "sources", value_hint = clap::ValueHint::AnyPath)]
    pub source: Option<PathBuf>,

    /// Target directory for the C header files OR one C header file
    #[arg(short, long, value_hint = clap::ValueHint::AnyPath)]
    pub target: Option<PathBuf>,

    /// Do not store intermediate minified files next to the originals
    /// (i.e. only write the C header files)
    #[arg(short = 'm', long = "nostoremini")]
    pub no_store_mini: bool,

    /// Only process the immediate children of a source directory instead
    /// of walking it recursively
    #[arg(short, long)]
    pub flat: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the minified text is persisted next to the source.
    pub const fn store_minified(&self) -> bool {
        !self.no_store_mini
    }
}
