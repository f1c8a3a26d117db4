use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "page-toc")]
#[command(about = "Generate a table of contents for rendered HTML content", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, global = true, default_value_t = false)]
    pub trace: bool,

    /// Print informational output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,
}

/// TOC options given on the command line. Each one overrides the option file.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Option file (YAML, TOML or JSON); defaults to ./_toc.{yml,yaml,toml,json}
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// CSS class selecting the visual style
    #[arg(long, value_name = "STYLE", global = true)]
    pub style: Option<String>,

    /// Title shown above the list
    #[arg(long, value_name = "TITLE", global = true)]
    pub title: Option<String>,

    /// Minimum number of headings required to render anything
    #[arg(long, value_name = "COUNT", global = true)]
    pub min_headers: Option<usize>,

    /// Deepest heading level to include (1-6)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub max_depth: Option<u8>,

    /// Do not prefix items with hierarchical numbers
    #[arg(long, global = true, default_value_t = false)]
    pub no_numbering: bool,

    /// Do not emit the show/hide control
    #[arg(long, global = true, default_value_t = false)]
    pub no_toggle: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print the table of contents for a document
    #[command(alias = "r")]
    Render {
        /// HTML file to read; stdin when omitted or `-`
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Also print the content with heading ids added
        #[arg(long, default_value_t = false)]
        with_content: bool,
    },

    /// Print the document with ids added to headings that lack one
    #[command(alias = "n")]
    Normalize {
        /// HTML file to read; stdin when omitted or `-`
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Print the collected headings as JSON
    Headings {
        /// HTML file to read; stdin when omitted or `-`
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(short, long, default_value_t = false)]
        pretty: bool,
    },

    /// Print the cache key for a content id and the effective options
    Key {
        /// Identifier of the content, such as a post id
        #[arg(value_name = "CONTENT_ID")]
        content_id: String,
    },
}
