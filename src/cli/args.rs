use crate::config::{
    NamingStyle, DEFAULT_CONTENT_ROOT, DEFAULT_DOC_EXTENSION, DEFAULT_MARKER, DEFAULT_REPLACEMENT,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(about = "Maintain the portfolio content directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace a flag value in every matching document under a directory
    Rewrite {
        /// Root of the content tree
        #[arg(short, long, default_value = DEFAULT_CONTENT_ROOT)]
        root: String,

        /// Only files whose name ends with this suffix
        #[arg(short, long, default_value = DEFAULT_DOC_EXTENSION)]
        extension: String,

        /// Literal text to look for
        #[arg(short, long, default_value = DEFAULT_MARKER)]
        marker: String,

        /// Literal text to put in its place
        #[arg(short = 'R', long, default_value = DEFAULT_REPLACEMENT)]
        replacement: String,
    },

    /// Generate a markdown stub for every certificate file
    Index {
        /// JSON file with indexer settings (flags below override it)
        #[arg(short, long)]
        config: Option<String>,

        /// Directory with the certificate files
        #[arg(short, long)]
        source: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Certificate file extension
        #[arg(short, long)]
        extension: Option<String>,

        /// Base URL the original file name is appended to
        #[arg(short, long)]
        url_base: Option<String>,

        /// Company label
        #[arg(long)]
        company: Option<String>,

        /// How output file names are built
        #[arg(short, long, value_enum)]
        naming: Option<NamingStyle>,
    },

    /// Write the default indexer settings as JSON
    ExampleConfig {
        /// Output path for the settings file
        #[arg(short, long, default_value = "folio.json")]
        output: String,
    },
}
