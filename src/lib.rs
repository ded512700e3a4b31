//! # folio
//!
//! Small maintenance tools for a portfolio content directory: a flag
//! rewriter for markdown documents and an indexer that turns certificate
//! PDFs into markdown stubs.

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod rewrite;
pub mod template;

// Re-exports
pub use cli::{Cli, Commands};
pub use config::{IndexerConfig, NamingStyle, RewriteConfig};
pub use error::{FolioError, ParseError, Result};
pub use index::{GeneratedDocument, IndexReport, Indexer, SourceFile};
pub use rewrite::{FlagRewriter, MarkerReplacer, RewriteReport};
pub use template::FrontMatter;
