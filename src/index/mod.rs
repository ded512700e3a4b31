pub mod document;
pub mod indexer;
pub mod source;

pub use document::{base_filename, unique_target, GeneratedDocument};
pub use indexer::{CreatedDocument, IndexReport, Indexer};
pub use source::SourceFile;
