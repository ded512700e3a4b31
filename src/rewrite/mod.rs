pub mod replacer;
pub mod rewriter;

pub use replacer::MarkerReplacer;
pub use rewriter::{rewrite_file, FlagRewriter, RewriteReport};
