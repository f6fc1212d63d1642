pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod rewriter;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::RewriteError;
pub use io::{IoError, LineSink, WriterSink, open_document, read_lines, rewrite_stream};
pub use models::{HeadingEntry, Outline};
pub use render::{RenderOptions, SlugStyle, slug};
pub use rewriter::{Mode, RewriterOptions, TocRewriter};
