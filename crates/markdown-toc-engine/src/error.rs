#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Malformed document: table of contents nested {depth} levels deep (limit {limit})")]
    MalformedDocument { depth: usize, limit: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
