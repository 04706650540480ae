#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Document backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write export document: {0}")]
    Sink(#[from] SinkError),
}
