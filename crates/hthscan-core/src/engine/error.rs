use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to build worker thread pool: {0}")]
    ThreadPool(String),

    #[error("Internal logic error: {0}")]
    Internal(String),
}
