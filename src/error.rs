use thiserror::Error;

/// rab統一エラー型
#[derive(Debug, Error)]
pub enum RabError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RabError>;
