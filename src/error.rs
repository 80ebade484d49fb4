use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: i32 },

    #[error("No {0} identifiers left to assign")]
    IdsExhausted(&'static str),

    /// Failure reported by a `Storage` backend
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
