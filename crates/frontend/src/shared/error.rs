use thiserror::Error;

/// Ошибки загрузки списков и настроек
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Collection element {index} is not an object")]
    NotAnObject { index: usize },

    #[error("Response contains no record collection")]
    MissingCollection,

    #[error("Invalid list configuration: {0}")]
    InvalidConfig(String),
}
