use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("input path does not exist: {0}")]
    PathNotFound(String),

    #[error("failed to parse people from {path}: {message}")]
    InputParse { path: String, message: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MarketError {
    pub fn is_config(&self) -> bool {
        matches!(self, MarketError::ConfigParse(_))
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;
