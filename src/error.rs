use thiserror::Error;

#[derive(Error, Debug)]
pub enum PressError {
    // Client-side checks, raised before any request is sent
    #[error("{0}")]
    Validation(String),

    #[error("unknown category '{0}'")]
    InvalidCategory(String),

    #[error("another {0} request is still in flight")]
    Busy(String),

    // Remote errors
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },

    // Ambient errors
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl PressError {
    /// True for errors raised before any network call was attempted
    pub fn is_validation(&self) -> bool {
        matches!(self, PressError::Validation(_))
    }

    /// True for errors reported by the backend (non-2xx status)
    pub fn is_server(&self) -> bool {
        matches!(self, PressError::Server { .. } | PressError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, PressError>;
