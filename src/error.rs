use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    #[error("failed to read candidates: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON candidates: {0}")]
    Json(#[from] serde_json::Error),

    #[error("terminal error: {0}")]
    Terminal(std::io::Error),

    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, PickError>;
