use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldBuilderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Draft store error: {0}")]
    StoreError(String),
}

pub type Result<T> = std::result::Result<T, FieldBuilderError>;
