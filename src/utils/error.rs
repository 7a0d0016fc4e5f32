use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;
