use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorelensError {
    #[error("{0}")]
    Validation(String),

    #[error("An analysis is already running")]
    AnalysisInProgress,

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("HTTP request returned status {0}")]
    HttpStatus(u16),

    #[error("Extraction failed: {0}")]
    ExtractionError(String),

    #[error("Pipeline stage failed: {0}")]
    PipelineError(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StorelensError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            StorelensError::Validation(_) | StorelensError::UrlParseError(_) => Some(
                "Pass a full URL including the scheme:\n  storelens analyze https://example.com"
            ),
            StorelensError::AnalysisInProgress => Some(
                "Wait for the running analysis to finish before starting another"
            ),
            StorelensError::HttpError(_) | StorelensError::HttpStatus(_) => Some(
                "Check your internet connection, or skip retrieval with --offline"
            ),
            StorelensError::ConfigError(_) | StorelensError::TomlError(_) => Some(
                "Check the config file: storelens config path"
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorelensError>;
