use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Fetch failed: {status} {reason}")]
    FetchError { status: u16, reason: String },

    #[error("Invalid pricing document: {message}")]
    DocumentError { message: String },

    #[error("Invalid URL '{url}': {reason}")]
    UrlError { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PricingError>;
