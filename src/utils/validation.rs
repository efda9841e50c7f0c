use crate::utils::error::{PricingError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn parse_http_url(url_str: &str) -> Result<Url> {
    if url_str.trim().is_empty() {
        return Err(PricingError::UrlError {
            url: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(PricingError::UrlError {
                url: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PricingError::UrlError {
            url: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}
