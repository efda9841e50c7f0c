use reqwest::Client;

use crate::domain::model::PricingDocument;
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{parse_http_url, Validate};

/// Retrieve and parse a pricing document from `url`.
///
/// The body is fully parsed and validated before the caller sees it, so a
/// failed retrieval never yields a half-built document.
pub(crate) async fn fetch_document(client: &Client, url: &str) -> Result<PricingDocument> {
    let url = parse_http_url(url)?;

    tracing::debug!("Requesting pricing document from: {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    tracing::debug!("Pricing document response status: {}", status);

    if !status.is_success() {
        return Err(PricingError::FetchError {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string(),
        });
    }

    let body = response.text().await?;
    let document: PricingDocument = serde_json::from_str(&body)?;
    document.validate()?;

    Ok(document)
}
