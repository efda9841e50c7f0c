use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;

use crate::catalog::remote;
use crate::domain::criteria::SearchCriteria;
use crate::domain::model::{PriceRecord, PricingDocument};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Default number of entries returned by the cheapest-N queries.
pub const DEFAULT_CHEAPEST_LIMIT: usize = 10;

const BUNDLED_DOCUMENT: &str = include_str!("../../data/dynadot.json");

static BUNDLED: OnceLock<Arc<PricingCatalog>> = OnceLock::new();

/// In-memory query facade over a registrar's [`PricingDocument`].
///
/// Queries never mutate the catalog; the only mutation is the full-document
/// replace performed by [`PricingCatalog::refresh`].
#[derive(Debug, Clone)]
pub struct PricingCatalog {
    document: PricingDocument,
    client: Client,
}

impl PricingCatalog {
    /// Wrap an already-parsed document, checking its internal consistency.
    pub fn new(document: PricingDocument) -> Result<Self> {
        document.validate()?;
        Ok(Self {
            document,
            client: Client::new(),
        })
    }

    /// Parse a pricing document from raw JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let document: PricingDocument = serde_json::from_str(content)?;
        Self::new(document)
    }

    /// Load a pricing document from a local file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading pricing document from: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Shared catalog over the bundled Dynadot document, parsed once per
    /// process on first use.
    pub fn bundled() -> Result<Arc<Self>> {
        if let Some(catalog) = BUNDLED.get() {
            return Ok(Arc::clone(catalog));
        }
        let catalog = Arc::new(Self::from_json(BUNDLED_DOCUMENT)?);
        Ok(Arc::clone(BUNDLED.get_or_init(|| catalog)))
    }

    /// Fetch a pricing document from `url` and build a fresh catalog from it.
    pub async fn from_remote(url: &str) -> Result<Self> {
        let client = Client::new();
        let document = remote::fetch_document(&client, url).await?;
        Ok(Self { document, client })
    }

    pub fn registrar(&self) -> &str {
        &self.document.registrar
    }

    /// Last update as Unix epoch milliseconds.
    pub fn updated_at(&self) -> i64 {
        self.document.updated
    }

    /// Last update as a calendar timestamp, if the epoch value is in range.
    pub fn updated_at_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.document.updated)
    }

    /// Number of TLDs in the catalog.
    pub fn len(&self) -> usize {
        self.document.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.prices.is_empty()
    }

    /// All TLD names, in map iteration order.
    pub fn tlds(&self) -> Vec<&str> {
        self.document.prices.keys().map(String::as_str).collect()
    }

    /// Price record for `tld`, accepting an optional leading dot.
    pub fn price(&self, tld: &str) -> Option<&PriceRecord> {
        self.document.prices.get(normalize_tld(tld))
    }

    pub fn contains_tld(&self, tld: &str) -> bool {
        self.document.prices.contains_key(normalize_tld(tld))
    }

    /// Live TLD-to-record mapping; not a defensive copy.
    pub fn prices(&self) -> &HashMap<String, PriceRecord> {
        &self.document.prices
    }

    /// All price records, in map iteration order.
    pub fn price_list(&self) -> Vec<&PriceRecord> {
        self.document.prices.values().collect()
    }

    /// Full underlying document.
    pub fn document(&self) -> &PricingDocument {
        &self.document
    }

    /// Records satisfying every criterion present in `criteria`.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&PriceRecord> {
        self.price_list()
            .into_iter()
            .filter(|record| criteria.matches(record))
            .collect()
    }

    /// Up to `limit` records, cheapest registration price first.
    pub fn cheapest_by_registration(&self, limit: usize) -> Vec<&PriceRecord> {
        self.cheapest_by(limit, |record| record.register_price)
    }

    /// Up to `limit` records, cheapest renewal price first.
    pub fn cheapest_by_renewal(&self, limit: usize) -> Vec<&PriceRecord> {
        self.cheapest_by(limit, |record| record.renew_price)
    }

    fn cheapest_by(
        &self,
        limit: usize,
        key: impl Fn(&PriceRecord) -> Decimal,
    ) -> Vec<&PriceRecord> {
        let mut records = self.price_list();
        records.sort_by_key(|record| key(record));
        records.truncate(limit);
        records
    }

    /// TLDs anyone may register.
    pub fn unrestricted(&self) -> Vec<&PriceRecord> {
        self.price_list()
            .into_iter()
            .filter(|record| !record.restrictions.is_restricted())
            .collect()
    }

    /// TLDs with a registrar-imposed eligibility requirement.
    pub fn restricted(&self) -> Vec<&PriceRecord> {
        self.price_list()
            .into_iter()
            .filter(|record| record.restrictions.is_restricted())
            .collect()
    }

    pub fn privacy_enabled(&self) -> Vec<&PriceRecord> {
        self.price_list()
            .into_iter()
            .filter(|record| record.privacy)
            .collect()
    }

    pub fn idn_enabled(&self) -> Vec<&PriceRecord> {
        self.price_list()
            .into_iter()
            .filter(|record| record.idn)
            .collect()
    }

    /// Total cost of registering and holding a domain for `years`.
    ///
    /// The first year pays the registration price, every further year one
    /// renewal at the flat renewal price. Unknown TLDs yield `None`; zero or
    /// negative `years` cost nothing.
    pub fn total_cost(&self, tld: &str, years: i32) -> Option<Decimal> {
        let record = self.price(tld)?;
        if years <= 0 {
            return Some(Decimal::ZERO);
        }
        Some(record.register_price + Decimal::from(years - 1) * record.renew_price)
    }

    /// Replace the whole catalog with a document fetched from `url`.
    ///
    /// The new document is fetched, parsed, and validated off to the side and
    /// swapped in with a single assignment, so on any failure the current
    /// document stays as it was.
    pub async fn refresh(&mut self, url: &str) -> Result<()> {
        let document = remote::fetch_document(&self.client, url).await?;
        tracing::info!(
            "Replacing pricing catalog: {} TLDs from {}",
            document.prices.len(),
            document.registrar
        );
        self.document = document;
        Ok(())
    }
}

fn normalize_tld(tld: &str) -> &str {
    tld.strip_prefix('.').unwrap_or(tld)
}
