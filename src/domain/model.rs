use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::error::{PricingError, Result};
use crate::utils::validation::Validate;

/// Registration eligibility for a TLD: open to anyone, or limited by a
/// registrar-imposed requirement described in free text.
///
/// On the wire this is the union `false | "<description>"`. A `true` flag and
/// an empty description are both rejected during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RestrictionsRepr", into = "RestrictionsRepr")]
pub enum Restrictions {
    Unrestricted,
    Restricted(String),
}

impl Restrictions {
    pub fn is_restricted(&self) -> bool {
        matches!(self, Restrictions::Restricted(_))
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RestrictionsRepr {
    Flag(bool),
    Text(String),
}

impl TryFrom<RestrictionsRepr> for Restrictions {
    type Error = String;

    fn try_from(repr: RestrictionsRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            RestrictionsRepr::Flag(false) => Ok(Restrictions::Unrestricted),
            RestrictionsRepr::Flag(true) => Err("restrictions flag may only be false".to_string()),
            RestrictionsRepr::Text(text) if text.is_empty() => {
                Err("restriction description cannot be empty".to_string())
            }
            RestrictionsRepr::Text(text) => Ok(Restrictions::Restricted(text)),
        }
    }
}

impl From<Restrictions> for RestrictionsRepr {
    fn from(restrictions: Restrictions) -> Self {
        match restrictions {
            Restrictions::Unrestricted => RestrictionsRepr::Flag(false),
            Restrictions::Restricted(text) => RestrictionsRepr::Text(text),
        }
    }
}

/// Pricing terms for a single TLD. All amounts are in `currency` units;
/// grace periods are in days and informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub tld: String,
    pub usage: String,
    pub register_price: Decimal,
    pub renew_price: Decimal,
    pub transfer_price: Decimal,
    pub restore_price: Decimal,
    pub renew_grace_period: u32,
    pub delete_grace_period: u32,
    pub currency: String,
    pub privacy: bool,
    pub idn: bool,
    pub restrictions: Restrictions,
}

/// A registrar's full pricing catalog as published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingDocument {
    pub registrar: String,
    /// Unix epoch milliseconds of the last catalog update.
    pub updated: i64,
    pub prices: HashMap<String, PriceRecord>,
}

impl Validate for PricingDocument {
    fn validate(&self) -> Result<()> {
        for (key, record) in &self.prices {
            if key.starts_with('.') {
                return Err(PricingError::DocumentError {
                    message: format!("TLD key '{}' must not carry a leading dot", key),
                });
            }
            if key != &record.tld {
                return Err(PricingError::DocumentError {
                    message: format!(
                        "TLD key '{}' does not match its record's tld '{}'",
                        key, record.tld
                    ),
                });
            }
        }
        Ok(())
    }
}
