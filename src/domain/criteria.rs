use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::model::PriceRecord;

/// Filter configuration for catalog searches. Absent fields impose no
/// constraint; a record must satisfy every present field to match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Inclusive upper bound on the registration price.
    pub max_register_price: Option<Decimal>,
    /// Inclusive upper bound on the renewal price.
    pub max_renew_price: Option<Decimal>,
    /// Inclusive upper bound on the transfer price.
    pub max_transfer_price: Option<Decimal>,
    pub privacy: Option<bool>,
    pub idn: Option<bool>,
    /// `true` keeps restricted TLDs only, `false` unrestricted only.
    pub has_restrictions: Option<bool>,
    /// Case-insensitive substring match against the usage category.
    pub usage: Option<String>,
}

impl SearchCriteria {
    pub fn matches(&self, record: &PriceRecord) -> bool {
        if let Some(max) = self.max_register_price {
            if record.register_price > max {
                return false;
            }
        }
        if let Some(max) = self.max_renew_price {
            if record.renew_price > max {
                return false;
            }
        }
        if let Some(max) = self.max_transfer_price {
            if record.transfer_price > max {
                return false;
            }
        }
        if let Some(privacy) = self.privacy {
            if record.privacy != privacy {
                return false;
            }
        }
        if let Some(idn) = self.idn {
            if record.idn != idn {
                return false;
            }
        }
        if let Some(has_restrictions) = self.has_restrictions {
            if record.restrictions.is_restricted() != has_restrictions {
                return false;
            }
        }
        if let Some(usage) = &self.usage {
            if !record
                .usage
                .to_lowercase()
                .contains(&usage.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}
