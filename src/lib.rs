pub mod catalog;
pub mod domain;
pub mod utils;

pub use catalog::{PricingCatalog, DEFAULT_CHEAPEST_LIMIT};
pub use domain::criteria::SearchCriteria;
pub use domain::model::{PriceRecord, PricingDocument, Restrictions};
pub use utils::error::{PricingError, Result};
