pub mod service;

mod remote;

pub use service::{PricingCatalog, DEFAULT_CHEAPEST_LIMIT};
