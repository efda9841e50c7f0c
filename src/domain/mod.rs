// Domain layer: the pricing document model and search criteria. No I/O here.

pub mod criteria;
pub mod model;
