pub mod enrichment;
pub mod gauge;
pub mod models;
