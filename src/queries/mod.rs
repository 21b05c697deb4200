pub mod contact_queries;
pub mod insight_queries;

pub use contact_queries::Freshness;
pub use insight_queries::{InsightThresholds, Insights};
