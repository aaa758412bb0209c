//! Feedback aggregation engine
//!
//! This crate provides the in-memory feedback record store, the pure
//! aggregation functions behind the dashboard, the query/pagination layer
//! for the all-feedback listing, and a seedable mock-data generator for
//! offline demos.

pub mod aggregate;
pub mod generator;
pub mod query;
pub mod store;

pub use aggregate::{
    dashboard_stats, dashboard_stats_at, ratings_distribution, relative_age, relative_age_at,
    source_distribution, summarize, user_label, volume_trend, volume_trend_at,
};
pub use generator::MockDataGenerator;
pub use query::{list, recent_rows, recent_rows_at};
pub use store::FeedbackStore;
