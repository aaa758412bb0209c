//! Core types and data models for FeedbackOS
//!
//! This crate provides the feedback data model, the derived dashboard views,
//! and the shared error taxonomy used throughout the FeedbackOS core.

pub mod entry;
pub mod errors;
pub mod views;

pub use entry::{FeedbackEntry, Rating, Sentiment, SentimentTag, Source};
pub use errors::{FeedbackError, Result};
pub use views::{
    DashboardStats, FeedbackListRow, FeedbackListing, FeedbackSubmission, ListQuery, PageInfo,
    RatingsDistribution, RecentFeedbackRow, SourceDistribution, SourceSlice, SubmitAck,
    TrendLabels, VolumeTrendBucket,
};
