//! Feedback API facade
//!
//! One method per operation, implemented by both the remote and in-memory
//! backends. Operation selection is explicit; there is no endpoint-string
//! routing anywhere on this surface.

use async_trait::async_trait;
use feedbackos_types::{
    DashboardStats, FeedbackError, FeedbackListing, FeedbackSubmission, ListQuery, Rating,
    RatingsDistribution, RecentFeedbackRow, Result, SourceDistribution, SubmitAck,
    VolumeTrendBucket,
};

/// Default trailing window for the volume trend.
pub const DEFAULT_TREND_DAYS: u32 = 7;

/// Default row count for the recent-feedback table.
pub const DEFAULT_RECENT_LIMIT: u32 = 5;

/// Uniform asynchronous interface over the feedback resource namespace.
///
/// Every operation may involve I/O latency; callers must not assume
/// synchronous completion. Operations carry no cross-call ordering
/// dependency; each is computed from the backing store's state at call time.
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    /// Headline dashboard statistics.
    async fn dashboard_stats(&self) -> Result<DashboardStats>;

    /// Rating distribution for the dashboard donut chart.
    async fn ratings_distribution(&self) -> Result<RatingsDistribution>;

    /// Daily submission counts for the trailing `days` calendar days.
    async fn volume_trend(&self, days: u32) -> Result<Vec<VolumeTrendBucket>>;

    /// Distribution of entries by provenance channel.
    async fn source_distribution(&self) -> Result<SourceDistribution>;

    /// The `limit` most-recent entries as display rows.
    async fn recent_feedback(&self, limit: u32) -> Result<Vec<RecentFeedbackRow>>;

    /// Filtered, paginated listing of all feedback.
    async fn list_feedback(&self, query: ListQuery) -> Result<FeedbackListing>;

    /// Submit new feedback. Validation runs before any network or store
    /// interaction; a missing field is a [`FeedbackError::Validation`],
    /// never a transport failure.
    async fn submit_feedback(&self, submission: FeedbackSubmission) -> Result<SubmitAck>;
}

/// Validate a submission before dispatch.
///
/// The comment text must be non-blank and the rating label must parse to one
/// of the five known ratings. Returns the parsed rating on success.
pub fn validate_submission(submission: &FeedbackSubmission) -> Result<Rating> {
    if submission.feedback.trim().is_empty() {
        return Err(FeedbackError::Validation(
            "feedback text is required".to_string(),
        ));
    }

    if submission.rating.trim().is_empty() {
        return Err(FeedbackError::Validation("rating is required".to_string()));
    }

    Rating::parse_label(&submission.rating).ok_or_else(|| {
        FeedbackError::Validation(format!("unknown rating label: {:?}", submission.rating))
    })
}
