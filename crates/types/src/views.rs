//! Derived dashboard views and wire shapes
//!
//! These are computed projections over the feedback collection. They have no
//! independent lifecycle and are recomputed on each query. Serde renames pin
//! the inferred JSON wire shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::{SentimentTag, Source};

/// Headline dashboard statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Count of all entries
    pub total_feedback: u64,
    /// Distinct device ids seen during the current calendar day
    pub active_sessions: u64,
    /// Informational trend label, externally provided
    pub feedback_growth: String,
    /// Informational trend label, externally provided
    pub session_growth: String,
}

/// Externally-provided trend labels for the dashboard headline.
///
/// No historical baseline exists in the core contract, so these are display
/// data passed through rather than computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendLabels {
    pub feedback_growth: String,
    pub session_growth: String,
}

impl Default for TrendLabels {
    fn default() -> Self {
        Self {
            feedback_growth: "+12.5%".to_string(),
            session_growth: "+3.2%".to_string(),
        }
    }
}

/// Rating distribution collapsed to three buckets.
///
/// Percentages are rounded independently and may not sum to exactly 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingsDistribution {
    /// Percentage of very satisfied + satisfied entries, 0..=100
    pub satisfied: u8,
    /// Percentage of neutral entries, 0..=100
    pub neutral: u8,
    /// Percentage of dissatisfied + very dissatisfied entries, 0..=100
    pub dissatisfied: u8,
    /// Mean score on the 1..=5 scale, formatted to one decimal place
    pub average_score: String,
    /// Total number of entries behind the distribution
    pub total_responses: u64,
}

impl RatingsDistribution {
    /// Distribution over an empty collection: all buckets zeroed.
    pub fn empty() -> Self {
        Self {
            satisfied: 0,
            neutral: 0,
            dissatisfied: 0,
            average_score: "0.0".to_string(),
            total_responses: 0,
        }
    }
}

/// One calendar-day bucket of the volume trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeTrendBucket {
    /// ISO-8601 date (`YYYY-MM-DD`)
    pub date: String,
    /// Entries created within `[date, date+1d)`
    pub count: u64,
    /// Short weekday name (`Mon`, `Tue`, ...)
    pub label: String,
}

/// Distribution of entries by provenance channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceDistribution {
    pub document: SourceSlice,
    pub chatbot: SourceSlice,
    /// Total number of entries behind the distribution
    pub total: u64,
}

impl SourceDistribution {
    /// Slice for the given channel.
    pub fn slice(&self, source: Source) -> &SourceSlice {
        match source {
            Source::Document => &self.document,
            Source::Chatbot => &self.chatbot,
        }
    }
}

/// Count and independently-rounded percentage for one channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceSlice {
    pub count: u64,
    /// 0..=100, rounded independently of the other channels
    pub percentage: u8,
}

/// Display row for the recent-feedback dashboard table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentFeedbackRow {
    pub id: String,
    /// Derived label: `"User "` + last 4 characters of the device id
    pub user: String,
    /// Sentiment tag derived from the rating
    pub rating: SentimentTag,
    /// Comment truncated to 60 characters for display
    pub comment: String,
    /// Human-readable relative age (`"5 mins ago"`)
    pub date: String,
    /// Row status, always `"New"` on this contract
    pub status: String,
}

/// Row of the paginated all-feedback listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackListRow {
    pub id: String,
    /// Device id of the submitting session
    pub session_id: String,
    /// Derived display label for the session
    pub user: String,
    /// Full comment text
    pub feedback: String,
    /// Sentiment tag derived from the rating
    pub rating: SentimentTag,
    /// Provenance channel
    pub source: Source,
    /// Entries sharing this row's device id across the unfiltered collection
    pub message_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Paginated listing response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackListing {
    pub feedback: Vec<FeedbackListRow>,
    pub pagination: PageInfo,
}

/// Pagination block accompanying a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl PageInfo {
    /// Build the block for a page over `total_items` filtered entries.
    pub fn new(current_page: u32, items_per_page: u32, total_items: u64) -> Self {
        let total_pages = if items_per_page == 0 {
            0
        } else {
            ((total_items as f64) / (items_per_page as f64)).ceil() as u32
        };
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
        }
    }
}

/// Query parameters for the all-feedback listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListQuery {
    /// Page number, starting from 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Case-insensitive substring filter over device id and comment text
    #[serde(default)]
    pub search: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
        }
    }
}

impl ListQuery {
    /// Set the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Search term, `None` when absent or blank. Blank search means no
    /// filtering and must never reach the wire as an empty string.
    pub fn effective_search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Submission body for new feedback.
///
/// `rating` carries the raw wire label so validation can distinguish a
/// missing value from an unknown one before dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    /// Submitting device/session id
    pub device_id: String,
    /// Free-form comment text
    pub feedback: String,
    /// Rating wire label, e.g. `"very satisfied"`
    pub rating: String,
}

impl FeedbackSubmission {
    /// Create a submission.
    pub fn new(
        device_id: impl Into<String>,
        feedback: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            feedback: feedback.into(),
            rating: rating.into(),
        }
    }
}

/// Acknowledgement returned by a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitAck {
    pub message: String,
    /// Echo of the accepted submission, when the backing store provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
