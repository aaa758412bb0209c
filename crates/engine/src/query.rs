//! Query and pagination layer
//!
//! Projects the feedback collection into the recent-feedback table and the
//! filtered, paginated all-feedback listing.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use feedbackos_types::{
    FeedbackEntry, FeedbackListRow, FeedbackListing, ListQuery, PageInfo, RecentFeedbackRow,
    Sentiment,
};

use crate::aggregate::{relative_age_at, summarize, user_label};

/// The `limit` most-recent entries projected to display rows, measured now.
pub fn recent_rows(entries: &[FeedbackEntry], limit: usize) -> Vec<RecentFeedbackRow> {
    recent_rows_at(entries, limit, Utc::now())
}

/// The `limit` most-recent entries projected to display rows, with relative
/// ages measured against `now`. No filtering is applied.
pub fn recent_rows_at(
    entries: &[FeedbackEntry],
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<RecentFeedbackRow> {
    let mut ordered: Vec<&FeedbackEntry> = entries.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    ordered
        .into_iter()
        .take(limit)
        .map(|entry| RecentFeedbackRow {
            id: entry.id.clone(),
            user: user_label(&entry.device_id),
            rating: Sentiment::from(entry.rating).tag(),
            comment: summarize(&entry.text),
            date: relative_age_at(entry.created_at, now),
            status: "New".to_string(),
        })
        .collect()
}

/// Filtered, paginated listing of the collection.
///
/// The search term matches case-insensitively as a substring of either the
/// device id or the comment text; a blank term applies no filter. Each row's
/// `message_count` counts entries sharing its device id across the
/// *unfiltered* collection. A page beyond the available range yields an
/// empty row set with a consistent pagination block, never an error.
pub fn list(entries: &[FeedbackEntry], query: &ListQuery) -> FeedbackListing {
    let page = query.page.max(1);
    let limit = query.limit.max(1);

    let mut device_counts: HashMap<&str, u64> = HashMap::new();
    for entry in entries {
        *device_counts.entry(entry.device_id.as_str()).or_default() += 1;
    }

    let needle = query.effective_search().map(str::to_lowercase);
    let mut filtered: Vec<&FeedbackEntry> = entries
        .iter()
        .filter(|entry| match &needle {
            Some(needle) => {
                entry.device_id.to_lowercase().contains(needle)
                    || entry.text.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect();
    filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = filtered.len() as u64;
    let start = ((page - 1) * limit) as usize;

    let feedback = filtered
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .map(|entry| FeedbackListRow {
            id: entry.id.clone(),
            session_id: entry.device_id.clone(),
            user: user_label(&entry.device_id),
            feedback: entry.text.clone(),
            rating: Sentiment::from(entry.rating).tag(),
            source: entry.source,
            message_count: device_counts.get(entry.device_id.as_str()).copied().unwrap_or(1),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        })
        .collect();

    FeedbackListing {
        feedback,
        pagination: PageInfo::new(page, limit, total),
    }
}
