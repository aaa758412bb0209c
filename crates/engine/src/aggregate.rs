//! Dashboard aggregation
//!
//! Pure functions over a snapshot of the feedback collection. Every
//! time-dependent operation has an `*_at` variant taking an explicit `now`
//! so callers (and tests) can pin the clock; the plain variants anchor on
//! the local wall clock, since day buckets follow local calendar-day
//! boundaries.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use feedbackos_types::{
    DashboardStats, FeedbackEntry, Rating, RatingsDistribution, Source, SourceDistribution,
    SourceSlice, TrendLabels, VolumeTrendBucket,
};

/// Headline dashboard statistics as of now.
pub fn dashboard_stats(entries: &[FeedbackEntry], trends: &TrendLabels) -> DashboardStats {
    dashboard_stats_at(entries, trends, Local::now())
}

/// Headline dashboard statistics as of `now`.
///
/// `active_sessions` counts distinct device ids among entries created within
/// the calendar day containing `now`, in `now`'s timezone. The growth fields
/// are externally-provided trend labels, passed through untouched.
pub fn dashboard_stats_at<Tz: TimeZone>(
    entries: &[FeedbackEntry],
    trends: &TrendLabels,
    now: DateTime<Tz>,
) -> DashboardStats {
    let tz = now.timezone();
    let today = now.date_naive();

    let active_sessions = entries
        .iter()
        .filter(|entry| entry.created_at.with_timezone(&tz).date_naive() == today)
        .map(|entry| entry.device_id.as_str())
        .collect::<HashSet<_>>()
        .len() as u64;

    DashboardStats {
        total_feedback: entries.len() as u64,
        active_sessions,
        feedback_growth: trends.feedback_growth.clone(),
        session_growth: trends.session_growth.clone(),
    }
}

/// Rating distribution collapsed to three buckets.
///
/// Percentages are rounded half-up independently of each other and may not
/// sum to exactly 100; that is accepted, not corrected. An empty collection
/// yields the zeroed fallback instead of dividing by zero.
pub fn ratings_distribution(entries: &[FeedbackEntry]) -> RatingsDistribution {
    let total = entries.len() as u64;
    if total == 0 {
        return RatingsDistribution::empty();
    }

    let mut satisfied = 0u64;
    let mut neutral = 0u64;
    let mut dissatisfied = 0u64;
    let mut total_score = 0u64;

    for entry in entries {
        match entry.rating {
            Rating::VerySatisfied | Rating::Satisfied => satisfied += 1,
            Rating::Neutral => neutral += 1,
            Rating::Dissatisfied | Rating::VeryDissatisfied => dissatisfied += 1,
        }
        total_score += u64::from(entry.rating.score());
    }

    RatingsDistribution {
        satisfied: percentage(satisfied, total),
        neutral: percentage(neutral, total),
        dissatisfied: percentage(dissatisfied, total),
        average_score: format!("{:.1}", total_score as f64 / total as f64),
        total_responses: total,
    }
}

/// Daily submission counts for the trailing `days` calendar days, anchored
/// on the local wall clock.
pub fn volume_trend(entries: &[FeedbackEntry], days: u32) -> Vec<VolumeTrendBucket> {
    volume_trend_at(entries, days, Local::now())
}

/// Daily submission counts for the trailing `days` calendar days ending at
/// the day containing `now`.
///
/// Returns exactly `days` buckets, oldest first. A bucket for `date` counts
/// entries whose `created_at` falls within `[date, date+1d)` in `now`'s
/// timezone.
pub fn volume_trend_at<Tz: TimeZone>(
    entries: &[FeedbackEntry],
    days: u32,
    now: DateTime<Tz>,
) -> Vec<VolumeTrendBucket> {
    let tz = now.timezone();
    let today = now.date_naive();

    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(i64::from(offset));
            let count = entries
                .iter()
                .filter(|entry| entry.created_at.with_timezone(&tz).date_naive() == date)
                .count() as u64;
            VolumeTrendBucket {
                date: date.format("%Y-%m-%d").to_string(),
                count,
                label: date.format("%a").to_string(),
            }
        })
        .collect()
}

/// Distribution of entries by provenance channel.
pub fn source_distribution(entries: &[FeedbackEntry]) -> SourceDistribution {
    let total = entries.len() as u64;
    let document = entries
        .iter()
        .filter(|entry| entry.source == Source::Document)
        .count() as u64;
    let chatbot = total - document;

    let slice = |count: u64| SourceSlice {
        count,
        percentage: if total == 0 { 0 } else { percentage(count, total) },
    };

    SourceDistribution {
        document: slice(document),
        chatbot: slice(chatbot),
        total,
    }
}

/// Human-readable elapsed time since `timestamp`, measured now.
pub fn relative_age(timestamp: DateTime<Utc>) -> String {
    relative_age_at(timestamp, Utc::now())
}

/// Human-readable elapsed time between `timestamp` and `now`.
///
/// Thresholds: under a minute in seconds, under an hour in minutes, under a
/// day in hours, otherwise days. Quotients are floored, never rounded.
pub fn relative_age_at(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(timestamp).num_seconds().max(0);

    if secs < 60 {
        format!("{secs} secs ago")
    } else if secs < 3_600 {
        format!("{} mins ago", secs / 60)
    } else if secs < 86_400 {
        format!("{} hours ago", secs / 3_600)
    } else {
        format!("{} days ago", secs / 86_400)
    }
}

/// Comment text truncated to 60 characters plus an ellipsis for display
/// summaries. Truncation is character-based, never mid-codepoint.
pub fn summarize(text: &str) -> String {
    if text.chars().count() > 60 {
        let mut summary: String = text.chars().take(60).collect();
        summary.push_str("...");
        summary
    } else {
        text.to_string()
    }
}

/// Display label for a session: `"User "` plus the last four characters of
/// the device id.
pub fn user_label(device_id: &str) -> String {
    let skip = device_id.chars().count().saturating_sub(4);
    let tail: String = device_id.chars().skip(skip).collect();
    format!("User {tail}")
}

fn percentage(count: u64, total: u64) -> u8 {
    (count as f64 / total as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(device: &str, rating: Rating, source: Source, created_at: DateTime<Utc>) -> FeedbackEntry {
        FeedbackEntry::new(device, "The agent was very helpful.", rating, source)
            .with_timestamps(created_at)
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().unwrap()
    }

    #[test]
    fn test_distribution_one_of_each_rating() {
        let now = at(2024, 5, 15, 12);
        let entries: Vec<_> = Rating::ALL
            .iter()
            .map(|&rating| entry("device_1", rating, Source::Document, now))
            .collect();

        let dist = ratings_distribution(&entries);
        assert_eq!(dist.satisfied, 40);
        assert_eq!(dist.neutral, 20);
        assert_eq!(dist.dissatisfied, 40);
        assert_eq!(dist.average_score, "3.0");
        assert_eq!(dist.total_responses, 5);
    }

    #[test]
    fn test_distribution_empty_collection_fallback() {
        let dist = ratings_distribution(&[]);
        assert_eq!(dist, RatingsDistribution::empty());
    }

    #[test]
    fn test_distribution_percentages_rounded_independently() {
        // 1 satisfied, 1 neutral, 1 dissatisfied out of 3: each rounds to 33
        let now = at(2024, 5, 15, 12);
        let entries = vec![
            entry("a", Rating::Satisfied, Source::Document, now),
            entry("b", Rating::Neutral, Source::Document, now),
            entry("c", Rating::VeryDissatisfied, Source::Document, now),
        ];

        let dist = ratings_distribution(&entries);
        assert_eq!(
            (dist.satisfied, dist.neutral, dist.dissatisfied),
            (33, 33, 33)
        );
        assert!(dist.satisfied <= 100 && dist.neutral <= 100 && dist.dissatisfied <= 100);
        assert_eq!(dist.average_score, "2.7");
    }

    #[test]
    fn test_dashboard_stats_counts_todays_distinct_devices() {
        let now = at(2024, 5, 15, 12);
        let entries = vec![
            entry("device_a", Rating::Satisfied, Source::Document, at(2024, 5, 15, 8)),
            entry("device_a", Rating::Neutral, Source::Chatbot, at(2024, 5, 15, 10)),
            entry("device_b", Rating::Satisfied, Source::Document, at(2024, 5, 15, 1)),
            // Previous day: not an active session
            entry("device_c", Rating::Satisfied, Source::Document, at(2024, 5, 14, 23)),
        ];

        let stats = dashboard_stats_at(&entries, &TrendLabels::default(), now);
        assert_eq!(stats.total_feedback, 4);
        assert_eq!(stats.active_sessions, 2);
        assert_eq!(stats.feedback_growth, "+12.5%");
        assert_eq!(stats.session_growth, "+3.2%");
    }

    #[test]
    fn test_volume_trend_shape_and_counts() {
        let now = at(2024, 5, 15, 12);
        let entries = vec![
            entry("a", Rating::Satisfied, Source::Document, at(2024, 5, 15, 1)),
            entry("b", Rating::Satisfied, Source::Document, at(2024, 5, 15, 23)),
            entry("c", Rating::Neutral, Source::Chatbot, at(2024, 5, 13, 6)),
            // Outside the 7-day window
            entry("d", Rating::Neutral, Source::Chatbot, at(2024, 5, 1, 6)),
        ];

        let trend = volume_trend_at(&entries, 7, now);
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].date, "2024-05-09");
        assert_eq!(trend[6].date, "2024-05-15");
        assert!(trend.windows(2).all(|pair| pair[0].date < pair[1].date));

        assert_eq!(trend[6].count, 2);
        assert_eq!(trend[4].count, 1);
        let total_in_window: u64 = trend.iter().map(|bucket| bucket.count).sum();
        assert_eq!(total_in_window, 3);

        // 2024-05-15 was a Wednesday
        assert_eq!(trend[6].label, "Wed");
    }

    #[test]
    fn test_volume_trend_zero_days() {
        assert!(volume_trend_at(&[], 0, at(2024, 5, 15, 12)).is_empty());
    }

    #[test]
    fn test_source_distribution() {
        let now = at(2024, 5, 15, 12);
        let entries = vec![
            entry("a", Rating::Satisfied, Source::Document, now),
            entry("b", Rating::Satisfied, Source::Document, now),
            entry("c", Rating::Satisfied, Source::Chatbot, now),
        ];

        let dist = source_distribution(&entries);
        assert_eq!(dist.total, 3);
        assert_eq!(dist.document.count, 2);
        assert_eq!(dist.document.percentage, 67);
        assert_eq!(dist.chatbot.count, 1);
        assert_eq!(dist.chatbot.percentage, 33);

        let empty = source_distribution(&[]);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.document.percentage, 0);
    }

    #[test]
    fn test_relative_age_thresholds_floor() {
        let now = at(2024, 5, 15, 12);
        let age = |secs: i64| relative_age_at(now - Duration::seconds(secs), now);

        assert_eq!(age(0), "0 secs ago");
        assert_eq!(age(59), "59 secs ago");
        assert_eq!(age(60), "1 mins ago");
        assert_eq!(age(119), "1 mins ago");
        assert_eq!(age(3_599), "59 mins ago");
        assert_eq!(age(3_600), "1 hours ago");
        assert_eq!(age(86_399), "23 hours ago");
        assert_eq!(age(86_400), "1 days ago");
        assert_eq!(age(9 * 86_400 + 7_200), "9 days ago");
    }

    #[test]
    fn test_summarize_truncates_past_sixty_chars() {
        let short = "Great service, thanks!";
        assert_eq!(summarize(short), short);

        let exact: String = "x".repeat(60);
        assert_eq!(summarize(&exact), exact);

        let long: String = "x".repeat(61);
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), 63);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_summarize_is_char_boundary_safe() {
        let long: String = "é".repeat(70);
        let summary = summarize(&long);
        assert!(summary.starts_with(&"é".repeat(60)));
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_user_label() {
        assert_eq!(user_label("device_ab12cd34"), "User cd34");
        assert_eq!(user_label("ab"), "User ab");
    }
}
