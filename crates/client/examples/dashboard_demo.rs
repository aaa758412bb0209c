//! Dashboard Demo
//!
//! Runs the full dashboard query surface against the in-memory mock backend.
//!
//! This example shows:
//! - Seeding a deterministic mock backend from configuration
//! - Fetching headline stats, distributions, and the volume trend
//! - Paginated listing with a search filter
//! - Submitting feedback through the same facade

use feedbackos_client::{FeedbackApi, MockFeedbackApi, DEFAULT_RECENT_LIMIT, DEFAULT_TREND_DAYS};
use feedbackos_config::FeedbackConfig;
use feedbackos_types::{FeedbackSubmission, ListQuery};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FeedbackConfig::default();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.observability.log_level.clone())),
        )
        .init();

    let api = MockFeedbackApi::new(&config.mock);

    let stats = api.dashboard_stats().await?;
    println!(
        "{} entries total, {} sessions active today ({})",
        stats.total_feedback, stats.active_sessions, stats.feedback_growth
    );

    let distribution = api.ratings_distribution().await?;
    println!(
        "satisfied {}% / neutral {}% / dissatisfied {}% (avg {})",
        distribution.satisfied,
        distribution.neutral,
        distribution.dissatisfied,
        distribution.average_score
    );

    println!("\nVolume, last {DEFAULT_TREND_DAYS} days:");
    for bucket in api.volume_trend(DEFAULT_TREND_DAYS).await? {
        println!("  {} {}  {}", bucket.date, bucket.label, bucket.count);
    }

    println!("\nRecent feedback:");
    for row in api.recent_feedback(DEFAULT_RECENT_LIMIT).await? {
        println!("  [{}] {} - {} ({})", row.rating.label, row.user, row.comment, row.date);
    }

    let listing = api
        .list_feedback(ListQuery::default().with_search("billing"))
        .await?;
    println!(
        "\n{} entries mention billing (page {}/{})",
        listing.pagination.total_items,
        listing.pagination.current_page,
        listing.pagination.total_pages
    );

    let ack = api
        .submit_feedback(FeedbackSubmission::new(
            "device_demo01",
            "The new feature you deployed is exactly what I needed.",
            "very satisfied",
        ))
        .await?;
    println!("\nsubmit: {}", ack.message);

    Ok(())
}
