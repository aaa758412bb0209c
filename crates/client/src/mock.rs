//! In-memory feedback API
//!
//! Backend that satisfies the whole [`FeedbackApi`] contract from a local
//! store, for offline demos and tests. The store is seeded by the
//! deterministic mock-data generator; every operation pauses for a fixed,
//! configurable latency to keep callers honest about asynchrony.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::{debug, info};

use feedbackos_config::MockConfig;
use feedbackos_engine::{aggregate, query, FeedbackStore, MockDataGenerator};
use feedbackos_types::{
    DashboardStats, FeedbackEntry, FeedbackListing, FeedbackSubmission, ListQuery,
    RatingsDistribution, RecentFeedbackRow, Result, Source, SourceDistribution, SubmitAck,
    TrendLabels, VolumeTrendBucket,
};

use crate::api::{validate_submission, FeedbackApi};

/// Feedback API served entirely from memory.
pub struct MockFeedbackApi {
    store: RwLock<FeedbackStore>,
    latency: Duration,
    trends: TrendLabels,
}

impl MockFeedbackApi {
    /// Seed a mock backend from configuration.
    pub fn new(config: &MockConfig) -> Self {
        let entries =
            MockDataGenerator::new(config.seed).generate(config.entries, config.history_days);
        info!(
            entries = entries.len(),
            seed = config.seed,
            "Seeded mock feedback backend"
        );

        Self {
            store: RwLock::new(FeedbackStore::from_entries(entries)),
            latency: Duration::from_millis(config.latency_ms),
            trends: TrendLabels::default(),
        }
    }

    /// Build a backend over explicit entries, with no simulated latency.
    pub fn with_entries(entries: Vec<FeedbackEntry>) -> Self {
        Self {
            store: RwLock::new(FeedbackStore::from_entries(entries)),
            latency: Duration::ZERO,
            trends: TrendLabels::default(),
        }
    }

    /// Override the externally-provided trend labels.
    pub fn with_trends(mut self, trends: TrendLabels) -> Self {
        self.trends = trends;
        self
    }

    async fn simulate_io(&self) {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl FeedbackApi for MockFeedbackApi {
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.simulate_io().await;
        let store = self.store.read().await;
        Ok(aggregate::dashboard_stats(store.entries(), &self.trends))
    }

    async fn ratings_distribution(&self) -> Result<RatingsDistribution> {
        self.simulate_io().await;
        let store = self.store.read().await;
        Ok(aggregate::ratings_distribution(store.entries()))
    }

    async fn volume_trend(&self, days: u32) -> Result<Vec<VolumeTrendBucket>> {
        self.simulate_io().await;
        let store = self.store.read().await;
        Ok(aggregate::volume_trend(store.entries(), days))
    }

    async fn source_distribution(&self) -> Result<SourceDistribution> {
        self.simulate_io().await;
        let store = self.store.read().await;
        Ok(aggregate::source_distribution(store.entries()))
    }

    async fn recent_feedback(&self, limit: u32) -> Result<Vec<RecentFeedbackRow>> {
        self.simulate_io().await;
        let store = self.store.read().await;
        Ok(query::recent_rows(store.entries(), limit as usize))
    }

    async fn list_feedback(&self, query_params: ListQuery) -> Result<FeedbackListing> {
        self.simulate_io().await;
        let store = self.store.read().await;
        Ok(query::list(store.entries(), &query_params))
    }

    async fn submit_feedback(&self, submission: FeedbackSubmission) -> Result<SubmitAck> {
        let rating = validate_submission(&submission)?;
        self.simulate_io().await;

        let entry = FeedbackEntry::new(
            submission.device_id.clone(),
            submission.feedback.clone(),
            rating,
            Source::Document,
        );
        debug!(id = %entry.id, "Accepting mock submission");

        let mut store = self.store.write().await;
        store.insert(entry);

        Ok(SubmitAck {
            message: "Feedback submitted successfully".to_string(),
            data: Some(serde_json::to_value(&submission)?),
        })
    }
}
