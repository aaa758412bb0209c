//! Remote feedback API client
//!
//! HTTP-backed implementation of [`FeedbackApi`] over the feedback resource
//! namespace. Every request attaches the session's bearer credential when
//! one is present; a 401 response invalidates the credential and surfaces
//! the sign-out signal. Transport failures are logged and forwarded as typed
//! errors; nothing is retried automatically.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use feedbackos_config::ApiConfig;
use feedbackos_types::{
    DashboardStats, FeedbackError, FeedbackListing, FeedbackSubmission, ListQuery,
    RatingsDistribution, RecentFeedbackRow, Result, SourceDistribution, SubmitAck,
    VolumeTrendBucket,
};

use crate::api::{validate_submission, FeedbackApi};
use crate::session::SessionStore;

/// HTTP client for the remote feedback service.
#[derive(Clone)]
pub struct RemoteFeedbackApi {
    /// HTTP client
    client: reqwest::Client,
    /// Base URL of the feedback resource namespace, without trailing slash
    base_url: String,
    /// Injected session credential store
    session: Arc<dyn SessionStore>,
}

impl RemoteFeedbackApi {
    /// Create a new remote client.
    ///
    /// # Arguments
    ///
    /// * `config` - API endpoint configuration
    /// * `session` - session store consulted for the bearer credential on
    ///   every request and cleared when the service rejects it
    pub fn new(config: &ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FeedbackError::Internal(format!("Failed to create HTTP client: {e}")))?;

        info!(base_url = %config.base_url, "Initialized remote feedback client");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Build request headers, attaching the bearer credential if present.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| FeedbackError::Internal("Invalid session token".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Dispatching GET");

        let mut request = self.client.get(&url).headers(self.build_headers()?);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, "Request failed: {e}");
            FeedbackError::Request(e.to_string())
        })?;

        self.handle_response(response, path).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Dispatching POST");

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers()?)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(%url, "Request failed: {e}");
                FeedbackError::Request(e.to_string())
            })?;

        self.handle_response(response, path).await
    }

    /// Triage a response: 401 invalidates the credential and signs out,
    /// other non-success statuses become typed transport failures, success
    /// bodies are decoded as JSON.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        path: &str,
    ) -> Result<T> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(path, "Session credential rejected, clearing and signing out");
            self.session.clear();
            return Err(FeedbackError::Unauthorized);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(
                path,
                status = status.as_u16(),
                "Feedback API request failed: {message}"
            );
            return Err(FeedbackError::Transport {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FeedbackError::Request(format!("Failed to parse response JSON: {e}")))
    }
}

#[async_trait]
impl FeedbackApi for RemoteFeedbackApi {
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.get("/dashboard-stats", &[]).await
    }

    async fn ratings_distribution(&self) -> Result<RatingsDistribution> {
        self.get("/ratings-distribution", &[]).await
    }

    async fn volume_trend(&self, days: u32) -> Result<Vec<VolumeTrendBucket>> {
        self.get("/volume-trend", &[("days", days.to_string())])
            .await
    }

    async fn source_distribution(&self) -> Result<SourceDistribution> {
        self.get("/source-distribution", &[]).await
    }

    async fn recent_feedback(&self, limit: u32) -> Result<Vec<RecentFeedbackRow>> {
        self.get("/recent", &[("limit", limit.to_string())]).await
    }

    async fn list_feedback(&self, query: ListQuery) -> Result<FeedbackListing> {
        // Empty parameters are omitted entirely, never sent as empty strings
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(search) = query.effective_search() {
            params.push(("search", search.to_string()));
        }

        self.get("/", &params).await
    }

    async fn submit_feedback(&self, submission: FeedbackSubmission) -> Result<SubmitAck> {
        validate_submission(&submission)?;
        self.post("/submit", &submission).await
    }
}
