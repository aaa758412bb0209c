//! # FeedbackOS API client
//!
//! A uniform, asynchronous interface over the feedback resource namespace,
//! with two interchangeable backends:
//!
//! - [`RemoteFeedbackApi`] performs HTTP calls against the remote service,
//!   attaching the session's bearer credential and surfacing transport
//!   failures as typed errors.
//! - [`MockFeedbackApi`] answers every operation from an in-memory store
//!   seeded by the deterministic mock-data generator, for offline demos.
//!
//! Backends are selected by constructing one or the other and handing it to
//! callers as a [`FeedbackApi`] trait object.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use feedbackos_client::{FeedbackApi, InMemorySessionStore, RemoteFeedbackApi};
//! use feedbackos_config::ApiConfig;
//!
//! # async fn example() -> feedbackos_types::Result<()> {
//! let session = Arc::new(InMemorySessionStore::with_token("token-123"));
//! let api = RemoteFeedbackApi::new(&ApiConfig::default(), session)?;
//!
//! let stats = api.dashboard_stats().await?;
//! println!("{} feedback entries", stats.total_feedback);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod mock;
pub mod remote;
pub mod session;

pub use api::{validate_submission, FeedbackApi, DEFAULT_RECENT_LIMIT, DEFAULT_TREND_DAYS};
pub use mock::MockFeedbackApi;
pub use remote::RemoteFeedbackApi;
pub use session::{InMemorySessionStore, SessionStore};
