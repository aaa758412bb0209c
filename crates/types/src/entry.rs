//! Feedback entry model
//!
//! This module defines the feedback record and its enumerated dimensions:
//! the five-point rating scale, the provenance channel, and the three-way
//! sentiment collapse used by the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Five-point satisfaction rating.
///
/// Wire labels carry spaces (`"very satisfied"`), matching the submission
/// contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rating {
    #[serde(rename = "very satisfied")]
    VerySatisfied,
    #[serde(rename = "satisfied")]
    Satisfied,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "dissatisfied")]
    Dissatisfied,
    #[serde(rename = "very dissatisfied")]
    VeryDissatisfied,
}

impl Rating {
    /// All ratings, most satisfied first.
    pub const ALL: [Rating; 5] = [
        Rating::VerySatisfied,
        Rating::Satisfied,
        Rating::Neutral,
        Rating::Dissatisfied,
        Rating::VeryDissatisfied,
    ];

    /// Wire label for this rating.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::VerySatisfied => "very satisfied",
            Rating::Satisfied => "satisfied",
            Rating::Neutral => "neutral",
            Rating::Dissatisfied => "dissatisfied",
            Rating::VeryDissatisfied => "very dissatisfied",
        }
    }

    /// Numeric score: very dissatisfied = 1 through very satisfied = 5.
    pub fn score(&self) -> u32 {
        match self {
            Rating::VeryDissatisfied => 1,
            Rating::Dissatisfied => 2,
            Rating::Neutral => 3,
            Rating::Satisfied => 4,
            Rating::VerySatisfied => 5,
        }
    }

    /// Parse a raw label, accepting both spaced and underscored forms
    /// case-insensitively. Returns `None` for anything unrecognized.
    pub fn parse_label(label: &str) -> Option<Rating> {
        match label.trim().to_ascii_lowercase().replace('_', " ").as_str() {
            "very satisfied" => Some(Rating::VerySatisfied),
            "satisfied" => Some(Rating::Satisfied),
            "neutral" => Some(Rating::Neutral),
            "dissatisfied" => Some(Rating::Dissatisfied),
            "very dissatisfied" => Some(Rating::VeryDissatisfied),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance channel of a feedback entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Document,
    Chatbot,
}

impl Source {
    /// All channels.
    pub const ALL: [Source; 2] = [Source::Document, Source::Chatbot];

    /// Wire label for this channel.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Document => "document",
            Source::Chatbot => "chatbot",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-way sentiment collapse of the rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Satisfied,
    Neutral,
    Dissatisfied,
}

impl Sentiment {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Satisfied => "Satisfied",
            Sentiment::Neutral => "Neutral",
            Sentiment::Dissatisfied => "Dissatisfied",
        }
    }

    /// Color tag used by the dashboard.
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Satisfied => "emerald",
            Sentiment::Neutral => "amber",
            Sentiment::Dissatisfied => "rose",
        }
    }

    /// Icon tag used by the dashboard.
    pub fn icon(&self) -> &'static str {
        match self {
            Sentiment::Satisfied => "sentiment_satisfied_alt",
            Sentiment::Neutral => "sentiment_neutral",
            Sentiment::Dissatisfied => "sentiment_dissatisfied",
        }
    }

    /// Derive the sentiment from a raw rating label. Unrecognized labels
    /// fall back to `Neutral`; this never fails.
    pub fn from_label(label: &str) -> Sentiment {
        Rating::parse_label(label).map_or(Sentiment::Neutral, Sentiment::from)
    }

    /// Owned display tag for wire projections.
    pub fn tag(&self) -> SentimentTag {
        SentimentTag {
            label: self.label().to_string(),
            color: self.color().to_string(),
            icon: self.icon().to_string(),
        }
    }
}

impl From<Rating> for Sentiment {
    fn from(rating: Rating) -> Self {
        match rating {
            Rating::VerySatisfied | Rating::Satisfied => Sentiment::Satisfied,
            Rating::Neutral => Sentiment::Neutral,
            Rating::Dissatisfied | Rating::VeryDissatisfied => Sentiment::Dissatisfied,
        }
    }
}

/// Sentiment tag as rendered in display rows: label plus color and icon hints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentTag {
    /// Display label (`Satisfied` / `Neutral` / `Dissatisfied`)
    pub label: String,
    /// Color tag
    pub color: String,
    /// Icon tag
    pub icon: String,
}

/// One submitted feedback item.
///
/// Entries are append-only: `created_at` is immutable once set and no update
/// or delete operations exist on the core contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackEntry {
    /// Opaque unique identifier
    pub id: String,
    /// Client-generated pseudo-session identifier, not an authenticated user
    pub device_id: String,
    /// Free-form user comment, unbounded length
    pub text: String,
    /// Five-point rating
    pub rating: Rating,
    /// Provenance channel
    pub source: Source,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
}

impl FeedbackEntry {
    /// Create a new entry stamped with the current time and a fresh id.
    pub fn new(
        device_id: impl Into<String>,
        text: impl Into<String>,
        rating: Rating,
        source: Source,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            device_id: device_id.into(),
            text: text.into(),
            rating,
            source,
            created_at: now,
            updated_at: now,
        }
    }

    /// Override the entry id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Override both timestamps; used when synthesizing historical entries.
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_scores_span_scale() {
        assert_eq!(Rating::VeryDissatisfied.score(), 1);
        assert_eq!(Rating::Neutral.score(), 3);
        assert_eq!(Rating::VerySatisfied.score(), 5);
    }

    #[test]
    fn test_rating_parse_label() {
        assert_eq!(
            Rating::parse_label("very satisfied"),
            Some(Rating::VerySatisfied)
        );
        assert_eq!(
            Rating::parse_label("VERY_DISSATISFIED"),
            Some(Rating::VeryDissatisfied)
        );
        assert_eq!(Rating::parse_label("  neutral "), Some(Rating::Neutral));
        assert_eq!(Rating::parse_label("meh"), None);
    }

    #[test]
    fn test_rating_wire_labels_round_trip() {
        for rating in Rating::ALL {
            let json = serde_json::to_string(&rating).unwrap();
            assert_eq!(json, format!("\"{}\"", rating.as_str()));
            let back: Rating = serde_json::from_str(&json).unwrap();
            assert_eq!(back, rating);
        }
    }

    #[test]
    fn test_sentiment_collapse() {
        assert_eq!(Sentiment::from(Rating::VerySatisfied), Sentiment::Satisfied);
        assert_eq!(Sentiment::from(Rating::Satisfied), Sentiment::Satisfied);
        assert_eq!(Sentiment::from(Rating::Neutral), Sentiment::Neutral);
        assert_eq!(
            Sentiment::from(Rating::Dissatisfied),
            Sentiment::Dissatisfied
        );
        assert_eq!(
            Sentiment::from(Rating::VeryDissatisfied),
            Sentiment::Dissatisfied
        );
    }

    #[test]
    fn test_sentiment_from_label_falls_back_to_neutral() {
        assert_eq!(Sentiment::from_label("satisfied"), Sentiment::Satisfied);
        assert_eq!(
            Sentiment::from_label("very satisfied"),
            Sentiment::Satisfied
        );
        assert_eq!(Sentiment::from_label("unknown_value"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(""), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_tags() {
        let tag = Sentiment::Dissatisfied.tag();
        assert_eq!(tag.label, "Dissatisfied");
        assert_eq!(tag.color, "rose");
        assert_eq!(tag.icon, "sentiment_dissatisfied");
    }

    #[test]
    fn test_entry_creation() {
        let entry = FeedbackEntry::new(
            "device_ab12cd34",
            "Great service, thanks!",
            Rating::Satisfied,
            Source::Chatbot,
        );
        assert!(!entry.id.is_empty());
        assert_eq!(entry.created_at, entry.updated_at);
        assert_eq!(entry.rating, Rating::Satisfied);
    }
}
