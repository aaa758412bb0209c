//! Seedable mock-data generator
//!
//! Synthesizes a plausible feedback history for offline demos. All draws go
//! through a seeded RNG so a given seed always produces the same entries.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use feedbackos_types::{FeedbackEntry, Rating, Source};

/// Demo comment corpus drawn from for synthesized entries.
const FEEDBACK_TEXTS: [&str; 10] = [
    "The agent was very helpful in resolving my billing issue quickly.",
    "It was okay, but the response time was a bit slow initially.",
    "My problem is still not fixed. This is very frustrating.",
    "Great service, thanks!",
    "The new feature you deployed is exactly what I needed.",
    "Could be better, but overall satisfied with the help.",
    "Amazing support team! Very responsive and knowledgeable.",
    "The chatbot didn't understand my question at first.",
    "Perfect solution to my problem. Thank you!",
    "Needs improvement in understanding complex queries.",
];

const DEVICE_ID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Seeded generator for synthetic feedback entries.
pub struct MockDataGenerator {
    rng: StdRng,
}

impl MockDataGenerator {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Synthesize `count` entries spread over the trailing `history_days`,
    /// anchored on the current time, sorted most recent first.
    pub fn generate(&mut self, count: usize, history_days: u32) -> Vec<FeedbackEntry> {
        self.generate_at(count, history_days, Utc::now())
    }

    /// Synthesize `count` entries spread over the trailing `history_days`
    /// ending at `now`, sorted most recent first.
    ///
    /// Device ids are drawn from a pool roughly a third the size of the
    /// collection so some sessions carry more than one message.
    pub fn generate_at(
        &mut self,
        count: usize,
        history_days: u32,
        now: DateTime<Utc>,
    ) -> Vec<FeedbackEntry> {
        let devices: Vec<String> = (0..(count / 3).max(1))
            .map(|_| self.device_id())
            .collect();
        let window_secs = i64::from(history_days.max(1)) * 86_400;

        let mut entries: Vec<FeedbackEntry> = (0..count)
            .map(|index| {
                let device = &devices[self.rng.gen_range(0..devices.len())];
                let rating = Rating::ALL[self.rng.gen_range(0..Rating::ALL.len())];
                let source = Source::ALL[self.rng.gen_range(0..Source::ALL.len())];
                let text = FEEDBACK_TEXTS[self.rng.gen_range(0..FEEDBACK_TEXTS.len())];
                let created_at = now - Duration::seconds(self.rng.gen_range(0..window_secs));

                FeedbackEntry::new(device.clone(), text, rating, source)
                    .with_id(format!("mock_{index}"))
                    .with_timestamps(created_at)
            })
            .collect();

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(count = entries.len(), history_days, "generated mock feedback");
        entries
    }

    fn device_id(&mut self) -> String {
        let suffix: String = (0..8)
            .map(|_| DEVICE_ID_CHARS[self.rng.gen_range(0..DEVICE_ID_CHARS.len())] as char)
            .collect();
        format!("device_{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn test_same_seed_same_entries() {
        let a = MockDataGenerator::new(42).generate_at(50, 30, fixed_now());
        let b = MockDataGenerator::new(42).generate_at(50, 30, fixed_now());
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = MockDataGenerator::new(1).generate_at(50, 30, fixed_now());
        let b = MockDataGenerator::new(2).generate_at(50, 30, fixed_now());
        assert_ne!(a, b);
    }

    #[test]
    fn test_entries_fall_inside_history_window() {
        let now = fixed_now();
        let entries = MockDataGenerator::new(7).generate_at(100, 30, now);

        assert_eq!(entries.len(), 100);
        let window_start = now - Duration::days(30);
        for entry in &entries {
            assert!(entry.created_at <= now);
            assert!(entry.created_at > window_start);
            assert_eq!(entry.created_at, entry.updated_at);
        }
    }

    #[test]
    fn test_entries_sorted_descending() {
        let entries = MockDataGenerator::new(7).generate_at(100, 30, fixed_now());
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[test]
    fn test_device_pool_is_reused() {
        let entries = MockDataGenerator::new(7).generate_at(60, 30, fixed_now());
        let distinct: std::collections::HashSet<&str> =
            entries.iter().map(|e| e.device_id.as_str()).collect();
        assert!(distinct.len() <= 20);
        assert!(distinct.iter().all(|d| d.starts_with("device_")));
    }
}
