//! Bounded mood history for one conversation session.
//!
//! [`TrendTracker`] keeps the most recent [`ClassificationResult`]s (oldest
//! first) and answers three questions for the conversation layer:
//!
//! - has the user been distressed for several messages in a row?
//! - has a stretch of messages gone by with no positive signal?
//! - which emotion dominates the session so far?
//!
//! The tracker never re-classifies; it only aggregates what the classifier
//! decided. It does no internal locking: one session owns one tracker, and a
//! caller receiving messages concurrently must serialize `append` / `reset`.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::TrendConfig;
use crate::emotion::types::{ClassificationResult, EmotionCategory};
use crate::error::Result;

/// One recorded classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    timestamp: DateTime<Utc>,
    result: ClassificationResult,
}

impl TrendEntry {
    pub fn new(result: ClassificationResult, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, result }
    }

    /// When the result was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn result(&self) -> &ClassificationResult {
        &self.result
    }

    pub fn emotion(&self) -> EmotionCategory {
        self.result.primary_emotion
    }
}

/// Point-in-time view of the trend queries, for the caller's analytics log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Number of entries currently held.
    pub entries: usize,
    pub sustained_stress: bool,
    pub needs_motivational_boost: bool,
    /// Most frequent emotion, if enough history exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant: Option<EmotionCategory>,
}

/// Fixed-capacity, oldest-first history of classification results.
#[derive(Debug, Clone)]
pub struct TrendTracker {
    entries: VecDeque<TrendEntry>,
    config: TrendConfig,
}

impl Default for TrendTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendTracker {
    /// An empty tracker with the default configuration (capacity 10).
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            config: TrendConfig::default(),
        }
    }

    /// An empty tracker with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EmotionError::Config`] if `config` fails validation.
    pub fn from_config(config: &TrendConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: VecDeque::new(),
            config: config.clone(),
        })
    }

    /// Record a result timestamped now.
    pub fn append(&mut self, result: ClassificationResult) {
        self.append_at(result, Utc::now());
    }

    /// Record a result with an explicit timestamp, e.g. when replaying a
    /// persisted history. Entries are kept in append order.
    pub fn append_at(&mut self, result: ClassificationResult, timestamp: DateTime<Utc>) {
        let emotion = result.primary_emotion;
        self.entries.push_back(TrendEntry::new(result, timestamp));

        let mut evicted = 0usize;
        while self.entries.len() > self.config.capacity {
            self.entries.pop_front();
            evicted += 1;
        }

        debug!(
            %emotion,
            len = self.entries.len(),
            evicted,
            "mood trend entry appended"
        );
    }

    /// `true` if each of the last `stress_window` results is a distress state
    /// (anxious, frustrated, overwhelmed, discouraged).
    pub fn is_showing_sustained_stress(&self) -> bool {
        let Some(mut recent) = self.recent(self.config.stress_window) else {
            return false;
        };
        let stressed = recent.all(|entry| entry.emotion().is_negative());
        if stressed {
            debug!(
                window = self.config.stress_window,
                "sustained stress detected"
            );
        }
        stressed
    }

    /// `true` if none of the last `boost_window` results is a positive state
    /// (motivated, confident, excited).
    pub fn needs_motivational_boost(&self) -> bool {
        let Some(mut recent) = self.recent(self.config.boost_window) else {
            return false;
        };
        !recent.any(|entry| entry.emotion().is_positive())
    }

    /// Most frequent emotion across the whole history.
    ///
    /// Ties go to the category that reached the top count first, scanning
    /// oldest to newest. Returns `None` with fewer than
    /// `dominant_min_entries` entries.
    pub fn dominant_trend(&self) -> Option<EmotionCategory> {
        if self.entries.len() < self.config.dominant_min_entries {
            return None;
        }

        let mut counts = [0usize; EmotionCategory::ALL.len()];
        let mut best: Option<(EmotionCategory, usize)> = None;
        for entry in &self.entries {
            let emotion = entry.emotion();
            let count = &mut counts[emotion.index()];
            *count += 1;
            if best.is_none_or(|(_, top)| *count > top) {
                best = Some((emotion, *count));
            }
        }
        best.map(|(emotion, _)| emotion)
    }

    /// Clear all history, e.g. after a break or at the end of a session.
    pub fn reset(&mut self) {
        let cleared = self.entries.len();
        self.entries.clear();
        info!(cleared, "mood trend history reset");
    }

    /// Owned copy of the current history, oldest first.
    pub fn snapshot(&self) -> Vec<TrendEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Evaluate every trend query at once.
    pub fn summary(&self) -> TrendSummary {
        TrendSummary {
            entries: self.entries.len(),
            sustained_stress: self.is_showing_sustained_stress(),
            needs_motivational_boost: self.needs_motivational_boost(),
            dominant: self.dominant_trend(),
        }
    }

    /// Most recently appended entry.
    pub fn latest(&self) -> Option<&TrendEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// The newest `window` entries (newest first), or `None` if fewer exist.
    fn recent(&self, window: usize) -> Option<impl Iterator<Item = &TrendEntry>> {
        if self.entries.len() < window {
            return None;
        }
        Some(self.entries.iter().rev().take(window))
    }
}
