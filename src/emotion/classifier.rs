//! Rule-based emotional-state classifier for user messages.
//!
//! Scores every category of a [`PatternCatalog`] against one message and picks
//! the winner. Scoring rules:
//!
//! | Signal | Matched against | Points |
//! |--------|-----------------|--------|
//! | keyword fragment | lowercased, trimmed text | 2 |
//! | phrase fragment | lowercased, trimmed text | 3 |
//! | punctuation motif | original text | 1 |
//! | two or more `?` | original text | one per `?`, to `confused` |
//! | more than 50 tokens | lowercased, trimmed text | 1, to `overwhelmed` |
//!
//! Ties go to the category declared first in [`EmotionCategory`]. The
//! classifier is a pure function of its input and catalog, so a single
//! [`Classifier`] can be shared freely across threads.

use tracing::{debug, trace, warn};

use crate::emotion::catalog::PatternCatalog;
use crate::emotion::types::{ClassificationResult, EmotionCategory, IntensityLevel};
use crate::error::{EmotionError, Result};

/// Points for a keyword fragment match.
pub const KEYWORD_WEIGHT: u32 = 2;

/// Points for a phrase fragment match.
pub const PHRASE_WEIGHT: u32 = 3;

/// Points for a punctuation motif match.
pub const PUNCTUATION_WEIGHT: u32 = 1;

/// Minimum number of `?` characters that signals confusion.
pub const QUESTION_MARK_THRESHOLD: usize = 2;

/// Token count above which a message signals overwhelm.
pub const LONG_MESSAGE_TOKENS: usize = 50;

/// Points for an over-long message.
pub const LONG_MESSAGE_WEIGHT: u32 = 1;

const CATEGORY_COUNT: usize = EmotionCategory::ALL.len();

// ── Score breakdown ─────────────────────────────────────────────────────

/// Per-category scores and indicators for one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryScores {
    scores: [u32; CATEGORY_COUNT],
    indicators: [Vec<String>; CATEGORY_COUNT],
}

impl CategoryScores {
    fn add(&mut self, category: EmotionCategory, points: u32, indicator: Option<String>) {
        let i = category.index();
        self.scores[i] = self.scores[i].saturating_add(points);
        if let Some(indicator) = indicator {
            self.indicators[i].push(indicator);
        }
    }

    /// Aggregate score of `category`.
    pub fn score(&self, category: EmotionCategory) -> u32 {
        self.scores[category.index()]
    }

    /// Indicators accumulated by `category`, in match order.
    pub fn indicators(&self, category: EmotionCategory) -> &[String] {
        &self.indicators[category.index()]
    }

    /// Sum of every category's score.
    pub fn total(&self) -> u32 {
        self.scores
            .iter()
            .fold(0u32, |sum, &score| sum.saturating_add(score))
    }

    /// Highest-scoring category, earliest declared on ties.
    ///
    /// Returns `None` when every score is zero.
    pub fn winner(&self) -> Option<EmotionCategory> {
        let mut best: Option<(EmotionCategory, u32)> = None;
        for category in EmotionCategory::ALL {
            let score = self.score(category);
            if score > 0 && best.is_none_or(|(_, top)| score > top) {
                best = Some((category, score));
            }
        }
        best.map(|(category, _)| category)
    }

    fn take_indicators(&mut self, category: EmotionCategory) -> Vec<String> {
        std::mem::take(&mut self.indicators[category.index()])
    }
}

// ── Classifier ──────────────────────────────────────────────────────────

/// Classifies messages against a borrowed, immutable [`PatternCatalog`].
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    catalog: &'a PatternCatalog,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(PatternCatalog::builtin())
    }
}

impl<'a> Classifier<'a> {
    /// Create a classifier over `catalog`.
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this classifier scores against.
    pub fn catalog(&self) -> &'a PatternCatalog {
        self.catalog
    }

    /// Score every category against `message` without choosing a winner.
    pub fn scores(&self, message: &str) -> CategoryScores {
        let normalized = message.trim().to_lowercase();
        let mut scores = CategoryScores::default();

        for (category, set) in self.catalog.iter() {
            for keyword in set.keywords() {
                if normalized.contains(keyword.as_str()) {
                    scores.add(category, KEYWORD_WEIGHT, Some(keyword.clone()));
                }
            }
            for phrase in set.phrases() {
                if normalized.contains(phrase.as_str()) {
                    scores.add(category, PHRASE_WEIGHT, Some(format!("\"{phrase}\"")));
                }
            }
            for motif in set.punctuation() {
                if message.contains(motif.as_str()) {
                    scores.add(category, PUNCTUATION_WEIGHT, Some(motif.clone()));
                }
            }
        }

        let questions = message.chars().filter(|&c| c == '?').count();
        if questions >= QUESTION_MARK_THRESHOLD {
            let points = u32::try_from(questions).unwrap_or(u32::MAX);
            scores.add(
                EmotionCategory::Confused,
                points,
                Some(format!("{questions} preguntas")),
            );
        }

        if normalized.split_whitespace().count() > LONG_MESSAGE_TOKENS {
            scores.add(EmotionCategory::Overwhelmed, LONG_MESSAGE_WEIGHT, None);
        }

        scores
    }

    /// Classify one message. Never fails; empty or blank text is neutral.
    pub fn classify(&self, message: &str) -> ClassificationResult {
        let mut scores = self.scores(message);

        let Some(primary) = scores.winner() else {
            trace!("no emotional signal; classifying as neutral");
            return ClassificationResult::neutral();
        };

        let winning = scores.score(primary);
        let total = scores.total();
        let confidence = winning as f32 / total as f32;
        let intensity = IntensityLevel::from_score(winning);

        debug!(
            emotion = %primary,
            score = winning,
            total,
            %intensity,
            "message classified"
        );

        ClassificationResult {
            primary_emotion: primary,
            intensity,
            confidence,
            indicators: scores.take_indicators(primary),
            needs_break: needs_break(primary, intensity),
            needs_encouragement: needs_encouragement(primary),
            needs_simplification: needs_simplification(primary, intensity),
        }
    }

    /// Classify raw bytes received at an API boundary.
    ///
    /// # Errors
    ///
    /// Returns [`EmotionError::InvalidInput`] if `bytes` is not valid UTF-8.
    /// No lossy recovery is attempted.
    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<ClassificationResult> {
        let message = std::str::from_utf8(bytes).map_err(|e| {
            warn!(len = bytes.len(), "rejecting message that is not valid UTF-8");
            EmotionError::InvalidInput(format!("message is not valid UTF-8: {e}"))
        })?;
        Ok(self.classify(message))
    }
}

fn needs_break(emotion: EmotionCategory, intensity: IntensityLevel) -> bool {
    matches!(
        emotion,
        EmotionCategory::Tired | EmotionCategory::Overwhelmed | EmotionCategory::Frustrated
    ) && intensity != IntensityLevel::Low
}

fn needs_encouragement(emotion: EmotionCategory) -> bool {
    matches!(
        emotion,
        EmotionCategory::Discouraged | EmotionCategory::Frustrated | EmotionCategory::Anxious
    )
}

fn needs_simplification(emotion: EmotionCategory, intensity: IntensityLevel) -> bool {
    matches!(
        emotion,
        EmotionCategory::Confused | EmotionCategory::Overwhelmed | EmotionCategory::Frustrated
    ) && intensity != IntensityLevel::Low
}

/// Classify `message` with the built-in catalog.
pub fn classify(message: &str) -> ClassificationResult {
    Classifier::default().classify(message)
}

/// Classify raw bytes with the built-in catalog.
///
/// # Errors
///
/// Returns [`EmotionError::InvalidInput`] if `bytes` is not valid UTF-8.
pub fn classify_bytes(bytes: &[u8]) -> Result<ClassificationResult> {
    Classifier::default().classify_bytes(bytes)
}

// ── Tests ───────────────────────────────────────────────────────────────
