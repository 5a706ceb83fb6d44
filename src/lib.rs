//! Fae emotion engine: rule-based affect detection for learner conversations.
//!
//! Infers how a user feels from a short free-text message and tracks how that
//! feeling develops over a session, so the conversation layer can offer a
//! break, simplify explanations, or add encouragement.
//!
//! # Architecture
//!
//! - **Pattern catalog**: immutable keyword / phrase / punctuation tables per
//!   emotion, built once and shared
//! - **Classifier**: pure, synchronous scoring of one message against the
//!   catalog, producing a [`ClassificationResult`]
//! - **Trend tracker**: bounded per-session history answering sustained-stress,
//!   motivational-boost and dominant-mood queries
//!
//! No model inference, I/O or persistence happens here; callers own the
//! message source and any storage of results.
//!
//! ```
//! use fae_emotion::{EmotionCategory, TrendTracker, classify};
//!
//! let mut tracker = TrendTracker::new();
//! let result = classify("estoy muy cansado...");
//! assert_eq!(result.primary_emotion, EmotionCategory::Tired);
//! tracker.append(result);
//! assert_eq!(tracker.len(), 1);
//! ```

pub mod config;
pub mod emotion;
pub mod error;

pub use config::{EmotionConfig, TrendConfig};
pub use emotion::{
    CategoryPatternSet, CategoryScores, ClassificationResult, Classifier, EmotionCategory,
    IntensityLevel, PatternCatalog, TrendEntry, TrendSummary, TrendTracker, classify,
    classify_bytes,
};
pub use error::{EmotionError, Result};
