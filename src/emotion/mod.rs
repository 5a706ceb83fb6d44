//! Emotional-state classification and mood trend tracking.
//!
//! Data flows one way: message text → [`Classifier`] → [`ClassificationResult`]
//! → (at the caller's discretion) [`TrendTracker::append`]. Trend queries only
//! aggregate results the classifier already produced.

pub mod catalog;
pub mod classifier;
pub mod trend;
pub mod types;

pub use catalog::{CategoryPatternSet, PatternCatalog};
pub use classifier::{CategoryScores, Classifier, classify, classify_bytes};
pub use trend::{TrendEntry, TrendSummary, TrendTracker};
pub use types::{ClassificationResult, EmotionCategory, IntensityLevel};
