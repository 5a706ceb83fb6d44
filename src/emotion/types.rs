//! Core emotion types: categories, intensity buckets, and classification results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EmotionError;

/// Closed set of emotional states the classifier can assign.
///
/// Declaration order is significant: when two categories tie on score the one
/// declared first wins. [`EmotionCategory::ALL`] lists the variants in that
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionCategory {
    Anxious,
    Frustrated,
    Confused,
    Motivated,
    Tired,
    Confident,
    Overwhelmed,
    /// No signal. Never carries patterns; only ever a classification outcome.
    Neutral,
    Excited,
    Discouraged,
}

impl EmotionCategory {
    /// Every category in declaration (tie-break) order.
    pub const ALL: [EmotionCategory; 10] = [
        Self::Anxious,
        Self::Frustrated,
        Self::Confused,
        Self::Motivated,
        Self::Tired,
        Self::Confident,
        Self::Overwhelmed,
        Self::Neutral,
        Self::Excited,
        Self::Discouraged,
    ];

    /// Position of this category in [`EmotionCategory::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Anxious => "anxious",
            Self::Frustrated => "frustrated",
            Self::Confused => "confused",
            Self::Motivated => "motivated",
            Self::Tired => "tired",
            Self::Confident => "confident",
            Self::Overwhelmed => "overwhelmed",
            Self::Neutral => "neutral",
            Self::Excited => "excited",
            Self::Discouraged => "discouraged",
        }
    }

    /// Distress states that count towards a sustained-stress streak.
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            Self::Anxious | Self::Frustrated | Self::Overwhelmed | Self::Discouraged
        )
    }

    /// States that count as positive reinforcement.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Motivated | Self::Confident | Self::Excited)
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EmotionCategory {
    type Err = EmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.name() == wanted)
            .ok_or_else(|| EmotionError::InvalidInput(format!("unknown emotion category: {s}")))
    }
}

/// Coarse bucket for the winning score. Ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Winning score at or above which intensity is [`IntensityLevel::High`].
pub const HIGH_INTENSITY_SCORE: u32 = 6;

/// Winning score at or above which intensity is [`IntensityLevel::Medium`].
pub const MEDIUM_INTENSITY_SCORE: u32 = 3;

impl IntensityLevel {
    /// Bucket a winning score.
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_INTENSITY_SCORE {
            Self::High
        } else if score >= MEDIUM_INTENSITY_SCORE {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Outcome of classifying a single message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning category.
    pub primary_emotion: EmotionCategory,
    /// Bucketed strength of the winning score.
    pub intensity: IntensityLevel,
    /// Winning score as a fraction of the total score, in `0.0..=1.0`.
    pub confidence: f32,
    /// Fragments and motifs that contributed to the winner, in match order.
    #[serde(default)]
    pub indicators: Vec<String>,
    /// The user would likely benefit from a pause.
    pub needs_break: bool,
    /// The user would likely benefit from encouragement.
    pub needs_encouragement: bool,
    /// Explanations should be simplified.
    pub needs_simplification: bool,
}

impl ClassificationResult {
    /// The no-signal result: neutral, full confidence, nothing flagged.
    pub fn neutral() -> Self {
        Self {
            primary_emotion: EmotionCategory::Neutral,
            intensity: IntensityLevel::Low,
            confidence: 1.0,
            indicators: Vec::new(),
            needs_break: false,
            needs_encouragement: false,
            needs_simplification: false,
        }
    }

    /// Returns `true` unless this is the no-signal neutral result.
    #[must_use]
    pub fn has_signal(&self) -> bool {
        *self != Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    // ── EmotionCategory ─────────────────────────────────────────────────

    #[test]
    fn all_is_in_declaration_order() {
        for (i, category) in EmotionCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i, "index of {category}");
        }
        assert_eq!(EmotionCategory::ALL[0], EmotionCategory::Anxious);
        assert_eq!(EmotionCategory::ALL[7], EmotionCategory::Neutral);
        assert_eq!(EmotionCategory::ALL[9], EmotionCategory::Discouraged);
    }

    #[test]
    fn negative_and_positive_sets_are_disjoint() {
        for category in EmotionCategory::ALL {
            assert!(
                !(category.is_negative() && category.is_positive()),
                "{category} cannot be both"
            );
        }
        let negatives = EmotionCategory::ALL
            .iter()
            .filter(|c| c.is_negative())
            .count();
        let positives = EmotionCategory::ALL
            .iter()
            .filter(|c| c.is_positive())
            .count();
        assert_eq!(negatives, 4);
        assert_eq!(positives, 3);
    }

    #[test]
    fn neutral_confused_tired_are_neither() {
        for category in [
            EmotionCategory::Neutral,
            EmotionCategory::Confused,
            EmotionCategory::Tired,
        ] {
            assert!(!category.is_negative());
            assert!(!category.is_positive());
        }
    }

    #[test]
    fn from_str_accepts_names_case_insensitively() {
        assert_eq!(
            "Overwhelmed".parse::<EmotionCategory>().unwrap(),
            EmotionCategory::Overwhelmed
        );
        for category in EmotionCategory::ALL {
            assert_eq!(category.name().parse::<EmotionCategory>().unwrap(), category);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "furious".parse::<EmotionCategory>().unwrap_err();
        assert!(err.to_string().contains("furious"));
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&EmotionCategory::Discouraged).unwrap();
        assert_eq!(json, "\"discouraged\"");
    }

    // ── IntensityLevel ──────────────────────────────────────────────────

    #[test]
    fn intensity_buckets() {
        assert_eq!(IntensityLevel::from_score(0), IntensityLevel::Low);
        assert_eq!(IntensityLevel::from_score(2), IntensityLevel::Low);
        assert_eq!(IntensityLevel::from_score(3), IntensityLevel::Medium);
        assert_eq!(IntensityLevel::from_score(5), IntensityLevel::Medium);
        assert_eq!(IntensityLevel::from_score(6), IntensityLevel::High);
        assert_eq!(IntensityLevel::from_score(40), IntensityLevel::High);
    }

    #[test]
    fn intensity_is_ordered() {
        assert!(IntensityLevel::Low < IntensityLevel::Medium);
        assert!(IntensityLevel::Medium < IntensityLevel::High);
    }

    // ── ClassificationResult ────────────────────────────────────────────

    #[test]
    fn neutral_result_has_no_signal() {
        let result = ClassificationResult::neutral();
        assert_eq!(result.primary_emotion, EmotionCategory::Neutral);
        assert_eq!(result.confidence, 1.0);
        assert!(result.indicators.is_empty());
        assert!(!result.has_signal());
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = ClassificationResult {
            primary_emotion: EmotionCategory::Tired,
            intensity: IntensityLevel::Medium,
            confidence: 0.75,
            indicators: vec!["cansad".into(), "...".into()],
            needs_break: true,
            needs_encouragement: false,
            needs_simplification: false,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"primary_emotion\":\"tired\""));
        assert!(json.contains("\"intensity\":\"medium\""));
        let back: ClassificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
        assert!(back.has_signal());
    }
}
