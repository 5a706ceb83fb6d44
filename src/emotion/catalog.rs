//! Pattern catalog: which text fragments signal which emotion.
//!
//! Each non-neutral [`EmotionCategory`] owns three rule sets:
//!
//! - **keywords** — lowercase stems matched against the lowercased message
//! - **phrases** — lowercase multi-word fragments, matched the same way
//! - **punctuation** — exact motifs (`"!!"`, `"..."`) matched against the
//!   original message
//!
//! The built-in tables are authored for Spanish learner conversations. The
//! catalog is immutable once built; [`PatternCatalog::builtin`] is created
//! lazily on first use and shared process-wide.

use std::sync::OnceLock;

use crate::emotion::types::EmotionCategory;
use crate::error::{EmotionError, Result};

// ── Built-in tables ─────────────────────────────────────────────────────

/// (category, keywords, phrases, punctuation)
type TableRow = (
    EmotionCategory,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

/// Listed in declaration order; `neutral` is absent.
const BUILTIN_TABLE: &[TableRow] = &[
    (
        EmotionCategory::Anxious,
        &[
            "nervios", "ansied", "preocup", "miedo", "estrés", "estres", "angusti", "inquiet",
        ],
        &[
            "no voy a poder",
            "me da miedo",
            "qué pasa si",
            "que pasa si",
            "tengo un examen",
            "y si fallo",
        ],
        &["?!"],
    ),
    (
        EmotionCategory::Frustrated,
        &[
            "frustr",
            "imposible",
            "harto",
            "harta",
            "odio",
            "molest",
            "fastidi",
            "rabia",
        ],
        &[
            "no entiendo",
            "esto es imposible",
            "no funciona",
            "ya lo intenté",
            "no me sale",
            "otra vez mal",
        ],
        &["!!"],
    ),
    (
        EmotionCategory::Confused,
        &["confund", "confus", "perdid", "duda", "complicad", "raro"],
        &[
            "no entiendo",
            "no comprendo",
            "no sé cómo",
            "no se como",
            "qué significa",
            "que significa",
            "me perdí",
        ],
        &["??"],
    ),
    (
        EmotionCategory::Motivated,
        &["motivad", "ganas", "animad", "decidid", "enfocad"],
        &[
            "vamos a",
            "quiero aprender",
            "estoy listo",
            "estoy lista",
            "manos a la obra",
            "a por ello",
        ],
        &[],
    ),
    (
        EmotionCategory::Tired,
        &["cansad", "agotad", "sueño", "exhaust", "fatiga", "aburrid"],
        &[
            "no puedo más",
            "no puedo mas",
            "necesito descansar",
            "necesito un descanso",
            "ya no doy",
            "estoy muert",
        ],
        &["..."],
    ),
    (
        EmotionCategory::Confident,
        &["fácil", "facil", "seguro", "segura", "domino", "claro"],
        &[
            "lo tengo",
            "ya entendí",
            "ya entendi",
            "ahora entiendo",
            "me sale bien",
            "ya lo sé",
        ],
        &[],
    ),
    (
        EmotionCategory::Overwhelmed,
        &["abrumad", "saturad", "agobi", "demasiad", "colaps"],
        &[
            "es mucho",
            "demasiada información",
            "demasiada informacion",
            "no sé por dónde empezar",
            "no se por donde empezar",
            "todo a la vez",
        ],
        &[],
    ),
    (
        EmotionCategory::Excited,
        &[
            "genial",
            "increíble",
            "increible",
            "emocionad",
            "wow",
            "encanta",
            "fantástic",
            "fantastic",
        ],
        &[
            "me encanta",
            "qué bien",
            "que bien",
            "por fin",
            "lo logré",
            "lo logre",
        ],
        &["!!!", ":D"],
    ),
    (
        EmotionCategory::Discouraged,
        &["desanim", "rendir", "fracas", "inútil", "inutil", "tonto", "tonta"],
        &[
            "no sirvo",
            "nunca voy a",
            "me rindo",
            "no soy capaz",
            "no vale la pena",
            "para nada sirve",
        ],
        &[],
    ),
];

static BUILTIN: OnceLock<PatternCatalog> = OnceLock::new();

// ── Types ───────────────────────────────────────────────────────────────

/// The three rule sets for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatternSet {
    keywords: Vec<String>,
    phrases: Vec<String>,
    punctuation: Vec<String>,
}

impl CategoryPatternSet {
    /// Build a set. Keywords and phrases are lowercased so they match the
    /// normalised message; punctuation motifs are kept verbatim.
    pub fn new<K, P, M>(keywords: K, phrases: P, punctuation: M) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self {
            keywords: lowercase_all(keywords),
            phrases: lowercase_all(phrases),
            punctuation: punctuation.into_iter().map(Into::into).collect(),
        }
    }

    /// Lowercase keyword fragments, worth 2 points each.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Lowercase phrase fragments, worth 3 points each.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Exact punctuation motifs, worth 1 point each.
    pub fn punctuation(&self) -> &[String] {
        &self.punctuation
    }

    /// Returns `true` if the set has no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.phrases.is_empty() && self.punctuation.is_empty()
    }
}

fn lowercase_all<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect()
}

/// Immutable map from category to its [`CategoryPatternSet`].
///
/// Lookups are total: `neutral` and any category without authored rules
/// resolve to an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCatalog {
    sets: [CategoryPatternSet; EmotionCategory::ALL.len()],
}

impl PatternCatalog {
    /// A catalog with no rules; everything classifies as neutral.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in Spanish catalog, built once and shared.
    pub fn builtin() -> &'static PatternCatalog {
        BUILTIN.get_or_init(|| {
            let mut catalog = Self::empty();
            for &(category, keywords, phrases, punctuation) in BUILTIN_TABLE {
                catalog.sets[category.index()] =
                    CategoryPatternSet::new(keywords, phrases, punctuation.iter().copied());
            }
            catalog
        })
    }

    /// Replace the rules for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`EmotionError::Catalog`] for [`EmotionCategory::Neutral`],
    /// which is an outcome and never a scoring target.
    pub fn with_set(mut self, category: EmotionCategory, set: CategoryPatternSet) -> Result<Self> {
        if category == EmotionCategory::Neutral {
            return Err(EmotionError::Catalog(
                "neutral cannot carry patterns".into(),
            ));
        }
        self.sets[category.index()] = set;
        Ok(self)
    }

    /// Rules for `category`. Never fails.
    pub fn get(&self, category: EmotionCategory) -> &CategoryPatternSet {
        &self.sets[category.index()]
    }

    /// Categories with at least one rule, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, &CategoryPatternSet)> {
        EmotionCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
            .filter(|(_, set)| !set.is_empty())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn builtin_covers_every_scoring_category() {
        let catalog = PatternCatalog::builtin();
        for category in EmotionCategory::ALL {
            let set = catalog.get(category);
            if category == EmotionCategory::Neutral {
                assert!(set.is_empty(), "neutral must have no patterns");
            } else {
                assert!(!set.keywords().is_empty(), "{category} needs keywords");
                assert!(!set.phrases().is_empty(), "{category} needs phrases");
            }
        }
    }

    #[test]
    fn builtin_table_is_in_declaration_order() {
        let order: Vec<usize> = BUILTIN_TABLE.iter().map(|row| row.0.index()).collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn builtin_fragments_are_lowercase() {
        for &(category, keywords, phrases, _) in BUILTIN_TABLE {
            for fragment in keywords.iter().chain(phrases.iter()) {
                assert_eq!(
                    *fragment,
                    fragment.to_lowercase(),
                    "{category} fragment {fragment:?} must be lowercase"
                );
            }
        }
    }

    #[test]
    fn builtin_is_shared() {
        let a = PatternCatalog::builtin() as *const PatternCatalog;
        let b = PatternCatalog::builtin() as *const PatternCatalog;
        assert_eq!(a, b);
    }

    #[test]
    fn new_set_lowercases_words_but_not_motifs() {
        let set = CategoryPatternSet::new(["Genial"], ["Por Fin"], [":D"]);
        assert_eq!(set.keywords(), ["genial"]);
        assert_eq!(set.phrases(), ["por fin"]);
        assert_eq!(set.punctuation(), [":D"]);
    }

    #[test]
    fn with_set_rejects_neutral() {
        let err = PatternCatalog::empty()
            .with_set(
                EmotionCategory::Neutral,
                CategoryPatternSet::new(["meh"], [""; 0], [""; 0]),
            )
            .unwrap_err();
        assert!(err.to_string().contains("neutral"));
    }

    #[test]
    fn with_set_replaces_rules() {
        let catalog = PatternCatalog::empty()
            .with_set(
                EmotionCategory::Tired,
                CategoryPatternSet::new(["zzz"], [""; 0], [""; 0]),
            )
            .unwrap();
        assert_eq!(catalog.get(EmotionCategory::Tired).keywords(), ["zzz"]);
        let categories: Vec<_> = catalog.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, vec![EmotionCategory::Tired]);
    }

    #[test]
    fn empty_catalog_lookups_never_fail() {
        let catalog = PatternCatalog::empty();
        for category in EmotionCategory::ALL {
            assert!(catalog.get(category).is_empty());
        }
        assert_eq!(catalog.iter().count(), 0);
    }
}
