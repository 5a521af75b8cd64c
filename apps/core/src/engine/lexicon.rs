//! Lexicon tables and overridable scoring configuration.
//!
//! The default phrase tables are compiled in; callers that want different
//! vocabulary can supply a [`LexiconSet`] override with the recognized
//! structure (`{category: {primary, secondary}}`, `{urgency_tier: [phrases]}`,
//! `[help_phrases]`). Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::scoring::Category;
use super::urgency::Urgency;
use crate::error::EngineError;

/// Phrases signaling the poster wants external help or is hiring.
const HELP_INDICATORS: &[&str] = &[
    "looking for",
    "need help",
    "seeking",
    "require",
    "want to hire",
    "need assistance",
    "help needed",
    "recommendations for",
    "anyone know",
    "suggestions for",
    "advice on",
    "expertise in",
    "consultant",
    "freelancer",
    "agency",
    "developer",
    "specialist",
    "outsource",
    "contract",
    "project",
    "budget for",
    "quote for",
];

const DATA_INTEGRATION_PRIMARY: &[&str] = &[
    "data integration",
    "data pipeline",
    "etl",
    "data migration",
    "api integration",
    "database sync",
];

const DATA_INTEGRATION_SECONDARY: &[&str] = &[
    "connect systems",
    "real-time data",
    "data sync",
    "import data",
    "export data",
];

const DATA_VISUALIZATION_PRIMARY: &[&str] = &[
    "data visualization",
    "dashboard",
    "reporting",
    "analytics",
    "business intelligence",
    "kpi dashboard",
];

const DATA_VISUALIZATION_SECONDARY: &[&str] = &[
    "visualize data",
    "data insights",
    "tableau",
    "power bi",
    "looker",
];

const WEB_DEVELOPMENT_PRIMARY: &[&str] = &[
    "website",
    "web development",
    "web app",
    "frontend",
    "backend",
    "e-commerce",
];

const WEB_DEVELOPMENT_SECONDARY: &[&str] = &[
    "landing page",
    "wordpress",
    "react",
    "angular",
    "vue",
];

const APP_DEVELOPMENT_PRIMARY: &[&str] = &[
    "mobile app",
    "app development",
    "ios app",
    "android app",
    "react native",
    "flutter",
];

const APP_DEVELOPMENT_SECONDARY: &[&str] = &[
    "build app",
    "app store",
    "play store",
    "cross platform",
    "mobile solution",
];

const URGENT_INDICATORS: &[&str] = &["urgent", "asap", "immediately", "rush", "emergency"];
const HIGH_INDICATORS: &[&str] = &["soon", "quickly", "fast", "priority", "deadline"];
const MEDIUM_INDICATORS: &[&str] = &["next month", "few weeks", "planning", "upcoming"];
const LOW_INDICATORS: &[&str] = &["future", "eventually", "considering", "thinking about"];

fn phrases(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| (*s).to_string()).collect()
}

/// Built-in help-seeking phrase list.
pub fn default_help_indicators() -> Vec<String> {
    phrases(HELP_INDICATORS)
}

fn default_data_integration() -> KeywordLexicon {
    KeywordLexicon {
        primary: phrases(DATA_INTEGRATION_PRIMARY),
        secondary: phrases(DATA_INTEGRATION_SECONDARY),
    }
}

fn default_data_visualization() -> KeywordLexicon {
    KeywordLexicon {
        primary: phrases(DATA_VISUALIZATION_PRIMARY),
        secondary: phrases(DATA_VISUALIZATION_SECONDARY),
    }
}

fn default_web_development() -> KeywordLexicon {
    KeywordLexicon {
        primary: phrases(WEB_DEVELOPMENT_PRIMARY),
        secondary: phrases(WEB_DEVELOPMENT_SECONDARY),
    }
}

fn default_app_development() -> KeywordLexicon {
    KeywordLexicon {
        primary: phrases(APP_DEVELOPMENT_PRIMARY),
        secondary: phrases(APP_DEVELOPMENT_SECONDARY),
    }
}

fn default_urgent() -> Vec<String> {
    phrases(URGENT_INDICATORS)
}

fn default_high() -> Vec<String> {
    phrases(HIGH_INDICATORS)
}

fn default_medium() -> Vec<String> {
    phrases(MEDIUM_INDICATORS)
}

fn default_low() -> Vec<String> {
    phrases(LOW_INDICATORS)
}

/// Weighted keyword lists for one category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KeywordLexicon {
    /// High-weight phrases, counted twice in the weighted score.
    #[validate(length(min = 1))]
    pub primary: Vec<String>,
    /// Low-weight phrases, counted once.
    #[validate(length(min = 1))]
    pub secondary: Vec<String>,
}

/// Keyword lexicons for the four base categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLexicons {
    #[serde(default = "default_data_integration")]
    pub data_integration: KeywordLexicon,
    #[serde(default = "default_data_visualization")]
    pub data_visualization: KeywordLexicon,
    #[serde(default = "default_web_development")]
    pub web_development: KeywordLexicon,
    #[serde(default = "default_app_development")]
    pub app_development: KeywordLexicon,
}

impl Default for CategoryLexicons {
    fn default() -> Self {
        Self {
            data_integration: default_data_integration(),
            data_visualization: default_data_visualization(),
            web_development: default_web_development(),
            app_development: default_app_development(),
        }
    }
}

impl CategoryLexicons {
    /// Lexicon for a base category. `Mixed` has no lexicon of its own.
    pub fn get(&self, category: Category) -> Option<&KeywordLexicon> {
        match category {
            Category::DataIntegration => Some(&self.data_integration),
            Category::DataVisualization => Some(&self.data_visualization),
            Category::WebDevelopment => Some(&self.web_development),
            Category::AppDevelopment => Some(&self.app_development),
            Category::Mixed => None,
        }
    }
}

/// Urgency phrase lists keyed by tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyLexicons {
    #[serde(default = "default_urgent")]
    pub urgent: Vec<String>,
    #[serde(default = "default_high")]
    pub high: Vec<String>,
    #[serde(default = "default_medium")]
    pub medium: Vec<String>,
    #[serde(default = "default_low")]
    pub low: Vec<String>,
}

impl Default for UrgencyLexicons {
    fn default() -> Self {
        Self {
            urgent: default_urgent(),
            high: default_high(),
            medium: default_medium(),
            low: default_low(),
        }
    }
}

impl UrgencyLexicons {
    /// Phrase list for one tier.
    pub fn get(&self, tier: Urgency) -> &[String] {
        match tier {
            Urgency::Urgent => &self.urgent,
            Urgency::High => &self.high,
            Urgency::Medium => &self.medium,
            Urgency::Low => &self.low,
        }
    }
}

/// Complete lexicon configuration for an analyzer.
///
/// Every field defaults to the built-in tables, so a JSON override only needs
/// to name the pieces it wants to replace.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LexiconSet {
    /// Per-category keyword lexicons.
    #[serde(default)]
    pub keywords: CategoryLexicons,
    /// Help-seeking indicator phrases.
    #[validate(length(min = 1))]
    #[serde(default = "default_help_indicators")]
    pub help_indicators: Vec<String>,
    /// Urgency indicator phrases per tier.
    #[serde(default)]
    pub urgency_indicators: UrgencyLexicons,
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self {
            keywords: CategoryLexicons::default(),
            help_indicators: default_help_indicators(),
            urgency_indicators: UrgencyLexicons::default(),
        }
    }
}

impl LexiconSet {
    /// Parse an override from JSON in the recognized structure and validate it.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let set: Self = serde_json::from_str(json)?;
        set.validate_phrases()?;
        Ok(set)
    }

    /// Check that every phrase list an analyzer will scan with is non-empty.
    pub fn validate_phrases(&self) -> Result<(), EngineError> {
        self.validate()?;
        for category in Category::BASE {
            if let Some(lexicon) = self.keywords.get(category) {
                lexicon.validate().map_err(|e| {
                    EngineError::Validation(format!("{} lexicon: {}", category, e))
                })?;
            }
        }
        for tier in Urgency::PRIORITY {
            if self.urgency_indicators.get(tier).is_empty() {
                return Err(EngineError::Validation(format!(
                    "empty {} urgency lexicon",
                    tier
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let set = LexiconSet::default();
        assert!(set.validate_phrases().is_ok());
    }

    #[test]
    fn test_every_base_category_has_a_lexicon() {
        let lexicons = CategoryLexicons::default();
        for category in Category::BASE {
            let lexicon = lexicons.get(category).unwrap();
            assert!(!lexicon.primary.is_empty());
            assert!(!lexicon.secondary.is_empty());
        }
        assert!(lexicons.get(Category::Mixed).is_none());
    }

    #[test]
    fn test_empty_primary_rejected() {
        let mut set = LexiconSet::default();
        set.keywords.web_development.primary.clear();
        let err = set.validate_phrases().unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_empty_help_indicators_rejected() {
        let mut set = LexiconSet::default();
        set.help_indicators.clear();
        assert!(set.validate_phrases().is_err());
    }

    #[test]
    fn test_empty_urgency_tier_rejected() {
        let mut set = LexiconSet::default();
        set.urgency_indicators.low.clear();
        let err = set.validate_phrases().unwrap_err();
        assert!(err.to_string().contains("low"));
    }
}
