//! Category scoring against weighted keyword lexicons.
//!
//! Each base category carries a primary (weight 2) and secondary (weight 1)
//! phrase list. A post's confidence for a category is its weighted containment
//! match count normalized by the lexicon's maximum possible weighted score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::{CategoryLexicons, KeywordLexicon};

/// Service category an opportunity falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DataIntegration,
    DataVisualization,
    WebDevelopment,
    AppDevelopment,
    /// More than one base category scored above the mixed threshold.
    Mixed,
}

impl Category {
    /// The four scorable categories, in declaration order.
    pub const BASE: [Category; 4] = [
        Category::DataIntegration,
        Category::DataVisualization,
        Category::WebDevelopment,
        Category::AppDevelopment,
    ];

    /// Returns the wire name for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::DataIntegration => "data_integration",
            Category::DataVisualization => "data_visualization",
            Category::WebDevelopment => "web_development",
            Category::AppDevelopment => "app_development",
            Category::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Confidence for one base category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    /// The scored category.
    pub category: Category,
    /// Normalized weighted match score (0.0 - 1.0).
    pub confidence: f32,
}

/// Scores normalized text against the per-category keyword lexicons.
pub struct CategoryScorer {
    lexicons: CategoryLexicons,
}

impl Default for CategoryScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer {
    /// Scorer with the built-in lexicons.
    pub fn new() -> Self {
        Self::with_lexicons(CategoryLexicons::default())
    }

    /// Scorer with caller-supplied lexicons.
    pub fn with_lexicons(lexicons: CategoryLexicons) -> Self {
        Self { lexicons }
    }

    /// Score all four base categories, in declaration order. Never includes
    /// `Mixed`; the mixed override is the analyzer's call.
    pub fn score(&self, text: &str) -> Vec<CategoryScore> {
        Category::BASE
            .iter()
            .map(|&category| CategoryScore {
                category,
                confidence: self
                    .lexicons
                    .get(category)
                    .map(|lexicon| Self::confidence(lexicon, text))
                    .unwrap_or(0.0),
            })
            .collect()
    }

    /// Every lexicon keyword contained in the text, in category declaration
    /// order with primary phrases before secondary ones.
    pub fn matched_keywords(&self, text: &str) -> Vec<String> {
        let mut found = Vec::new();
        for category in Category::BASE {
            if let Some(lexicon) = self.lexicons.get(category) {
                for keyword in lexicon.primary.iter().chain(lexicon.secondary.iter()) {
                    if text.contains(keyword.as_str()) {
                        found.push(keyword.clone());
                    }
                }
            }
        }
        found
    }

    /// Each keyword counts at most once regardless of how often it repeats.
    fn confidence(lexicon: &KeywordLexicon, text: &str) -> f32 {
        let primary_matches = lexicon
            .primary
            .iter()
            .filter(|keyword| text.contains(keyword.as_str()))
            .count();
        let secondary_matches = lexicon
            .secondary
            .iter()
            .filter(|keyword| text.contains(keyword.as_str()))
            .count();

        let weighted = (primary_matches * 2 + secondary_matches) as f32;
        let max_possible = (lexicon.primary.len() * 2 + lexicon.secondary.len()) as f32;

        if max_possible == 0.0 {
            return 0.0;
        }
        (weighted / max_possible).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_cover_exactly_the_base_categories() {
        let scorer = CategoryScorer::new();

        let scores = scorer.score("nothing relevant here");
        let categories: Vec<Category> = scores.iter().map(|s| s.category).collect();
        assert_eq!(categories, Category::BASE.to_vec());
    }

    #[test]
    fn test_weighted_confidence() {
        let scorer = CategoryScorer::new();

        // Two primary matches ("etl", "data pipeline") against the default
        // data integration lexicon of 6 primary + 5 secondary phrases.
        let scores = scorer.score("etl work on a data pipeline");
        assert!((scores[0].confidence - 4.0 / 17.0).abs() < 1e-6);
    }

    #[test]
    fn test_keyword_counted_once() {
        let scorer = CategoryScorer::new();

        let once = scorer.score("etl")[0].confidence;
        let thrice = scorer.score("etl etl etl")[0].confidence;
        assert_eq!(once, thrice);
    }

    #[test]
    fn test_confidence_in_range() {
        let scorer = CategoryScorer::new();

        let loaded = "data integration data pipeline etl data migration api integration \
                      database sync connect systems real-time data data sync import data export data";
        for score in scorer.score(loaded) {
            assert!(score.confidence >= 0.0 && score.confidence <= 1.0);
        }
    }

    #[test]
    fn test_empty_lexicon_scores_zero() {
        let mut lexicons = CategoryLexicons::default();
        lexicons.web_development.primary.clear();
        lexicons.web_development.secondary.clear();
        let scorer = CategoryScorer::with_lexicons(lexicons);

        let scores = scorer.score("website frontend backend");
        assert_eq!(scores[2].confidence, 0.0);
    }

    #[test]
    fn test_matched_keywords_order() {
        let scorer = CategoryScorer::new();

        let matched = scorer.matched_keywords("a dashboard with tableau for our website");
        assert_eq!(matched, vec!["dashboard", "tableau", "website"]);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::DataIntegration.label(), "data_integration");
        assert_eq!(Category::Mixed.to_string(), "mixed");
    }
}
