//! Opportunity analyzer - main orchestrator for the engine.
//!
//! Composes normalization, help-seeking detection, category scoring, urgency
//! classification, and requirement extraction into one verdict per post.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use super::help_signals::HelpSignalDetector;
use super::lexicon::LexiconSet;
use super::normalize::normalize;
use super::requirements::RequirementExtractor;
use super::scoring::{Category, CategoryScorer};
use super::urgency::UrgencyClassifier;
use super::verdict::{OpportunityVerdict, MAX_KEY_INDICATORS};
use crate::error::EngineError;

/// Confidence a base category must strictly exceed to count toward the
/// mixed-category override.
const MIXED_THRESHOLD: f32 = 0.3;

/// Analyzes posts for commercial service opportunities.
///
/// Holds only immutable lexicon data built at construction, so one analyzer
/// can be shared freely across threads.
pub struct OpportunityAnalyzer {
    help_detector: HelpSignalDetector,
    category_scorer: CategoryScorer,
    urgency_classifier: UrgencyClassifier,
    requirement_extractor: RequirementExtractor,
}

impl Default for OpportunityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl OpportunityAnalyzer {
    /// Analyzer with the built-in lexicons.
    pub fn new() -> Self {
        Self::from_lexicons(LexiconSet::default())
    }

    /// Analyzer with caller-supplied lexicons. Fails when the override does
    /// not satisfy the recognized structure.
    pub fn with_lexicons(lexicons: LexiconSet) -> Result<Self, EngineError> {
        lexicons.validate_phrases()?;
        Ok(Self::from_lexicons(lexicons))
    }

    fn from_lexicons(lexicons: LexiconSet) -> Self {
        Self {
            help_detector: HelpSignalDetector::with_indicators(lexicons.help_indicators),
            category_scorer: CategoryScorer::with_lexicons(lexicons.keywords),
            urgency_classifier: UrgencyClassifier::with_lexicons(lexicons.urgency_indicators),
            requirement_extractor: RequirementExtractor::new(),
        }
    }

    /// Analyze one post. Total over any input; a post with no help-seeking
    /// signal short-circuits to the zero-confidence non-opportunity verdict.
    pub fn analyze(&self, post: &str) -> OpportunityVerdict {
        let start = Instant::now();

        // 1. Normalize the post text
        let text = normalize(post);

        // 2. Check whether the post is seeking help at all
        let help = self.help_detector.detect(&text);
        if !help.seeking_help {
            debug!(post_len = post.len(), "no help-seeking signal, skipping scoring");
            return OpportunityVerdict::non_opportunity(post.to_string());
        }

        // 3. Score every base category; first category of maximal
        //    confidence wins ties
        let scores = self.category_scorer.score(&text);
        let mut best = &scores[0];
        for score in &scores[1..] {
            if score.confidence > best.confidence {
                best = score;
            }
        }

        // 4. Mixed override when more than one category scores high;
        //    keeps the winning category's confidence
        let high_scoring = scores
            .iter()
            .filter(|s| s.confidence > MIXED_THRESHOLD)
            .count();
        let category = if high_scoring > 1 {
            Category::Mixed
        } else {
            best.category
        };
        let confidence = best.confidence;

        // 5. Classify urgency
        let urgency = self.urgency_classifier.classify(&text);

        // 6. Extract requirements
        let extracted_requirements = self.requirement_extractor.extract(&text);

        // 7. Compile key indicators
        let key_indicators = self.compile_indicators(help.matched, &text);

        debug!(
            category = %category,
            confidence,
            urgency = %urgency,
            indicators = key_indicators.len(),
            "post scored"
        );

        OpportunityVerdict {
            post: post.to_string(),
            category: Some(category),
            confidence,
            urgency,
            key_indicators,
            extracted_requirements,
            processing_time_ms: start.elapsed().as_millis() as u64,
            analyzed_at: Utc::now(),
        }
    }

    /// Help-seeking phrases first, then every matched category keyword in
    /// lexicon order. First occurrence wins; capped at [`MAX_KEY_INDICATORS`].
    fn compile_indicators(&self, help_matches: Vec<String>, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut indicators = Vec::new();

        let keyword_matches = self.category_scorer.matched_keywords(text);
        for phrase in help_matches.into_iter().chain(keyword_matches) {
            if seen.insert(phrase.clone()) {
                indicators.push(phrase);
            }
            if indicators.len() == MAX_KEY_INDICATORS {
                break;
            }
        }
        indicators
    }
}
