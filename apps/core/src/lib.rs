//! # LeadScout Core
//!
//! Opportunity scoring engine for social-media prospecting. Classifies
//! free-text posts into service categories, estimates how urgently the poster
//! needs help, and extracts requirement hints (technologies, budget,
//! timeline). Pure and synchronous: no I/O, no model downloads, no shared
//! mutable state.
//!
//! ```
//! let verdict = leadscout_core::analyze(
//!     "Looking for a data visualization expert. Tableau or Power BI. Budget around $5k.",
//! );
//! assert!(verdict.is_opportunity());
//!
//! let advice = leadscout_core::suggest_responses(&verdict);
//! assert!(!advice.is_empty());
//! ```

pub mod engine;
pub mod error;

use std::sync::LazyLock;

pub use engine::{
    Category, CategoryLexicons, CategoryScore, CategoryScorer, HelpSignalDetector, HelpSignals,
    KeywordLexicon, LexiconSet, OpportunityAnalyzer, OpportunityVerdict, RequirementExtractor,
    ResponseSuggester, Urgency, UrgencyClassifier, UrgencyLexicons, MAX_KEY_INDICATORS,
};
pub use error::EngineError;

/// Process-wide analyzer built once from the compiled-in lexicons.
static DEFAULT_ANALYZER: LazyLock<OpportunityAnalyzer> = LazyLock::new(OpportunityAnalyzer::new);

/// Analyze one post with the built-in lexicons.
///
/// Never fails: malformed or empty input degrades to the zero-confidence
/// non-opportunity verdict.
pub fn analyze(post_text: &str) -> OpportunityVerdict {
    DEFAULT_ANALYZER.analyze(post_text)
}

/// Suggested outreach responses for a verdict. Deterministic given the
/// verdict.
pub fn suggest_responses(verdict: &OpportunityVerdict) -> Vec<String> {
    ResponseSuggester::new().suggest(verdict)
}

#[cfg(test)]
mod tests;
