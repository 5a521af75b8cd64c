//! Opportunity verdict - output structure of post analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::Category;
use super::urgency::Urgency;

/// Maximum number of key indicators kept on a verdict.
pub const MAX_KEY_INDICATORS: usize = 10;

/// Complete verdict for one analyzed post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityVerdict {
    /// Original post text as submitted.
    pub post: String,

    /// Winning category, or `None` when the post does not seek help at all.
    pub category: Option<Category>,

    /// Normalized weighted keyword-match score (0.0 - 1.0).
    pub confidence: f32,

    /// Inferred urgency tier.
    pub urgency: Urgency,

    /// Help-seeking and category phrases that matched, capped at
    /// [`MAX_KEY_INDICATORS`].
    pub key_indicators: Vec<String>,

    /// Extracted technology, budget, and timeline hints.
    pub extracted_requirements: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Timestamp of analysis.
    pub analyzed_at: DateTime<Utc>,
}

impl OpportunityVerdict {
    /// The terminal verdict for a post with no help-seeking signal.
    pub(crate) fn non_opportunity(post: String) -> Self {
        Self {
            post,
            category: None,
            confidence: 0.0,
            urgency: Urgency::Low,
            key_indicators: vec![],
            extracted_requirements: vec![],
            processing_time_ms: 0,
            analyzed_at: Utc::now(),
        }
    }

    /// Whether the post was judged to be seeking help at all.
    pub fn is_opportunity(&self) -> bool {
        self.category.is_some()
    }

    /// One-line summary for log output.
    pub fn summary(&self) -> String {
        format!(
            "Category: {} ({:.0}%), Urgency: {}, Indicators: {}, Requirements: {}",
            self.category.map_or("none", |c| c.label()),
            self.confidence * 100.0,
            self.urgency,
            self.key_indicators.len(),
            self.extracted_requirements.len()
        )
    }
}
