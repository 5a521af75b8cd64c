//! Urgency classification.
//!
//! Four phrase lexicons, one per tier, scanned in fixed severity order. The
//! first tier with any phrase present in the text wins outright; phrase order
//! within a tier never matters.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::UrgencyLexicons;

/// Urgency tier, ordered by severity (`Low < Medium < High < Urgent`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Urgent,
}

impl Urgency {
    /// Tier scan order, most severe first.
    pub const PRIORITY: [Urgency; 4] = [
        Urgency::Urgent,
        Urgency::High,
        Urgency::Medium,
        Urgency::Low,
    ];

    /// Returns the wire name for the tier.
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Infers an urgency tier from normalized text.
pub struct UrgencyClassifier {
    lexicons: UrgencyLexicons,
}

impl Default for UrgencyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl UrgencyClassifier {
    /// Classifier with the built-in tier lexicons.
    pub fn new() -> Self {
        Self::with_lexicons(UrgencyLexicons::default())
    }

    /// Classifier with caller-supplied tier lexicons.
    pub fn with_lexicons(lexicons: UrgencyLexicons) -> Self {
        Self { lexicons }
    }

    /// First tier in priority order with a phrase contained in the text.
    /// `Medium` is the fallback when no tier matches at all.
    pub fn classify(&self, text: &str) -> Urgency {
        for tier in Urgency::PRIORITY {
            if self
                .lexicons
                .get(tier)
                .iter()
                .any(|phrase| text.contains(phrase.as_str()))
            {
                return tier;
            }
        }
        Urgency::Medium
    }
}
