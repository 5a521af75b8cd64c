//! Help-seeking detection.
//!
//! Scans normalized text for a fixed lexicon of phrases signaling that the
//! poster wants outside help or intends to hire.

use serde::{Deserialize, Serialize};

use super::lexicon::default_help_indicators;

/// Result of scanning one post for help-seeking signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpSignals {
    /// Whether the post asks for external help or hiring.
    pub seeking_help: bool,
    /// Indicator phrases found, in lexicon order.
    pub matched: Vec<String>,
}

/// Detects help-seeking intent via substring containment checks.
pub struct HelpSignalDetector {
    indicators: Vec<String>,
}

impl Default for HelpSignalDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpSignalDetector {
    /// Detector with the built-in indicator phrases.
    pub fn new() -> Self {
        Self::with_indicators(default_help_indicators())
    }

    /// Detector with caller-supplied indicator phrases.
    pub fn with_indicators(indicators: Vec<String>) -> Self {
        Self { indicators }
    }

    /// Scan normalized (already lowercased) text. Each phrase is checked
    /// once, so the matched list cannot contain duplicates.
    pub fn detect(&self, text: &str) -> HelpSignals {
        let matched: Vec<String> = self
            .indicators
            .iter()
            .filter(|phrase| text.contains(phrase.as_str()))
            .cloned()
            .collect();

        HelpSignals {
            seeking_help: !matched.is_empty(),
            matched,
        }
    }
}
