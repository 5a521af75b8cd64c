//! Requirement extraction.
//!
//! Three independent regex passes over normalized text: technology mentions,
//! budget figures, timeline phrases. Results are unioned into one
//! deduplicated list.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Compile patterns once at startup
static TECH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)(python|java|javascript|react|angular|vue|node\.?js|django|flask|spring)")
            .expect("Invalid regex: language/framework pattern"),
        Regex::new(r"(?i)(sql|mysql|postgresql|mongodb|oracle|elasticsearch)")
            .expect("Invalid regex: database pattern"),
        Regex::new(r"(?i)(aws|azure|gcp|google cloud|cloud)")
            .expect("Invalid regex: cloud platform pattern"),
        Regex::new(r"(?i)(tableau|power bi|looker|qlik|grafana)")
            .expect("Invalid regex: bi tool pattern"),
        Regex::new(r"(?i)(api|rest|graphql|microservices)")
            .expect("Invalid regex: api paradigm pattern"),
        Regex::new(r"(?i)(mobile|ios|android|flutter|react native)")
            .expect("Invalid regex: mobile platform pattern"),
    ]
});

static BUDGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$[\d,]+(?:\.\d{2})?k?|\d+k?\s*(?:budget|dollar|usd)")
        .expect("Invalid regex: budget pattern")
});

static TIMELINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*(?:days?|weeks?|months?|hours?)")
        .expect("Invalid regex: timeline pattern")
});

/// Extracts technology, budget, and timeline hints from normalized text.
#[derive(Default)]
pub struct RequirementExtractor;

impl RequirementExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run all three passes and union the results. Technology names are
    /// title-cased; budget and timeline matches fold into at most one
    /// summary entry each.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut requirements = Vec::new();
        let mut seen = HashSet::new();

        for pattern in TECH_PATTERNS.iter() {
            for found in pattern.find_iter(text) {
                let name = title_case(found.as_str());
                if seen.insert(name.clone()) {
                    requirements.push(name);
                }
            }
        }

        let budget: Vec<&str> = BUDGET.find_iter(text).map(|m| m.as_str()).collect();
        if !budget.is_empty() {
            requirements.push(format!("Budget mentioned: {}", budget.join(", ")));
        }

        let timeline: Vec<&str> = TIMELINE.find_iter(text).map(|m| m.as_str()).collect();
        if !timeline.is_empty() {
            requirements.push(format!("Timeline: {}", timeline.join(", ")));
        }

        requirements
    }
}

/// Uppercase every letter that starts an alphabetic run, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}
