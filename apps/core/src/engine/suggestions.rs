//! Response suggestion generation.
//!
//! Maps a verdict to outreach advice: three static suggestions per category,
//! plus two turnaround extras when the post is time-pressed.

use super::scoring::Category;
use super::urgency::Urgency;
use super::verdict::OpportunityVerdict;

/// Verdicts below this confidence only get the low-confidence notice. The
/// boundary is inclusive on the qualifying side: 0.2 gets full suggestions.
const CONFIDENCE_FLOOR: f32 = 0.2;

const LOW_CONFIDENCE_NOTICE: &str = "Low confidence opportunity - may not be relevant";

const DATA_INTEGRATION_APPROACHES: &[&str] = &[
    "Highlight experience with ETL processes and data pipelines",
    "Mention specific integration tools (Zapier, MuleSoft, custom APIs)",
    "Showcase data warehousing and real-time processing capabilities",
];

const DATA_VISUALIZATION_APPROACHES: &[&str] = &[
    "Share portfolio of dashboard examples",
    "Mention expertise in Tableau, Power BI, or custom solutions",
    "Highlight ability to translate business needs into visual insights",
];

const WEB_DEVELOPMENT_APPROACHES: &[&str] = &[
    "Showcase relevant web development portfolio",
    "Mention technology stack expertise (React, Django, etc.)",
    "Emphasize responsive design and user experience",
];

const APP_DEVELOPMENT_APPROACHES: &[&str] = &[
    "Share mobile app portfolio and app store links",
    "Mention cross-platform vs native development capabilities",
    "Highlight user-centric design approach",
];

const MIXED_APPROACHES: &[&str] = &[
    "Emphasize full-stack capabilities across multiple domains",
    "Mention integrated solutions experience",
    "Highlight project management for complex requirements",
];

const TIME_PRESSED_EXTRAS: &[&str] = &[
    "Emphasize quick turnaround and availability",
    "Mention agile development approach",
];

/// Generates outreach suggestions from a verdict.
#[derive(Default)]
pub struct ResponseSuggester;

impl ResponseSuggester {
    pub fn new() -> Self {
        Self
    }

    /// Suggested response approaches, base category advice first and the
    /// turnaround extras appended for high or urgent posts.
    pub fn suggest(&self, verdict: &OpportunityVerdict) -> Vec<String> {
        if verdict.confidence < CONFIDENCE_FLOOR {
            return vec![LOW_CONFIDENCE_NOTICE.to_string()];
        }
        let Some(category) = verdict.category else {
            return vec![LOW_CONFIDENCE_NOTICE.to_string()];
        };

        let mut suggestions: Vec<String> = base_approaches(category)
            .iter()
            .map(|s| (*s).to_string())
            .collect();

        if verdict.urgency >= Urgency::High {
            suggestions.extend(TIME_PRESSED_EXTRAS.iter().map(|s| (*s).to_string()));
        }

        suggestions
    }
}

fn base_approaches(category: Category) -> &'static [&'static str] {
    match category {
        Category::DataIntegration => DATA_INTEGRATION_APPROACHES,
        Category::DataVisualization => DATA_VISUALIZATION_APPROACHES,
        Category::WebDevelopment => WEB_DEVELOPMENT_APPROACHES,
        Category::AppDevelopment => APP_DEVELOPMENT_APPROACHES,
        Category::Mixed => MIXED_APPROACHES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn verdict(category: Option<Category>, confidence: f32, urgency: Urgency) -> OpportunityVerdict {
        OpportunityVerdict {
            post: String::new(),
            category,
            confidence,
            urgency,
            key_indicators: vec![],
            extracted_requirements: vec![],
            processing_time_ms: 0,
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_low_confidence_boundary_exclusive_below() {
        let suggester = ResponseSuggester::new();

        let low = verdict(Some(Category::WebDevelopment), 0.19, Urgency::Medium);
        assert_eq!(suggester.suggest(&low), vec![LOW_CONFIDENCE_NOTICE.to_string()]);
    }

    #[test]
    fn test_confidence_boundary_inclusive_at_floor() {
        let suggester = ResponseSuggester::new();

        let qualifying = verdict(Some(Category::WebDevelopment), 0.2, Urgency::Medium);
        let suggestions = suggester.suggest(&qualifying);
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0], "Showcase relevant web development portfolio");
    }

    #[test]
    fn test_time_pressed_extras_appended() {
        let suggester = ResponseSuggester::new();

        for urgency in [Urgency::High, Urgency::Urgent] {
            let suggestions =
                suggester.suggest(&verdict(Some(Category::AppDevelopment), 0.5, urgency));
            assert_eq!(suggestions.len(), 5);
            assert_eq!(suggestions[3], "Emphasize quick turnaround and availability");
            assert_eq!(suggestions[4], "Mention agile development approach");
        }
    }

    #[test]
    fn test_no_extras_for_medium_or_low() {
        let suggester = ResponseSuggester::new();

        for urgency in [Urgency::Medium, Urgency::Low] {
            let suggestions =
                suggester.suggest(&verdict(Some(Category::DataIntegration), 0.5, urgency));
            assert_eq!(suggestions.len(), 3);
        }
    }

    #[test]
    fn test_mixed_category_has_own_list() {
        let suggester = ResponseSuggester::new();

        let suggestions = suggester.suggest(&verdict(Some(Category::Mixed), 0.4, Urgency::Medium));
        assert_eq!(
            suggestions[0],
            "Emphasize full-stack capabilities across multiple domains"
        );
    }

    #[test]
    fn test_non_opportunity_gets_notice() {
        let suggester = ResponseSuggester::new();

        let suggestions = suggester.suggest(&verdict(None, 0.0, Urgency::Low));
        assert_eq!(suggestions, vec![LOW_CONFIDENCE_NOTICE.to_string()]);
    }
}
