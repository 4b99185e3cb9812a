use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::HashSet;
use tekton_catalog::{template_registry, ScreenTemplate};

/// One scored template candidate. Confidence is normalized to 0..=1.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TemplateMatch {
    #[serde(rename = "templateId")]
    pub template_id: String,
    #[serde(rename = "templateName")]
    pub template_name: String,
    pub category: String,
    pub confidence: f64,
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
}

static CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "auth",
        &[
            "login", "signin", "signup", "register", "authentication", "password", "forgot",
            "reset", "verify", "verification", "email", "otp", "two-factor", "2fa", "sso",
        ],
    ),
    (
        "dashboard",
        &[
            "dashboard", "overview", "analytics", "metrics", "stats", "statistics", "chart",
            "graph", "kpi", "report", "summary", "panel", "admin", "workspace",
        ],
    ),
    (
        "form",
        &[
            "form", "input", "settings", "profile", "preferences", "configuration", "edit",
            "update", "account", "personal", "user", "information",
        ],
    ),
    (
        "marketing",
        &[
            "landing", "hero", "cta", "call-to-action", "pricing", "feature", "benefits",
            "testimonial", "showcase", "promote", "marketing", "sales",
        ],
    ),
    (
        "feedback",
        &[
            "loading", "error", "success", "empty", "not-found", "404", "500", "confirmation",
            "message", "alert", "notification", "state",
        ],
    ),
];

static COMPONENT_KEYWORDS: &[(&str, &[&str])] = &[
    ("card", &["card", "box", "container", "panel"]),
    ("form", &["form", "input", "field", "textbox", "textarea"]),
    ("button", &["button", "cta", "action", "submit", "click"]),
    ("table", &["table", "list", "grid", "data", "row", "column"]),
    ("navigation", &["nav", "menu", "sidebar", "header", "navigation"]),
    ("chart", &["chart", "graph", "visualization", "data-viz"]),
];

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "in", "on", "at", "to", "for", "of", "with", "by", "from", "up",
        "about", "into", "through", "during", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "do", "does", "did", "will", "would", "should", "could", "may",
        "might", "must", "can",
    ]
    .into_iter()
    .collect()
});

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// Lowercase, strip punctuation (keeping hyphens), drop stop words and
/// anything two characters or shorter.
fn extract_keywords(description: &str) -> Vec<String> {
    let lowercased = description.to_lowercase();
    let normalized = NON_WORD.replace_all(&lowercased, " ");
    normalized
        .split_whitespace()
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

fn category_keywords(category: &str) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// Weighted confidence on a 0..=100 scale before normalization:
/// keyword coverage up to 50, category relevance up to 20, component match
/// up to 20, direct name/description hits up to 10.
fn calculate_confidence(
    template: &ScreenTemplate,
    description_keywords: &[String],
    matched_keywords: &[String],
) -> u32 {
    let mut score = 0.0_f64;

    let keyword_score =
        (matched_keywords.len() as f64 / description_keywords.len() as f64) * 50.0;
    score += keyword_score.min(50.0);

    let keywords = category_keywords(template.category.as_str());
    let category_matches = description_keywords
        .iter()
        .filter(|kw| {
            keywords
                .iter()
                .any(|ck| ck.contains(kw.as_str()) || kw.contains(ck))
        })
        .count();
    score += ((category_matches * 5) as f64).min(20.0);

    let component_matches = description_keywords
        .iter()
        .filter(|kw| {
            template.required_components.iter().any(|comp| {
                let comp_lower = comp.to_lowercase();
                comp_lower.contains(kw.as_str()) || kw.contains(&comp_lower)
            }) || COMPONENT_KEYWORDS.iter().any(|(comp, keywords)| {
                keywords.contains(&kw.as_str())
                    && template.required_components.iter().any(|c| c == comp)
            })
        })
        .count();
    score += ((component_matches * 5) as f64).min(20.0);

    let template_text = format!("{} {}", template.name, template.description).to_lowercase();
    let direct_matches = description_keywords
        .iter()
        .filter(|kw| template_text.contains(kw.as_str()))
        .count();
    score += ((direct_matches * 2) as f64).min(10.0);

    (score.round() as u32).min(100)
}

/// Score every registered template against a free-text description and
/// return the best candidates, highest confidence first. Templates with no
/// matched keyword at all are excluded.
pub fn match_templates(description: &str, limit: usize) -> Vec<TemplateMatch> {
    let description_keywords = extract_keywords(description);
    if description_keywords.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<TemplateMatch> = Vec::new();

    for template in template_registry().get_all() {
        let mut matched_keywords: Vec<String> = Vec::new();

        let keywords = category_keywords(template.category.as_str());
        for keyword in &description_keywords {
            if keywords
                .iter()
                .any(|ck| ck.contains(keyword.as_str()) || keyword.contains(ck))
            {
                matched_keywords.push(keyword.clone());
            }
        }

        let template_text = format!("{} {}", template.name, template.description).to_lowercase();
        for keyword in &description_keywords {
            if template_text.contains(keyword.as_str()) && !matched_keywords.contains(keyword) {
                matched_keywords.push(keyword.clone());
            }
        }

        for keyword in &description_keywords {
            if template
                .tags
                .iter()
                .any(|tag| tag.contains(keyword.as_str()))
                && !matched_keywords.contains(keyword)
            {
                matched_keywords.push(keyword.clone());
            }
        }

        if matched_keywords.is_empty() {
            continue;
        }

        let confidence = calculate_confidence(template, &description_keywords, &matched_keywords);
        matches.push(TemplateMatch {
            template_id: template.id.to_string(),
            template_name: template.name.to_string(),
            category: template.category.as_str().to_string(),
            confidence: f64::from(confidence) / 100.0,
            matched_keywords,
        });
    }

    matches.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_drop_stop_words_and_short_tokens_keep_hyphens() {
        let keywords = extract_keywords("A login page for the two-factor flow!");
        assert_eq!(keywords, vec!["login", "page", "two-factor", "flow"]);
    }

    #[test]
    fn login_description_ranks_auth_login_first() {
        let matches = match_templates("login screen with email and password", 3);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].template_id, "auth.login");
        assert!(matches[0].confidence > 0.0 && matches[0].confidence <= 1.0);
        assert!(matches[0]
            .matched_keywords
            .iter()
            .any(|kw| kw == "login"));
    }

    #[test]
    fn dashboard_description_ranks_dashboard_first() {
        let matches = match_templates("analytics dashboard with kpi metrics", 3);
        assert_eq!(matches[0].template_id, "dashboard.overview");
    }

    #[test]
    fn empty_description_matches_nothing() {
        assert!(match_templates("", 3).is_empty());
        assert!(match_templates("a an of", 3).is_empty());
    }

    #[test]
    fn limit_bounds_the_result() {
        let matches = match_templates("login signup password reset verification", 2);
        assert!(matches.len() <= 2);
    }

    #[test]
    fn confidence_never_exceeds_one() {
        let matches = match_templates(
            "login signin signup password authentication form card input button",
            5,
        );
        for m in matches {
            assert!(m.confidence <= 1.0);
        }
    }
}
