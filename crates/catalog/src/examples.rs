use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tekton_protocol::ScreenDefinition;

/// Curated screen definition shown to agents as reference material.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScreenExample {
    pub name: String,
    pub description: String,
    pub definition: ScreenDefinition,
}

fn example(name: &str, description: &str, definition: serde_json::Value) -> ScreenExample {
    ScreenExample {
        name: name.to_string(),
        description: description.to_string(),
        definition: serde_json::from_value(definition)
            .expect("built-in screen example must deserialize"),
    }
}

static SCREEN_EXAMPLES: Lazy<Vec<ScreenExample>> = Lazy::new(|| {
    vec![
        example(
            "Team Grid",
            "Dashboard screen showing team members in a responsive grid with avatars and role information",
            json!({
                "id": "team-grid",
                "name": "Team Grid Dashboard",
                "description": "Display team members in a grid layout with profile cards",
                "shell": "shell.web.dashboard",
                "page": "page.dashboard",
                "themeId": "square-minimalism",
                "sections": [
                    {
                        "id": "header",
                        "pattern": "section.container",
                        "slot": "header",
                        "components": [
                            {"type": "Heading", "props": {"level": 1, "children": "Our Team"}},
                            {"type": "Text", "props": {"variant": "muted", "children": "Meet the people behind our success"}}
                        ]
                    },
                    {
                        "id": "team-members",
                        "pattern": "section.grid-4",
                        "slot": "main",
                        "components": [
                            {
                                "type": "Card",
                                "props": {"variant": "elevated"},
                                "children": [
                                    {"type": "Avatar", "props": {"src": "/avatars/user-1.jpg", "alt": "Team Member", "size": "lg"}},
                                    {"type": "Heading", "props": {"level": 3, "children": "Jane Smith"}},
                                    {"type": "Badge", "props": {"variant": "secondary", "children": "Engineering"}},
                                    {"type": "Text", "props": {"variant": "small", "children": "Senior Software Engineer"}}
                                ]
                            }
                        ]
                    }
                ]
            }),
        ),
        example(
            "Data Table",
            "Resource list screen with a sortable data table, toolbar search, and status badges",
            json!({
                "id": "data-table",
                "name": "Data Table View",
                "description": "Tabular data display with interactive controls",
                "shell": "shell.web.app",
                "page": "page.resource",
                "sections": [
                    {
                        "id": "toolbar",
                        "pattern": "section.container",
                        "slot": "header",
                        "components": [
                            {"type": "Input", "props": {"type": "search", "placeholder": "Search records", "aria-label": "Search records"}},
                            {"type": "Button", "props": {"variant": "outline", "children": "Filter"}}
                        ]
                    },
                    {
                        "id": "records",
                        "pattern": "section.container",
                        "slot": "main",
                        "components": [
                            {"type": "Table", "props": {"columns": [
                                {"key": "name", "header": "Name", "sortable": true},
                                {"key": "status", "header": "Status"}
                            ]}}
                        ]
                    }
                ]
            }),
        ),
        example(
            "Login Form",
            "Centered login authentication screen with email and password inputs",
            json!({
                "id": "login",
                "name": "Login",
                "description": "User authentication screen",
                "shell": "shell.web.auth",
                "page": "page.wizard",
                "sections": [
                    {
                        "id": "login-form",
                        "pattern": "section.centered",
                        "slot": "main",
                        "components": [
                            {
                                "type": "Card",
                                "children": [
                                    {"type": "Heading", "props": {"level": 2, "children": "Welcome back"}},
                                    {"type": "Label", "props": {"htmlFor": "email", "children": "Email"}},
                                    {"type": "Input", "props": {"type": "email", "label": "Email"}},
                                    {"type": "Label", "props": {"htmlFor": "password", "children": "Password"}},
                                    {"type": "Input", "props": {"type": "password", "label": "Password"}},
                                    {"type": "Button", "props": {"children": "Sign In"}}
                                ]
                            }
                        ]
                    }
                ]
            }),
        ),
        example(
            "Dashboard Overview",
            "Analytics dashboard with KPI cards, charts, and recent activity feed",
            json!({
                "id": "dashboard-overview",
                "name": "Dashboard Overview",
                "description": "Main analytics dashboard with key metrics",
                "shell": "shell.web.dashboard",
                "page": "page.dashboard",
                "themeId": "square-minimalism",
                "sections": [
                    {
                        "id": "kpi-cards",
                        "pattern": "section.grid-4",
                        "slot": "main",
                        "components": [
                            {
                                "type": "Card",
                                "children": [
                                    {"type": "Text", "props": {"variant": "muted", "children": "Revenue"}},
                                    {"type": "Heading", "props": {"level": 3, "children": "$48,250"}},
                                    {"type": "Badge", "props": {"variant": "secondary", "children": "+12%"}}
                                ]
                            }
                        ]
                    },
                    {
                        "id": "activity",
                        "pattern": "section.split-70-30",
                        "slot": "main",
                        "components": [
                            {"type": "Card", "children": [
                                {"type": "Heading", "props": {"level": 3, "children": "Recent Activity"}},
                                {"type": "Separator"},
                                {"type": "Text", "props": {"children": "No recent activity"}}
                            ]}
                        ]
                    }
                ]
            }),
        ),
    ]
});

pub fn all_examples() -> &'static [ScreenExample] {
    &SCREEN_EXAMPLES
}

/// Name-keyword pairs that boost an example when both appear.
const BOOSTS: &[(&str, &str, u32)] = &[
    ("team", "team", 5),
    ("table", "table", 5),
    ("login", "login", 5),
    ("dashboard", "dashboard", 5),
    ("grid", "grid", 3),
    ("form", "form", 3),
    ("auth", "login", 3),
];

/// Score the example bank against a free-text description and return the top
/// matches. Examples with zero score are dropped.
pub fn matching_examples(description: &str, limit: usize) -> Vec<&'static ScreenExample> {
    let lower = description.to_lowercase();

    let mut scored: Vec<(&ScreenExample, u32)> = all_examples()
        .iter()
        .filter_map(|example| {
            let mut score = 0u32;

            let haystack = format!(
                "{} {}",
                example.name.to_lowercase(),
                example.description.to_lowercase()
            );
            for keyword in haystack.split_whitespace() {
                if keyword.len() > 3 && lower.contains(keyword) {
                    score += 1;
                }
            }

            let example_name = example.name.to_lowercase();
            for (desc_kw, name_kw, boost) in BOOSTS {
                if lower.contains(desc_kw) && example_name.contains(name_kw) {
                    score += boost;
                }
            }

            (score > 0).then_some((example, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(example, _)| example).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_holds_four_examples() {
        assert_eq!(all_examples().len(), 4);
    }

    #[test]
    fn login_description_prefers_login_example() {
        let matches = matching_examples("a login page for our app with email auth", 2);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].name, "Login Form");
    }

    #[test]
    fn unrelated_description_matches_nothing() {
        let matches = matching_examples("xyzzy", 2);
        assert!(matches.is_empty());
    }

    #[test]
    fn limit_is_respected() {
        let matches = matching_examples("dashboard with a data table grid", 1);
        assert_eq!(matches.len(), 1);
    }
}
