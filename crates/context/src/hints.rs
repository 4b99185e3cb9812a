use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HintCategory {
    Layout,
    Component,
    Styling,
    Accessibility,
    BestPractice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HintPriority {
    High,
    Medium,
    Low,
}

/// One contextual nudge for the generating agent.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GenerationHint {
    pub category: HintCategory,
    pub priority: HintPriority,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

fn hint(category: HintCategory, priority: HintPriority, message: &str) -> GenerationHint {
    GenerationHint {
        category,
        priority,
        message: message.to_string(),
        example: None,
    }
}

fn hint_with_example(
    category: HintCategory,
    priority: HintPriority,
    message: &str,
    example: &str,
) -> GenerationHint {
    GenerationHint {
        example: Some(example.to_string()),
        ..hint(category, priority, message)
    }
}

fn mentions_any(description: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| description.contains(kw))
}

fn layout_hints(description: &str, hints: &mut Vec<GenerationHint>) {
    use HintCategory::*;
    use HintPriority::*;

    if mentions_any(description, &["dashboard", "analytics", "metrics", "admin", "kpi", "stats"]) {
        hints.push(hint_with_example(
            Layout,
            High,
            "Use shell.web.dashboard with page.dashboard for admin-style layouts with sidebar navigation",
            "shell: \"shell.web.dashboard\", page: \"page.dashboard\"",
        ));
        hints.push(hint(
            Layout,
            Medium,
            "Consider section.grid-4 for KPI cards at the top of the dashboard",
        ));
    }

    if mentions_any(description, &["form", "input", "submit", "register", "signup", "contact"]) {
        hints.push(hint_with_example(
            Layout,
            High,
            "Use section.container for form content with appropriate max-width",
            "pattern: \"section.container\"",
        ));
        hints.push(hint(
            BestPractice,
            Medium,
            "Group related form fields together and use clear labels",
        ));
    }

    if mentions_any(description, &["login", "signin", "signup", "auth", "password", "verification"]) {
        hints.push(hint_with_example(
            Layout,
            High,
            "Use shell.web.auth with page.wizard for centered authentication flows",
            "shell: \"shell.web.auth\", page: \"page.wizard\"",
        ));
        hints.push(hint(
            Layout,
            Medium,
            "Use section.centered to center the authentication card vertically and horizontally",
        ));
    }

    if mentions_any(description, &["table", "list", "data", "records", "grid", "rows"]) {
        hints.push(hint_with_example(
            Layout,
            High,
            "Use shell.web.app with page.resource for data table views",
            "shell: \"shell.web.app\", page: \"page.resource\"",
        ));
        hints.push(hint(
            Component,
            Medium,
            "Include a toolbar section with search and filter controls above the table",
        ));
    }

    if mentions_any(description, &["landing", "hero", "marketing", "homepage", "home"]) {
        hints.push(hint_with_example(
            Layout,
            High,
            "Use shell.web.marketing with page.detail for full-width marketing layouts",
            "shell: \"shell.web.marketing\", page: \"page.detail\"",
        ));
    }
}

fn component_hints(description: &str, hints: &mut Vec<GenerationHint>) {
    use HintCategory::*;
    use HintPriority::*;

    if mentions_any(description, &["card", "panel", "container", "box"]) {
        hints.push(hint_with_example(
            Component,
            Medium,
            "Use Card with variant=\"elevated\" for prominent content or variant=\"outline\" for subtle containers",
            "{ type: \"Card\", props: { variant: \"elevated\" } }",
        ));
    }

    if mentions_any(description, &["table", "data", "records", "rows", "columns"]) {
        hints.push(hint_with_example(
            Component,
            High,
            "Define table columns with key, header, and sortable properties for interactive tables",
            "columns: [{ key: \"name\", header: \"Name\", sortable: true }]",
        ));
        hints.push(hint(
            Accessibility,
            High,
            "Ensure tables have proper column headers for screen reader accessibility",
        ));
    }

    if mentions_any(description, &["form", "input", "submit", "field"]) {
        hints.push(hint_with_example(
            Component,
            High,
            "Use Input components with proper label and type props for form fields",
            "{ type: \"Input\", props: { type: \"email\", label: \"Email\", required: true } }",
        ));
        hints.push(hint(
            Accessibility,
            High,
            "All form inputs must have associated labels for accessibility",
        ));
    }

    if mentions_any(description, &["avatar", "profile", "user", "photo"]) {
        hints.push(hint_with_example(
            Component,
            Medium,
            "Always provide alt text for Avatar components",
            "{ type: \"Avatar\", props: { src: \"...\", alt: \"User Name\", size: \"lg\" } }",
        ));
    }

    if mentions_any(description, &["button", "action", "cta", "submit"]) {
        hints.push(hint(
            Component,
            Medium,
            "Use variant=\"primary\" for main actions and variant=\"secondary\" or variant=\"outline\" for secondary actions",
        ));
    }

    if mentions_any(description, &["modal", "dialog", "popup", "overlay"]) {
        hints.push(hint(
            Accessibility,
            High,
            "Modals should trap focus and be dismissible with Escape key",
        ));
    }
}

fn styling_hints(theme_id: Option<&str>, hints: &mut Vec<GenerationHint>) {
    use HintCategory::Styling;
    use HintPriority::*;

    hints.push(hint_with_example(
        Styling,
        Medium,
        "Use theme recipes for consistent component styling instead of custom classes",
        "Recipe classes are automatically applied based on component variant props",
    ));

    match theme_id {
        Some(theme_id) => hints.push(hint(
            Styling,
            Low,
            &format!(
                "Theme \"{theme_id}\" is selected - component variants will use this theme's recipe classes"
            ),
        )),
        None => hints.push(hint(
            Styling,
            Medium,
            "Consider specifying a themeId to enable automatic recipe class application",
        )),
    }
}

fn accessibility_hints(description: &str, hints: &mut Vec<GenerationHint>) {
    use HintCategory::Accessibility;
    use HintPriority::*;

    hints.push(hint(
        Accessibility,
        High,
        "Use semantic HTML elements (Heading for titles, List for lists) for proper document structure",
    ));

    if mentions_any(description, &["image", "photo", "avatar"]) {
        hints.push(hint_with_example(
            Accessibility,
            High,
            "All images must have descriptive alt text",
            "props: { alt: \"Description of the image content\" }",
        ));
    }

    if mentions_any(description, &["form", "input"]) {
        hints.push(hint(
            Accessibility,
            High,
            "Form inputs should have clear error messages and validation feedback",
        ));
    }

    if mentions_any(description, &["button", "click"]) {
        hints.push(hint(
            Accessibility,
            Medium,
            "Interactive elements should have clear focus states and be keyboard accessible",
        ));
    }
}

fn best_practice_hints(description: &str, hints: &mut Vec<GenerationHint>) {
    use HintCategory::BestPractice;
    use HintPriority::*;

    hints.push(hint_with_example(
        BestPractice,
        Medium,
        "Use meaningful section IDs that describe the content purpose",
        "id: \"user-profile-header\" instead of id: \"section-1\"",
    ));

    hints.push(hint(
        BestPractice,
        Low,
        "Assign sections to appropriate slots (header, main, sidebar, footer) for proper layout positioning",
    ));

    if mentions_any(description, &["list", "grid", "cards"]) {
        hints.push(hint(
            BestPractice,
            Medium,
            "For repeating content, define one component structure as a template pattern",
        ));
    }

    if mentions_any(description, &["navigation", "menu"]) {
        hints.push(hint(
            BestPractice,
            Medium,
            "Use consistent navigation patterns across related screens",
        ));
    }
}

/// All contextual hints for a description and optional theme: five passes,
/// stably sorted high to low priority, deduplicated by message, capped at
/// ten to avoid drowning the agent.
pub fn generate_hints(description: &str, theme_id: Option<&str>) -> Vec<GenerationHint> {
    let lower = description.to_lowercase();
    let mut hints = Vec::new();

    layout_hints(&lower, &mut hints);
    component_hints(&lower, &mut hints);
    styling_hints(theme_id, &mut hints);
    accessibility_hints(&lower, &mut hints);
    best_practice_hints(&lower, &mut hints);

    hints.sort_by_key(|h| h.priority);

    let mut seen: Vec<String> = Vec::new();
    hints.retain(|h| {
        if seen.contains(&h.message) {
            false
        } else {
            seen.push(h.message.clone());
            true
        }
    });

    hints.truncate(10);
    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_are_capped_and_priority_sorted() {
        let hints = generate_hints(
            "dashboard with kpi cards, a data table, user avatars, forms and buttons",
            Some("square-minimalism"),
        );
        assert!(hints.len() <= 10);
        for pair in hints.windows(2) {
            assert!(pair[0].priority <= pair[1].priority);
        }
    }

    #[test]
    fn theme_selection_changes_the_styling_hint() {
        let with_theme = generate_hints("simple screen", Some("blue-bottle"));
        assert!(with_theme
            .iter()
            .any(|h| h.message.contains("\"blue-bottle\" is selected")));

        let without = generate_hints("simple screen", None);
        assert!(without
            .iter()
            .any(|h| h.message.contains("Consider specifying a themeId")));
    }

    #[test]
    fn auth_description_gets_auth_layout_hint() {
        let hints = generate_hints("login page", None);
        assert!(hints
            .iter()
            .any(|h| h.category == HintCategory::Layout
                && h.message.contains("shell.web.auth")));
    }

    #[test]
    fn duplicate_messages_are_removed() {
        let hints = generate_hints("form with input fields", None);
        let mut messages: Vec<&str> = hints.iter().map(|h| h.message.as_str()).collect();
        let before = messages.len();
        messages.dedup();
        assert_eq!(messages.len(), before);
    }
}
