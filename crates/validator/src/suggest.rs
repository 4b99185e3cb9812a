use serde_json::Value;
use tekton_protocol::{ImprovementSuggestion, JsonPatchOp, PatchOp, SuggestionCategory};

/// Absent, null, and empty-string values all count as missing for the
/// advisory checks.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Derive a human-readable name from an id: hyphens and underscores become
/// spaces, each word is title-cased.
fn title_case_from_id(id: &str) -> String {
    id.replace(['-', '_'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A section with `slot: "main"` serves the main slot. A section with no
/// slot at all is treated as implicitly eligible as well; layout consumers
/// place unslotted sections in the main area by default.
fn section_serves_main_slot(section: &Value) -> bool {
    match section.get("slot") {
        None | Some(Value::Null) => true,
        Some(Value::String(slot)) => slot == "main" || slot.is_empty(),
        Some(_) => false,
    }
}

fn suggestion(
    category: SuggestionCategory,
    message: impl Into<String>,
    affected_path: impl Into<String>,
    suggested_change: impl Into<String>,
) -> ImprovementSuggestion {
    ImprovementSuggestion {
        category,
        message: message.into(),
        affected_path: affected_path.into(),
        suggested_change: suggested_change.into(),
        auto_fix: None,
    }
}

/// Non-blocking best-practice nudges over a possibly-invalid definition.
/// Null or non-object input yields an empty list rather than an error.
pub fn improvement_suggestions(definition: &Value) -> Vec<ImprovementSuggestion> {
    let mut suggestions = Vec::new();

    let Some(object) = definition.as_object() else {
        return suggestions;
    };

    if is_missing(object.get("name")) {
        let auto_fix = object
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(|id| {
                vec![JsonPatchOp {
                    op: PatchOp::Add,
                    path: "/name".into(),
                    value: Value::String(title_case_from_id(id)),
                }]
            });
        suggestions.push(ImprovementSuggestion {
            auto_fix,
            ..suggestion(
                SuggestionCategory::Maintainability,
                "Consider adding a human-readable name for better documentation",
                "name",
                "Add a descriptive name property",
            )
        });
    }

    if is_missing(object.get("description")) {
        suggestions.push(suggestion(
            SuggestionCategory::Maintainability,
            "Consider adding a description for documentation purposes",
            "description",
            "Add a brief description of the screen purpose",
        ));
    }

    if is_missing(object.get("themeId")) {
        suggestions.push(suggestion(
            SuggestionCategory::Consistency,
            "Consider specifying a themeId for consistent styling",
            "themeId",
            "Add themeId to enable theme recipe application",
        ));
    }

    let Some(sections) = object.get("sections").and_then(Value::as_array) else {
        return suggestions;
    };

    for (i, section) in sections.iter().enumerate() {
        let label = section
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| i.to_string());

        let components = section.get("components").and_then(Value::as_array);
        if components.map_or(true, Vec::is_empty) {
            suggestions.push(suggestion(
                SuggestionCategory::Maintainability,
                format!("Section \"{label}\" has no components"),
                format!("sections[{i}].components"),
                "Add components or remove empty section",
            ));
        }

        if is_missing(section.get("slot")) {
            suggestions.push(suggestion(
                SuggestionCategory::Consistency,
                format!("Section \"{label}\" has no slot assigned"),
                format!("sections[{i}].slot"),
                "Assign to a slot (header, main, sidebar, footer) for proper layout positioning",
            ));
        }

        for (j, component) in components.into_iter().flatten().enumerate() {
            let component_type = component.get("type").and_then(Value::as_str).unwrap_or("");
            let props = component.get("props").and_then(Value::as_object);

            if matches!(component_type, "Image" | "Avatar")
                && props.map_or(true, |p| is_missing(p.get("alt")))
            {
                suggestions.push(suggestion(
                    SuggestionCategory::Accessibility,
                    format!("{component_type} component is missing alt text"),
                    format!("sections[{i}].components[{j}].props.alt"),
                    "Add descriptive alt text for screen readers",
                ));
            }

            // The label check only fires when a props object exists; a
            // component with no props at all is left to the alt/required
            // checks.
            if component_type == "Input" {
                if let Some(props) = props {
                    if is_missing(props.get("label")) && is_missing(props.get("aria-label")) {
                        suggestions.push(suggestion(
                            SuggestionCategory::Accessibility,
                            "Input component is missing a label",
                            format!("sections[{i}].components[{j}].props.label"),
                            "Add a label prop or aria-label for accessibility",
                        ));
                    }
                }
            }
        }
    }

    if !sections.iter().any(section_serves_main_slot) {
        suggestions.push(suggestion(
            SuggestionCategory::Consistency,
            "No section assigned to main slot",
            "sections",
            "Assign at least one section to the main slot",
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn null_input_produces_no_suggestions() {
        assert!(improvement_suggestions(&Value::Null).is_empty());
        assert!(improvement_suggestions(&json!("text")).is_empty());
    }

    #[test]
    fn minimal_definition_gets_metadata_nudges() {
        let definition = json!({
            "id": "x",
            "shell": "shell.web.app",
            "page": "page.dashboard",
            "sections": []
        });
        let suggestions = improvement_suggestions(&definition);
        let paths: Vec<&str> = suggestions.iter().map(|s| s.affected_path.as_str()).collect();
        assert!(suggestions.len() >= 3);
        assert!(paths.contains(&"name"));
        assert!(paths.contains(&"description"));
        assert!(paths.contains(&"themeId"));
    }

    #[test]
    fn missing_name_autofix_title_cases_the_id() {
        let definition = json!({"id": "user-profile_page", "sections": []});
        let suggestions = improvement_suggestions(&definition);
        let name = suggestions
            .iter()
            .find(|s| s.affected_path == "name")
            .unwrap();
        let fix = name.auto_fix.as_ref().unwrap();
        assert_eq!(fix[0].path, "/name");
        assert_eq!(fix[0].value, "User Profile Page");
    }

    #[test]
    fn empty_section_and_missing_slot_are_flagged() {
        let definition = json!({
            "id": "x", "name": "X", "description": "d", "themeId": "t",
            "sections": [{"id": "hero", "pattern": "section.hero", "components": []}]
        });
        let suggestions = improvement_suggestions(&definition);
        assert!(suggestions
            .iter()
            .any(|s| s.affected_path == "sections[0].components"
                && s.message.contains("\"hero\"")));
        assert!(suggestions
            .iter()
            .any(|s| s.affected_path == "sections[0].slot"));
    }

    #[test]
    fn image_without_alt_is_an_accessibility_finding() {
        let definition = json!({
            "id": "x", "name": "X", "description": "d", "themeId": "t",
            "sections": [{
                "id": "s1", "pattern": "section.container", "slot": "main",
                "components": [{"type": "Image", "props": {}}]
            }]
        });
        let suggestions = improvement_suggestions(&definition);
        let alt = suggestions
            .iter()
            .find(|s| s.affected_path == "sections[0].components[0].props.alt")
            .unwrap();
        assert_eq!(alt.category, SuggestionCategory::Accessibility);
    }

    #[test]
    fn input_without_props_object_skips_label_check() {
        let definition = json!({
            "id": "x", "name": "X", "description": "d", "themeId": "t",
            "sections": [{
                "id": "s1", "pattern": "section.container", "slot": "main",
                "components": [{"type": "Input"}]
            }]
        });
        let suggestions = improvement_suggestions(&definition);
        assert!(!suggestions
            .iter()
            .any(|s| s.affected_path.ends_with("props.label")));
    }

    #[test]
    fn aria_label_satisfies_the_input_check() {
        let definition = json!({
            "id": "x", "name": "X", "description": "d", "themeId": "t",
            "sections": [{
                "id": "s1", "pattern": "section.container", "slot": "main",
                "components": [{"type": "Input", "props": {"aria-label": "Search"}}]
            }]
        });
        let suggestions = improvement_suggestions(&definition);
        assert!(!suggestions
            .iter()
            .any(|s| s.affected_path.ends_with("props.label")));
    }

    #[test]
    fn unslotted_section_counts_as_main() {
        let definition = json!({
            "id": "x", "name": "X", "description": "d", "themeId": "t",
            "sections": [{
                "id": "s1", "pattern": "section.container",
                "components": [{"type": "Card"}]
            }]
        });
        let suggestions = improvement_suggestions(&definition);
        assert!(!suggestions.iter().any(|s| s.affected_path == "sections"));
    }

    #[test]
    fn all_sidebar_sections_trigger_main_slot_nudge() {
        let definition = json!({
            "id": "x", "name": "X", "description": "d", "themeId": "t",
            "sections": [{
                "id": "s1", "pattern": "section.container", "slot": "sidebar",
                "components": [{"type": "Card"}]
            }]
        });
        let suggestions = improvement_suggestions(&definition);
        let main = suggestions.iter().find(|s| s.affected_path == "sections").unwrap();
        assert_eq!(main.suggested_change, "Assign at least one section to the main slot");
    }
}
