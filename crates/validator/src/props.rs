use std::collections::BTreeMap;

use serde_json::Value;
use tekton_catalog::props_data;
use tekton_protocol::{JsonPatchOp, PatchOp, ValidationError, ValidationWarning};

use crate::tokens::Findings;

/// Validate a component instance's props against the catalog's prop schema.
/// Callers only invoke this after the type itself resolved cleanly.
/// Components without a registered schema are skipped entirely.
pub(crate) fn check_component_props(component: &Value, path: &str, pointer: &str) -> Findings {
    let mut findings = Findings::default();

    let Some(component_type) = component.get("type").and_then(Value::as_str) else {
        return findings;
    };
    let Some(schema) = props_data(component_type) else {
        return findings;
    };

    let empty = serde_json::Map::new();
    let supplied = component
        .get("props")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    for prop in &schema.props {
        if prop.required && !supplied.contains_key(prop.name) {
            let auto_fix = prop.default_value.map(|default| {
                vec![JsonPatchOp {
                    op: PatchOp::Add,
                    path: format!("{pointer}/props/{}", prop.name),
                    value: Value::String(default.to_string()),
                }]
            });
            findings.errors.push(ValidationError {
                expected: Some(prop.prop_type.into()),
                suggestion: Some(match prop.default_value {
                    Some(default) => format!("Add \"{}\" prop (default: {default})", prop.name),
                    None => format!("Add \"{}\" prop of type {}", prop.name, prop.prop_type),
                }),
                auto_fix,
                ..ValidationError::new(
                    format!("{path}.props.{}", prop.name),
                    "MISSING_REQUIRED_PROP",
                    format!(
                        "Required prop \"{}\" is missing on {component_type}",
                        prop.name
                    ),
                )
            });
        }
    }

    // A variant prop name may carry several registered values; group first.
    let mut variant_groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for variant in &schema.variants {
        variant_groups.entry(variant.name).or_default().push(variant.value);
    }

    for (variant_name, valid_values) in variant_groups {
        let Some(Value::String(value)) = supplied.get(variant_name) else {
            continue;
        };
        if !valid_values.contains(&value.as_str()) {
            findings.warnings.push(ValidationWarning {
                path: format!("{path}.props.{variant_name}"),
                code: "INVALID_VARIANT".into(),
                message: format!(
                    "Invalid {variant_name} value \"{value}\" on {component_type}"
                ),
                recommendation: Some(format!("Valid values: {}", valid_values.join(", "))),
            });
        }
    }

    findings
}

/// Public single-component entry point, mainly for direct library use.
pub fn validate_component_props(
    component: &Value,
    path: &str,
    pointer: &str,
) -> (Vec<ValidationError>, Vec<ValidationWarning>) {
    let findings = check_component_props(component, path, pointer);
    (findings.errors, findings.warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_required_prop_without_default_has_no_fix() {
        let component = json!({"type": "Form", "props": {}});
        let findings = check_component_props(
            &component,
            "sections[0].components[0]",
            "/sections/0/components/0",
        );
        assert_eq!(findings.errors.len(), 1);
        let err = &findings.errors[0];
        assert_eq!(err.code, "MISSING_REQUIRED_PROP");
        assert_eq!(err.path, "sections[0].components[0].props.control");
        // control has no default, so no autofix rides along
        assert!(err.auto_fix.is_none());
    }

    #[test]
    fn required_prop_with_default_gets_add_fix() {
        let component = json!({"type": "Progress"});
        let findings = check_component_props(
            &component,
            "sections[1].components[0]",
            "/sections/1/components/0",
        );
        assert_eq!(findings.errors.len(), 1);
        let err = &findings.errors[0];
        assert_eq!(err.code, "MISSING_REQUIRED_PROP");
        let fix = err.auto_fix.as_ref().unwrap();
        assert_eq!(fix[0].path, "/sections/1/components/0/props/value");
        assert_eq!(fix[0].value, "0");
    }

    #[test]
    fn invalid_variant_is_a_warning_not_an_error() {
        let component = json!({"type": "Button", "props": {"variant": "sparkle"}});
        let findings = check_component_props(&component, "p", "/p");
        assert!(findings.errors.is_empty());
        assert_eq!(findings.warnings.len(), 1);
        let warning = &findings.warnings[0];
        assert_eq!(warning.code, "INVALID_VARIANT");
        assert!(warning.recommendation.as_deref().unwrap().contains("ghost"));
    }

    #[test]
    fn valid_variant_passes_silently() {
        let component = json!({"type": "Button", "props": {"variant": "ghost"}});
        let findings = check_component_props(&component, "p", "/p");
        assert!(findings.errors.is_empty());
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn unregistered_component_is_skipped() {
        let component = json!({"type": "Table", "props": {"variant": "anything"}});
        let findings = check_component_props(&component, "p", "/p");
        assert!(findings.errors.is_empty());
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn non_string_variant_value_is_ignored() {
        let component = json!({"type": "Button", "props": {"variant": 7}});
        let findings = check_component_props(&component, "p", "/p");
        assert!(findings.warnings.is_empty());
    }
}
