use tekton_protocol::{JsonPatchOp, PatchOp, ValidationError, ValidationWarning};

use crate::distance::similar_values;

/// Errors and warnings produced by one validation pass.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl Findings {
    pub fn absorb(&mut self, other: Findings) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

fn preview(values: &[String]) -> String {
    let head: Vec<&str> = values.iter().take(5).map(String::as_str).collect();
    if values.len() > 5 {
        format!("{}...", head.join(", "))
    } else {
        head.join(", ")
    }
}

fn did_you_mean(similar: &[&str], fallback: String) -> String {
    if similar.is_empty() {
        fallback
    } else {
        format!("Did you mean: {}?", similar.join(", "))
    }
}

fn replace_fix(pointer: &str, similar: &[&str]) -> Option<Vec<JsonPatchOp>> {
    similar.first().map(|closest| {
        vec![JsonPatchOp {
            op: PatchOp::Replace,
            path: pointer.to_string(),
            value: serde_json::Value::String((*closest).to_string()),
        }]
    })
}

/// Shell token: prefix check first, then allow-list membership with a fuzzy
/// replacement autofix when a close match exists.
pub(crate) fn validate_shell(
    shell: &str,
    path: &str,
    pointer: &str,
    shells: &[String],
) -> Findings {
    let mut findings = Findings::default();

    if !shell.starts_with("shell.") {
        findings.errors.push(ValidationError {
            expected: Some("shell.{platform}.{name}".into()),
            received: Some(shell.into()),
            suggestion: Some("Use format: shell.web.app or shell.mobile.app".into()),
            ..ValidationError::new(path, "INVALID_SHELL_FORMAT", "Shell token must start with \"shell.\"")
        });
        return findings;
    }

    if !shells.iter().any(|s| s == shell) {
        let similar = similar_values(shell, shells.iter());
        findings.errors.push(ValidationError {
            expected: Some(preview(shells)),
            received: Some(shell.into()),
            suggestion: Some(did_you_mean(
                &similar,
                format!("Valid shells: {}", shells.join(", ")),
            )),
            auto_fix: replace_fix(pointer, &similar),
            ..ValidationError::new(
                path,
                "UNKNOWN_SHELL",
                format!("Unknown shell token: \"{shell}\""),
            )
        });
    }

    findings
}

pub(crate) fn validate_page(page: &str, path: &str, pointer: &str, pages: &[String]) -> Findings {
    let mut findings = Findings::default();

    if !page.starts_with("page.") {
        findings.errors.push(ValidationError {
            expected: Some("page.{name}".into()),
            received: Some(page.into()),
            suggestion: Some("Use format: page.dashboard, page.detail, etc.".into()),
            ..ValidationError::new(path, "INVALID_PAGE_FORMAT", "Page token must start with \"page.\"")
        });
        return findings;
    }

    if !pages.iter().any(|p| p == page) {
        let similar = similar_values(page, pages.iter());
        findings.errors.push(ValidationError {
            expected: Some(pages.join(", ")),
            received: Some(page.into()),
            suggestion: Some(did_you_mean(
                &similar,
                format!("Valid pages: {}", pages.join(", ")),
            )),
            auto_fix: replace_fix(pointer, &similar),
            ..ValidationError::new(path, "UNKNOWN_PAGE", format!("Unknown page token: \"{page}\""))
        });
    }

    findings
}

/// Section pattern: unknown patterns are errors in strict mode and advisory
/// warnings otherwise (custom patterns are allowed downstream).
pub(crate) fn validate_section_pattern(
    pattern: &str,
    path: &str,
    strict: bool,
    patterns: &[String],
) -> Findings {
    let mut findings = Findings::default();

    if !pattern.starts_with("section.") {
        findings.errors.push(ValidationError {
            expected: Some("section.{name}".into()),
            received: Some(pattern.into()),
            suggestion: Some("Use format: section.container, section.grid-4, etc.".into()),
            ..ValidationError::new(
                path,
                "INVALID_SECTION_FORMAT",
                "Section pattern must start with \"section.\"",
            )
        });
        return findings;
    }

    if !patterns.iter().any(|p| p == pattern) {
        if strict {
            let similar = similar_values(pattern, patterns.iter());
            findings.errors.push(ValidationError {
                expected: Some(preview(patterns)),
                received: Some(pattern.into()),
                suggestion: Some(did_you_mean(
                    &similar,
                    format!("Valid patterns: {}", patterns.join(", ")),
                )),
                ..ValidationError::new(
                    path,
                    "UNKNOWN_SECTION_PATTERN",
                    format!("Unknown section pattern: \"{pattern}\""),
                )
            });
        } else {
            findings.warnings.push(ValidationWarning {
                path: path.into(),
                code: "CUSTOM_SECTION_PATTERN".into(),
                message: format!(
                    "Custom section pattern \"{pattern}\" - ensure it's defined in your layout system"
                ),
                recommendation: Some(format!(
                    "Consider using standard patterns: {}",
                    preview(patterns)
                )),
            });
        }
    }

    findings
}

pub(crate) fn validate_slot(slot: &str, path: &str, slots: &[String]) -> Findings {
    let mut findings = Findings::default();

    if !slots.iter().any(|s| s == slot) {
        let similar = similar_values(slot, slots.iter());
        findings.errors.push(ValidationError {
            expected: Some(slots.join(", ")),
            received: Some(slot.into()),
            suggestion: Some(did_you_mean(
                &similar,
                format!("Valid slots: {}", slots.join(", ")),
            )),
            ..ValidationError::new(path, "INVALID_SLOT", format!("Invalid slot value: \"{slot}\""))
        });
    }

    findings
}

/// Component type: membership is case-insensitive against the catalog's
/// canonical names; a correct name with wrong casing is only a warning.
pub(crate) fn validate_component_type(
    component_type: &str,
    path: &str,
    strict: bool,
    catalog_names: &[&'static str],
) -> Findings {
    let mut findings = Findings::default();
    let type_lower = component_type.to_lowercase();

    let canonical = catalog_names
        .iter()
        .find(|name| name.to_lowercase() == type_lower);

    match canonical {
        None => {
            let similar = similar_values(component_type, catalog_names.iter().copied());
            if strict {
                findings.errors.push(ValidationError {
                    expected: Some("A component from @framingui/ui catalog".into()),
                    received: Some(component_type.into()),
                    suggestion: Some(did_you_mean(
                        &similar,
                        "Use list-components tool to see available components".into(),
                    )),
                    ..ValidationError::new(
                        path,
                        "UNKNOWN_COMPONENT",
                        format!("Unknown component type: \"{component_type}\""),
                    )
                });
            } else {
                findings.warnings.push(ValidationWarning {
                    path: path.into(),
                    code: "CUSTOM_COMPONENT".into(),
                    message: format!(
                        "Component \"{component_type}\" not found in catalog - ensure it's a valid custom component"
                    ),
                    recommendation: Some(did_you_mean(
                        &similar,
                        "Use list-components tool to see available components".into(),
                    )),
                });
            }
        }
        Some(correct) if *correct != component_type => {
            findings.warnings.push(ValidationWarning {
                path: path.into(),
                code: "COMPONENT_CASE".into(),
                message: format!("Component type \"{component_type}\" has incorrect casing"),
                recommendation: Some(format!("Use \"{correct}\" instead")),
            });
        }
        Some(_) => {}
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use tekton_protocol::TokenVocabulary;

    fn vocab() -> TokenVocabulary {
        TokenVocabulary::default()
    }

    #[test]
    fn bad_prefix_short_circuits_membership() {
        let findings = validate_shell("web.app", "shell", "/shell", &vocab().shells);
        assert_eq!(findings.errors.len(), 1);
        assert_eq!(findings.errors[0].code, "INVALID_SHELL_FORMAT");
        assert!(findings.errors[0].auto_fix.is_none());
    }

    #[test]
    fn unknown_shell_gets_replacement_fix() {
        let findings = validate_shell("shell.web.dashbord", "shell", "/shell", &vocab().shells);
        assert_eq!(findings.errors.len(), 1);
        let err = &findings.errors[0];
        assert_eq!(err.code, "UNKNOWN_SHELL");
        let fix = err.auto_fix.as_ref().unwrap();
        assert_eq!(fix[0].path, "/shell");
        assert_eq!(fix[0].value, "shell.web.dashboard");
    }

    #[test]
    fn unknown_pattern_is_warning_when_lenient() {
        let patterns = vocab().section_patterns;
        let strict = validate_section_pattern("section.custom-x", "sections[0].pattern", true, &patterns);
        assert_eq!(strict.errors.len(), 1);
        assert_eq!(strict.errors[0].code, "UNKNOWN_SECTION_PATTERN");

        let lenient =
            validate_section_pattern("section.custom-x", "sections[0].pattern", false, &patterns);
        assert!(lenient.errors.is_empty());
        assert_eq!(lenient.warnings[0].code, "CUSTOM_SECTION_PATTERN");
    }

    #[test]
    fn slot_suggestions_use_edit_distance() {
        let findings = validate_slot("heder", "sections[0].slot", &vocab().slots);
        assert_eq!(findings.errors[0].code, "INVALID_SLOT");
        assert!(findings.errors[0]
            .suggestion
            .as_deref()
            .unwrap()
            .contains("header"));
    }

    #[test]
    fn miscased_component_is_only_a_warning() {
        let names = tekton_catalog::component_names();
        let findings = validate_component_type("button", "sections[0].components[0].type", true, &names);
        assert!(findings.errors.is_empty());
        assert_eq!(findings.warnings[0].code, "COMPONENT_CASE");
        assert!(findings.warnings[0]
            .recommendation
            .as_deref()
            .unwrap()
            .contains("Button"));
    }

    #[test]
    fn unknown_component_demotes_to_warning_when_lenient() {
        let names = tekton_catalog::component_names();
        let strict = validate_component_type("Hologram", "p", true, &names);
        assert_eq!(strict.errors[0].code, "UNKNOWN_COMPONENT");

        let lenient = validate_component_type("Hologram", "p", false, &names);
        assert!(lenient.errors.is_empty());
        assert_eq!(lenient.warnings[0].code, "CUSTOM_COMPONENT");
    }
}
