use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tekton_protocol::{
    ImprovementSuggestion, JsonPatchOp, TokenVocabulary, ValidationError, ValidationWarning,
};

use crate::schema_check::check_structure;
use crate::suggest::improvement_suggestions;
use crate::tokens::{
    validate_component_type, validate_page, validate_section_pattern, validate_shell,
    validate_slot, Findings,
};

#[derive(Debug, Clone, Copy)]
pub struct ValidateOptions {
    /// Strict mode promotes unknown section patterns and unknown component
    /// types from warnings to errors.
    pub strict: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Full validation outcome. `valid` depends on errors only; warnings and
/// suggestions never block.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationWarning>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<ImprovementSuggestion>,
    #[serde(
        rename = "autoFixPatches",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub auto_fix_patches: Vec<JsonPatchOp>,
}

/// Screen definition validator. The token vocabulary is injected at
/// construction so alternative vocabularies can be validated against; the
/// component catalog is the compiled-in registry.
#[derive(Clone)]
pub struct ScreenValidator {
    vocab: TokenVocabulary,
    catalog_names: Vec<&'static str>,
}

impl ScreenValidator {
    pub fn new() -> Self {
        Self::with_vocabulary(TokenVocabulary::default())
    }

    pub fn with_vocabulary(vocab: TokenVocabulary) -> Self {
        Self {
            vocab,
            catalog_names: tekton_catalog::component_names(),
        }
    }

    /// Validate a raw definition document. Structural schema violations and
    /// semantic token/prop findings are collected in one pass; a schema
    /// failure does not stop the semantic checks (the caller gets maximal
    /// feedback from a single call). Never panics on malformed input.
    pub fn validate(&self, definition: &Value, options: &ValidateOptions) -> ValidationReport {
        let mut errors = check_structure(definition);
        let mut warnings = Vec::new();

        if definition.is_object() {
            let findings = self.semantic_checks(definition, options.strict);
            errors.extend(findings.errors);
            warnings.extend(findings.warnings);
        }

        let suggestions = improvement_suggestions(definition);

        // Errors' fixes first in discovery order, then suggestions' fixes.
        let mut auto_fix_patches: Vec<JsonPatchOp> = Vec::new();
        for error in &errors {
            if let Some(fixes) = &error.auto_fix {
                auto_fix_patches.extend(fixes.iter().cloned());
            }
        }
        for suggestion in &suggestions {
            if let Some(fixes) = &suggestion.auto_fix {
                auto_fix_patches.extend(fixes.iter().cloned());
            }
        }

        ValidationReport {
            valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
            auto_fix_patches,
        }
    }

    fn semantic_checks(&self, definition: &Value, strict: bool) -> Findings {
        let mut findings = Findings::default();

        if let Some(shell) = definition.get("shell").and_then(Value::as_str) {
            findings.absorb(validate_shell(shell, "shell", "/shell", &self.vocab.shells));
        }

        if let Some(page) = definition.get("page").and_then(Value::as_str) {
            findings.absorb(validate_page(page, "page", "/page", &self.vocab.pages));
        }

        let Some(sections) = definition.get("sections").and_then(Value::as_array) else {
            return findings;
        };

        for (i, section) in sections.iter().enumerate() {
            if let Some(pattern) = section.get("pattern").and_then(Value::as_str) {
                findings.absorb(validate_section_pattern(
                    pattern,
                    &format!("sections[{i}].pattern"),
                    strict,
                    &self.vocab.section_patterns,
                ));
            }

            if let Some(slot) = section.get("slot").and_then(Value::as_str) {
                findings.absorb(validate_slot(
                    slot,
                    &format!("sections[{i}].slot"),
                    &self.vocab.slots,
                ));
            }

            let Some(components) = section.get("components").and_then(Value::as_array) else {
                continue;
            };

            for (j, component) in components.iter().enumerate() {
                let Some(component_type) = component.get("type").and_then(Value::as_str) else {
                    continue;
                };

                let type_findings = validate_component_type(
                    component_type,
                    &format!("sections[{i}].components[{j}].type"),
                    strict,
                    &self.catalog_names,
                );
                let type_ok = type_findings.errors.is_empty();
                findings.absorb(type_findings);

                // Props only make sense against a resolved catalog type.
                if type_ok {
                    findings.absorb(crate::props::check_component_props(
                        component,
                        &format!("sections[{i}].components[{j}]"),
                        &format!("/sections/{i}/components/{j}"),
                    ));
                }
            }
        }

        findings
    }
}

impl Default for ScreenValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn valid_minimal_document_passes_strict() {
        let definition = json!({
            "id": "home",
            "shell": "shell.web.dashboard",
            "page": "page.dashboard",
            "sections": [{
                "id": "s1",
                "pattern": "section.container",
                "slot": "main",
                "components": [{"type": "Card"}]
            }]
        });
        let report = ScreenValidator::new().validate(&definition, &ValidateOptions::default());
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn schema_failure_does_not_stop_semantic_checks() {
        // id is missing (schema error) but the bad shell is still reported
        let definition = json!({
            "shell": "shell.web.dashbord",
            "page": "page.dashboard",
            "sections": []
        });
        let report = ScreenValidator::new().validate(&definition, &ValidateOptions::default());
        assert!(!report.valid);
        let codes: Vec<&str> = report.errors.iter().map(|e| e.code.as_str()).collect();
        assert!(codes.contains(&"invalid_type"));
        assert!(codes.contains(&"UNKNOWN_SHELL"));
    }

    #[test]
    fn null_definition_does_not_panic() {
        let report = ScreenValidator::new().validate(&Value::Null, &ValidateOptions::default());
        assert!(!report.valid);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn report_omits_empty_collections_in_json() {
        let definition = json!({
            "id": "home", "name": "Home", "description": "d", "themeId": "square-minimalism",
            "shell": "shell.web.dashboard",
            "page": "page.dashboard",
            "sections": [{
                "id": "s1", "pattern": "section.container", "slot": "main",
                "components": [{"type": "Card"}]
            }]
        });
        let report = ScreenValidator::new().validate(&definition, &ValidateOptions::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], true);
        assert!(json.get("errors").is_none());
        assert!(json.get("autoFixPatches").is_none());
    }

    #[test]
    fn patches_aggregate_errors_before_suggestions() {
        // bad shell (error fix) and missing name (suggestion fix)
        let definition = json!({
            "id": "team-page",
            "shell": "shell.web.dashbord",
            "page": "page.dashboard",
            "sections": []
        });
        let report = ScreenValidator::new().validate(&definition, &ValidateOptions::default());
        assert_eq!(report.auto_fix_patches.len(), 2);
        assert_eq!(report.auto_fix_patches[0].path, "/shell");
        assert_eq!(report.auto_fix_patches[1].path, "/name");
        assert_eq!(report.auto_fix_patches[1].value, "Team Page");
    }
}
