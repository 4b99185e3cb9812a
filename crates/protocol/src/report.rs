use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-Patch operation kind. Only `add` and `replace` are ever emitted by
/// the autofix machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
}

/// A single JSON-Patch operation (RFC 6902 shape, RFC 6901 path).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JsonPatchOp {
    pub op: PatchOp,
    pub path: String,
    pub value: Value,
}

/// Blocking validation finding. `path` uses the dotted/bracket report form
/// (`sections[0].components[1].type`); `auto_fix` paths are JSON Pointers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationError {
    pub path: String,
    /// Stable machine-readable code, e.g. `UNKNOWN_SHELL`.
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(rename = "autoFix", skip_serializing_if = "Option::is_none")]
    pub auto_fix: Option<Vec<JsonPatchOp>>,
}

/// Non-blocking finding. Warnings never affect validity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationWarning {
    pub path: String,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Maintainability,
    Consistency,
    Accessibility,
}

/// Best-practice nudge emitted independently of strict/non-strict mode.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ImprovementSuggestion {
    pub category: SuggestionCategory,
    pub message: String,
    #[serde(rename = "affectedPath")]
    pub affected_path: String,
    #[serde(rename = "suggestedChange")]
    pub suggested_change: String,
    #[serde(rename = "autoFix", skip_serializing_if = "Option::is_none")]
    pub auto_fix: Option<Vec<JsonPatchOp>>,
}

impl ValidationError {
    /// Minimal error with just path/code/message; the token validators fill
    /// in the richer fields.
    pub fn new(path: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code: code.into(),
            message: message.into(),
            expected: None,
            received: None,
            suggestion: None,
            auto_fix: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_op_serializes_lowercase() {
        let patch = JsonPatchOp {
            op: PatchOp::Replace,
            path: "/shell".into(),
            value: serde_json::json!("shell.web.dashboard"),
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["op"], "replace");
    }

    #[test]
    fn error_omits_empty_optional_fields() {
        let err = ValidationError::new("shell", "UNKNOWN_SHELL", "Unknown shell token");
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("autoFix").is_none());
        assert!(json.get("expected").is_none());
    }
}
