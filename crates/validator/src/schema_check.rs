use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tekton_protocol::ValidationError;

static ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());
static SHELL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^shell\.[a-z]+\.[a-z-]+$").unwrap());
static PAGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^page\.[a-z-]+$").unwrap());
static SECTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^section\.[a-z0-9-]+$").unwrap());

const SLOT_VALUES: [&str; 4] = ["header", "main", "sidebar", "footer"];

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(path: &str, expected: &str, received: &str) -> ValidationError {
    ValidationError {
        suggestion: Some(format!("Expected {expected}, but received {received}")),
        ..ValidationError::new(
            path,
            "invalid_type",
            format!("Expected {expected}, received {received}"),
        )
    }
}

fn missing_field(path: &str, expected: &str) -> ValidationError {
    ValidationError {
        suggestion: Some(format!("Expected {expected}, but received undefined")),
        ..ValidationError::new(path, "invalid_type", "Required")
    }
}

fn pattern_mismatch(path: &str) -> ValidationError {
    ValidationError {
        suggestion: Some("Check the format - see the pattern in error message".into()),
        ..ValidationError::new(path, "invalid_string", "Invalid")
    }
}

fn too_small(path: &str, minimum: usize) -> ValidationError {
    ValidationError {
        suggestion: Some(format!("Minimum {minimum} string required")),
        ..ValidationError::new(
            path,
            "too_small",
            format!("String must contain at least {minimum} character(s)"),
        )
    }
}

/// Check a required string field: presence, type, minimum length, and an
/// optional format pattern. Returns at most one error.
fn check_string_field(
    object: &serde_json::Map<String, Value>,
    field: &str,
    path: &str,
    pattern: Option<&Regex>,
    errors: &mut Vec<ValidationError>,
) {
    match object.get(field) {
        None | Some(Value::Null) => errors.push(missing_field(path, "string")),
        Some(Value::String(s)) => {
            if s.is_empty() {
                errors.push(too_small(path, 1));
            } else if let Some(re) = pattern {
                if !re.is_match(s) {
                    errors.push(pattern_mismatch(path));
                }
            }
        }
        Some(other) => errors.push(type_mismatch(path, "string", type_name(other))),
    }
}

/// Check an optional string field: absent is fine, present must be a string
/// that satisfies the optional pattern.
fn check_optional_string(
    object: &serde_json::Map<String, Value>,
    field: &str,
    path: &str,
    pattern: Option<&Regex>,
    errors: &mut Vec<ValidationError>,
) {
    match object.get(field) {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) => {
            if let Some(re) = pattern {
                if !re.is_match(s) {
                    errors.push(pattern_mismatch(path));
                }
            }
        }
        Some(other) => errors.push(type_mismatch(path, "string", type_name(other))),
    }
}

/// Structural shape check of a raw screen definition. Produces Zod-style
/// lowercase codes with dotted paths (`sections.0.pattern`); the semantic
/// passes run afterwards regardless of the outcome here.
pub(crate) fn check_structure(definition: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let object = match definition {
        Value::Object(map) => map,
        other => {
            errors.push(type_mismatch("", "object", type_name(other)));
            return errors;
        }
    };

    check_string_field(object, "id", "id", Some(&ID_PATTERN), &mut errors);
    check_optional_string(object, "name", "name", None, &mut errors);
    check_optional_string(object, "description", "description", None, &mut errors);
    check_string_field(object, "shell", "shell", Some(&SHELL_PATTERN), &mut errors);
    check_string_field(object, "page", "page", Some(&PAGE_PATTERN), &mut errors);
    check_optional_string(object, "themeId", "themeId", Some(&ID_PATTERN), &mut errors);

    match object.get("metadata") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(other) => errors.push(type_mismatch("metadata", "object", type_name(other))),
    }

    match object.get("sections") {
        None | Some(Value::Null) => errors.push(missing_field("sections", "array")),
        Some(Value::Array(sections)) => {
            for (i, section) in sections.iter().enumerate() {
                check_section(section, i, &mut errors);
            }
        }
        Some(other) => errors.push(type_mismatch("sections", "array", type_name(other))),
    }

    errors
}

fn check_section(section: &Value, index: usize, errors: &mut Vec<ValidationError>) {
    let base = format!("sections.{index}");

    let object = match section {
        Value::Object(map) => map,
        other => {
            errors.push(type_mismatch(&base, "object", type_name(other)));
            return;
        }
    };

    check_string_field(object, "id", &format!("{base}.id"), None, errors);
    check_string_field(
        object,
        "pattern",
        &format!("{base}.pattern"),
        Some(&SECTION_PATTERN),
        errors,
    );

    match object.get("slot") {
        None | Some(Value::Null) => {}
        Some(Value::String(slot)) => {
            if !SLOT_VALUES.contains(&slot.as_str()) {
                let expected = SLOT_VALUES
                    .iter()
                    .map(|s| format!("'{s}'"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                errors.push(ValidationError {
                    suggestion: Some(format!("Valid values: {}", SLOT_VALUES.join(", "))),
                    ..ValidationError::new(
                        format!("{base}.slot"),
                        "invalid_enum_value",
                        format!("Invalid enum value. Expected {expected}, received '{slot}'"),
                    )
                });
            }
        }
        Some(other) => errors.push(type_mismatch(
            &format!("{base}.slot"),
            "string",
            type_name(other),
        )),
    }

    match object.get("components") {
        None | Some(Value::Null) => errors.push(missing_field(&format!("{base}.components"), "array")),
        Some(Value::Array(components)) => {
            for (j, component) in components.iter().enumerate() {
                check_component(component, &format!("{base}.components.{j}"), errors);
            }
        }
        Some(other) => errors.push(type_mismatch(
            &format!("{base}.components"),
            "array",
            type_name(other),
        )),
    }
}

fn check_component(component: &Value, base: &str, errors: &mut Vec<ValidationError>) {
    let object = match component {
        Value::Object(map) => map,
        other => {
            errors.push(type_mismatch(base, "object", type_name(other)));
            return;
        }
    };

    check_string_field(object, "type", &format!("{base}.type"), None, errors);

    match object.get("props") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(other) => errors.push(type_mismatch(
            &format!("{base}.props"),
            "object",
            type_name(other),
        )),
    }

    match object.get("children") {
        None | Some(Value::Null) | Some(Value::String(_)) | Some(Value::Array(_)) => {}
        Some(other) => errors.push(type_mismatch(
            &format!("{base}.children"),
            "string or array",
            type_name(other),
        )),
    }
}
