use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// The Screen Definition JSON Schema, always included in generation-context
/// responses as a reference payload for agents.
static SCREEN_DEFINITION_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "required": ["id", "shell", "page", "sections"],
        "properties": {
            "id": {
                "type": "string",
                "pattern": "^[a-z0-9-]+$",
                "description": "Unique screen identifier (lowercase alphanumeric with hyphens)"
            },
            "name": {
                "type": "string",
                "description": "Human-readable screen name"
            },
            "description": {
                "type": "string",
                "description": "Screen description for documentation"
            },
            "shell": {
                "type": "string",
                "pattern": "^shell\\.[a-z]+\\.[a-z-]+$",
                "description": "Shell token (e.g., shell.web.dashboard, shell.web.auth)"
            },
            "page": {
                "type": "string",
                "pattern": "^page\\.[a-z-]+$",
                "description": "Page token (e.g., page.dashboard, page.wizard)"
            },
            "themeId": {
                "type": "string",
                "pattern": "^[a-z0-9-]+$",
                "description": "Theme ID for styling (optional)"
            },
            "sections": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "pattern", "components"],
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Section identifier"
                        },
                        "pattern": {
                            "type": "string",
                            "pattern": "^section\\.[a-z0-9-]+$",
                            "description": "Section pattern (e.g., section.container, section.grid-4)"
                        },
                        "slot": {
                            "type": "string",
                            "enum": ["header", "main", "sidebar", "footer"],
                            "description": "Layout slot to place this section"
                        },
                        "components": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["type"],
                                "properties": {
                                    "type": {
                                        "type": "string",
                                        "description": "Component type from component catalog"
                                    },
                                    "props": {
                                        "type": "object",
                                        "description": "Component props"
                                    },
                                    "children": {
                                        "oneOf": [{"type": "string"}, {"type": "array"}],
                                        "description": "Child content or nested components"
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "metadata": {
                "type": "object",
                "properties": {
                    "version": {"type": "string"},
                    "author": {"type": "string"},
                    "created": {"type": "string"},
                    "updated": {"type": "string"}
                }
            }
        }
    })
});

/// Static schema reference; never mutated after first access.
pub fn screen_definition_schema() -> &'static Value {
    &SCREEN_DEFINITION_SCHEMA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_lists_required_top_level_fields() {
        let schema = screen_definition_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, ["id", "shell", "page", "sections"]);
    }

    #[test]
    fn slot_enum_matches_vocabulary() {
        let schema = screen_definition_schema();
        let slots = &schema["properties"]["sections"]["items"]["properties"]["slot"]["enum"];
        assert_eq!(slots.as_array().unwrap().len(), 4);
    }
}
