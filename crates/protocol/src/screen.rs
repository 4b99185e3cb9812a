use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Declarative screen definition: the central artifact the validator checks
/// and the context assembler teaches agents to produce.
///
/// `sections` order is presentation-significant (insertion order = render
/// order), which `Vec` preserves through serde round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScreenDefinition {
    /// Unique screen identifier (lowercase alphanumeric with hyphens).
    pub id: String,
    /// Human-readable screen name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Screen description for documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shell token, e.g. `shell.web.dashboard`.
    pub shell: String,
    /// Page token, e.g. `page.dashboard`.
    pub page: String,
    /// Theme id for recipe-based styling.
    #[serde(rename = "themeId", skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ScreenMetadata>,
}

/// One layout region of a screen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Section {
    pub id: String,
    /// Section pattern token, e.g. `section.grid-4`.
    pub pattern: String,
    /// Layout slot: `header`, `main`, `sidebar`, or `footer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    pub components: Vec<ComponentInstance>,
}

/// A component placement inside a section. `props` is an open schema keyed
/// by prop name; `children` is either literal text or nested components.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComponentInstance {
    /// Component type from the component catalog (canonical PascalCase).
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
}

/// Child content: literal text or nested component instances.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Children {
    Text(String),
    Nodes(Vec<ComponentInstance>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ScreenMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_theme_id_in_camel_case() {
        let def = ScreenDefinition {
            id: "home".into(),
            name: None,
            description: None,
            shell: "shell.web.dashboard".into(),
            page: "page.dashboard".into(),
            theme_id: Some("square-minimalism".into()),
            sections: vec![],
            metadata: None,
        };

        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["themeId"], "square-minimalism");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn children_accepts_text_and_nested_nodes() {
        let text: ComponentInstance =
            serde_json::from_value(serde_json::json!({"type": "Text", "children": "hello"}))
                .unwrap();
        assert!(matches!(text.children, Some(Children::Text(_))));

        let nested: ComponentInstance = serde_json::from_value(serde_json::json!({
            "type": "Card",
            "children": [{"type": "Heading", "props": {"level": 3}}]
        }))
        .unwrap();
        match nested.children {
            Some(Children::Nodes(nodes)) => assert_eq!(nodes.len(), 1),
            other => panic!("expected nested nodes, got {other:?}"),
        }
    }
}
