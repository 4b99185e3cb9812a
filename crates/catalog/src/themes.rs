use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Theme definition, reduced to what the generation context consumes: the
/// recipe tree. Recipes are genuinely open-schema (arbitrary nesting of
/// variant names down to className strings), so they stay a raw `Value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "schemaVersion", default)]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub recipes: Value,
}

/// Read-only theme source: compiled-in built-ins plus an optional on-disk
/// directory of `<id>.json` files that takes precedence.
#[derive(Clone)]
pub struct ThemeStore {
    dir: Option<PathBuf>,
    builtin: &'static [ThemeDefinition],
}

static BUILTIN_THEMES: Lazy<Vec<ThemeDefinition>> = Lazy::new(|| {
    vec![
        ThemeDefinition {
            id: "square-minimalism".into(),
            name: "Square Minimalism".into(),
            schema_version: Some("2.1".into()),
            recipes: json!({
                "card": {
                    "default": "bg-white border border-neutral-200 rounded-none shadow-none",
                    "glass": "bg-white/80 backdrop-blur-xl border border-white/20",
                    "outlined": "bg-transparent border-2 border-neutral-900"
                },
                "button": {
                    "default": "bg-neutral-900 text-white rounded-none hover:bg-neutral-700",
                    "secondary": "bg-neutral-100 text-neutral-900 rounded-none",
                    "ghost": "bg-transparent text-neutral-900 hover:bg-neutral-100"
                },
                "input": {
                    "default": "border border-neutral-300 rounded-none focus:border-neutral-900"
                },
                "badge": {
                    "default": "bg-neutral-900 text-white rounded-none text-xs",
                    "outline": "border border-neutral-900 text-neutral-900 rounded-none text-xs"
                }
            }),
        },
        ThemeDefinition {
            id: "blue-bottle".into(),
            name: "Blue Bottle".into(),
            schema_version: Some("2.1".into()),
            recipes: json!({
                "card": {
                    "base": "bg-sky-50 border border-sky-100 rounded-2xl shadow-sm",
                    "elevated": "bg-white rounded-2xl shadow-lg"
                },
                "button": {
                    "base": "bg-sky-600 text-white rounded-full hover:bg-sky-500",
                    "outline": "border border-sky-600 text-sky-600 rounded-full"
                },
                "table": {
                    "default": "divide-y divide-sky-100 text-sm"
                }
            }),
        },
    ]
});

impl ThemeStore {
    /// Store with built-in themes only.
    pub fn new() -> Self {
        Self {
            dir: None,
            builtin: &BUILTIN_THEMES,
        }
    }

    /// Store that prefers `<dir>/<id>.json` over the built-ins.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            builtin: &BUILTIN_THEMES,
        }
    }

    /// Load a theme by id. A missing or unparseable theme degrades to `None`
    /// (warn-logged); theme absence is never a hard failure for callers.
    pub fn load_theme(&self, theme_id: &str) -> Option<ThemeDefinition> {
        if let Some(dir) = &self.dir {
            match Self::read_theme_file(&dir.join(format!("{theme_id}.json"))) {
                Ok(theme) => return Some(theme),
                Err(ThemeError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => {
                    log::warn!("failed to load theme '{theme_id}' from disk: {err}");
                }
            }
        }

        self.builtin.iter().find(|t| t.id == theme_id).cloned()
    }

    pub fn theme_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.builtin.iter().map(|t| t.id.clone()).collect();
        if let Some(dir) = &self.dir {
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) == Some("json") {
                        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                            if !ids.iter().any(|id| id == stem) {
                                ids.push(stem.to_string());
                            }
                        }
                    }
                }
            }
        }
        ids.sort();
        ids
    }

    /// All recipes of a theme flattened to `recipes.<type>.<variant>` paths
    /// mapped to className strings. Unknown theme yields an empty map.
    pub fn all_recipes(&self, theme_id: &str) -> BTreeMap<String, String> {
        match self.load_theme(theme_id) {
            Some(theme) => match theme.recipes.as_object() {
                Some(tree) => flatten_recipes(tree, "recipes"),
                None => BTreeMap::new(),
            },
            None => BTreeMap::new(),
        }
    }

    /// Variant-name → className map for one component type.
    pub fn component_recipes(&self, theme_id: &str, component_type: &str) -> BTreeMap<String, String> {
        let prefix = format!("recipes.{component_type}.");
        self.all_recipes(theme_id)
            .into_iter()
            .filter_map(|(path, class_name)| {
                path.strip_prefix(&prefix)
                    .map(|variant| (variant.to_string(), class_name))
            })
            .collect()
    }

    /// Single recipe lookup; the `recipes.` prefix on the path is optional.
    pub fn recipe(&self, theme_id: &str, recipe_path: &str) -> Option<String> {
        let normalized = if recipe_path.starts_with("recipes.") {
            recipe_path.to_string()
        } else {
            format!("recipes.{recipe_path}")
        };
        self.all_recipes(theme_id).remove(&normalized)
    }

    pub fn has_recipes(&self, theme_id: &str) -> bool {
        !self.all_recipes(theme_id).is_empty()
    }

    /// Component types that have at least one recipe in the theme, sorted.
    pub fn recipe_component_types(&self, theme_id: &str) -> Vec<String> {
        let mut types: Vec<String> = self
            .all_recipes(theme_id)
            .keys()
            .filter_map(|path| {
                path.strip_prefix("recipes.")
                    .and_then(|rest| rest.split('.').next())
                    .map(str::to_string)
            })
            .collect();
        types.dedup();
        types
    }

    fn read_theme_file(path: &Path) -> Result<ThemeDefinition, ThemeError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten a nested recipe tree into dot-notation paths. String leaves are
/// classNames; non-string, non-object values are skipped.
fn flatten_recipes(tree: &Map<String, Value>, prefix: &str) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    for (key, value) in tree {
        let path = format!("{prefix}.{key}");
        match value {
            Value::String(class_name) => {
                result.insert(path, class_name.clone());
            }
            Value::Object(nested) => {
                result.extend(flatten_recipes(nested, &path));
            }
            _ => {}
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flattens_nested_recipes_to_dot_paths() {
        let store = ThemeStore::new();
        let recipes = store.all_recipes("square-minimalism");
        assert!(recipes.contains_key("recipes.card.glass"));
        assert!(recipes.contains_key("recipes.button.ghost"));
    }

    #[test]
    fn unknown_theme_degrades_to_empty() {
        let store = ThemeStore::new();
        assert!(store.load_theme("no-such-theme").is_none());
        assert!(store.all_recipes("no-such-theme").is_empty());
        assert!(!store.has_recipes("no-such-theme"));
    }

    #[test]
    fn component_recipes_strip_prefix() {
        let store = ThemeStore::new();
        let card = store.component_recipes("square-minimalism", "card");
        assert_eq!(card.len(), 3);
        assert!(card.contains_key("glass"));
        assert!(!card.keys().any(|k| k.contains('.')));
    }

    #[test]
    fn recipe_path_prefix_is_optional() {
        let store = ThemeStore::new();
        assert_eq!(
            store.recipe("square-minimalism", "card.glass"),
            store.recipe("square-minimalism", "recipes.card.glass"),
        );
        assert!(store.recipe("square-minimalism", "card.glass").is_some());
    }

    #[test]
    fn disk_themes_shadow_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square-minimalism.json");
        std::fs::write(
            &path,
            r#"{"id":"square-minimalism","name":"Override","recipes":{"card":{"flat":"bg-white"}}}"#,
        )
        .unwrap();

        let store = ThemeStore::with_dir(dir.path());
        let theme = store.load_theme("square-minimalism").unwrap();
        assert_eq!(theme.name, "Override");
        assert_eq!(
            store.recipe("square-minimalism", "card.flat").as_deref(),
            Some("bg-white")
        );
    }

    #[test]
    fn unreadable_disk_theme_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blue-bottle.json"), "not json").unwrap();

        let store = ThemeStore::with_dir(dir.path());
        // Parse failure is logged and the builtin wins.
        let theme = store.load_theme("blue-bottle").unwrap();
        assert_eq!(theme.name, "Blue Bottle");
    }

    #[test]
    fn recipe_component_types_sorted_unique() {
        let store = ThemeStore::new();
        let types = store.recipe_component_types("square-minimalism");
        assert_eq!(types, vec!["badge", "button", "card", "input"]);
    }
}
