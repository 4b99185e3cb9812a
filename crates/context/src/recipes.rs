use schemars::JsonSchema;
use serde::Serialize;
use std::collections::BTreeMap;
use tekton_catalog::ThemeStore;

/// Recipes of one component type within a theme: the default className (from
/// a `default` or `base` variant segment) plus the named variants.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ThemeRecipeInfo {
    #[serde(rename = "componentType")]
    pub component_type: String,
    pub variants: Vec<String>,
    #[serde(rename = "defaultClassName", skip_serializing_if = "Option::is_none")]
    pub default_class_name: Option<String>,
}

/// Group a theme's flattened recipes (`recipes.<type>.<variant>` paths) by
/// component type. An unknown theme yields an empty list.
pub fn theme_recipe_info(store: &ThemeStore, theme_id: &str) -> Vec<ThemeRecipeInfo> {
    #[derive(Default)]
    struct Group {
        variants: Vec<String>,
        default_class_name: Option<String>,
    }

    let mut grouped: BTreeMap<String, Group> = BTreeMap::new();

    for (path, class_name) in store.all_recipes(theme_id) {
        let rest = path.strip_prefix("recipes.").unwrap_or(&path);
        let mut parts = rest.split('.');
        let Some(component_type) = parts.next().filter(|p| !p.is_empty()) else {
            continue;
        };
        let variant = parts.next().unwrap_or("default");

        let group = grouped.entry(component_type.to_string()).or_default();
        if variant == "default" || variant == "base" {
            group.default_class_name = Some(class_name);
        } else {
            group.variants.push(variant.to_string());
        }
    }

    grouped
        .into_iter()
        .map(|(component_type, group)| ThemeRecipeInfo {
            component_type,
            variants: group.variants,
            default_class_name: group.default_class_name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_and_base_segments_become_the_default_class() {
        let store = ThemeStore::new();

        let square = theme_recipe_info(&store, "square-minimalism");
        let card = square
            .iter()
            .find(|r| r.component_type == "card")
            .unwrap();
        assert!(card.default_class_name.is_some());
        assert_eq!(card.variants, vec!["glass", "outlined"]);

        let bottle = theme_recipe_info(&store, "blue-bottle");
        let card = bottle
            .iter()
            .find(|r| r.component_type == "card")
            .unwrap();
        // blue-bottle uses "base" as its default segment
        assert!(card.default_class_name.as_deref().unwrap().contains("sky-50"));
        assert_eq!(card.variants, vec!["elevated"]);
    }

    #[test]
    fn unknown_theme_yields_empty_info() {
        let store = ThemeStore::new();
        assert!(theme_recipe_info(&store, "missing").is_empty());
    }
}
