use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tekton_catalog::{
    component_by_id, matching_examples, props_data, template_registry, Category, ScreenExample,
    ScreenTemplate, TemplateSkeleton, ThemeStore,
};
use tekton_protocol::screen_definition_schema;

use crate::hints::{generate_hints, GenerationHint};
use crate::matcher::{match_templates, TemplateMatch};
use crate::recipes::{theme_recipe_info, ThemeRecipeInfo};

/// Input of a context-generation request.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerationContextRequest {
    /// Natural-language description of the screen to generate.
    pub description: String,
    /// Theme whose recipes should be included, if any.
    #[serde(rename = "themeId", default)]
    pub theme_id: Option<String>,
    /// Set to false to skip the curated example screens.
    #[serde(rename = "includeExamples", default)]
    pub include_examples: Option<bool>,
}

/// The best template match enriched with its structural scaffold.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ContextTemplateMatch {
    #[serde(flatten)]
    pub matched: TemplateMatch,
    pub skeleton: TemplateSkeleton,
    #[serde(rename = "requiredComponents")]
    pub required_components: Vec<&'static str>,
}

/// Catalog component resolved for the agent, with a ready-to-paste import.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ContextComponentInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    #[serde(rename = "importStatement")]
    pub import_statement: String,
    pub props: Vec<tekton_catalog::PropDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<tekton_catalog::VariantDefinition>>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SchemaReference {
    #[serde(rename = "screenDefinition")]
    pub screen_definition: Value,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct WorkflowStep {
    pub step: u32,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct WorkflowGuide {
    pub title: String,
    pub description: String,
    pub steps: Vec<WorkflowStep>,
    pub notes: Vec<String>,
}

/// Everything an agent needs to author a screen definition. Absent
/// ingredients are omitted rather than failing the request.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GenerationContext {
    #[serde(rename = "templateMatch", skip_serializing_if = "Option::is_none")]
    pub template_match: Option<ContextTemplateMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ContextComponentInfo>>,
    pub schema: SchemaReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<ScreenExample>>,
    #[serde(rename = "themeRecipes", skip_serializing_if = "Option::is_none")]
    pub theme_recipes: Option<Vec<ThemeRecipeInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<GenerationHint>>,
    pub workflow: WorkflowGuide,
}

/// Starter component palettes unioned into a template's required components
/// so the agent always has a usable base set.
fn category_starter_set(category: &str) -> &'static [&'static str] {
    match category {
        "auth" => &["card", "input", "button", "text", "heading", "link"],
        "dashboard" => &["card", "heading", "text", "badge", "avatar", "table"],
        "form" => &["form", "input", "button", "text", "heading", "select"],
        "feedback" => &["card", "text", "heading", "button", "icon"],
        "marketing" => &["heading", "text", "button", "image", "card"],
        _ => &[],
    }
}

fn extract_component_types(template: &ScreenTemplate) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for component in &template.required_components {
        let lower = component.to_lowercase();
        if !types.contains(&lower) {
            types.push(lower);
        }
    }
    for component in category_starter_set(template.category.as_str()) {
        if !types.iter().any(|t| t == component) {
            types.push((*component).to_string());
        }
    }
    types
}

/// Resolve component ids through the catalog. Ids the catalog does not know
/// are dropped by policy; the agent only receives real components.
fn component_info(component_ids: &[String]) -> Vec<ContextComponentInfo> {
    let mut components = Vec::new();

    for id in component_ids {
        let Some(meta) = component_by_id(id) else {
            log::debug!("dropping unknown component id from context: {id}");
            continue;
        };

        let schema = props_data(meta.id);
        let import_statement = match schema.filter(|s| !s.sub_components.is_empty()) {
            Some(schema) => format!(
                "import {{ {}, {} }} from '@framingui/ui';",
                meta.name,
                schema.sub_components.join(", ")
            ),
            None => format!("import {{ {} }} from '@framingui/ui';", meta.name),
        };

        components.push(ContextComponentInfo {
            id: meta.id,
            name: meta.name,
            category: meta.category,
            description: meta.description,
            import_statement,
            props: schema.map(|s| s.props.clone()).unwrap_or_default(),
            variants: schema
                .map(|s| s.variants.clone())
                .filter(|v| !v.is_empty()),
        });
    }

    components
}

fn workflow_guide(theme_id: Option<&str>) -> WorkflowGuide {
    let definition_example = serde_json::to_string_pretty(&serde_json::json!({
        "id": "my-screen",
        "shell": "shell.web.app",
        "page": "page.dashboard",
        "themeId": theme_id.unwrap_or("your-theme-id"),
        "sections": [{"id": "main", "pattern": "section.container", "components": []}]
    }))
    .unwrap_or_default();

    WorkflowGuide {
        title: "Screen Generation Workflow".into(),
        description: "Follow these steps to generate a screen from natural language description"
            .into(),
        steps: vec![
            WorkflowStep {
                step: 1,
                action: "Review Context".into(),
                tool: None,
                description: "Review the templateMatch, components (with inline props/variants), schema, examples, and hints provided in this response".into(),
                example: None,
            },
            WorkflowStep {
                step: 2,
                action: "Generate Screen Definition".into(),
                tool: None,
                description: "Create a JSON Screen Definition following the schema structure. Use templateMatch.skeleton as a starting point if available.".into(),
                example: Some(definition_example),
            },
            WorkflowStep {
                step: 3,
                action: "Validate Definition".into(),
                tool: Some("validate-screen-definition".into()),
                description: "Call validate-screen-definition with your generated definition to check for errors. Apply autoFixPatches if provided.".into(),
                example: Some("{ \"definition\": <your-screen-definition>, \"strict\": true }".into()),
            },
            WorkflowStep {
                step: 4,
                action: "Fix Validation Errors".into(),
                tool: None,
                description: "If validation fails, apply autoFixPatches or manually fix errors and re-validate".into(),
                example: None,
            },
            WorkflowStep {
                step: 5,
                action: "Write React Code".into(),
                tool: None,
                description: "Write production-ready React code DIRECTLY using the components and props from this context. Use the import statements provided in the components field.".into(),
                example: None,
            },
            WorkflowStep {
                step: 6,
                action: "Save File".into(),
                tool: None,
                description: "Write the code to the target file path (e.g., app/page.tsx)".into(),
                example: None,
            },
        ],
        notes: vec![
            "Use components from the \"components\" field - they include inline props and variants".into(),
            "Apply theme recipes by setting variant props on components".into(),
            "Write React code directly using the components and context provided".into(),
            "Check hints for layout and component recommendations".into(),
        ],
    }
}

/// Assembles generation context payloads. Holds the theme source; templates,
/// catalog, and examples are compiled-in registries.
#[derive(Clone)]
pub struct ContextAssembler {
    store: ThemeStore,
}

impl ContextAssembler {
    pub fn new() -> Self {
        Self {
            store: ThemeStore::new(),
        }
    }

    pub fn with_store(store: ThemeStore) -> Self {
        Self { store }
    }

    /// Build the full context for a description. Each ingredient degrades
    /// independently; a missing theme or empty example set never aborts the
    /// rest of the payload.
    pub fn build_context(&self, request: &GenerationContextRequest) -> GenerationContext {
        let matches = match_templates(&request.description, 3);
        let mut component_types: Vec<String> = Vec::new();

        let template_match = matches.into_iter().next().and_then(|matched| {
            let template = template_registry().get(&matched.template_id)?;
            component_types = extract_component_types(template);
            Some(ContextTemplateMatch {
                matched,
                skeleton: template.skeleton.clone(),
                required_components: template.required_components.clone(),
            })
        });

        if component_types.is_empty() {
            component_types = ["card", "heading", "text", "button"]
                .into_iter()
                .map(str::to_string)
                .collect();
        }
        let components = component_info(&component_types);

        let examples = if request.include_examples != Some(false) {
            let matched: Vec<ScreenExample> = matching_examples(&request.description, 2)
                .into_iter()
                .cloned()
                .collect();
            (!matched.is_empty()).then_some(matched)
        } else {
            None
        };

        let theme_recipes = request.theme_id.as_deref().and_then(|theme_id| {
            let recipes = theme_recipe_info(&self.store, theme_id);
            (!recipes.is_empty()).then_some(recipes)
        });

        let hints = generate_hints(&request.description, request.theme_id.as_deref());

        GenerationContext {
            template_match,
            components: (!components.is_empty()).then_some(components),
            schema: SchemaReference {
                screen_definition: screen_definition_schema().clone(),
                description: "JSON Schema for Screen Definition - use this structure to create valid screen definitions".into(),
            },
            examples,
            theme_recipes,
            hints: (!hints.is_empty()).then_some(hints),
            workflow: workflow_guide(request.theme_id.as_deref()),
        }
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(description: &str) -> GenerationContextRequest {
        GenerationContextRequest {
            description: description.into(),
            theme_id: None,
            include_examples: None,
        }
    }

    #[test]
    fn login_description_yields_auth_template_and_palette() {
        let context = ContextAssembler::new()
            .build_context(&request("login screen with email and password"));

        let matched = context.template_match.unwrap();
        assert_eq!(matched.matched.template_id, "auth.login");
        assert_eq!(matched.skeleton.shell, "shell.web.auth");

        let components = context.components.unwrap();
        // required components resolve; "text"/"heading"/"link" are not
        // catalog entries and are dropped
        assert!(components.iter().any(|c| c.name == "Button"));
        assert!(components.iter().any(|c| c.name == "Card"));
        assert!(!components.iter().any(|c| c.id == "heading"));
    }

    #[test]
    fn unmatched_description_falls_back_to_baseline_palette() {
        let context = ContextAssembler::new().build_context(&request("zzz qqq xxx"));
        assert!(context.template_match.is_none());

        let components = context.components.unwrap();
        let ids: Vec<&str> = components.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["card", "button"]);
    }

    #[test]
    fn schema_is_always_present() {
        let context = ContextAssembler::new().build_context(&request("zzz"));
        assert_eq!(context.schema.screen_definition["type"], "object");
    }

    #[test]
    fn include_examples_false_suppresses_examples() {
        let mut req = request("login form");
        req.include_examples = Some(false);
        let context = ContextAssembler::new().build_context(&req);
        assert!(context.examples.is_none());

        let with = ContextAssembler::new().build_context(&request("login form"));
        let examples = with.examples.unwrap();
        assert!(examples.len() <= 2);
    }

    #[test]
    fn theme_recipes_group_by_component() {
        let mut req = request("dashboard overview");
        req.theme_id = Some("square-minimalism".into());
        let context = ContextAssembler::new().build_context(&req);

        let recipes = context.theme_recipes.unwrap();
        assert!(recipes.iter().any(|r| r.component_type == "card"));
        assert!(context
            .hints
            .unwrap()
            .iter()
            .any(|h| h.message.contains("square-minimalism")));
    }

    #[test]
    fn unknown_theme_degrades_without_recipes() {
        let mut req = request("dashboard");
        req.theme_id = Some("no-such-theme".into());
        let context = ContextAssembler::new().build_context(&req);
        assert!(context.theme_recipes.is_none());
    }

    #[test]
    fn card_import_carries_sub_components() {
        let context = ContextAssembler::new().build_context(&request("dashboard metrics"));
        let components = context.components.unwrap();
        let card = components.iter().find(|c| c.id == "card").unwrap();
        assert!(card.import_statement.contains("CardHeader"));
        assert!(card.import_statement.ends_with("from '@framingui/ui';"));
    }
}
