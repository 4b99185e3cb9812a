//! MCP Tools for the Tekton design system
//!
//! Validation and generation context for screen definitions, plus catalog
//! browsing tools.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tekton_catalog::{
    all_components, components_by_category, search_components, template_registry, Category,
    ComponentMeta, TemplateCategory, ThemeStore,
};
use tekton_context::{ContextAssembler, GenerationContext, GenerationContextRequest};
use tekton_validator::{ScreenValidator, ValidateOptions, ValidationReport};

/// Tekton MCP Service
#[derive(Clone)]
pub struct TektonService {
    validator: ScreenValidator,
    assembler: ContextAssembler,
    themes: ThemeStore,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl TektonService {
    pub fn new() -> Self {
        Self::with_theme_store(ThemeStore::new())
    }

    pub fn with_theme_store(themes: ThemeStore) -> Self {
        Self {
            validator: ScreenValidator::new(),
            assembler: ContextAssembler::with_store(themes.clone()),
            themes,
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for TektonService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for TektonService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Tekton exposes a design system to coding agents. Use 'get-screen-generation-context' to gather templates, components, and theme recipes for a described screen, 'validate-screen-definition' to check a generated definition, and the list tools to browse components, templates, and themes.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tool Input/Output Schemas
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ValidateScreenDefinitionRequest {
    /// The screen definition document to validate
    #[schemars(description = "Screen definition JSON document")]
    pub definition: Value,

    /// Strict mode (default: true). Non-strict demotes unknown section
    /// patterns and component types to warnings.
    #[schemars(description = "Treat unknown patterns/components as errors (default: true)")]
    pub strict: Option<bool>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct ValidateScreenDefinitionResult {
    pub success: bool,
    #[serde(flatten)]
    pub report: ValidationReport,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct GenerationContextResult {
    pub success: bool,
    #[serde(flatten)]
    pub context: GenerationContext,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListComponentsRequest {
    /// Component tier filter: core, complex, advanced, or all
    #[schemars(description = "Filter by category: core, complex, advanced, all")]
    pub category: Option<String>,

    /// Keyword search over id, name, and description
    #[schemars(description = "Keyword to search for")]
    pub search: Option<String>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct CategoryCounts {
    pub core: usize,
    pub complex: usize,
    pub advanced: usize,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct ListComponentsResult {
    pub success: bool,
    pub components: Vec<ComponentMeta>,
    pub count: usize,
    pub categories: CategoryCounts,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListScreenTemplatesRequest {
    /// Template category filter: auth, core, dashboard, feedback,
    /// marketing, form, or all
    #[schemars(description = "Filter by category: auth, core, dashboard, feedback, marketing, form, all")]
    pub category: Option<String>,

    /// Keyword search over name, description, and tags
    #[schemars(description = "Keyword to search for")]
    pub search: Option<String>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub description: &'static str,
    #[serde(rename = "requiredComponentsCount")]
    pub required_components_count: usize,
    pub tags: Vec<&'static str>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct TemplateCategoryCounts {
    pub auth: usize,
    pub dashboard: usize,
    pub form: usize,
    pub marketing: usize,
    pub feedback: usize,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct ListScreenTemplatesResult {
    pub success: bool,
    pub templates: Vec<TemplateSummary>,
    pub count: usize,
    pub categories: TemplateCategoryCounts,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListThemesRequest {}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct ThemeSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "hasRecipes")]
    pub has_recipes: bool,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct ListThemesResult {
    pub success: bool,
    pub themes: Vec<ThemeSummary>,
    pub count: usize,
}

fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).unwrap_or_default(),
    )])
}

fn parse_component_category(raw: &str) -> Option<Category> {
    match raw {
        "core" => Some(Category::Core),
        "complex" => Some(Category::Complex),
        "advanced" => Some(Category::Advanced),
        _ => None,
    }
}

fn parse_template_category(raw: &str) -> Option<TemplateCategory> {
    match raw {
        "auth" => Some(TemplateCategory::Auth),
        "core" => Some(TemplateCategory::Core),
        "dashboard" => Some(TemplateCategory::Dashboard),
        "feedback" => Some(TemplateCategory::Feedback),
        "marketing" => Some(TemplateCategory::Marketing),
        "form" => Some(TemplateCategory::Form),
        _ => None,
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl TektonService {
    /// Validate a screen definition document
    #[tool(
        name = "validate-screen-definition",
        description = "Validate a screen definition JSON document against the schema, token vocabularies, component catalog, and prop contracts. Returns errors, warnings, improvement suggestions, and JSON-Patch autofixes."
    )]
    pub async fn validate_screen_definition(
        &self,
        Parameters(request): Parameters<ValidateScreenDefinitionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let options = ValidateOptions {
            strict: request.strict.unwrap_or(true),
        };
        let report = self.validator.validate(&request.definition, &options);

        Ok(json_result(&ValidateScreenDefinitionResult {
            success: true,
            report,
        }))
    }

    /// Assemble generation context for a described screen
    #[tool(
        name = "get-screen-generation-context",
        description = "Get complete context for generating a screen definition from a natural language description: best template match, component palette with imports and props, JSON schema, curated examples, theme recipes, and contextual hints."
    )]
    pub async fn get_screen_generation_context(
        &self,
        Parameters(request): Parameters<GenerationContextRequest>,
    ) -> Result<CallToolResult, McpError> {
        if request.description.trim().is_empty() {
            return Ok(CallToolResult::error(vec![Content::text(
                "Error: description must not be empty".to_string(),
            )]));
        }

        let context = self.assembler.build_context(&request);
        Ok(json_result(&GenerationContextResult {
            success: true,
            context,
        }))
    }

    /// List catalog components
    #[tool(
        name = "list-components",
        description = "List UI components from the catalog with category, tier, and variant metadata. Supports category filtering and keyword search."
    )]
    pub async fn list_components(
        &self,
        Parameters(request): Parameters<ListComponentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let category = match request.category.as_deref() {
            None | Some("all") => None,
            Some(raw) => match parse_component_category(raw) {
                Some(category) => Some(category),
                None => {
                    return Ok(CallToolResult::error(vec![Content::text(format!(
                        "Error: unknown category \"{raw}\" (expected core, complex, advanced, or all)"
                    ))]))
                }
            },
        };

        let components: Vec<ComponentMeta> = match (&request.search, category) {
            (Some(keyword), filter) => search_components(keyword)
                .into_iter()
                .filter(|c| filter.map_or(true, |cat| c.category == cat))
                .cloned()
                .collect(),
            (None, Some(category)) => components_by_category(category)
                .into_iter()
                .cloned()
                .collect(),
            (None, None) => all_components().to_vec(),
        };

        let categories = CategoryCounts {
            core: components_by_category(Category::Core).len(),
            complex: components_by_category(Category::Complex).len(),
            advanced: components_by_category(Category::Advanced).len(),
        };

        Ok(json_result(&ListComponentsResult {
            success: true,
            count: components.len(),
            components,
            categories,
        }))
    }

    /// List screen templates
    #[tool(
        name = "list-screen-templates",
        description = "List screen templates from the registry with category filtering and keyword search over names, descriptions, and tags."
    )]
    pub async fn list_screen_templates(
        &self,
        Parameters(request): Parameters<ListScreenTemplatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let registry = template_registry();

        let category = match request.category.as_deref() {
            None | Some("all") => None,
            Some(raw) => match parse_template_category(raw) {
                Some(category) => Some(category),
                None => {
                    return Ok(CallToolResult::error(vec![Content::text(format!(
                        "Error: unknown category \"{raw}\""
                    ))]))
                }
            },
        };

        let templates: Vec<TemplateSummary> = match &request.search {
            Some(keyword) => registry.search(keyword),
            None => registry.get_all().iter().collect(),
        }
        .into_iter()
        .filter(|t| category.map_or(true, |cat| t.category == cat))
        .map(|t| TemplateSummary {
            id: t.id,
            name: t.name,
            category: t.category,
            description: t.description,
            required_components_count: t.required_components.len(),
            tags: t.tags.clone(),
        })
        .collect();

        let categories = TemplateCategoryCounts {
            auth: registry.get_by_category(TemplateCategory::Auth).len(),
            dashboard: registry.get_by_category(TemplateCategory::Dashboard).len(),
            form: registry.get_by_category(TemplateCategory::Form).len(),
            marketing: registry.get_by_category(TemplateCategory::Marketing).len(),
            feedback: registry.get_by_category(TemplateCategory::Feedback).len(),
        };

        Ok(json_result(&ListScreenTemplatesResult {
            success: true,
            count: templates.len(),
            templates,
            categories,
        }))
    }

    /// List available themes
    #[tool(
        name = "list-themes",
        description = "List available themes with their recipe availability."
    )]
    pub async fn list_themes(
        &self,
        Parameters(_request): Parameters<ListThemesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let themes: Vec<ThemeSummary> = self
            .themes
            .theme_ids()
            .into_iter()
            .map(|id| {
                let name = self.themes.load_theme(&id).map(|t| t.name);
                let has_recipes = self.themes.has_recipes(&id);
                ThemeSummary {
                    id,
                    name,
                    has_recipes,
                }
            })
            .collect();

        Ok(json_result(&ListThemesResult {
            success: true,
            count: themes.len(),
            themes,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_payload(result: &CallToolResult) -> Value {
        let raw = result
            .content
            .first()
            .and_then(|c| c.as_text())
            .map(|t| t.text.as_str())
            .expect("text content");
        serde_json::from_str(raw).expect("valid json payload")
    }

    #[tokio::test]
    async fn validate_tool_reports_structured_errors() {
        let service = TektonService::new();
        let result = service
            .validate_screen_definition(Parameters(ValidateScreenDefinitionRequest {
                definition: json!({
                    "id": "x",
                    "shell": "shell.web.dashbord",
                    "page": "page.dashboard",
                    "sections": []
                }),
                strict: None,
            }))
            .await
            .unwrap();

        let payload = text_payload(&result);
        assert_eq!(payload["success"], true);
        assert_eq!(payload["valid"], false);
        assert_eq!(payload["errors"][0]["code"], "UNKNOWN_SHELL");
        assert_eq!(payload["autoFixPatches"][0]["path"], "/shell");
    }

    #[tokio::test]
    async fn context_tool_rejects_empty_description() {
        let service = TektonService::new();
        let result = service
            .get_screen_generation_context(Parameters(GenerationContextRequest {
                description: "   ".into(),
                theme_id: None,
                include_examples: None,
            }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn context_tool_returns_schema_and_workflow() {
        let service = TektonService::new();
        let result = service
            .get_screen_generation_context(Parameters(GenerationContextRequest {
                description: "login screen with email and password".into(),
                theme_id: Some("square-minimalism".into()),
                include_examples: None,
            }))
            .await
            .unwrap();

        let payload = text_payload(&result);
        assert_eq!(payload["success"], true);
        assert_eq!(payload["templateMatch"]["templateId"], "auth.login");
        assert_eq!(payload["schema"]["screenDefinition"]["type"], "object");
        assert!(payload["themeRecipes"].is_array());
        assert_eq!(payload["workflow"]["steps"][2]["tool"], "validate-screen-definition");
    }

    #[tokio::test]
    async fn list_components_filters_by_category() {
        let service = TektonService::new();
        let result = service
            .list_components(Parameters(ListComponentsRequest {
                category: Some("advanced".into()),
                search: None,
            }))
            .await
            .unwrap();

        let payload = text_payload(&result);
        assert_eq!(payload["count"], 5);
        assert_eq!(payload["categories"]["core"], 15);
    }

    #[tokio::test]
    async fn list_templates_search_respects_category_filter() {
        let service = TektonService::new();
        let result = service
            .list_screen_templates(Parameters(ListScreenTemplatesRequest {
                category: Some("auth".into()),
                search: Some("form".into()),
            }))
            .await
            .unwrap();

        let payload = text_payload(&result);
        let templates = payload["templates"].as_array().unwrap();
        assert!(!templates.is_empty());
        for t in templates {
            assert_eq!(t["category"], "auth");
        }
    }

    #[tokio::test]
    async fn list_themes_includes_builtins() {
        let service = TektonService::new();
        let result = service
            .list_themes(Parameters(ListThemesRequest {}))
            .await
            .unwrap();

        let payload = text_payload(&result);
        assert_eq!(payload["count"], 2);
        let ids: Vec<&str> = payload["themes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"blue-bottle"));
        assert!(ids.contains(&"square-minimalism"));
    }
}
