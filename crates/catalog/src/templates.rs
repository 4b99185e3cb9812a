use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Template grouping. The assembler keys its starter component sets on
/// these; `core` deliberately has no starter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Auth,
    Core,
    Dashboard,
    Feedback,
    Marketing,
    Form,
}

impl TemplateCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateCategory::Auth => "auth",
            TemplateCategory::Core => "core",
            TemplateCategory::Dashboard => "dashboard",
            TemplateCategory::Feedback => "feedback",
            TemplateCategory::Marketing => "marketing",
            TemplateCategory::Form => "form",
        }
    }
}

/// Section scaffold inside a template skeleton.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SkeletonSection {
    pub id: &'static str,
    pub pattern: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<&'static str>,
}

/// Structural scaffold a matched template hands to the agent as a starting
/// point for a screen definition.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TemplateSkeleton {
    pub shell: &'static str,
    pub page: &'static str,
    pub sections: Vec<SkeletonSection>,
}

/// One registered screen template.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ScreenTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub description: &'static str,
    #[serde(rename = "requiredComponents")]
    pub required_components: Vec<&'static str>,
    pub tags: Vec<&'static str>,
    pub skeleton: TemplateSkeleton,
}

/// Read-only registry of the built-in screen templates.
pub struct TemplateRegistry {
    templates: Vec<ScreenTemplate>,
}

impl TemplateRegistry {
    pub fn get(&self, id: &str) -> Option<&ScreenTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn get_all(&self) -> &[ScreenTemplate] {
        &self.templates
    }

    pub fn get_by_category(&self, category: TemplateCategory) -> Vec<&ScreenTemplate> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Keyword search over name, description, and tags.
    pub fn search(&self, keyword: &str) -> Vec<&ScreenTemplate> {
        let lower = keyword.to_lowercase();
        self.templates
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&lower)
                    || t.description.to_lowercase().contains(&lower)
                    || t.tags.iter().any(|tag| tag.contains(&lower))
            })
            .collect()
    }
}

fn centered_skeleton(section_id: &'static str) -> TemplateSkeleton {
    TemplateSkeleton {
        shell: "shell.web.auth",
        page: "page.wizard",
        sections: vec![SkeletonSection {
            id: section_id,
            pattern: "section.centered",
            slot: Some("main"),
        }],
    }
}

fn feedback_skeleton(section_id: &'static str) -> TemplateSkeleton {
    TemplateSkeleton {
        shell: "shell.web.minimal",
        page: "page.empty",
        sections: vec![SkeletonSection {
            id: section_id,
            pattern: "section.centered",
            slot: Some("main"),
        }],
    }
}

static TEMPLATE_REGISTRY: Lazy<TemplateRegistry> = Lazy::new(|| {
    use TemplateCategory::*;
    let templates = vec![
        // Auth
        ScreenTemplate {
            id: "auth.login",
            name: "Login",
            category: Auth,
            description: "Standard login screen with email and password",
            required_components: vec!["Button", "Input", "Form", "Card", "Label"],
            tags: vec!["auth", "login", "signin", "form"],
            skeleton: centered_skeleton("login-form"),
        },
        ScreenTemplate {
            id: "auth.signup",
            name: "Signup",
            category: Auth,
            description: "Standard signup screen with name, email, and password",
            required_components: vec!["Button", "Input", "Form", "Card", "Label", "Checkbox"],
            tags: vec!["auth", "signup", "registration", "form"],
            skeleton: centered_skeleton("signup-form"),
        },
        ScreenTemplate {
            id: "auth.forgot-password",
            name: "Forgot Password",
            category: Auth,
            description: "Password reset screen with email input",
            required_components: vec!["Button", "Input", "Form", "Card", "Label"],
            tags: vec!["auth", "password", "reset", "forgot"],
            skeleton: centered_skeleton("reset-form"),
        },
        ScreenTemplate {
            id: "auth.verification",
            name: "Email Verification",
            category: Auth,
            description: "Email verification screen with resend option",
            required_components: vec!["Button", "Card"],
            tags: vec!["auth", "verification", "email", "confirm"],
            skeleton: centered_skeleton("verification"),
        },
        // Core
        ScreenTemplate {
            id: "core.landing",
            name: "Landing",
            category: Marketing,
            description: "Main dashboard landing page with sidebar and CTA",
            required_components: vec!["Button"],
            tags: vec!["core", "landing", "dashboard", "home"],
            skeleton: TemplateSkeleton {
                shell: "shell.web.marketing",
                page: "page.detail",
                sections: vec![
                    SkeletonSection {
                        id: "hero",
                        pattern: "section.hero",
                        slot: Some("main"),
                    },
                    SkeletonSection {
                        id: "features",
                        pattern: "section.grid-3",
                        slot: Some("main"),
                    },
                ],
            },
        },
        ScreenTemplate {
            id: "core.preferences",
            name: "Preferences",
            category: Core,
            description: "Settings and preferences page with categorized options",
            required_components: vec!["Button", "Card", "Switch", "Select"],
            tags: vec!["core", "settings", "preferences", "configuration"],
            skeleton: TemplateSkeleton {
                shell: "shell.web.app",
                page: "page.resource",
                sections: vec![SkeletonSection {
                    id: "settings",
                    pattern: "section.container",
                    slot: Some("main"),
                }],
            },
        },
        ScreenTemplate {
            id: "core.profile",
            name: "Profile",
            category: Core,
            description: "User profile page with editable information",
            required_components: vec!["Button", "Input", "Form", "Card", "Label", "Avatar"],
            tags: vec!["core", "profile", "account", "user"],
            skeleton: TemplateSkeleton {
                shell: "shell.web.app",
                page: "page.detail",
                sections: vec![SkeletonSection {
                    id: "profile",
                    pattern: "section.split-70-30",
                    slot: Some("main"),
                }],
            },
        },
        // Feedback
        ScreenTemplate {
            id: "feedback.loading",
            name: "Loading",
            category: Feedback,
            description: "Loading state screen with spinner",
            required_components: vec![],
            tags: vec!["feedback", "loading", "spinner", "state"],
            skeleton: feedback_skeleton("loading"),
        },
        ScreenTemplate {
            id: "feedback.error",
            name: "Error",
            category: Feedback,
            description: "Error state screen with message and retry option",
            required_components: vec!["Button"],
            tags: vec!["feedback", "error", "failure", "state"],
            skeleton: feedback_skeleton("error"),
        },
        ScreenTemplate {
            id: "feedback.empty",
            name: "Empty",
            category: Feedback,
            description: "Empty state screen with call-to-action",
            required_components: vec!["Button"],
            tags: vec!["feedback", "empty", "state", "no-data"],
            skeleton: feedback_skeleton("empty"),
        },
        ScreenTemplate {
            id: "feedback.confirmation",
            name: "Confirmation",
            category: Feedback,
            description: "Confirmation dialog for important actions",
            required_components: vec!["Button", "Card"],
            tags: vec!["feedback", "confirmation", "dialog", "warning"],
            skeleton: feedback_skeleton("confirmation"),
        },
        ScreenTemplate {
            id: "feedback.success",
            name: "Success",
            category: Feedback,
            description: "Success state screen with confirmation message",
            required_components: vec!["Button"],
            tags: vec!["feedback", "success", "confirmation", "state"],
            skeleton: feedback_skeleton("success"),
        },
        // Dashboard
        ScreenTemplate {
            id: "dashboard.overview",
            name: "Dashboard Overview",
            category: Dashboard,
            description: "Standard dashboard layout with sidebar, metrics, and content areas (12-column grid)",
            required_components: vec!["Card", "Separator"],
            tags: vec!["dashboard", "overview", "analytics"],
            skeleton: TemplateSkeleton {
                shell: "shell.web.dashboard",
                page: "page.dashboard",
                sections: vec![
                    SkeletonSection {
                        id: "page-header",
                        pattern: "section.container",
                        slot: Some("header"),
                    },
                    SkeletonSection {
                        id: "kpi-cards",
                        pattern: "section.grid-4",
                        slot: Some("main"),
                    },
                    SkeletonSection {
                        id: "content",
                        pattern: "section.split-70-30",
                        slot: Some("main"),
                    },
                ],
            },
        },
    ];

    TemplateRegistry { templates }
});

pub fn template_registry() -> &'static TemplateRegistry {
    &TEMPLATE_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_thirteen_templates() {
        assert_eq!(template_registry().get_all().len(), 13);
    }

    #[test]
    fn lookup_and_category_filters() {
        let registry = template_registry();
        assert_eq!(registry.get("auth.login").unwrap().name, "Login");
        assert_eq!(registry.get_by_category(TemplateCategory::Auth).len(), 4);
        assert_eq!(registry.get_by_category(TemplateCategory::Feedback).len(), 5);
        assert!(registry.get("auth.unknown").is_none());
    }

    #[test]
    fn search_matches_tags() {
        let hits = template_registry().search("signin");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "auth.login");
    }

    #[test]
    fn skeleton_tokens_are_valid_vocabulary() {
        let vocab = tekton_protocol::TokenVocabulary::default();
        for template in template_registry().get_all() {
            assert!(vocab.shells.iter().any(|s| s == template.skeleton.shell));
            assert!(vocab.pages.iter().any(|p| p == template.skeleton.page));
            for section in &template.skeleton.sections {
                assert!(vocab
                    .section_patterns
                    .iter()
                    .any(|p| p == section.pattern));
            }
        }
    }
}
