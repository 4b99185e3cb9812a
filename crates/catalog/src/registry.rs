use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Component tier grouping used for filtering and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Complex,
    Advanced,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Complex => "complex",
            Category::Advanced => "advanced",
        }
    }
}

/// Canonical metadata for one UI component. Serialized outward only; the
/// catalog itself is compiled in.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ComponentMeta {
    /// Lowercase registry id (`radio-group`).
    pub id: &'static str,
    /// Canonical export name (`RadioGroup`), the casing validated against.
    pub name: &'static str,
    pub category: Category,
    pub tier: u8,
    pub description: &'static str,
    #[serde(rename = "variantsCount")]
    pub variants_count: u8,
    #[serde(rename = "hasSubComponents")]
    pub has_sub_components: bool,
}

const fn meta(
    id: &'static str,
    name: &'static str,
    category: Category,
    tier: u8,
    description: &'static str,
    variants_count: u8,
    has_sub_components: bool,
) -> ComponentMeta {
    ComponentMeta {
        id,
        name,
        category,
        tier,
        description,
        variants_count,
        has_sub_components,
    }
}

/// The full component catalog, ordered by tier then registration order.
static COMPONENT_CATALOG: Lazy<Vec<ComponentMeta>> = Lazy::new(|| {
    use Category::*;
    vec![
        // Tier 1: core
        meta("button", "Button", Core, 1, "Interactive button component with multiple variants and sizes", 6, false),
        meta("input", "Input", Core, 1, "Text input field with validation support", 1, false),
        meta("label", "Label", Core, 1, "Form label component with accessibility support", 1, false),
        meta("card", "Card", Core, 1, "Container card with header, content, and footer sections", 1, true),
        meta("badge", "Badge", Core, 1, "Badge component for status and labels", 4, false),
        meta("avatar", "Avatar", Core, 1, "Avatar component with image and fallback support", 1, true),
        meta("separator", "Separator", Core, 1, "Visual separator line component", 2, false),
        meta("checkbox", "Checkbox", Core, 1, "Checkbox input component with indeterminate state", 1, false),
        meta("radio-group", "RadioGroup", Core, 1, "Radio button group for single selection", 1, true),
        meta("switch", "Switch", Core, 1, "Toggle switch component for boolean states", 1, false),
        meta("textarea", "Textarea", Core, 1, "Multi-line text input area", 1, false),
        meta("skeleton", "Skeleton", Core, 1, "Loading skeleton placeholder component", 1, false),
        meta("scroll-area", "ScrollArea", Core, 1, "Custom scrollable area with styled scrollbar", 1, true),
        meta("form", "Form", Core, 1, "Form component with validation and error handling", 1, true),
        meta("select", "Select", Core, 1, "Dropdown select component with search support", 1, true),
        // Tier 2: complex
        meta("dialog", "Dialog", Complex, 2, "Modal dialog component with overlay and animations", 1, true),
        meta("dropdown-menu", "DropdownMenu", Complex, 2, "Contextual dropdown menu with nested items", 1, true),
        meta("table", "Table", Complex, 2, "Data table component with sorting and pagination", 1, true),
        meta("tabs", "Tabs", Complex, 2, "Tabbed interface component with keyboard navigation", 1, true),
        meta("toast", "Toast", Complex, 2, "Toast notification system with queue management", 4, true),
        meta("tooltip", "Tooltip", Complex, 2, "Tooltip component with positioning and delay", 1, true),
        meta("popover", "Popover", Complex, 2, "Popover component with smart positioning", 1, true),
        meta("sheet", "Sheet", Complex, 2, "Slide-out panel component from screen edges", 4, true),
        meta("alert-dialog", "AlertDialog", Complex, 2, "Alert dialog for important confirmations", 1, true),
        meta("progress", "Progress", Complex, 2, "Progress bar component with percentage tracking", 1, false),
        // Tier 3: advanced
        meta("sidebar", "Sidebar", Advanced, 3, "Collapsible sidebar navigation with sections and items", 2, true),
        meta("navigation-menu", "NavigationMenu", Advanced, 3, "Accessible navigation menu with dropdown support", 1, true),
        meta("breadcrumb", "Breadcrumb", Advanced, 3, "Breadcrumb navigation component with custom separators", 1, true),
        meta("command", "Command", Advanced, 3, "Command palette component with search and keyboard shortcuts", 1, true),
        meta("calendar", "Calendar", Advanced, 3, "Interactive calendar component with date selection", 1, false),
    ]
});

pub fn all_components() -> &'static [ComponentMeta] {
    &COMPONENT_CATALOG
}

/// Case-insensitive lookup by registry id or canonical name.
pub fn component_by_id(id: &str) -> Option<&'static ComponentMeta> {
    let lower = id.to_lowercase();
    COMPONENT_CATALOG
        .iter()
        .find(|c| c.id == lower || c.name.to_lowercase() == lower)
}

pub fn components_by_category(category: Category) -> Vec<&'static ComponentMeta> {
    COMPONENT_CATALOG
        .iter()
        .filter(|c| c.category == category)
        .collect()
}

/// Canonical export names in registration order. Used by the validator for
/// membership, casing, and fuzzy-suggestion checks.
pub fn component_names() -> Vec<&'static str> {
    COMPONENT_CATALOG.iter().map(|c| c.name).collect()
}

/// Keyword search over id, name, and description.
pub fn search_components(keyword: &str) -> Vec<&'static ComponentMeta> {
    let lower = keyword.to_lowercase();
    COMPONENT_CATALOG
        .iter()
        .filter(|c| {
            c.id.contains(&lower)
                || c.name.to_lowercase().contains(&lower)
                || c.description.to_lowercase().contains(&lower)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_thirty_components() {
        assert_eq!(all_components().len(), 30);
        assert_eq!(components_by_category(Category::Core).len(), 15);
        assert_eq!(components_by_category(Category::Complex).len(), 10);
        assert_eq!(components_by_category(Category::Advanced).len(), 5);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(component_by_id("button").unwrap().name, "Button");
        assert_eq!(component_by_id("Button").unwrap().name, "Button");
        assert_eq!(component_by_id("RADIOGROUP").unwrap().id, "radio-group");
        assert!(component_by_id("hologram").is_none());
    }

    #[test]
    fn search_matches_description() {
        let hits = search_components("scrollbar");
        assert!(hits.iter().any(|c| c.id == "scroll-area"));
    }
}
