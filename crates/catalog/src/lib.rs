//! Immutable reference data for the Tekton design system.
//!
//! Everything here is loaded once (compiled in, or read from an optional
//! theme directory on first access) and treated as read-only for the life of
//! the process. The validator and context assembler query it fresh per
//! request; no caching layer is needed at this catalog size.

pub mod examples;
pub mod props;
pub mod registry;
pub mod templates;
pub mod themes;

pub use examples::{all_examples, matching_examples, ScreenExample};
pub use props::{props_data, ComponentPropsData, PropDefinition, VariantDefinition};
pub use registry::{
    all_components, component_by_id, component_names, components_by_category, search_components,
    Category, ComponentMeta,
};
pub use templates::{template_registry, ScreenTemplate, TemplateCategory, TemplateSkeleton};
pub use themes::{ThemeDefinition, ThemeError, ThemeStore};
