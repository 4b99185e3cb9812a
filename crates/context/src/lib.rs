//! Generation context assembly: template matching against free-text
//! descriptions, theme recipe grouping, contextual hints, and the combined
//! payload handed to coding agents.

mod assembler;
mod hints;
mod matcher;
mod recipes;

pub use assembler::{
    ContextAssembler, ContextComponentInfo, ContextTemplateMatch, GenerationContext,
    GenerationContextRequest, SchemaReference, WorkflowGuide, WorkflowStep,
};
pub use hints::{generate_hints, GenerationHint, HintCategory, HintPriority};
pub use matcher::{match_templates, TemplateMatch};
pub use recipes::{theme_recipe_info, ThemeRecipeInfo};
