//! Shared value types for the Tekton screen-definition pipeline.
//!
//! This crate is the wire-level contract shared by the validator, the
//! context assembler, the CLI, and the MCP server:
//! - the declarative screen definition model (shell/page/section/component)
//! - validation report types (errors, warnings, suggestions, JSON-Patch ops)
//! - the fixed token vocabularies, injectable for testing
//! - the static Screen Definition JSON Schema payload

pub mod report;
pub mod schema;
pub mod screen;
pub mod vocab;

pub use report::{
    ImprovementSuggestion, JsonPatchOp, PatchOp, SuggestionCategory, ValidationError,
    ValidationWarning,
};
pub use schema::screen_definition_schema;
pub use screen::{Children, ComponentInstance, ScreenDefinition, ScreenMetadata, Section};
pub use vocab::TokenVocabulary;
