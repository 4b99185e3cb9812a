//! Screen definition validation: structural schema checks, token grammar
//! checks with fuzzy correction, prop contract checks, and non-blocking
//! improvement suggestions, aggregated into a single report with JSON-Patch
//! autofixes.

mod distance;
mod patch;
mod props;
mod schema_check;
mod suggest;
mod tokens;
mod validate;

pub use distance::{levenshtein, similar_values};
pub use patch::{apply_patches, PatchError};
pub use props::validate_component_props;
pub use suggest::improvement_suggestions;
pub use validate::{ScreenValidator, ValidateOptions, ValidationReport};
