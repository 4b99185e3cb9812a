//! Tekton CLI
//!
//! Validates screen definitions and assembles generation context from the
//! command line. All subcommands print pretty JSON to stdout; logs go to
//! stderr.

use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use tekton_catalog::{
    all_components, components_by_category, search_components, template_registry, Category,
    TemplateCategory, ThemeStore,
};
use tekton_context::{ContextAssembler, GenerationContextRequest};
use tekton_validator::{apply_patches, ScreenValidator, ValidateOptions};

#[derive(Parser)]
#[command(name = "tekton")]
#[command(about = "Tekton design system tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory of <id>.json theme files (overrides TEKTON_THEME_DIR)
    #[arg(long, global = true)]
    theme_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a screen definition file ('-' reads stdin)
    Validate {
        /// Path to the screen definition JSON
        file: String,

        /// Demote unknown section patterns and component types to warnings
        #[arg(long)]
        no_strict: bool,

        /// Apply auto-fix patches and include the fixed document in the output
        #[arg(long)]
        apply_fixes: bool,
    },

    /// Assemble generation context for a screen description
    Context {
        /// Natural language description of the screen
        description: String,

        /// Theme id to resolve recipes for
        #[arg(long)]
        theme: Option<String>,

        /// Omit curated examples from the context
        #[arg(long)]
        no_examples: bool,
    },

    /// List catalog components
    Components {
        /// Filter by category: core, complex, advanced
        #[arg(long)]
        category: Option<String>,

        /// Keyword search over id, name, and description
        #[arg(long)]
        search: Option<String>,
    },

    /// List screen templates
    Templates {
        /// Filter by category: auth, core, dashboard, feedback, marketing, form
        #[arg(long)]
        category: Option<String>,

        /// Keyword search over name, description, and tags
        #[arg(long)]
        search: Option<String>,
    },

    /// List available themes
    Themes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let store = match &cli.theme_dir {
        Some(dir) => ThemeStore::with_dir(dir),
        None => match std::env::var_os("TEKTON_THEME_DIR") {
            Some(dir) => ThemeStore::with_dir(dir),
            None => ThemeStore::new(),
        },
    };

    match cli.command {
        Commands::Validate {
            file,
            no_strict,
            apply_fixes,
        } => {
            let definition = read_definition(&file)?;
            let (output, valid) = run_validate(&definition, !no_strict, apply_fixes)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Context {
            description,
            theme,
            no_examples,
        } => {
            let request = GenerationContextRequest {
                description,
                theme_id: theme,
                include_examples: if no_examples { Some(false) } else { None },
            };
            let context = ContextAssembler::with_store(store).build_context(&request);
            println!("{}", serde_json::to_string_pretty(&context)?);
        }
        Commands::Components { category, search } => {
            let output = run_components(category.as_deref(), search.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Templates { category, search } => {
            let output = run_templates(category.as_deref(), search.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Themes => {
            let themes: Vec<Value> = store
                .theme_ids()
                .into_iter()
                .map(|id| {
                    let name = store.load_theme(&id).map(|t| t.name);
                    serde_json::json!({
                        "id": id,
                        "name": name,
                        "hasRecipes": store.has_recipes(&id),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&themes)?);
        }
    }

    Ok(())
}

/// Read a definition from a file path, or from stdin when the path is `-`.
fn read_definition(path: &str) -> Result<Value> {
    let raw = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read definition from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read definition file: {path}"))?
    };
    serde_json::from_str(&raw).context("definition is not valid JSON")
}

/// Validate a definition. Returns the JSON output document and whether the
/// original definition was valid.
fn run_validate(definition: &Value, strict: bool, apply_fixes: bool) -> Result<(Value, bool)> {
    let validator = ScreenValidator::new();
    let options = ValidateOptions { strict };
    let report = validator.validate(definition, &options);
    let valid = report.valid;

    let mut output = serde_json::to_value(&report)?;

    if apply_fixes && !report.auto_fix_patches.is_empty() {
        let mut fixed = definition.clone();
        apply_patches(&mut fixed, &report.auto_fix_patches)
            .context("failed to apply auto-fix patches")?;
        if let Some(map) = output.as_object_mut() {
            map.insert("fixed".to_string(), fixed);
        }
    }

    Ok((output, valid))
}

fn run_components(category: Option<&str>, search: Option<&str>) -> Result<Value> {
    let category = match category {
        None | Some("all") => None,
        Some("core") => Some(Category::Core),
        Some("complex") => Some(Category::Complex),
        Some("advanced") => Some(Category::Advanced),
        Some(raw) => anyhow::bail!("unknown category: {raw} (expected core, complex, advanced)"),
    };

    let components: Vec<_> = match (search, category) {
        (Some(keyword), filter) => search_components(keyword)
            .into_iter()
            .filter(|c| filter.map_or(true, |cat| c.category == cat))
            .collect(),
        (None, Some(category)) => components_by_category(category),
        (None, None) => all_components().iter().collect(),
    };

    Ok(serde_json::to_value(&components)?)
}

fn run_templates(category: Option<&str>, search: Option<&str>) -> Result<Value> {
    let registry = template_registry();

    let category = match category {
        None | Some("all") => None,
        Some("auth") => Some(TemplateCategory::Auth),
        Some("core") => Some(TemplateCategory::Core),
        Some("dashboard") => Some(TemplateCategory::Dashboard),
        Some("feedback") => Some(TemplateCategory::Feedback),
        Some("marketing") => Some(TemplateCategory::Marketing),
        Some("form") => Some(TemplateCategory::Form),
        Some(raw) => anyhow::bail!("unknown category: {raw}"),
    };

    let templates: Vec<_> = match search {
        Some(keyword) => registry.search(keyword),
        None => registry.get_all().iter().collect(),
    }
    .into_iter()
    .filter(|t| category.map_or(true, |cat| t.category == cat))
    .collect();

    Ok(serde_json::to_value(&templates)?)
}
