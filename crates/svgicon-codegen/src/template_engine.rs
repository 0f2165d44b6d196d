//! Template engine for code generation using Handlebars.
//!
//! Wraps Handlebars with the built-in templates for Svelte components and
//! the two aggregate artifacts.
//!
//! # Examples
//!
//! ```
//! use svgicon_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let out = engine
//!     .render("loader", &json!({"components_dir": "components", "component_suffix": "svelte", "type_artifact_name": "SvgName"}))
//!     .unwrap();
//! assert!(out.contains("import.meta.glob"));
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use svgicon_core::{Error, Result};

/// Template name for a single icon component.
pub const COMPONENT_TEMPLATE: &str = "component";

/// Template name for the type artifact listing every base name.
pub const TYPE_ARTIFACT_TEMPLATE: &str = "type-artifact";

/// Template name for the dynamic loader component.
pub const LOADER_TEMPLATE: &str = "loader";

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if a built-in template fails to
    /// parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        // Markup is escaped by the callers where needed
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in [
            (
                COMPONENT_TEMPLATE,
                include_str!("../templates/component.svelte.hbs"),
            ),
            (
                TYPE_ARTIFACT_TEMPLATE,
                include_str!("../templates/type_artifact.ts.hbs"),
            ),
            (LOADER_TEMPLATE, include_str!("../templates/loader.svelte.hbs")),
        ] {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::SerializationError {
                    message: format!("Failed to register {name} template: {e}"),
                    source: None,
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the template is unknown, the context
    /// cannot be serialized, or a referenced field is missing.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::Render {
                message: format!("Template rendering failed: {e}"),
            })
    }
}
