//! Template contexts.
//!
//! Each struct here is the exact data one built-in template reads.

use serde::Serialize;

/// Context for rendering one icon component.
///
/// # Examples
///
/// ```
/// use svgicon_codegen::types::ComponentContext;
///
/// let context = ComponentContext {
///     component_name: "ArrowLeft".to_string(),
///     base_name: "arrow-left".to_string(),
///     attributes: r#" viewBox="0 0 24 24""#.to_string(),
///     class_prefix: "icon ".to_string(),
///     body: "<path/>".to_string(),
/// };
///
/// assert_eq!(context.component_name, "ArrowLeft");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentContext {
    /// PascalCase component identifier
    pub component_name: String,
    /// Canonical base name
    pub base_name: String,
    /// Root `<svg>` attributes without `class`, each with a leading space
    pub attributes: String,
    /// Static classes followed by a space, or empty
    pub class_prefix: String,
    /// Markup between the root tags
    pub body: String,
}

/// One icon as listed in the type artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    /// Canonical base name
    pub base_name: String,
    /// PascalCase component identifier
    pub component_name: String,
}

/// Context for rendering the type artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeArtifactContext {
    /// Name of the exported union type
    pub type_name: String,
    /// Icons sorted by base name
    pub names: Vec<IconEntry>,
}

/// Context for rendering the loader artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoaderContext {
    /// Components subdirectory, relative to the loader
    pub components_dir: String,
    /// Component file extension without the dot
    pub component_suffix: String,
    /// Base name of the type artifact module
    pub type_artifact_name: String,
}
