//! Aggregate artifacts derived from the icon set.
//!
//! The type artifact is a view of the [`IconSet`]: a closed union of base
//! names plus a base name to component map. The loader is fixed text that
//! resolves components through that map at run time.
//!
//! # Examples
//!
//! ```
//! use svgicon_codegen::AggregateEmitter;
//! use svgicon_core::{derive_identity, GeneratorConfig, IconSet};
//!
//! let emitter = AggregateEmitter::new(&GeneratorConfig::default()).unwrap();
//! let set = IconSet::merge(
//!     Vec::new(),
//!     ["logo-main", "arrow-left"].into_iter().filter_map(derive_identity),
//! );
//!
//! let text = emitter.render_type_artifact(&set).unwrap();
//! assert!(text.contains("  | 'arrow-left'\n  | 'logo-main';"));
//! assert!(text.contains("'logo-main': 'LogoMain',"));
//! ```

use crate::template_engine::{LOADER_TEMPLATE, TYPE_ARTIFACT_TEMPLATE, TemplateEngine};
use crate::types::{IconEntry, LoaderContext, TypeArtifactContext};
use svgicon_core::{GeneratorConfig, IconSet, Result};

/// Renders the type and loader artifacts.
#[derive(Debug)]
pub struct AggregateEmitter {
    engine: TemplateEngine<'static>,
    type_name: String,
    loader: LoaderContext,
}

impl AggregateEmitter {
    /// Creates an emitter using artifact names from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in templates fail to register.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            type_name: config.type_artifact_name.clone(),
            loader: LoaderContext {
                components_dir: config.components_dir_name.clone(),
                component_suffix: config.component_suffix.clone(),
                type_artifact_name: config.type_artifact_name.clone(),
            },
        })
    }

    /// Renders the type artifact for `icons`.
    ///
    /// The set is already sorted and deduplicated, so equal sets always
    /// render byte-identical text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](svgicon_core::Error::Render) on template
    /// failure.
    pub fn render_type_artifact(&self, icons: &IconSet) -> Result<String> {
        let context = TypeArtifactContext {
            type_name: self.type_name.clone(),
            names: icons
                .iter()
                .map(|icon| IconEntry {
                    base_name: icon.base_name().to_string(),
                    component_name: icon.component_name().to_string(),
                })
                .collect(),
        };

        tracing::debug!("Rendering type artifact with {} icons", context.names.len());
        self.engine.render(TYPE_ARTIFACT_TEMPLATE, &context)
    }

    /// Renders the loader artifact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](svgicon_core::Error::Render) on template
    /// failure.
    pub fn render_loader_artifact(&self) -> Result<String> {
        self.engine.render(LOADER_TEMPLATE, &self.loader)
    }
}
