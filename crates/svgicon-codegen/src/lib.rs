//! Code generation for SVG icon components.
//!
//! Optimizes SVG markup and renders it into Svelte components, plus the
//! type and loader artifacts that describe the whole icon set, using
//! Handlebars templates.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod aggregate;
pub mod component;
pub mod optimizer;
pub mod template_engine;
pub mod types;

pub use aggregate::AggregateEmitter;
pub use component::ComponentGenerator;
pub use optimizer::{PluginOptimizer, SvgOptimizer};
pub use template_engine::TemplateEngine;
