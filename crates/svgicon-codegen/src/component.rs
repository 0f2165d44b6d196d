//! Per-icon Svelte component generation.
//!
//! The optimized SVG root is split into its attributes and body. The root
//! keeps its attributes, gains the configured base class merged with the
//! consumer's `class` prop, and spreads any remaining props.

use crate::optimizer::SvgOptimizer;
use crate::template_engine::{COMPONENT_TEMPLATE, TemplateEngine};
use crate::types::ComponentContext;
use regex::Regex;
use std::sync::LazyLock;
use svgicon_core::cli::CssClassList;
use svgicon_core::{Error, IconIdentity, Result};

static ROOT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg\b([^>]*?)\s*(/?)>").expect("valid regex"));
static ROOT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</svg\s*>\s*$").expect("valid regex"));
static CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+class\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});

/// Braces open expressions in Svelte markup.
fn escape_braces(markup: &str) -> String {
    markup.replace('{', "&#123;").replace('}', "&#125;")
}

/// Generates one Svelte component per icon.
///
/// # Examples
///
/// ```
/// use svgicon_codegen::{ComponentGenerator, PluginOptimizer};
/// use svgicon_core::{derive_identity, SvgoConfig};
///
/// let optimizer = PluginOptimizer::new(&SvgoConfig::default()).unwrap();
/// let generator = ComponentGenerator::new(Box::new(optimizer), None).unwrap();
/// let identity = derive_identity("star.svg").unwrap();
///
/// let source = generator
///     .generate(&identity, r#"<svg viewBox="0 0 1 1"><path/></svg>"#, "star.svg")
///     .unwrap();
/// assert!(source.contains(r#"<svg viewBox="0 0 1 1" class="{className}" {...$$restProps}><path/></svg>"#));
/// ```
pub struct ComponentGenerator {
    engine: TemplateEngine<'static>,
    optimizer: Box<dyn SvgOptimizer>,
    base_class: Option<CssClassList>,
}

impl std::fmt::Debug for ComponentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentGenerator")
            .field("base_class", &self.base_class)
            .finish_non_exhaustive()
    }
}

impl ComponentGenerator {
    /// Creates a generator using `optimizer` and injecting `base_class`.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in templates fail to register.
    pub fn new(optimizer: Box<dyn SvgOptimizer>, base_class: Option<CssClassList>) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            optimizer,
            base_class,
        })
    }

    /// Optimizes `raw_svg` and renders the component source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Optimize`] or [`Error::Render`].
    pub fn generate(&self, identity: &IconIdentity, raw_svg: &str, origin: &str) -> Result<String> {
        let optimized = self.optimizer.optimize(raw_svg, origin)?;
        self.render(identity, &optimized)
    }

    /// Renders the component source for already optimized markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the markup has no `<svg>` root.
    pub fn render(&self, identity: &IconIdentity, optimized_svg: &str) -> Result<String> {
        let context = self.build_context(identity, optimized_svg)?;
        self.engine.render(COMPONENT_TEMPLATE, &context)
    }

    fn build_context(&self, identity: &IconIdentity, svg: &str) -> Result<ComponentContext> {
        let root = ROOT_OPEN.captures(svg).ok_or_else(|| Error::Render {
            message: format!("{identity}: markup has no <svg> root element"),
        })?;
        let whole = root.get(0).map_or(0..0, |m| m.range());
        let raw_attributes = root.get(1).map_or("", |m| m.as_str());
        let self_closing = root.get(2).is_some_and(|m| !m.is_empty());

        let mut classes: Vec<&str> = self
            .base_class
            .as_ref()
            .map(|class| class.as_str().split(' ').collect())
            .unwrap_or_default();
        if let Some(existing) = CLASS_ATTRIBUTE.captures(raw_attributes) {
            let value = existing
                .get(1)
                .or_else(|| existing.get(2))
                .map_or("", |m| m.as_str());
            for class in value.split_whitespace() {
                if !classes.contains(&class) {
                    classes.push(class);
                }
            }
        }
        let class_prefix = if classes.is_empty() {
            String::new()
        } else {
            format!("{} ", escape_braces(&classes.join(" ")))
        };

        let attributes = CLASS_ATTRIBUTE.replace_all(raw_attributes, "");

        let body = if self_closing {
            ""
        } else {
            let rest = &svg[whole.end..];
            ROOT_CLOSE
                .find(rest)
                .map_or(rest, |close| &rest[..close.start()])
        };

        Ok(ComponentContext {
            component_name: identity.component_name().to_string(),
            base_name: identity.base_name().to_string(),
            attributes: escape_braces(&attributes),
            class_prefix,
            body: escape_braces(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgicon_core::derive_identity;

    struct PassThrough;

    impl SvgOptimizer for PassThrough {
        fn optimize(&self, svg: &str, _origin: &str) -> Result<String> {
            Ok(svg.trim().to_string())
        }
    }

    fn generator(class: Option<&str>) -> ComponentGenerator {
        ComponentGenerator::new(
            Box::new(PassThrough),
            class.map(|c| CssClassList::new(c).unwrap()),
        )
        .unwrap()
    }

    fn identity() -> IconIdentity {
        derive_identity("arrow-left").unwrap()
    }

    fn root_line(source: &str) -> &str {
        source.lines().find(|line| line.starts_with("<svg")).unwrap()
    }

    #[test]
    fn test_render_header_names_icon() {
        let out = generator(None)
            .render(&identity(), "<svg><path/></svg>")
            .unwrap();
        assert!(out.starts_with("<!-- ArrowLeft (arrow-left)"));
        assert!(out.contains("export { className as class };"));
    }

    #[test]
    fn test_base_class_injected() {
        let out = generator(Some("icon icon-md"))
            .render(&identity(), r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#)
            .unwrap();
        assert_eq!(
            root_line(&out),
            r#"<svg viewBox="0 0 24 24" class="icon icon-md {className}" {...$$restProps}><path d="M0 0"/></svg>"#
        );
    }

    #[test]
    fn test_existing_class_merged() {
        let out = generator(Some("icon"))
            .render(&identity(), r#"<svg class="outline icon" fill="none"><g/></svg>"#)
            .unwrap();
        assert_eq!(
            root_line(&out),
            r#"<svg fill="none" class="icon outline {className}" {...$$restProps}><g/></svg>"#
        );
    }

    #[test]
    fn test_single_quoted_class_merged() {
        let out = generator(Some("icon"))
            .render(&identity(), "<svg class='outline' viewBox='0 0 24 24'><path/></svg>")
            .unwrap();
        let root = root_line(&out);
        assert_eq!(root.matches("class=").count(), 1);
        assert_eq!(
            root,
            r#"<svg viewBox='0 0 24 24' class="icon outline {className}" {...$$restProps}><path/></svg>"#
        );
    }

    #[test]
    fn test_self_closing_root() {
        let out = generator(None).render(&identity(), "<svg/>").unwrap();
        assert_eq!(root_line(&out), r#"<svg class="{className}" {...$$restProps}></svg>"#);
    }

    #[test]
    fn test_braces_escaped() {
        let out = generator(None)
            .render(&identity(), "<svg><style>.a{fill:red}</style></svg>")
            .unwrap();
        assert!(out.contains("<style>.a&#123;fill:red&#125;</style>"));
    }

    #[test]
    fn test_missing_root_is_render_error() {
        let err = generator(None).render(&identity(), "<g/>").unwrap_err();
        assert!(matches!(err, Error::Render { .. }));
        assert!(err.to_string().contains("arrow-left"));
    }

    #[test]
    fn test_generate_propagates_optimizer_error() {
        struct Failing;
        impl SvgOptimizer for Failing {
            fn optimize(&self, _svg: &str, origin: &str) -> Result<String> {
                Err(Error::Optimize {
                    origin: origin.to_string(),
                    message: "boom".to_string(),
                })
            }
        }

        let generator = ComponentGenerator::new(Box::new(Failing), None).unwrap();
        let err = generator
            .generate(&identity(), "<svg/>", "a.svg")
            .unwrap_err();
        assert!(err.is_optimize_error());
    }
}
