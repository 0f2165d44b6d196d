//! SVG optimization.
//!
//! [`SvgOptimizer`] is the seam the pipeline calls: raw markup in,
//! optimized markup out. [`PluginOptimizer`] is the built-in implementation,
//! a pipeline of markup rewrites selected by an [`SvgoConfig`].
//!
//! # Examples
//!
//! ```
//! use svgicon_codegen::{PluginOptimizer, SvgOptimizer};
//! use svgicon_core::SvgoConfig;
//!
//! let optimizer = PluginOptimizer::new(&SvgoConfig::default()).unwrap();
//! let svg = r#"<?xml version="1.0"?>
//! <!-- exported -->
//! <svg width="24" height="24" viewBox="0 0 24 24">
//!   <path d="M0 0h24v24H0z"/>
//! </svg>"#;
//!
//! let out = optimizer.optimize(svg, "icon.svg").unwrap();
//! assert_eq!(out, r#"<svg viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>"#);
//! ```

use regex::Regex;
use std::sync::LazyLock;
use svgicon_core::{Error, Result, SvgoConfig};

const MAX_PASSES: usize = 10;

/// Turns raw SVG markup into optimized markup.
pub trait SvgOptimizer: Send + Sync {
    /// Optimizes `svg`; `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Optimize`] if the markup has no `<svg>` root or
    /// optimizes to nothing.
    fn optimize(&self, svg: &str, origin: &str) -> Result<String>;
}

static XML_PROC_INST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<\?xml.*?\?>").expect("valid regex"));
static DOCTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!DOCTYPE[^>\[]*(?:\[.*?\])?\s*>").expect("valid regex"));
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));
static METADATA: LazyLock<Regex> = LazyLock::new(|| element_regex("metadata"));
static TITLE: LazyLock<Regex> = LazyLock::new(|| element_regex("title"));
static DESC: LazyLock<Regex> = LazyLock::new(|| element_regex("desc"));
static EDITOR_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<(?:sodipodi|inkscape):[\w.-]+[^>]*?(?:/>|>.*?</(?:sodipodi|inkscape):[\w.-]+\s*>)",
    )
    .expect("valid regex")
});
static EDITOR_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\s+(?:xmlns:)?(?:sodipodi|inkscape|sketch|serif)(?::[\w.-]+)?\s*=\s*(?:"[^"]*"|'[^']*')"#,
    )
    .expect("valid regex")
});
static ROOT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg\b[^>]*>").expect("valid regex"));
static DIMENSION_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+(width|height)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});
static VIEWBOX_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\sviewBox\s*=").expect("valid regex"));
static BETWEEN_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

fn element_regex(tag: &str) -> Regex {
    Regex::new(&format!(r"(?s)<{tag}\b[^>]*?(?:/>|>.*?</{tag}\s*>)")).expect("valid regex")
}

/// A single markup rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plugin {
    RemoveXmlProcInst,
    RemoveDoctype,
    RemoveComments,
    RemoveMetadata,
    RemoveTitle,
    RemoveDesc,
    RemoveEditorsNsData,
    RemoveDimensions,
    CollapseWhitespace,
}

impl Plugin {
    const ALL: [(&'static str, Self); 9] = [
        ("removeXMLProcInst", Self::RemoveXmlProcInst),
        ("removeDoctype", Self::RemoveDoctype),
        ("removeComments", Self::RemoveComments),
        ("removeMetadata", Self::RemoveMetadata),
        ("removeTitle", Self::RemoveTitle),
        ("removeDesc", Self::RemoveDesc),
        ("removeEditorsNSData", Self::RemoveEditorsNsData),
        ("removeDimensions", Self::RemoveDimensions),
        ("collapseWhitespace", Self::CollapseWhitespace),
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, plugin)| *plugin)
    }

    fn apply(self, svg: &str) -> String {
        match self {
            Self::RemoveXmlProcInst => XML_PROC_INST.replace_all(svg, "").into_owned(),
            Self::RemoveDoctype => DOCTYPE.replace_all(svg, "").into_owned(),
            Self::RemoveComments => COMMENT.replace_all(svg, "").into_owned(),
            Self::RemoveMetadata => METADATA.replace_all(svg, "").into_owned(),
            Self::RemoveTitle => TITLE.replace_all(svg, "").into_owned(),
            Self::RemoveDesc => DESC.replace_all(svg, "").into_owned(),
            Self::RemoveEditorsNsData => {
                let svg = EDITOR_ELEMENT.replace_all(svg, "");
                EDITOR_ATTRIBUTE.replace_all(&svg, "").into_owned()
            }
            Self::RemoveDimensions => remove_dimensions(svg),
            Self::CollapseWhitespace => {
                let svg = BETWEEN_TAGS.replace_all(svg.trim(), "><");
                WHITESPACE_RUN.replace_all(&svg, " ").into_owned()
            }
        }
    }
}

/// Drops `width`/`height` from the root element.
///
/// When the root has no `viewBox`, one is synthesized from numeric
/// dimensions first; if that is not possible the root is left alone.
fn remove_dimensions(svg: &str) -> String {
    let Some(root) = ROOT_TAG.find(svg) else {
        return svg.to_string();
    };
    let tag = root.as_str();

    let mut width = None;
    let mut height = None;
    for caps in DIMENSION_ATTRIBUTE.captures_iter(tag) {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .and_then(|m| m.as_str().trim().trim_end_matches("px").parse::<f64>().ok());
        match &caps[1] {
            "width" => width = value,
            _ => height = value,
        }
    }

    let stripped = DIMENSION_ATTRIBUTE.replace_all(tag, "");
    let new_tag = if VIEWBOX_ATTRIBUTE.is_match(tag) {
        stripped.into_owned()
    } else if let (Some(w), Some(h)) = (width, height) {
        format!("<svg viewBox=\"0 0 {w} {h}\"{}", &stripped[4..])
    } else {
        return svg.to_string();
    };

    format!("{}{new_tag}{}", &svg[..root.start()], &svg[root.end()..])
}

/// Built-in optimizer driven by an [`SvgoConfig`].
#[derive(Debug, Clone)]
pub struct PluginOptimizer {
    plugins: Vec<Plugin>,
    multipass: bool,
}

impl PluginOptimizer {
    /// Creates an optimizer running the enabled plugins of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a plugin name is not recognized.
    pub fn new(config: &SvgoConfig) -> Result<Self> {
        let plugins = config
            .enabled_plugins()
            .map(|name| {
                Plugin::from_name(name).ok_or_else(|| Error::ConfigError {
                    message: format!(
                        "unknown optimizer plugin '{name}' (known: {})",
                        Plugin::ALL
                            .iter()
                            .map(|(known, _)| *known)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Optimizer configured with {} plugins", plugins.len());

        Ok(Self {
            plugins,
            multipass: config.multipass,
        })
    }

    fn run_pass(&self, svg: &str) -> String {
        self.plugins
            .iter()
            .fold(svg.to_string(), |current, plugin| plugin.apply(&current))
    }
}

impl SvgOptimizer for PluginOptimizer {
    fn optimize(&self, svg: &str, origin: &str) -> Result<String> {
        if !ROOT_TAG.is_match(svg) {
            return Err(Error::Optimize {
                origin: origin.to_string(),
                message: "no <svg> root element".to_string(),
            });
        }

        let mut current = self.run_pass(svg);
        if self.multipass {
            for _ in 1..MAX_PASSES {
                let next = self.run_pass(&current);
                if next == current {
                    break;
                }
                current = next;
            }
        }

        let current = current.trim().to_string();
        if current.is_empty() || !ROOT_TAG.is_match(&current) {
            return Err(Error::Optimize {
                origin: origin.to_string(),
                message: "optimization removed the <svg> root element".to_string(),
            });
        }

        Ok(current)
    }
}
