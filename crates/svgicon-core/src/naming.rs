//! Name resolution between raw labels, base names, and component names.
//!
//! A raw label (filename, URL segment, user-supplied name, or the stem of a
//! generated component file) is reduced to a lowercase slug, the *base name*.
//! The PascalCase *component name* is a pure function of the base name.
//!
//! The inverse direction (component name to base name) is a heuristic: it
//! inserts a hyphen before every uppercase letter after the first and
//! lowercases the result. It is lossy for base names containing underscores,
//! digits glued to letters, or acronyms:
//!
//! ```
//! use svgicon_core::{derive_identity, recover_base_name};
//!
//! let id = derive_identity("my-icon.svg").unwrap();
//! assert_eq!(id.component_name(), "MyIcon");
//! assert_eq!(recover_base_name("MyIcon").as_deref(), Some("my-icon"));
//!
//! // Lossy: the underscore does not survive the round trip.
//! let id = derive_identity("my_icon.svg").unwrap();
//! assert_eq!(id.component_name(), "MyIcon");
//! assert_ne!(recover_base_name("MyIcon").as_deref(), Some("my_icon"));
//! ```

use crate::types::IconIdentity;

const SVG_SUFFIX: &str = ".svg";

/// Strips a trailing `.svg` (any case) from `label`.
fn strip_svg_suffix(label: &str) -> &str {
    let split = label.len().saturating_sub(SVG_SUFFIX.len());
    if label.len() >= SVG_SUFFIX.len()
        && label.is_char_boundary(split)
        && label[split..].eq_ignore_ascii_case(SVG_SUFFIX)
    {
        &label[..split]
    } else {
        label
    }
}

/// Reduces a raw label to a base name.
///
/// Strips a trailing case-insensitive `.svg`, replaces every character
/// outside `[A-Za-z0-9_-]` with `-`, collapses runs of `-`, trims leading
/// and trailing `-`, and lowercases.
///
/// Returns `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use svgicon_core::sanitize_base_name;
///
/// assert_eq!(sanitize_base_name("My Icon.SVG").as_deref(), Some("my-icon"));
/// assert_eq!(sanitize_base_name("  logo (main)  ").as_deref(), Some("logo-main"));
/// assert_eq!(sanitize_base_name("---"), None);
/// ```
#[must_use]
pub fn sanitize_base_name(label: &str) -> Option<String> {
    let stem = strip_svg_suffix(label);
    let mut slug = String::with_capacity(stem.len());

    for ch in stem.chars() {
        let ch = if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            ch
        } else {
            '-'
        };
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }

    let base = slug.trim_matches('-').to_ascii_lowercase();
    (!base.is_empty()).then_some(base)
}

/// Builds the PascalCase component name for a base name.
///
/// Splits on `-` and `_`, uppercases the first character of each segment,
/// and concatenates without separators.
///
/// # Examples
///
/// ```
/// use svgicon_core::to_component_name;
///
/// assert_eq!(to_component_name("arrow-left"), "ArrowLeft");
/// assert_eq!(to_component_name("logo_main"), "LogoMain");
/// assert_eq!(to_component_name("icon-2x"), "Icon2x");
/// ```
#[must_use]
pub fn to_component_name(base_name: &str) -> String {
    base_name
        .split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect()
}

/// Derives the identity for a raw label.
///
/// Returns `None` when the label sanitizes to an empty base name, or when
/// the base name has no segments to build a component name from (for
/// example `"___"`). Callers skip such inputs with a warning.
///
/// # Examples
///
/// ```
/// use svgicon_core::derive_identity;
///
/// let id = derive_identity("Arrow Left.svg").unwrap();
/// assert_eq!(id.base_name(), "arrow-left");
/// assert_eq!(id.component_name(), "ArrowLeft");
///
/// assert!(derive_identity("").is_none());
/// assert!(derive_identity(".svg").is_none());
/// assert!(derive_identity("---").is_none());
/// ```
#[must_use]
pub fn derive_identity(label: &str) -> Option<IconIdentity> {
    let base_name = sanitize_base_name(label)?;
    let component_name = to_component_name(&base_name);
    if component_name.is_empty() {
        return None;
    }
    Some(IconIdentity::from_parts(base_name, component_name))
}

/// Recovers a base name from a component name.
///
/// Inserts `-` before every uppercase letter that is not the first
/// character, then lowercases. Returns `None` for an empty name.
///
/// # Examples
///
/// ```
/// use svgicon_core::recover_base_name;
///
/// assert_eq!(recover_base_name("ArrowLeft").as_deref(), Some("arrow-left"));
/// assert_eq!(recover_base_name("Logo").as_deref(), Some("logo"));
/// assert_eq!(recover_base_name(""), None);
/// ```
#[must_use]
pub fn recover_base_name(component_name: &str) -> Option<String> {
    if component_name.is_empty() {
        return None;
    }

    let mut base = String::with_capacity(component_name.len() + 4);
    for (i, ch) in component_name.chars().enumerate() {
        if i > 0 && ch.is_uppercase() {
            base.push('-');
        }
        base.extend(ch.to_lowercase());
    }
    Some(base)
}
