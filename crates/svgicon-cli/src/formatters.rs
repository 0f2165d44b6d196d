//! Output formatters for command summaries.
//!
//! Summaries are flat records, so every format works from the serialized
//! field list, in key order: JSON for machines, `key: value` lines for
//! scripts, and an aligned, colorized listing for people.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};
use svgicon_core::cli::OutputFormat;

/// Formats `data` according to `format`.
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized.
///
/// # Examples
///
/// ```
/// use svgicon_cli::formatters::format_output;
/// use svgicon_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     generated: usize,
///     output_dir: String,
/// }
///
/// let summary = Summary { generated: 3, output_dir: "src/lib/svg-icons".to_string() };
/// let output = format_output(&summary, OutputFormat::Text)?;
/// assert_eq!(output, "generated: 3\noutput_dir: src/lib/svg-icons");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

fn fields<T: Serialize>(data: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(data)? {
        Value::Object(map) => Ok(map),
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            Ok(map)
        }
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain `key: value` lines.
pub mod text {
    use super::{Result, Serialize, Value, fields, scalar};

    /// Formats each field on its own line.
    ///
    /// Arrays of scalars are joined with commas; arrays of records are
    /// written one element per indented line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let mut lines = Vec::new();
        for (key, value) in fields(data)? {
            match value {
                Value::Array(items) if items.iter().any(Value::is_object) => {
                    lines.push(format!("{key}:"));
                    for item in &items {
                        lines.push(format!("  {}", inline(item)));
                    }
                }
                Value::Array(items) => {
                    let joined: Vec<String> = items.iter().map(scalar).collect();
                    lines.push(format!("{key}: {}", joined.join(", ")));
                }
                other => lines.push(format!("{key}: {}", scalar(&other))),
            }
        }
        Ok(lines.join("\n"))
    }

    fn inline(value: &Value) -> String {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| format!("{key}={}", scalar(value)))
                .collect::<Vec<_>>()
                .join(" "),
            other => scalar(other),
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Value, fields, scalar};

    /// Formats fields as an aligned, colorized listing.
    ///
    /// Counts of failures are red when non-zero, skips yellow, and written
    /// components green.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let fields = fields(data)?;
        let width = fields.keys().map(String::len).max().unwrap_or(0);

        let mut out = Vec::new();
        for (key, value) in &fields {
            let label = format!("{:width$}", key.replace('_', " "));
            match value {
                Value::Array(items) if items.is_empty() => {
                    out.push(format!("{}  {}", label.bold(), "none".dimmed()));
                }
                Value::Array(items) => {
                    out.push(format!("{}", label.bold()));
                    for item in items {
                        out.push(format!("  {} {}", "•".dimmed(), item_line(item)));
                    }
                }
                other => out.push(format!("{}  {}", label.bold(), colorize(key, other))),
            }
        }
        Ok(out.join("\n"))
    }

    fn colorize(key: &str, value: &Value) -> String {
        let text = scalar(value);
        let nonzero = value.as_u64().is_some_and(|n| n > 0);
        match key {
            "failed" if nonzero => text.red().bold().to_string(),
            "skipped" if nonzero => text.yellow().to_string(),
            "generated" | "overwritten" if nonzero => text.green().to_string(),
            _ if value.is_string() => text.cyan().to_string(),
            _ => text,
        }
    }

    fn item_line(value: &Value) -> String {
        match value {
            Value::Object(map) => {
                let origin = map.get("origin").map(scalar).unwrap_or_default();
                let error = map.get("error").map(scalar).unwrap_or_default();
                format!("{}: {}", origin.bold(), error.red())
            }
            other => scalar(other).green().to_string(),
        }
    }
}
