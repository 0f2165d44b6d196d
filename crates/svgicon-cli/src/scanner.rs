//! Existing-set scanner.
//!
//! The components directory is the only record of which icons exist. The
//! scanner rebuilds identities from its file names.

use std::fs;
use std::io;
use std::path::Path;
use svgicon_core::{Error, IconIdentity, Reporter, Result};

/// Reconstructs identities from component files in `components_dir`.
///
/// Only regular files ending in `.<suffix>` are considered. A missing
/// directory yields an empty list. Files whose stem is not a component name
/// this tool would generate (anything but ASCII letters and digits, or a
/// name that does not survive the base-name round trip) are reported and
/// skipped. The result is unordered.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory exists but cannot be listed.
///
/// # Examples
///
/// ```
/// use svgicon_cli::scanner::scan_existing;
/// use svgicon_core::TracingReporter;
///
/// let dir = tempfile::TempDir::new().unwrap();
/// std::fs::write(dir.path().join("LogoMain.svelte"), "").unwrap();
///
/// let found = scan_existing(dir.path(), "svelte", &TracingReporter).unwrap();
/// assert_eq!(found[0].base_name(), "logo-main");
/// ```
pub fn scan_existing(
    components_dir: &Path,
    suffix: &str,
    reporter: &dyn Reporter,
) -> Result<Vec<IconIdentity>> {
    let entries = match fs::read_dir(components_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(
                "Components directory {} does not exist",
                components_dir.display()
            );
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::io(components_dir, e)),
    };

    let extension = format!(".{suffix}");
    let mut identities = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(components_dir, e))?;
        if !entry.file_type().is_ok_and(|kind| kind.is_file()) {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            reporter.warn(&format!(
                "Skipping non UTF-8 file name in {}",
                components_dir.display()
            ));
            continue;
        };

        let Some(stem) = name.strip_suffix(&extension) else {
            continue;
        };

        match IconIdentity::from_component_name(stem) {
            Some(identity) => identities.push(identity),
            None => reporter.warn(&format!(
                "Skipping {name}: not a generated component name"
            )),
        }
    }

    tracing::debug!(
        "Found {} existing components in {}",
        identities.len(),
        components_dir.display()
    );
    Ok(identities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgicon_core::{IconSet, RecordingReporter};
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let reporter = RecordingReporter::new();
        let found = scan_existing(&dir.path().join("components"), "svelte", &reporter).unwrap();
        assert!(found.is_empty());
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_scan_filters_by_suffix() {
        let dir = TempDir::new().unwrap();
        for name in ["ArrowLeft.svelte", "LogoMain.svelte", "notes.md", "Old.svelte.bak"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("Nested.svelte")).unwrap();

        let reporter = RecordingReporter::new();
        let set = IconSet::from_identities(scan_existing(dir.path(), "svelte", &reporter).unwrap());

        let pairs: Vec<(&str, &str)> = set
            .iter()
            .map(|id| (id.base_name(), id.component_name()))
            .collect();
        assert_eq!(
            pairs,
            [("arrow-left", "ArrowLeft"), ("logo-main", "LogoMain")]
        );
    }

    #[test]
    fn test_unrecoverable_name_is_skipped_with_warning() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".svelte"), "").unwrap();
        fs::write(dir.path().join("Star.svelte"), "").unwrap();

        let reporter = RecordingReporter::new();
        let found = scan_existing(dir.path(), "svelte", &reporter).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].component_name(), "Star");
        assert_eq!(reporter.warnings().len(), 1);
    }

    #[test]
    fn test_foreign_file_names_are_skipped() {
        let dir = TempDir::new().unwrap();
        for name in ["Foo'Bar.svelte", "my icon.svelte", "logoMain.svelte", "Check.svelte"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let reporter = RecordingReporter::new();
        let found = scan_existing(dir.path(), "svelte", &reporter).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].base_name(), "check");
        assert_eq!(reporter.warnings().len(), 3);
        assert!(reporter.warnings().iter().any(|w| w.contains("Foo'Bar.svelte")));
    }

    #[test]
    fn test_custom_suffix() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Moon.tsx"), "").unwrap();
        fs::write(dir.path().join("Sun.svelte"), "").unwrap();

        let found = scan_existing(dir.path(), "tsx", &RecordingReporter::new()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].base_name(), "moon");
    }
}
