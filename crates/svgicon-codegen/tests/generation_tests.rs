//! End-to-end rendering of components and aggregate artifacts into a
//! temporary output root.

use std::fs;
use svgicon_codegen::{AggregateEmitter, ComponentGenerator, PluginOptimizer};
use svgicon_core::cli::CssClassList;
use svgicon_core::{GeneratorConfig, IconIdentity, IconSet, SvgoConfig, derive_identity};
use tempfile::TempDir;

const RAW_ARROW: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: Sketch -->
<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <title>arrow</title>
  <path d="M15 18l-6-6 6-6"/>
</svg>
"#;

#[test]
fn test_generate_writes_component_and_artifacts() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig::builder()
        .output_root(dir.path())
        .base_class(Some(CssClassList::new("svg-icon").unwrap()))
        .build();
    config.validate().unwrap();

    let optimizer = PluginOptimizer::new(&SvgoConfig::default()).unwrap();
    let generator = ComponentGenerator::new(Box::new(optimizer), config.base_class.clone()).unwrap();
    let identity = derive_identity("arrow-left.svg").unwrap();

    let component = generator
        .generate(&identity, RAW_ARROW, "arrow-left.svg")
        .unwrap();
    fs::create_dir_all(config.components_dir()).unwrap();
    fs::write(config.component_path(&identity), &component).unwrap();

    let written = fs::read_to_string(dir.path().join("components/ArrowLeft.svelte")).unwrap();
    assert!(written.contains(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" class="svg-icon {className}" {...$$restProps}><title>arrow</title><path d="M15 18l-6-6 6-6"/></svg>"#
    ));
    assert!(!written.contains("<?xml"));
    assert!(!written.contains("Sketch"));

    let emitter = AggregateEmitter::new(&config).unwrap();
    let set = IconSet::from_identities([identity]);
    fs::write(config.type_artifact_path(), emitter.render_type_artifact(&set).unwrap()).unwrap();
    fs::write(config.loader_artifact_path(), emitter.render_loader_artifact().unwrap()).unwrap();

    let types = fs::read_to_string(dir.path().join("SvgName.ts")).unwrap();
    assert!(types.contains("'arrow-left': 'ArrowLeft',"));
    assert!(dir.path().join("SvgIcon.svelte").is_file());
}

#[test]
fn test_single_quoted_export_yields_one_class_attribute() {
    let optimizer = PluginOptimizer::new(&SvgoConfig::default()).unwrap();
    let generator = ComponentGenerator::new(Box::new(optimizer), None).unwrap();
    let identity = derive_identity("star.svg").unwrap();

    let component = generator
        .generate(
            &identity,
            "<svg class='outline' width='24' height='24' viewBox='0 0 24 24'><path/></svg>",
            "star.svg",
        )
        .unwrap();

    let root = component
        .lines()
        .find(|line| line.starts_with("<svg"))
        .unwrap();
    assert_eq!(root.matches("class=").count(), 1);
    assert!(!root.contains("width="));
    assert!(!root.contains("height="));
    assert_eq!(
        root,
        r#"<svg viewBox='0 0 24 24' class="outline {className}" {...$$restProps}><path/></svg>"#
    );
}

#[test]
fn test_type_artifact_matches_regenerated_scan() {
    let config = GeneratorConfig::default();
    let emitter = AggregateEmitter::new(&config).unwrap();

    let generated: Vec<IconIdentity> = ["logo-main", "arrow-left"]
        .iter()
        .filter_map(|label| derive_identity(label))
        .collect();
    let scanned: Vec<IconIdentity> = ["ArrowLeft", "LogoMain"]
        .iter()
        .filter_map(|name| IconIdentity::from_component_name(name))
        .collect();

    assert_eq!(
        emitter
            .render_type_artifact(&IconSet::from_identities(generated))
            .unwrap(),
        emitter
            .render_type_artifact(&IconSet::from_identities(scanned))
            .unwrap()
    );
}

#[test]
fn test_user_plugins_replace_defaults() {
    let svgo = SvgoConfig::from_json_str(r#"{ "plugins": ["removeComments"] }"#).unwrap();
    let optimizer = PluginOptimizer::new(&svgo).unwrap();
    let generator = ComponentGenerator::new(Box::new(optimizer), None).unwrap();
    let identity = derive_identity("arrow").unwrap();

    let component = generator.generate(&identity, RAW_ARROW, "arrow").unwrap();
    // Dimensions survive because removeDimensions is no longer enabled.
    assert!(component.contains(r#"width="24" height="24""#));
    assert!(!component.contains("Generator: Sketch"));
}
