//! Integration tests for serializer configuration loading

use jsonapi::prelude::*;
use std::io::Write;

fn model() -> Record {
    Record::new("BlogCategory", 5, "http://example.com/categories").with_fields(["name"])
}

#[test]
fn test_load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "pluralize: false").expect("write config");

    let config = SerializerConfig::from_yaml_file(file.path()).unwrap();
    assert!(!config.pluralize);

    let json = Serializer::with_config(config)
        .serialize_model(&model(), None)
        .unwrap()
        .to_value()
        .unwrap();
    assert_eq!(json["data"]["type"], "blog-category");
}

#[test]
fn test_empty_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "{{}}").expect("write config");

    let config = SerializerConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config, SerializerConfig::default());

    let json = Serializer::with_config(config)
        .serialize_model(&model(), None)
        .unwrap()
        .to_value()
        .unwrap();
    assert_eq!(json["data"]["type"], "blog-categories");
}

#[test]
fn test_malformed_file_reports_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "pluralize: [").expect("write config");

    let err = SerializerConfig::from_yaml_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config file"));
}
