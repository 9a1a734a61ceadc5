//! Encoding-independence tests: the same logical schema expressed as XML
//! and as JSON must load into structurally identical trees.

use rsv_schema::{detect_format, load_schema, xml::SCHEMA_NAMESPACE, SchemaFormat};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_schema(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp schema file");
    file.write_all(content.as_bytes()).expect("write schema");
    file
}

fn xml_schema() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<repository-structure xmlns="{SCHEMA_NAMESPACE}">
  <metadata>
    <name>default</name>
    <description>Baseline layout</description>
  </metadata>
  <structure>
    <root-files>
      <file>
        <name>LICENSE</name>
        <requirement-status>required</requirement-status>
      </file>
      <file extension="md">
        <name>CHANGELOG.md</name>
        <requirement-status>suggested</requirement-status>
        <description>Release history</description>
      </file>
    </root-files>
    <directories>
      <directory>
        <name>docs</name>
        <requirement-status>suggested</requirement-status>
        <purpose>End-user documentation</purpose>
        <files>
          <file>
            <name>index.md</name>
          </file>
        </files>
        <subdirectories>
          <directory>
            <name>images</name>
            <requirement-status>optional</requirement-status>
          </directory>
        </subdirectories>
      </directory>
      <directory path="node_modules">
        <name>node_modules</name>
        <requirement-status>not-allowed</requirement-status>
      </directory>
    </directories>
  </structure>
</repository-structure>
"#
    )
}

fn json_schema() -> &'static str {
    r#"{
  "metadata": {
    "name": "default",
    "description": "Baseline layout"
  },
  "structure": {
    "rootFiles": [
      {"name": "LICENSE", "requirementStatus": "required"},
      {
        "name": "CHANGELOG.md",
        "requirementStatus": "suggested",
        "description": "Release history",
        "extension": "md"
      }
    ],
    "directories": [
      {
        "name": "docs",
        "requirementStatus": "suggested",
        "purpose": "End-user documentation",
        "files": [{"name": "index.md"}],
        "subdirectories": [
          {"name": "images", "requirementStatus": "optional"}
        ]
      },
      {
        "name": "node_modules",
        "path": "node_modules",
        "requirementStatus": "not-allowed"
      }
    ]
  }
}
"#
}

#[test]
fn equivalent_encodings_load_identical_trees() {
    let xml_file = write_schema(".xml", &xml_schema());
    let json_file = write_schema(".json", json_schema());

    let from_xml = load_schema(xml_file.path(), None).expect("XML schema loads");
    let from_json = load_schema(json_file.path(), None).expect("JSON schema loads");

    assert_eq!(from_xml, from_json);
    assert_eq!(from_xml.node_count(), 6);
}

#[test]
fn explicit_format_overrides_misleading_extension() {
    // JSON content behind an .xml extension still loads when the format is
    // forced, which is how --format json behaves for odd file names.
    let file = write_schema(".xml", json_schema());

    assert_eq!(detect_format(file.path()).unwrap(), SchemaFormat::Xml);
    let tree = load_schema(file.path(), Some(SchemaFormat::Json)).expect("forced JSON loads");
    assert_eq!(tree.root_files.len(), 2);
}

#[test]
fn sniffed_format_matches_extension_mapped_format() {
    // Same XML bytes behind an unknown extension: the content sniff must
    // agree with the extension mapping.
    let by_extension = write_schema(".xml", &xml_schema());
    let by_content = write_schema(".schema", &xml_schema());

    let a = load_schema(by_extension.path(), None).unwrap();
    let b = load_schema(by_content.path(), None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn malformed_documents_never_yield_partial_trees() {
    // Valid prefix, then a syntax error: the loader must fail outright.
    let truncated_json = &json_schema()[..json_schema().len() - 40];
    let file = write_schema(".json", truncated_json);
    assert!(load_schema(file.path(), None).is_err());

    let mut truncated_xml = xml_schema();
    truncated_xml.truncate(truncated_xml.len() - 60);
    let file = write_schema(".xml", &truncated_xml);
    assert!(load_schema(file.path(), None).is_err());
}
