use integrat_spec::document::{Scalar, Section};
use integrat_spec::parse::parse_document;

const SAMPLE: &str = "\
# Demo manifest
plugin:
  slug: demo-plugin
  name: 'Demo'
  version: \"1.0.0\"

provider:
  base_url: https://example.com

endpoints:
  - slug: fetch
    name: Fetch
    path: /fetch
    access: public
    paged: true
  - slug: list
    name: List
    path: /list
    access: public
";

#[test]
fn parses_mapping_sections() {
    let doc = parse_document(SAMPLE);
    let plugin = doc.mapping("plugin").unwrap();
    assert_eq!(plugin.get("slug"), Some(&Scalar::Text("demo-plugin".to_owned())));
    // One layer of surrounding quotes is stripped, single or double.
    assert_eq!(plugin.get("name"), Some(&Scalar::Text("Demo".to_owned())));
    assert_eq!(plugin.get("version"), Some(&Scalar::Text("1.0.0".to_owned())));
}

#[test]
fn parses_endpoint_sequence_in_order() {
    let doc = parse_document(SAMPLE);
    let endpoints = doc.sequence("endpoints").unwrap();
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0].get("slug"), Some(&Scalar::Text("fetch".to_owned())));
    assert_eq!(endpoints[1].get("slug"), Some(&Scalar::Text("list".to_owned())));
}

#[test]
fn coerces_boolean_literals() {
    let doc = parse_document(SAMPLE);
    let endpoints = doc.sequence("endpoints").unwrap();
    assert_eq!(endpoints[0].get("paged"), Some(&Scalar::Bool(true)));
}

#[test]
fn final_list_section_is_flushed_at_end_of_input() {
    let text = "endpoints:\n  - slug: only\n    name: Only\n";
    let doc = parse_document(text);
    assert_eq!(doc.sequence("endpoints").unwrap().len(), 1);
}

#[test]
fn empty_list_section_materializes_as_empty_sequence() {
    let doc = parse_document("endpoints:\nplugin:\n  slug: x\n");
    assert_eq!(doc.sections.get("endpoints"), Some(&Section::Sequence(vec![])));
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let text = "plugin:\n\n  # a comment\n  slug: demo\n";
    let doc = parse_document(text);
    assert_eq!(
        doc.mapping("plugin").unwrap().get("slug"),
        Some(&Scalar::Text("demo".to_owned()))
    );
}

#[test]
fn malformed_lines_are_silently_ignored() {
    let text = "plugin:\n  slug demo\n  : nothing\n  !!!\n  name: Demo\n";
    let doc = parse_document(text);
    let plugin = doc.mapping("plugin").unwrap();
    assert_eq!(plugin.len(), 1);
    assert_eq!(plugin.get("name"), Some(&Scalar::Text("Demo".to_owned())));
}

#[test]
fn field_without_open_item_under_list_section_is_discarded() {
    // A bare field directly under `endpoints` lands on the placeholder
    // mapping, which the flush replaces with the item sequence.
    let text = "endpoints:\n  stray: value\n  - slug: fetch\nplugin:\n  slug: x\n";
    let doc = parse_document(text);
    let endpoints = doc.sequence("endpoints").unwrap();
    assert_eq!(endpoints.len(), 1);
    assert_eq!(endpoints[0].get("slug"), Some(&Scalar::Text("fetch".to_owned())));
}

#[test]
fn reopened_section_merges_fields() {
    let text = "plugin:\n  slug: demo\nplugin:\n  name: Demo\n";
    let doc = parse_document(text);
    let plugin = doc.mapping("plugin").unwrap();
    assert_eq!(plugin.len(), 2);
}

#[test]
fn section_header_trailing_text_is_ignored() {
    let doc = parse_document("plugin: whatever\n  slug: demo\n");
    assert_eq!(
        doc.mapping("plugin").unwrap().get("slug"),
        Some(&Scalar::Text("demo".to_owned()))
    );
}

#[test]
fn crlf_input_parses_cleanly() {
    let text = "plugin:\r\n  slug: demo\r\n";
    let doc = parse_document(text);
    assert_eq!(
        doc.mapping("plugin").unwrap().get("slug"),
        Some(&Scalar::Text("demo".to_owned()))
    );
}
