//! Permissive line-oriented parser for the `integrat.yaml` manifest format.
//!
//! This is a restricted, indentation-based format, not a conformant YAML
//! implementation. Each physical line is classified into one of a handful of
//! shapes; lines matching none of them are silently ignored, so malformed
//! manifests surface as missing-field validation errors downstream rather
//! than parse failures.

use crate::document::{Document, Fields, Scalar, Section};

/// Section names that materialize as sequences of items.
const LIST_SECTIONS: &[&str] = &["endpoints", "config_fields"];

/// The shape of one physical line.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// Blank line or `#` comment.
    Blank,
    /// Unindented `name:` opening a top-level section.
    Section(&'a str),
    /// Indented `- key: value` starting a new list item.
    ListItem { key: &'a str, value: &'a str },
    /// Indented `key: value` setting a field on the current context.
    Field { key: &'a str, value: &'a str },
    /// Anything else; ignored.
    Other,
}

/// Split a leading word token (ASCII alphanumeric or `_`) off `s`.
fn split_word(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(s.split_at(end))
    }
}

/// Split `word : value` into key and raw value; the value must be non-blank.
fn split_field(s: &str) -> Option<(&str, &str)> {
    let (key, rest) = split_word(s)?;
    let rest = rest.trim_start();
    let value = rest.strip_prefix(':')?;
    if value.trim().is_empty() {
        return None;
    }
    Some((key, value))
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return LineKind::Blank;
    }

    if line.starts_with(char::is_whitespace) {
        let body = line.trim_start();
        if let Some(after_dash) = body.strip_prefix('-') {
            if after_dash.starts_with(char::is_whitespace) {
                if let Some((key, value)) = split_field(after_dash.trim_start()) {
                    return LineKind::ListItem { key, value };
                }
            }
            return LineKind::Other;
        }
        if let Some((key, value)) = split_field(body) {
            return LineKind::Field { key, value };
        }
        return LineKind::Other;
    }

    // Unindented: a section header is a word token followed by a colon; any
    // text after the colon is ignored.
    if let Some((key, rest)) = split_word(line) {
        if rest.trim_start().starts_with(':') {
            return LineKind::Section(key);
        }
    }
    LineKind::Other
}

/// Strip one matching pair of surrounding single or double quotes.
fn unquote(raw: &str) -> &str {
    let v = raw.trim();
    let bytes = v.as_bytes();
    if v.len() >= 2 && bytes[0] == bytes[v.len() - 1] && matches!(bytes[0], b'"' | b'\'') {
        &v[1..v.len() - 1]
    } else {
        v
    }
}

/// Coerce a raw field value: trim, unquote, and turn the literals
/// `true` / `false` into booleans.
fn scalar(raw: &str) -> Scalar {
    match unquote(raw) {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        text => Scalar::Text(text.to_owned()),
    }
}

/// Flush accumulated list items into the document under `section`.
///
/// Only list-valued sections receive the items; for every section change the
/// accumulator is reset regardless.
fn flush(doc: &mut Document, section: Option<&str>, items: &mut Vec<Fields>) {
    if let Some(name) = section {
        if LIST_SECTIONS.contains(&name) {
            doc.sections
                .insert(name.to_owned(), Section::Sequence(std::mem::take(items)));
        }
    }
    items.clear();
}

/// Parse manifest text into a [`Document`].
///
/// This function is total: it never fails, and unmatched lines are dropped.
#[must_use]
pub fn parse_document(text: &str) -> Document {
    let mut doc = Document::default();
    let mut section: Option<String> = None;
    let mut items: Vec<Fields> = Vec::new();
    let mut in_item = false;

    for line in text.split('\n') {
        match classify(line) {
            LineKind::Blank | LineKind::Other => {}
            LineKind::Section(name) => {
                flush(&mut doc, section.as_deref(), &mut items);
                in_item = false;
                doc.sections
                    .entry(name.to_owned())
                    .or_insert_with(|| Section::Mapping(Fields::new()));
                section = Some(name.to_owned());
            }
            LineKind::ListItem { key, value } => {
                let mut item = Fields::new();
                item.insert(key.to_owned(), scalar(value));
                items.push(item);
                in_item = true;
            }
            LineKind::Field { key, value } => {
                if in_item {
                    if let Some(item) = items.last_mut() {
                        item.insert(key.to_owned(), scalar(value));
                    }
                } else if let Some(name) = section.as_deref() {
                    if let Some(Section::Mapping(fields)) = doc.sections.get_mut(name) {
                        fields.insert(key.to_owned(), scalar(value));
                    }
                }
            }
        }
    }

    flush(&mut doc, section.as_deref(), &mut items);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_section_header() {
        assert_eq!(classify("plugin:"), LineKind::Section("plugin"));
        assert_eq!(classify("plugin : trailing"), LineKind::Section("plugin"));
    }

    #[test]
    fn classifies_list_item() {
        assert_eq!(
            classify("  - slug: fetch"),
            LineKind::ListItem {
                key: "slug",
                value: " fetch"
            }
        );
    }

    #[test]
    fn dash_without_space_is_not_an_item() {
        assert_eq!(classify("  -slug: fetch"), LineKind::Other);
    }

    #[test]
    fn field_without_value_is_ignored() {
        assert_eq!(classify("  slug:"), LineKind::Other);
        assert_eq!(classify("  slug:   "), LineKind::Other);
    }

    #[test]
    fn unquote_strips_matching_pairs_only() {
        assert_eq!(unquote("\"demo\""), "demo");
        assert_eq!(unquote("'demo'"), "demo");
        assert_eq!(unquote("\"demo'"), "\"demo'");
        assert_eq!(unquote("  demo  "), "demo");
    }
}
