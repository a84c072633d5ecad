//! Loosely-typed representation of a parsed manifest document.

use std::collections::BTreeMap;

use serde::Serialize;

/// A scalar value in a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A boolean, coerced from the literals `true` / `false`.
    Bool(bool),
    /// Any other value, kept as text.
    Text(String),
}

impl Scalar {
    /// Return the text content, or `None` for booleans.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Bool(_) => None,
        }
    }
}

/// Scalar fields of one record, keyed by field name.
pub type Fields = BTreeMap<String, Scalar>;

/// One top-level section of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Section {
    /// A nested mapping of scalar fields.
    Mapping(Fields),
    /// An ordered sequence of item records.
    Sequence(Vec<Fields>),
}

/// A parsed manifest document: top-level section name → section contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    /// The document's sections.
    pub sections: BTreeMap<String, Section>,
}

impl Document {
    /// Return the named section as a mapping, if present and mapping-valued.
    #[must_use]
    pub fn mapping(&self, name: &str) -> Option<&Fields> {
        match self.sections.get(name) {
            Some(Section::Mapping(fields)) => Some(fields),
            _ => None,
        }
    }

    /// Return the named section as a sequence, if present and list-valued.
    #[must_use]
    pub fn sequence(&self, name: &str) -> Option<&[Fields]> {
        match self.sections.get(name) {
            Some(Section::Sequence(items)) => Some(items.as_slice()),
            _ => None,
        }
    }
}
