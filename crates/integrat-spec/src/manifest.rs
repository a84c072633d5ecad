//! Typed view over a parsed manifest document.
//!
//! Construction is total: absent sections and fields become `None` or empty
//! collections, so a malformed manifest still yields a `Manifest` whose gaps
//! are reported by the validator rather than by a parse failure. Fields the
//! schema does not know about are preserved untouched in `extra`.

use serde::Serialize;

use crate::document::{Document, Fields, Scalar};
use crate::parse::parse_document;

/// The `plugin` section: package identity and metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plugin {
    /// URL-safe plugin identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Human-readable plugin name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Plugin version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Unrecognized scalar fields (e.g. `homepage`, `icon`), preserved as-is.
    #[serde(flatten)]
    pub extra: Fields,
}

/// The `provider` section: where the platform fetches plugin data from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Provider {
    /// Base URL of the upstream data provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Unrecognized scalar fields (e.g. `health_path`, `proxy_mode`).
    #[serde(flatten)]
    pub extra: Fields,
}

/// One declared data-access operation within a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// URL-safe endpoint identifier, unique within the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Human-readable endpoint name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Upstream request path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Access level label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Additional scalar fields (e.g. `method`, `cache_ttl`), preserved
    /// but unvalidated.
    #[serde(flatten)]
    pub extra: Fields,
}

/// One declared plugin configuration field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigField {
    /// URL-safe field identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Human-readable label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Field type label.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Additional scalar fields (e.g. `required`, `placeholder`).
    #[serde(flatten)]
    pub extra: Fields,
}

/// A parsed `integrat.yaml` manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Plugin identity and metadata.
    pub plugin: Plugin,
    /// Upstream provider settings.
    pub provider: Provider,
    /// Declared endpoints, in document order.
    pub endpoints: Vec<Endpoint>,
    /// Declared configuration fields, in document order.
    pub config_fields: Vec<ConfigField>,
}

/// Take the named field as text, leaving everything else in `fields`.
///
/// A boolean under a schema key (e.g. `slug: true`) is not a usable string;
/// it stays in `fields` and the key reads as absent.
fn take_text(fields: &mut Fields, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Scalar::Text(s)) => Some(s),
        Some(other) => {
            fields.insert(key.to_owned(), other);
            None
        }
        None => None,
    }
}

impl Manifest {
    /// Build a typed manifest from a loosely-typed [`Document`].
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        let plugin = doc.mapping("plugin").cloned().map_or_else(Plugin::default, |mut f| Plugin {
            slug: take_text(&mut f, "slug"),
            name: take_text(&mut f, "name"),
            description: take_text(&mut f, "description"),
            version: take_text(&mut f, "version"),
            extra: f,
        });

        let provider =
            doc.mapping("provider").cloned().map_or_else(Provider::default, |mut f| Provider {
                base_url: take_text(&mut f, "base_url"),
                extra: f,
            });

        let endpoints = doc
            .sequence("endpoints")
            .unwrap_or_default()
            .iter()
            .cloned()
            .map(|mut f| Endpoint {
                slug: take_text(&mut f, "slug"),
                name: take_text(&mut f, "name"),
                path: take_text(&mut f, "path"),
                access: take_text(&mut f, "access"),
                extra: f,
            })
            .collect();

        let config_fields = doc
            .sequence("config_fields")
            .unwrap_or_default()
            .iter()
            .cloned()
            .map(|mut f| ConfigField {
                slug: take_text(&mut f, "slug"),
                label: take_text(&mut f, "label"),
                field_type: take_text(&mut f, "type"),
                extra: f,
            })
            .collect();

        Self {
            plugin,
            provider,
            endpoints,
            config_fields,
        }
    }

    /// Parse manifest text straight into a typed manifest.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_document(&parse_document(text))
    }
}
