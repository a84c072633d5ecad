//! Schema validation for parsed manifests.
//!
//! Every check runs unconditionally and appends to an accumulator, so a
//! caller sees the complete defect list in one pass; the only exception is
//! that endpoint-level checks are skipped when the manifest has no endpoints
//! at all. Validation never fails as an `Err` — findings are data.

use std::collections::HashSet;

use serde::Serialize;

use crate::document::Scalar;
use crate::manifest::{ConfigField, Endpoint, Manifest, Plugin, Provider};
use crate::types::{Slug, SLUG_PATTERN};

const VALID_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE"];
const VALID_CONFIG_FIELD_TYPES: &[&str] = &["string", "number", "boolean", "select"];

/// Accumulated findings for one manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Constraint violations; any entry makes the manifest invalid.
    pub errors: Vec<String>,
    /// Advisory findings; these never affect the verdict.
    pub warnings: Vec<String>,
}

impl Report {
    /// True when no errors were recorded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, msg: String) {
        self.errors.push(msg);
    }

    fn warning(&mut self, msg: String) {
        self.warnings.push(msg);
    }
}

/// The outcome of validating one manifest source: the parsed spec echoed back
/// for caller inspection, plus the accumulated findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    /// The parsed manifest, as the validator saw it.
    pub spec: Manifest,
    /// Constraint violations, in check order.
    pub errors: Vec<String>,
    /// Advisory findings, in check order.
    pub warnings: Vec<String>,
}

impl Validation {
    /// True when the manifest passed validation.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse manifest text and validate it in one pass.
///
/// Idempotent: the same text always yields the same findings.
#[must_use]
pub fn validate_source(text: &str) -> Validation {
    let spec = Manifest::parse(text);
    let report = check_manifest(&spec);
    Validation {
        spec,
        errors: report.errors,
        warnings: report.warnings,
    }
}

/// Run the full schema check over a parsed manifest.
#[must_use]
pub fn check_manifest(manifest: &Manifest) -> Report {
    let mut report = Report::default();
    check_plugin(&manifest.plugin, &mut report);
    check_provider(&manifest.provider, &mut report);
    check_endpoints(&manifest.endpoints, &mut report);
    check_config_fields(&manifest.config_fields, &mut report);
    report
}

/// A field is present only when set and non-empty.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn check_plugin(plugin: &Plugin, report: &mut Report) {
    match present(plugin.slug.as_deref()) {
        None => report.error("plugin.slug: required field".to_owned()),
        Some(slug) => {
            if Slug::new(slug).is_err() {
                report.error(format!(
                    "plugin.slug: invalid format {slug:?} (expected {SLUG_PATTERN})"
                ));
            }
        }
    }

    if present(plugin.name.as_deref()).is_none() {
        report.error("plugin.name: required field".to_owned());
    }
    if present(plugin.description.as_deref()).is_none() {
        report.error("plugin.description: required field".to_owned());
    }
    if present(plugin.version.as_deref()).is_none() {
        report.error("plugin.version: required field".to_owned());
    }
}

fn check_provider(provider: &Provider, report: &mut Report) {
    if present(provider.base_url.as_deref()).is_none() {
        report.error("provider.base_url: required field".to_owned());
    }
}

fn check_endpoints(endpoints: &[Endpoint], report: &mut Report) {
    if endpoints.is_empty() {
        report.error("endpoints: at least 1 endpoint required".to_owned());
        return;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for endpoint in endpoints {
        let slug = present(endpoint.slug.as_deref());
        let ctx = slug.map_or_else(|| "endpoint".to_owned(), |s| format!("endpoint {s}"));

        match slug {
            None => report.error("endpoint: missing slug".to_owned()),
            Some(s) => {
                if Slug::new(s).is_err() {
                    report.warning(format!("{ctx}: slug does not match {SLUG_PATTERN}"));
                }
                if !seen.insert(s) {
                    report.error(format!("endpoint: duplicate slug {s:?}"));
                }
            }
        }

        if present(endpoint.name.as_deref()).is_none() {
            report.error(format!("{ctx}: missing name"));
        }
        match present(endpoint.path.as_deref()) {
            None => report.error(format!("{ctx}: missing path")),
            Some(path) => {
                if !path.starts_with('/') {
                    report.warning(format!("{ctx}: path should start with / (got {path:?})"));
                }
            }
        }
        if present(endpoint.access.as_deref()).is_none() {
            report.error(format!("{ctx}: missing access"));
        }

        if let Some(Scalar::Text(method)) = endpoint.extra.get("method") {
            if !VALID_METHODS.contains(&method.as_str()) {
                report.warning(format!(
                    "{ctx}: unknown method {method:?} (expected GET, POST, PUT or DELETE)"
                ));
            }
        }
    }
}

fn check_config_fields(config_fields: &[ConfigField], report: &mut Report) {
    let mut seen: HashSet<&str> = HashSet::new();
    for (i, field) in config_fields.iter().enumerate() {
        let prefix = format!("config_fields[{i}]");

        match present(field.slug.as_deref()) {
            None => report.warning(format!("{prefix}.slug: required field")),
            Some(slug) => {
                if !seen.insert(slug) {
                    report.warning(format!("{prefix}.slug: duplicate {slug:?}"));
                }
            }
        }

        if present(field.label.as_deref()).is_none() {
            report.warning(format!("{prefix}.label: required field"));
        }

        match present(field.field_type.as_deref()) {
            None => report.warning(format!("{prefix}.type: required field")),
            Some(ty) => {
                if !VALID_CONFIG_FIELD_TYPES.contains(&ty) {
                    report.warning(format!(
                        "{prefix}.type: unknown value {ty:?} (expected string, number, boolean or select)"
                    ));
                }
            }
        }
    }
}
