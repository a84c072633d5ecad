//! File validation and per-file report rendering.

use std::path::Path;

use anyhow::{Context, Result};
use integrat_spec::validate::{validate_source, Validation};
use log::debug;

/// Read and validate one manifest file.
///
/// # Errors
///
/// Returns an error if the file cannot be read; validation findings are
/// carried inside the returned [`Validation`], never as an `Err`.
pub fn validate_file(path: &Path) -> Result<Validation> {
    debug!("validating {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(validate_source(&text))
}

/// Render the human-readable report block for one file.
#[must_use]
pub fn render_human(path: &Path, validation: &Validation) -> String {
    let slug = validation.spec.plugin.slug.as_deref().unwrap_or_default();
    let mut out = format!("─ {} ({slug})\n", path.display());

    if validation.is_ok() {
        out.push_str("  ✓ Schema valid\n");
    } else {
        for error in &validation.errors {
            out.push_str(&format!("  ✗ {error}\n"));
        }
    }

    for warning in &validation.warnings {
        out.push_str(&format!("  ⚠ {warning}\n"));
    }

    if validation.is_ok() {
        out.push_str(&format!("  ✓ Plugin slug: {slug} (format OK)\n"));
        out.push_str(&format!(
            "  ✓ {} endpoints, all slugs unique\n",
            validation.spec.endpoints.len()
        ));
        let config_fields = validation.spec.config_fields.len();
        if config_fields > 0 {
            out.push_str(&format!("  ✓ {config_fields} config_fields\n"));
        }
    }

    out
}

/// Render the machine-readable report for one file.
#[must_use]
pub fn render_json(path: &Path, validation: &Validation) -> serde_json::Value {
    serde_json::json!({
        "file": path.display().to_string(),
        "ok": validation.is_ok(),
        "errors": validation.errors,
        "warnings": validation.warnings,
        "spec": validation.spec,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const VALID: &str = "\
plugin:
  slug: demo-plugin
  name: Demo
  description: A demo
  version: 1.0.0
provider:
  base_url: https://example.com
endpoints:
  - slug: fetch
    name: Fetch
    path: /fetch
    access: public
";

    #[test]
    fn valid_file_renders_success_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("integrat.yaml");
        fs::write(&path, VALID).unwrap();

        let validation = validate_file(&path).unwrap();
        assert!(validation.is_ok());

        let out = render_human(&path, &validation);
        assert!(out.contains("✓ Schema valid"));
        assert!(out.contains("demo-plugin"));
        assert!(out.contains("1 endpoints"));
    }

    #[test]
    fn invalid_file_renders_error_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("integrat.yaml");
        fs::write(&path, "plugin:\n  slug: demo\n").unwrap();

        let validation = validate_file(&path).unwrap();
        assert!(!validation.is_ok());

        let out = render_human(&path, &validation);
        assert!(out.contains('✗'));
        assert!(out.contains("plugin.name"));
        assert!(!out.contains("Schema valid"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(validate_file(Path::new("/nonexistent/integrat.yaml")).is_err());
    }

    #[test]
    fn json_report_carries_verdict_and_spec_echo() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("integrat.yaml");
        fs::write(&path, VALID).unwrap();

        let validation = validate_file(&path).unwrap();
        let json = render_json(&path, &validation);
        assert_eq!(json["ok"], true);
        assert_eq!(json["spec"]["plugin"]["slug"], "demo-plugin");
        assert_eq!(json["errors"].as_array().unwrap().len(), 0);
    }
}
