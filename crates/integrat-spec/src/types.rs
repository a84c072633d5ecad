//! Validated newtype wrappers for core domain primitives.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The slug format, as published in the platform's JSON Schema.
pub const SLUG_PATTERN: &str = "^[a-z0-9][a-z0-9._-]*$";

/// Error returned when a slug fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    /// The slug is empty.
    #[error("slug must not be empty")]
    Empty,
    /// The first character is not a lowercase letter or digit.
    #[error("slug must start with a lowercase letter or digit")]
    InvalidStart,
    /// The slug contains disallowed characters.
    #[error("slug contains invalid characters: only lowercase alphanumeric, '.', '_' and '-' allowed")]
    InvalidCharacters,
}

/// A validated URL-safe identifier matching [`SLUG_PATTERN`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Slug(String);

impl Slug {
    /// Create a new `Slug` from a string slice, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError`] if the slug is empty, does not start with a
    /// lowercase letter or digit, or contains characters other than lowercase
    /// letters, digits, `.`, `_` and `-`.
    pub fn new(slug: &str) -> Result<Self, SlugError> {
        let mut chars = slug.chars();
        let Some(first) = chars.next() else {
            return Err(SlugError::Empty);
        };
        if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
            return Err(SlugError::InvalidStart);
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
        {
            return Err(SlugError::InvalidCharacters);
        }
        Ok(Self(slug.to_owned()))
    }

    /// Return the inner slug string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
