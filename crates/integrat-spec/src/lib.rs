//! Core domain types for the Integrat manifest toolkit.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod document;
pub mod manifest;
pub mod parse;
pub mod types;
pub mod validate;
