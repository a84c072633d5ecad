//! integrat-validate CLI library — manifest loading and report rendering.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod report;
