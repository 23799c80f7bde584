//! Dumpdoc - Precedence-matrix documentation for model dump settings.
//!
//! Dumpdoc documents how field-level `exclude` declarations interact with
//! call-level `exclude` / `include` / `exclude_none` / `exclude_defaults` /
//! `exclude_unset` settings by actually exercising a probe model under every
//! combination and rendering the results as markdown tables. The main pieces:
//!
//! - A minimal probe-model engine with configurable dump behavior
//! - A catalog of named exclude/include settings to probe
//! - A matrix builder that renders the full option grid as a table
//! - A generator that writes the tables as standalone markdown pages
//!
//! # Quick Start
//!
//! ```rust
//! use dumpdoc::docs::exclude_overrides_table;
//!
//! // Build the field-exclude vs call-exclude precedence table
//! let table = exclude_overrides_table().unwrap();
//! assert!(table.contains("`Field` **Setting**"));
//! ```

/// Core error types and result aliases.
pub mod core;

/// Documentation generation for dump-setting precedence tables.
pub mod docs;

/// Minimal probe-model engine with configurable dump behavior.
pub mod model;

/// Exclude/include setting catalog and projections.
pub mod settings;

/// Tracing subscriber setup for the CLI.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{DumpdocError, Result};
