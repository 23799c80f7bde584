//! Documentation generation for dump-setting precedence tables.
//!
//! Builds markdown tables showing the serialized output of a probe model
//! under every combination of field-level and call-level exclude settings,
//! and writes them as standalone documentation pages.

mod exclude_priority;
mod generator;
mod markdown;
mod registry;


pub use exclude_priority::{
    build_exclude_priority_table, exclude_overrides_table, exclude_variants_table,
};
pub use generator::{DocsError, DocsGenerator};
pub use markdown::{generate_table_heading, generate_table_page, generate_table_row};
pub use registry::{TableFn, TableInfo, TableRegistry, TableSummary};
