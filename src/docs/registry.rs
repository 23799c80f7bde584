use serde::Serialize;

use crate::Result;

use super::exclude_priority::{exclude_overrides_table, exclude_variants_table};

/// Builder function producing a rendered table string.
pub type TableFn = fn() -> Result<String>;

/// Metadata and builder for one registered documentation table.
pub struct TableInfo {
    /// Registry name, used for lookup and as the output filename stem.
    pub name: String,
    /// Page title rendered above the table.
    pub title: String,
    /// Short explanation of what the table demonstrates.
    pub description: String,
    /// Function that builds the rendered table string.
    pub build: TableFn,
}

impl TableInfo {
    /// Returns a serializable summary of this table's metadata.
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            name: self.name.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Serializable table metadata, for machine-readable listings.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    /// Registry name of the table.
    pub name: String,
    /// Page title rendered above the table.
    pub title: String,
    /// Short explanation of what the table demonstrates.
    pub description: String,
}

/// Central registry for all shipped documentation tables.
///
/// Provides methods to discover, list, and retrieve table metadata and
/// builders by name.
pub struct TableRegistry;

impl TableRegistry {
    /// Returns metadata for all registered tables, in publication order.
    pub fn get_all() -> Vec<TableInfo> {
        vec![
            TableInfo {
                name: "exclude-overrides".to_string(),
                title: "Priority of `exclude`/`include` settings".to_string(),
                description: "How call-level `exclude` and `include` sets interact with \
                              field-level `exclude` declarations. A field declared with \
                              `exclude=true` never appears in dump output, even when the \
                              call-level `include` set names it."
                    .to_string(),
                build: exclude_overrides_table,
            },
            TableInfo {
                name: "exclude-variants".to_string(),
                title: "The `exclude_none`, `exclude_defaults` and `exclude_unset` settings"
                    .to_string(),
                description: "How the dump-call variant flags treat fields that are set to a \
                              value, explicitly set to their default, set to null, or left \
                              unset entirely."
                    .to_string(),
                build: exclude_variants_table,
            },
        ]
    }

    /// Retrieves a table's metadata by its registry name.
    pub fn get_by_name(name: &str) -> Option<TableInfo> {
        Self::get_all().into_iter().find(|table| table.name == name)
    }

    /// Returns the names of all registered tables.
    ///
    /// Useful for discovery and validation without building anything.
    pub fn list_names() -> Vec<String> {
        Self::get_all().into_iter().map(|table| table.name).collect()
    }
}
