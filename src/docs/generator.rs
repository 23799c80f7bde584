use std::{fs, path::Path};

use thiserror::Error;

use crate::docs::generate_table_page;

use super::{TableInfo, TableRegistry};

/// Generates markdown pages for the shipped precedence tables.
///
/// Builds each registered table by exercising the probe-model engine and
/// writes the result as a standalone markdown file.
pub struct DocsGenerator {
    output_dir: String,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            output_dir: "docs/serialization".to_string(),
        }
    }
}

impl DocsGenerator {
    /// Creates a new documentation generator with default output directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom output directory for generated documentation.
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Generates pages for all registered tables.
    ///
    /// Creates one markdown file per table in the output directory.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileWrite` if directory creation or a file write
    /// fails, or `DocsError::TableBuild` if building a table fails.
    pub fn generate_all(&self) -> Result<(), DocsError> {
        fs::create_dir_all(&self.output_dir).map_err(|err| {
            DocsError::FileWrite(format!("Failed to create output directory: {}", err))
        })?;

        let tables = TableRegistry::get_all();

        for table in &tables {
            self.generate_single_table(table)?;
        }

        println!("Generated documentation for {} tables", tables.len());
        Ok(())
    }

    /// Generates the page for a specific table by name.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::InvalidTableName` if no table has that name.
    pub fn generate_table_by_name(&self, table_name: &str) -> Result<(), DocsError> {
        let table = TableRegistry::get_by_name(table_name)
            .ok_or_else(|| DocsError::InvalidTableName(table_name.to_string()))?;

        fs::create_dir_all(&self.output_dir).map_err(|err| {
            DocsError::FileWrite(format!("Failed to create output directory: {}", err))
        })?;

        self.generate_single_table(&table)
    }

    /// Returns a list of all available table names.
    pub fn list_tables(&self) -> Vec<String> {
        TableRegistry::list_names()
    }

    fn generate_single_table(&self, table: &TableInfo) -> Result<(), DocsError> {
        let content = generate_table_page(table)?;
        let filename = format!("{}.md", table.name);
        let filepath = Path::new(&self.output_dir).join(filename);

        fs::write(&filepath, content).map_err(|err| DocsError::FileWrite(err.to_string()))?;

        println!("Generated {}", filepath.display());
        Ok(())
    }
}

/// Errors that can occur during documentation generation.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("{0}")]
    FileWrite(String),

    #[error("{0}")]
    InvalidTableName(String),

    #[error("{0}")]
    TableBuild(String),
}
