use super::{TableInfo, generator::DocsError};

/// Renders one pipe-delimited table row, newline-terminated.
pub fn generate_table_row(col_values: &[String]) -> String {
    format!("| {} |\n", col_values.join(" | "))
}

/// Renders a pipe-delimited table heading with its separator row.
pub fn generate_table_heading(col_names: &[String]) -> String {
    let separator: Vec<String> = col_names.iter().map(|_| "---".to_string()).collect();

    format!(
        "{}{}",
        generate_table_row(col_names),
        generate_table_row(&separator)
    )
}

/// Generates a complete markdown documentation page for a table.
///
/// Creates a structured document with the table's title, its description,
/// and the rendered precedence table itself.
///
/// # Errors
///
/// Returns `DocsError::TableBuild` if building the table fails.
pub fn generate_table_page(table: &TableInfo) -> Result<String, DocsError> {
    let rendered = (table.build)().map_err(|err| {
        DocsError::TableBuild(format!("Failed to build table '{}': {}", table.name, err))
    })?;

    Ok(format!(
        "# {}\n\n{}\n\n{}",
        table.title, table.description, rendered
    ))
}
