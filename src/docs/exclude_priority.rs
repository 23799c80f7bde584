//! The exclude-priority matrix builder and the two shipped tables.
//!
//! Rather than hand-writing the precedence truth table, the builder drives
//! the probe-model engine through every (constructor kwargs, dump setting,
//! field setting) combination and quotes whatever the engine produced.

use serde_json::{Map, Value, json};

use crate::Result;
use crate::model::{DumpOptions, FieldSpec, ModelSpec};
use crate::settings::{
    ExcludeSetting, FIELD_EXCLUDE_SETTINGS, MODEL_DUMP_EXCLUDE_OVERRIDES_SETTINGS,
    MODEL_DUMP_EXCLUDE_VARIANTS_SETTINGS,
};

use super::markdown::{generate_table_heading, generate_table_row};

/// Builds the probe model: a single optional `name` field defaulting to
/// `"Unspecified"`, carrying the given field-level exclusion flag.
fn probe_model_spec(exclude: bool) -> ModelSpec {
    ModelSpec::new(vec![
        FieldSpec::new("name", json!("Unspecified")).with_exclude(exclude),
    ])
}

/// Compact JSON rendering of a dumped mapping, e.g. `{"name":"Ralph"}`.
fn render_mapping(mapping: &Map<String, Value>) -> String {
    Value::Object(mapping.clone()).to_string()
}

fn kwargs_of(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// Renders the full option-interaction grid as a markdown table.
///
/// Field settings vary the columns; each (constructor kwargs, dump setting)
/// pair produces one row. The constructor kwargs cell is rendered only on
/// the first row of its group so rows sharing kwargs read as one block.
/// Row and column order mirror input order exactly.
///
/// # Errors
///
/// Propagates `ModelError` unmodified if a constructor kwargs mapping is
/// not a valid input to the probe model.
pub fn build_exclude_priority_table(
    field_settings: &[ExcludeSetting],
    model_dump_settings: &[ExcludeSetting],
    constructor_kwargs: &[Map<String, Value>],
) -> Result<String> {
    let mut rows = Vec::new();

    for kwargs in constructor_kwargs {
        for (idx, model_dump_setting) in model_dump_settings.iter().enumerate() {
            let mut col_values = Vec::new();

            for field_setting in field_settings {
                let spec = probe_model_spec(field_setting.exclude_flag());
                let instance = spec.instantiate(kwargs)?;

                let mut options = DumpOptions::default();
                model_dump_setting.apply_to_dump(&mut options);

                col_values.push(render_mapping(&instance.dump(&options)));
            }

            let kwargs_cell = if idx == 0 {
                format!("`{}`", render_mapping(kwargs))
            } else {
                String::new()
            };

            let mut cells = vec![kwargs_cell, model_dump_setting.markdown_str()];
            cells.extend(col_values.into_iter().map(|value| format!("`{value}`")));

            rows.push(generate_table_row(&cells));
        }
    }

    let mut col_names = vec![
        "<br></br>`instantiate` **kwargs**".to_string(),
        "<br></br>`dump` **Setting**".to_string(),
    ];
    if let Some((first, rest)) = field_settings.split_first() {
        col_names.push(format!(
            "`Field` **Setting**<br></br>{}",
            first.markdown_str()
        ));
        col_names.extend(
            rest.iter()
                .map(|setting| format!("<br></br>{}", setting.markdown_str())),
        );
    }

    let mut table = generate_table_heading(&col_names);
    for row in rows {
        table.push_str(&row);
    }

    Ok(table)
}

/// The field-level `exclude` vs call-level `exclude`/`include` table.
///
/// # Errors
///
/// Propagates engine errors from [`build_exclude_priority_table`].
pub fn exclude_overrides_table() -> Result<String> {
    build_exclude_priority_table(
        &FIELD_EXCLUDE_SETTINGS,
        &MODEL_DUMP_EXCLUDE_OVERRIDES_SETTINGS,
        &[kwargs_of(&[("name", json!("Ralph"))])],
    )
}

/// The `exclude_none`/`exclude_defaults`/`exclude_unset` variants table.
///
/// The constructor list covers the interesting states of the probe field:
/// set to a value, explicitly set to its default, set to null, and unset.
///
/// # Errors
///
/// Propagates engine errors from [`build_exclude_priority_table`].
pub fn exclude_variants_table() -> Result<String> {
    build_exclude_priority_table(
        &FIELD_EXCLUDE_SETTINGS,
        &MODEL_DUMP_EXCLUDE_VARIANTS_SETTINGS,
        &[
            kwargs_of(&[("name", json!("Ralph"))]),
            kwargs_of(&[("name", json!("Unspecified"))]),
            kwargs_of(&[("name", json!(null))]),
            kwargs_of(&[]),
        ],
    )
}
