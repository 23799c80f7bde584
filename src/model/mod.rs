//! Minimal probe-model engine with configurable dump behavior.
//!
//! Provides just enough of a data-model runtime to observe how field-level
//! exclusion interacts with call-level dump settings: a model is described by
//! field specs, instantiated from a JSON mapping of constructor arguments,
//! and dumped back to a plain mapping under [`DumpOptions`].

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use thiserror::Error;


/// Errors raised by the probe-model engine.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown constructor argument: `{0}`")]
    UnknownField(String),
}

/// Declaration-time description of a single model field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name as it appears in constructor arguments and dump output.
    pub name: String,
    /// Value used when the constructor arguments omit this field.
    pub default: Value,
    /// Field-level exclusion flag. When set, the field never appears in
    /// dump output, regardless of call-level settings.
    pub exclude: bool,
}

impl FieldSpec {
    /// Creates a field spec with the given name and default value.
    pub fn new(name: impl Into<String>, default: Value) -> Self {
        Self {
            name: name.into(),
            default,
            exclude: false,
        }
    }

    /// Sets the field-level exclusion flag.
    pub fn with_exclude(mut self, exclude: bool) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Declaration-time description of a probe model.
///
/// Field order is preserved; dump output lists fields in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ModelSpec {
    fields: Vec<FieldSpec>,
}

impl ModelSpec {
    /// Creates a model spec from an ordered list of field specs.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Returns the declared fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Instantiates the model from a mapping of constructor arguments.
    ///
    /// Fields absent from `kwargs` take their declared default and are
    /// recorded as unset, which `exclude_unset` dumps act on.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownField` if `kwargs` names a field the
    /// model does not declare.
    pub fn instantiate(&self, kwargs: &Map<String, Value>) -> Result<ProbeInstance<'_>, ModelError> {
        for key in kwargs.keys() {
            if !self.fields.iter().any(|field| field.name == *key) {
                return Err(ModelError::UnknownField(key.clone()));
            }
        }

        let mut values = Map::new();
        let mut fields_set = BTreeSet::new();

        for field in &self.fields {
            match kwargs.get(&field.name) {
                Some(value) => {
                    values.insert(field.name.clone(), value.clone());
                    fields_set.insert(field.name.clone());
                }
                None => {
                    values.insert(field.name.clone(), field.default.clone());
                }
            }
        }

        Ok(ProbeInstance {
            spec: self,
            values,
            fields_set,
        })
    }
}

/// A constructed model instance ready to be dumped.
#[derive(Debug)]
pub struct ProbeInstance<'a> {
    spec: &'a ModelSpec,
    values: Map<String, Value>,
    fields_set: BTreeSet<String>,
}

impl ProbeInstance<'_> {
    /// Serializes the instance to a plain mapping under the given options.
    ///
    /// Field-level `exclude` always wins: an excluded field is omitted even
    /// when the call-level `include` set names it. Call-level `include` and
    /// `exclude` sets are applied next, then the `exclude_none`,
    /// `exclude_defaults`, and `exclude_unset` variants.
    pub fn dump(&self, options: &DumpOptions) -> Map<String, Value> {
        let mut output = Map::new();

        for field in self.spec.fields() {
            if field.exclude {
                continue;
            }
            if let Some(include) = &options.include
                && !include.contains(&field.name)
            {
                continue;
            }
            if let Some(exclude) = &options.exclude
                && exclude.contains(&field.name)
            {
                continue;
            }

            let value = self.values.get(&field.name).unwrap_or(&Value::Null);

            if options.exclude_none && value.is_null() {
                continue;
            }
            if options.exclude_defaults && *value == field.default {
                continue;
            }
            if options.exclude_unset && !self.fields_set.contains(&field.name) {
                continue;
            }

            output.insert(field.name.clone(), value.clone());
        }

        output
    }
}

/// Call-level settings accepted by [`ProbeInstance::dump`].
///
/// The default value is a bare dump: no include/exclude sets and no
/// variant flags.
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// When present, only fields named in the set are dumped.
    pub include: Option<BTreeSet<String>>,
    /// When present, fields named in the set are omitted.
    pub exclude: Option<BTreeSet<String>>,
    /// Omit fields whose current value is null.
    pub exclude_none: bool,
    /// Omit fields whose current value equals their declared default.
    pub exclude_defaults: bool,
    /// Omit fields the constructor arguments did not explicitly set.
    pub exclude_unset: bool,
}
