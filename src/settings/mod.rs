//! Exclude/include setting catalog and projections.
//!
//! An [`ExcludeSetting`] names one configuration value to probe, either
//! attached to a field declaration or passed to the dump call. Each setting
//! projects to a markdown display string for table headings and to a kwarg
//! fragment consumed by the probe-model engine. The three catalogs at the
//! bottom are fixed at startup; their order determines table column and row
//! order, so entries must stay order-stable.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use crate::model::DumpOptions;

#[cfg(test)]
mod tests;

const OPEN_NOWRAP_SPAN: &str = "<span style=\"white-space: nowrap;\">";
const CLOSE_NOWRAP_SPAN: &str = "</span>";

/// Names of the dump/field settings the tables probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingName {
    Exclude,
    Include,
    ExcludeNone,
    ExcludeDefaults,
    ExcludeUnset,
}

impl SettingName {
    /// Returns the setting's spelling as it appears in the engine API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Include => "include",
            Self::ExcludeNone => "exclude_none",
            Self::ExcludeDefaults => "exclude_defaults",
            Self::ExcludeUnset => "exclude_unset",
        }
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a setting: a boolean flag or a set of field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Flag(bool),
    Fields(BTreeSet<String>),
}

impl SettingValue {
    /// Builds a field-set value from a list of field names.
    pub fn fields(names: &[&str]) -> Self {
        Self::Fields(names.iter().map(ToString::to_string).collect())
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Fields(names) => {
                let quoted: Vec<String> =
                    names.iter().map(|name| format!("\"{name}\"")).collect();
                write!(f, "{{{}}}", quoted.join(", "))
            }
        }
    }
}

/// One named configuration value to probe.
///
/// A setting with `name == None` is the "not specified" sentinel: it
/// contributes no kwarg to any invocation, whatever its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSetting {
    name: Option<SettingName>,
    value: SettingValue,
    display_override: Option<&'static str>,
}

impl ExcludeSetting {
    /// Creates a setting carrying the given name and value.
    pub fn new(name: SettingName, value: SettingValue) -> Self {
        Self {
            name: Some(name),
            value,
            display_override: None,
        }
    }

    /// Creates the "not specified" sentinel setting.
    pub fn not_specified() -> Self {
        Self {
            name: None,
            value: SettingValue::fields(&[]),
            display_override: None,
        }
    }

    /// Overrides the rendered display string for table headings.
    pub fn with_display(mut self, display: &'static str) -> Self {
        self.display_override = Some(display);
        self
    }

    /// Returns the markdown display string for this setting.
    ///
    /// Falls back to `` `name=value` `` wrapped in a no-line-break span
    /// when no override is set.
    pub fn markdown_str(&self) -> String {
        if let Some(display) = self.display_override {
            return display.to_string();
        }

        match self.name {
            Some(name) => format!(
                "{OPEN_NOWRAP_SPAN}`{name}={value}`{CLOSE_NOWRAP_SPAN}",
                value = self.value
            ),
            None => "`<not specified>`".to_string(),
        }
    }

    /// Returns the kwarg fragment this setting contributes.
    ///
    /// The sentinel contributes nothing; every other setting contributes
    /// exactly its name/value pair.
    pub fn kwarg(&self) -> Option<(SettingName, &SettingValue)> {
        self.name.map(|name| (name, &self.value))
    }

    /// Applies this setting's kwarg fragment to a set of dump options.
    ///
    /// The sentinel leaves the options untouched, so a dump under it is a
    /// bare dump. Name/value pairings the dump call does not accept (a flag
    /// spelling of `exclude`/`include`, a field set on a variant flag) are
    /// ignored.
    pub fn apply_to_dump(&self, options: &mut DumpOptions) {
        let Some((name, value)) = self.kwarg() else {
            return;
        };

        match (name, value) {
            (SettingName::Exclude, SettingValue::Fields(names)) => {
                options.exclude = Some(names.clone());
            }
            (SettingName::Include, SettingValue::Fields(names)) => {
                options.include = Some(names.clone());
            }
            (SettingName::ExcludeNone, SettingValue::Flag(flag)) => {
                options.exclude_none = *flag;
            }
            (SettingName::ExcludeDefaults, SettingValue::Flag(flag)) => {
                options.exclude_defaults = *flag;
            }
            (SettingName::ExcludeUnset, SettingValue::Flag(flag)) => {
                options.exclude_unset = *flag;
            }
            _ => {}
        }
    }

    /// Returns the field-level exclusion flag this setting declares.
    ///
    /// Only an `exclude` flag spelling maps to a field declaration; the
    /// sentinel and every other pairing leave the field unexcluded.
    pub fn exclude_flag(&self) -> bool {
        matches!(
            self.kwarg(),
            Some((SettingName::Exclude, SettingValue::Flag(true)))
        )
    }
}

/// Field-level settings probed by the precedence tables.
pub static FIELD_EXCLUDE_SETTINGS: LazyLock<Vec<ExcludeSetting>> = LazyLock::new(|| {
    vec![
        ExcludeSetting::new(SettingName::Exclude, SettingValue::Flag(false)),
        ExcludeSetting::new(SettingName::Exclude, SettingValue::Flag(true)),
    ]
});

/// Call-level include/exclude override settings probed by the tables.
pub static MODEL_DUMP_EXCLUDE_OVERRIDES_SETTINGS: LazyLock<Vec<ExcludeSetting>> =
    LazyLock::new(|| {
        vec![
            ExcludeSetting::new(SettingName::Exclude, SettingValue::fields(&["name"])),
            ExcludeSetting::new(SettingName::Exclude, SettingValue::fields(&[])),
            ExcludeSetting::new(SettingName::Include, SettingValue::fields(&["name"])),
            ExcludeSetting::new(SettingName::Include, SettingValue::fields(&[])),
        ]
    });

/// Call-level exclusion-variant settings probed by the tables.
pub static MODEL_DUMP_EXCLUDE_VARIANTS_SETTINGS: LazyLock<Vec<ExcludeSetting>> =
    LazyLock::new(|| {
        vec![
            ExcludeSetting::not_specified(),
            ExcludeSetting::new(SettingName::ExcludeNone, SettingValue::Flag(true)),
            ExcludeSetting::new(SettingName::ExcludeDefaults, SettingValue::Flag(true)),
            ExcludeSetting::new(SettingName::ExcludeUnset, SettingValue::Flag(true)),
        ]
    });
