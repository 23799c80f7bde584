//! Unit tests for setting projections and the fixed catalogs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use crate::model::DumpOptions;
use crate::settings::{
    ExcludeSetting, FIELD_EXCLUDE_SETTINGS, MODEL_DUMP_EXCLUDE_OVERRIDES_SETTINGS,
    MODEL_DUMP_EXCLUDE_VARIANTS_SETTINGS, SettingName, SettingValue,
};

#[test]
fn sentinel_contributes_no_kwarg() {
    let sentinel = ExcludeSetting::not_specified();

    assert_eq!(sentinel.kwarg(), None);

    let mut options = DumpOptions::default();
    sentinel.apply_to_dump(&mut options);
    assert!(options.include.is_none());
    assert!(options.exclude.is_none());
    assert!(!options.exclude_none);
    assert!(!options.exclude_defaults);
    assert!(!options.exclude_unset);
}

#[test]
fn named_setting_contributes_exactly_its_pair() {
    let setting = ExcludeSetting::new(SettingName::ExcludeNone, SettingValue::Flag(true));

    let (name, value) = setting.kwarg().unwrap();
    assert_eq!(name, SettingName::ExcludeNone);
    assert_eq!(*value, SettingValue::Flag(true));
}

#[test]
fn markdown_str_canonical_wrap() {
    let setting = ExcludeSetting::new(SettingName::Exclude, SettingValue::Flag(false));

    assert_eq!(
        setting.markdown_str(),
        "<span style=\"white-space: nowrap;\">`exclude=false`</span>"
    );
}

#[test]
fn markdown_str_renders_field_sets() {
    let setting = ExcludeSetting::new(SettingName::Include, SettingValue::fields(&["name"]));
    assert_eq!(
        setting.markdown_str(),
        "<span style=\"white-space: nowrap;\">`include={\"name\"}`</span>"
    );

    let empty = ExcludeSetting::new(SettingName::Exclude, SettingValue::fields(&[]));
    assert_eq!(
        empty.markdown_str(),
        "<span style=\"white-space: nowrap;\">`exclude={}`</span>"
    );
}

#[test]
fn markdown_str_prefers_override() {
    let setting = ExcludeSetting::new(SettingName::Exclude, SettingValue::Flag(true))
        .with_display("`always excluded`");

    assert_eq!(setting.markdown_str(), "`always excluded`");
}

#[test]
fn sentinel_markdown_str() {
    assert_eq!(
        ExcludeSetting::not_specified().markdown_str(),
        "`<not specified>`"
    );
}

#[test]
fn apply_to_dump_sets_matching_option() {
    let mut options = DumpOptions::default();

    ExcludeSetting::new(SettingName::Exclude, SettingValue::fields(&["name"]))
        .apply_to_dump(&mut options);
    ExcludeSetting::new(SettingName::ExcludeUnset, SettingValue::Flag(true))
        .apply_to_dump(&mut options);

    assert!(options.exclude.unwrap().contains("name"));
    assert!(options.exclude_unset);
    assert!(options.include.is_none());
}

#[test]
fn exclude_flag_projection() {
    let excluded = ExcludeSetting::new(SettingName::Exclude, SettingValue::Flag(true));
    let included = ExcludeSetting::new(SettingName::Exclude, SettingValue::Flag(false));

    assert!(excluded.exclude_flag());
    assert!(!included.exclude_flag());
    assert!(!ExcludeSetting::not_specified().exclude_flag());
}

#[test]
fn catalogs_are_order_stable() {
    // Column/row order in the generated tables depends on these orders.
    let field: Vec<String> = FIELD_EXCLUDE_SETTINGS
        .iter()
        .map(ExcludeSetting::markdown_str)
        .collect();
    assert_eq!(
        field,
        [
            "<span style=\"white-space: nowrap;\">`exclude=false`</span>",
            "<span style=\"white-space: nowrap;\">`exclude=true`</span>",
        ]
    );

    assert_eq!(MODEL_DUMP_EXCLUDE_OVERRIDES_SETTINGS.len(), 4);
    assert_eq!(MODEL_DUMP_EXCLUDE_VARIANTS_SETTINGS.len(), 4);
    assert_eq!(
        MODEL_DUMP_EXCLUDE_VARIANTS_SETTINGS[0].markdown_str(),
        "`<not specified>`"
    );
}
