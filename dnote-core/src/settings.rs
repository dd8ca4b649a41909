//! The user-editable settings record and the table of fields that drives the
//! settings panel.

use crate::date_format::{DEFAULT_DATE_FORMAT, format_date};
use anyhow::{Result, anyhow, bail};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Moment-style pattern used for the note's file name.
    pub date_format: String,
    /// Vault-relative template note, without `.md`. Empty disables note creation.
    pub template_file_path: String,
    /// Vault-relative folder for new notes. Empty means the vault root.
    pub new_file_path: String,
    pub is_year_enabled: bool,
    pub is_month_enabled: bool,
    pub file_name_suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            template_file_path: String::new(),
            new_file_path: String::new(),
            is_year_enabled: true,
            is_month_enabled: true,
            file_name_suffix: String::new(),
        }
    }
}

/// Settings as found on disk: any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialSettings {
    pub date_format: Option<String>,
    pub template_file_path: Option<String>,
    pub new_file_path: Option<String>,
    pub is_year_enabled: Option<bool>,
    pub is_month_enabled: Option<bool>,
    pub file_name_suffix: Option<String>,
}

impl Settings {
    /// Fills every field missing from `partial` with its default.
    pub fn merged(partial: PartialSettings) -> Self {
        let defaults = Self::default();
        Self {
            date_format: partial.date_format.unwrap_or(defaults.date_format),
            template_file_path: partial
                .template_file_path
                .unwrap_or(defaults.template_file_path),
            new_file_path: partial.new_file_path.unwrap_or(defaults.new_file_path),
            is_year_enabled: partial.is_year_enabled.unwrap_or(defaults.is_year_enabled),
            is_month_enabled: partial.is_month_enabled.unwrap_or(defaults.is_month_enabled),
            file_name_suffix: partial.file_name_suffix.unwrap_or(defaults.file_name_suffix),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SettingKey {
    DateFormat,
    TemplateFilePath,
    NewFilePath,
    YearFolder,
    MonthFolder,
    FileNameSuffix,
}

impl SettingKey {
    /// All keys, comma separated, for error messages.
    pub fn valid_keys() -> String {
        SettingKey::iter()
            .map(|k| k.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Toggle,
    /// A date pattern input with a live preview.
    DateFormat { default: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::Toggle(true) => write!(f, "on"),
            FieldValue::Toggle(false) => write!(f, "off"),
        }
    }
}

impl FieldKind {
    /// Turns user input into a value of this kind.
    pub fn parse(&self, raw: &str) -> Result<FieldValue> {
        match self {
            FieldKind::Text | FieldKind::DateFormat { .. } => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Toggle => match raw.trim().to_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Ok(FieldValue::Toggle(true)),
                "false" | "off" | "no" | "0" => Ok(FieldValue::Toggle(false)),
                other => bail!("'{other}' is not a toggle value (use on/off)"),
            },
        }
    }
}

/// One editable control of the settings panel, bound to a `Settings` field.
pub struct FieldDescriptor {
    pub key: SettingKey,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub get: fn(&Settings) -> FieldValue,
    pub set: fn(&mut Settings, FieldValue),
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish()
    }
}

impl FieldDescriptor {
    /// The date pattern rendered for `moment`, for date format fields only.
    pub fn preview(&self, settings: &Settings, moment: &DateTime<FixedOffset>) -> Option<String> {
        match (self.kind, (self.get)(settings)) {
            (FieldKind::DateFormat { default }, FieldValue::Text(pattern)) => {
                let pattern: &str = if pattern.is_empty() { default } else { &pattern };
                Some(format_date(pattern, moment))
            }
            _ => None,
        }
    }
}

fn text(value: FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text,
        FieldValue::Toggle(on) => on.to_string(),
    }
}

fn toggle(value: FieldValue) -> bool {
    matches!(value, FieldValue::Toggle(true))
}

/// The settings panel, in display order.
pub static FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor {
        key: SettingKey::DateFormat,
        name: "Date Format",
        description: "Output format for parsed dates",
        kind: FieldKind::DateFormat {
            default: DEFAULT_DATE_FORMAT,
        },
        get: |s| FieldValue::Text(s.date_format.clone()),
        set: |s, v| s.date_format = text(v),
    },
    FieldDescriptor {
        key: SettingKey::TemplateFilePath,
        name: "Template File Location",
        description: "Choose the file to use as template",
        kind: FieldKind::Text,
        get: |s| FieldValue::Text(s.template_file_path.clone()),
        set: |s, v| s.template_file_path = text(v),
    },
    FieldDescriptor {
        key: SettingKey::NewFilePath,
        name: "New File Location",
        description: "Choose root folder to store new daily notes",
        kind: FieldKind::Text,
        get: |s| FieldValue::Text(s.new_file_path.clone()),
        set: |s, v| s.new_file_path = text(v),
    },
    FieldDescriptor {
        key: SettingKey::YearFolder,
        name: "Enable Year Subdirectory",
        description: "Add year to new file location path",
        kind: FieldKind::Toggle,
        get: |s| FieldValue::Toggle(s.is_year_enabled),
        set: |s, v| s.is_year_enabled = toggle(v),
    },
    FieldDescriptor {
        key: SettingKey::MonthFolder,
        name: "Enable Month Subdirectory",
        description: "Add month to new file location path",
        kind: FieldKind::Toggle,
        get: |s| FieldValue::Toggle(s.is_month_enabled),
        set: |s, v| s.is_month_enabled = toggle(v),
    },
    FieldDescriptor {
        key: SettingKey::FileNameSuffix,
        name: "File Name Suffix",
        description: "Add a suffix to daily notes file name",
        kind: FieldKind::Text,
        get: |s| FieldValue::Text(s.file_name_suffix.clone()),
        set: |s, v| s.file_name_suffix = text(v),
    },
];

pub fn field(key: SettingKey) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|field| field.key == key)
}

/// Parses `raw` for the field named `key` and stores it in `settings`.
/// Nothing is changed when the key or the value is invalid.
pub fn edit(settings: &mut Settings, key: &str, raw: &str) -> Result<FieldValue> {
    let key = SettingKey::from_str(key).map_err(|_| {
        anyhow!(
            "unknown setting '{key}' (expected one of: {})",
            SettingKey::valid_keys()
        )
    })?;
    let field = field(key).ok_or_else(|| anyhow!("no field for setting '{}'", key.as_ref()))?;
    let value = field.kind.parse(raw)?;
    (field.set)(settings, value.clone());
    Ok(value)
}
