use crate::settings::{PartialSettings, Settings};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory of the vault the daily notes live in.
    pub vault_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// The day the daily note is created for. Defaults to today.
    pub reference_date: NaiveDate,
    pub settings: Settings,
    /// Why the persisted config could not be used, if it could not. Saving is
    /// refused while set so the file is never replaced by defaults.
    pub load_error: Option<String>,
}

/// The config file as written on disk. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub vault_dir: Option<PathBuf>,
    pub editor: Option<String>,
    #[serde(flatten)]
    pub settings: PartialSettings,
}

#[derive(Serialize)]
struct FileConfigOut<'a> {
    vault_dir: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    editor: Option<&'a str>,
    #[serde(flatten)]
    settings: &'a Settings,
}

/// Where the config record is loaded from and saved to.
pub trait SettingsStore {
    /// The persisted record, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<FileConfig>>;
    fn save(&self, config: &Config) -> Result<()>;
}

/// A TOML file holding the config record.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses the first existing config file (XDG path, then native), or the XDG
    /// path when none exists yet.
    pub fn discover() -> Self {
        let candidates = Self::config_file_paths();
        let path = candidates
            .iter()
            .find(|p| p.exists())
            .or(candidates.first())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("dnote.toml"));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("dnote").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("dnote").join("config.toml");
            v.push(native);
        }
        v
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<Option<FileConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let s = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let file_config =
            Config::parse_file(&s).with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(file_config))
    }

    fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        let out = FileConfigOut {
            vault_dir: &config.vault_dir,
            editor: config.editor.as_deref(),
            settings: &config.settings,
        };
        let s = toml::to_string(&out).context("serializing config")?;
        fs::write(&self.path, s).with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}

impl Config {
    /// Public entrypoint: load config from `store` and merge it over the defaults.
    /// An unreadable or malformed file is reported and the defaults are used.
    pub fn load_from(store: &impl SettingsStore) -> Result<Self> {
        match store.load() {
            Ok(file_config) => Ok(Self::from_file_config(file_config.unwrap_or_default())),
            Err(error) => {
                tracing::warn!("ignoring unusable config file: {error:#}");
                let mut config = Self::from_file_config(FileConfig::default());
                config.load_error = Some(format!("{error:#}"));
                Ok(config)
            }
        }
    }

    /// Applies the defaults to every key missing from `file_config`.
    pub fn from_file_config(file_config: FileConfig) -> Self {
        let vault_dir = file_config.vault_dir.unwrap_or_else(Self::default_vault_dir);
        Self {
            vault_dir,
            editor: file_config.editor,
            reference_date: Local::now().date_naive(),
            settings: Settings::merged(file_config.settings),
            load_error: None,
        }
    }

    /// Default vault root: `{data_dir}/dnote`
    /// - macOS:   `~/Library/Application Support/dnote`
    /// - Linux:   `$XDG_DATA_HOME/dnote` or `~/.local/share/dnote`
    /// - Windows: `%APPDATA%\dnote`
    fn default_vault_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("dnote");
            p
        } else {
            PathBuf::from("./dnote")
        }
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::mk_config;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("dnote").join("config.toml");
            let expected_native = b.config_dir().join("dnote").join("config.toml");
            let c = TomlSettingsStore::config_file_paths();
            assert_eq!(c.get(0), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_vault_dir_and_editor() {
        let toml = r#"
            vault_dir = "/tmp/my-vault"
            editor = "hx"
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert_eq!(fc.vault_dir.as_deref(), Some(Path::new("/tmp/my-vault")));
        assert_eq!(fc.editor.as_deref(), Some("hx"));
        assert_eq!(fc.settings, PartialSettings::default());
    }

    #[test]
    fn parse_file_reads_flat_settings_keys() {
        let toml = r#"
            vault_dir = "/tmp/my-vault"
            template_file_path = "Templates/Daily"
            is_year_enabled = false
            file_name_suffix = "Log"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.settings.template_file_path, "Templates/Daily");
        assert!(!config.settings.is_year_enabled);
        assert!(config.settings.is_month_enabled);
        assert_eq!(config.settings.file_name_suffix, "Log");
        assert_eq!(config.settings.date_format, "MM-DD-YYYY");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let tmp = tempdir().unwrap();
        let store = TomlSettingsStore::new(tmp.path().join("config.toml"));
        assert!(store.load().unwrap().is_none());

        let config = Config::load_from(&store).unwrap();
        assert_eq!(config.settings, Settings::default());
        assert!(config.editor.is_none());
        assert!(config.load_error.is_none());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "is_year_enabled = \"not a bool\"").unwrap();
        let store = TomlSettingsStore::new(path);

        assert!(store.load().is_err());
        let config = Config::load_from(&store).unwrap();
        assert_eq!(config.settings, Settings::default());
        assert!(config.load_error.is_some());
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempdir().unwrap();
        let store = TomlSettingsStore::new(tmp.path().join("nested").join("config.toml"));
        let mut config = mk_config(tmp.path().join("vault"), None);
        config.editor = Some("hx".to_string());
        config.settings.template_file_path = "Templates/Daily".to_string();
        config.settings.is_month_enabled = false;

        store.save(&config).unwrap();
        let loaded = Config::load_from(&store).unwrap();

        assert_eq!(loaded.vault_dir, config.vault_dir);
        assert_eq!(loaded.editor.as_deref(), Some("hx"));
        assert_eq!(loaded.settings, config.settings);
    }
}
