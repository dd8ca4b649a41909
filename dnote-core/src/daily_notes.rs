use crate::{
    Config,
    config::SettingsStore,
    creator::{CreateOutcome, create_daily_note},
    dates::{DateProps, reference_moment},
    paths::{ResolvedPaths, resolve_paths},
    ready::ReadySignal,
    settings::{self, FieldValue},
    vault::{FsVault, Vault},
};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;

pub struct DailyNotes {
    pub config: Config,
    pub vault: FsVault,
}

/// Everything computed before the host is ready: the paths for this run.
#[derive(Debug, Clone)]
pub struct Startup {
    pub date: DateProps,
    /// `None` when no template is configured.
    pub paths: Option<ResolvedPaths>,
}

impl DailyNotes {
    /// Creates a new `DailyNotes` instance with a specific `Config`.
    ///
    /// This also ensures that the vault directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        let vault = FsVault::open(&config.vault_dir)?;
        Ok(Self { config, vault })
    }

    /// Like [`DailyNotes::with_config`], but leaves the filesystem alone. For
    /// commands that only look at the config.
    pub fn unopened(config: Config) -> Self {
        let vault = FsVault::new(config.vault_dir.clone());
        Self { config, vault }
    }

    /// Phase one of start-up, for the configured reference date.
    pub fn prepare(&self) -> Startup {
        self.prepare_at(&reference_moment(self.config.reference_date))
    }

    /// Phase one of start-up, for a fixed moment.
    pub fn prepare_at(&self, moment: &DateTime<FixedOffset>) -> Startup {
        let settings = &self.config.settings;
        let date = DateProps::at(moment, &settings.date_format);
        let paths = resolve_paths(settings, &date);
        match &paths {
            Some(paths) => tracing::debug!(
                template = %paths.template_file_path,
                note = %paths.new_file_path,
                "resolved daily note paths"
            ),
            None => tracing::debug!("no template file configured"),
        }
        Startup { date, paths }
    }

    /// Absolute location of a vault path.
    pub fn absolute_path(&self, vault_path: &str) -> Result<PathBuf> {
        self.vault.resolve(vault_path)
    }

    /// Changes one setting and saves the config right away.
    pub fn edit_setting(
        &mut self,
        store: &impl SettingsStore,
        key: &str,
        raw: &str,
    ) -> Result<FieldValue> {
        if let Some(error) = &self.config.load_error {
            bail!("not saving settings, the config file could not be loaded ({error}); fix it first");
        }
        let mut edited = self.config.clone();
        let value = settings::edit(&mut edited.settings, key, raw)?;
        store.save(&edited).context("saving settings")?;
        self.config = edited;
        Ok(value)
    }
}

impl Startup {
    /// Phase two: waits for `ready`, then runs the note creator once.
    pub fn run_when_ready<V: Vault + ?Sized>(
        self,
        vault: &V,
        ready: ReadySignal,
    ) -> Result<CreateOutcome> {
        let Some(paths) = self.paths else {
            return Ok(CreateOutcome::Disabled);
        };
        if !ready.wait() {
            tracing::debug!("host was not ready, skipping daily note");
            return Ok(CreateOutcome::NotReady);
        }
        create_daily_note(vault, &paths)
    }
}
