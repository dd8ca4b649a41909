pub mod config;
pub mod creator;
pub mod daily_notes;
pub mod date_format;
pub mod dates;
pub mod materialize;
pub mod paths;
pub mod ready;
pub mod settings;
pub mod vault;

#[cfg(test)]
mod tests;

pub use config::{Config, SettingsStore, TomlSettingsStore};
pub use creator::{CreateOutcome, create_daily_note};
pub use daily_notes::{DailyNotes, Startup};
pub use dates::DateProps;
pub use paths::ResolvedPaths;
pub use ready::{ReadySignal, ReadyTrigger, ready_signal};
pub use settings::{FIELDS, FieldDescriptor, FieldKind, FieldValue, SettingKey, Settings};
pub use vault::{FsVault, Vault, VaultEntry};
