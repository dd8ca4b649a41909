use crate::{cli::SettingsAction, render::Renderer};
use anyhow::Result;
use dnote_core::{DailyNotes, TomlSettingsStore, dates::reference_moment, settings};
use std::str::FromStr;

pub fn settings_mode(
    action: Option<&SettingsAction>,
    renderer: &Renderer,
    daily_notes: &mut DailyNotes,
    store: &TomlSettingsStore,
) -> Result<()> {
    match action {
        None => {
            let moment = reference_moment(daily_notes.config.reference_date);
            renderer.print_settings(&daily_notes.config.settings, &moment);
            renderer.print_path_line("config", &store.path().display().to_string());
        }
        Some(SettingsAction::Set { key, value }) => {
            let saved = daily_notes.edit_setting(store, key, value)?;
            let name = settings::SettingKey::from_str(key)
                .ok()
                .and_then(settings::field)
                .map_or(key.as_str(), |field| field.name);
            renderer.print_notice(&format!("{name} set to '{saved}'"));
        }
    }
    Ok(())
}
