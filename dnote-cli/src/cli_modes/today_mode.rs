use super::editor_utils::{open_file_in_editor, resolve_editor};
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use dnote_core::{CreateOutcome, DailyNotes, Vault, ready_signal};

/// Start-up as the host sees it: prepare the paths, declare the CLI ready, and
/// let the note creator run once.
pub fn today_mode(cli: &Cli, renderer: &Renderer, daily_notes: &DailyNotes) -> Result<()> {
    let (trigger, signal) = ready_signal();
    let startup = daily_notes.prepare();
    let note_path = startup.paths.as_ref().map(|p| p.new_file_path.clone());

    // Nothing else to initialise before the vault can be used.
    trigger.fire();

    let outcome = startup.run_when_ready(&daily_notes.vault, signal)?;
    tracing::debug!(?outcome, "start-up finished");
    if let CreateOutcome::Created { path, .. } = &outcome {
        renderer.print_notice("Daily note created!");
        renderer.print_path_line("note", path);
    }

    if cli.edit {
        match note_path {
            Some(path) if daily_notes.vault.entry(&path).is_some() => {
                let editor = resolve_editor(&daily_notes.config.editor);
                let absolute = daily_notes.absolute_path(&path)?;
                open_file_in_editor(&editor, &absolute)?;
            }
            Some(path) => renderer.print_info(&format!("No daily note at {path} to edit.")),
            None => renderer.print_info("No template file configured, see `dnote settings`."),
        }
    }
    Ok(())
}
