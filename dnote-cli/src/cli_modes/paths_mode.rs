use crate::render::Renderer;
use dnote_core::DailyNotes;

pub fn paths_mode(renderer: &Renderer, daily_notes: &DailyNotes) {
    let startup = daily_notes.prepare();
    renderer.print_path_line("vault", &daily_notes.config.vault_dir.display().to_string());
    match startup.paths {
        Some(paths) => {
            renderer.print_path_line("template", &paths.template_file_path);
            renderer.print_path_line("note", &paths.new_file_path);
        }
        None => renderer.print_info(
            "Daily note creation is disabled: set `template-file-path` with `dnote settings set`.",
        ),
    }
}
