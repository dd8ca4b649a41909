use crate::dates::DateProps;
use crate::settings::Settings;

/// Extension of every note in the vault.
pub const NOTE_EXTENSION: &str = ".md";

/// The two vault paths the note creator works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub template_file_path: String,
    pub new_file_path: String,
}

/// `Templates/Daily` -> `Templates/Daily.md`
pub fn template_path(template_file_path: &str) -> String {
    format!("{template_file_path}{NOTE_EXTENSION}")
}

/// `3. March`
pub fn month_folder_name(props: &DateProps) -> String {
    format!("{}. {}", props.month_index, props.month)
}

/// `03-15-2024 Journal.md`. The separating space is kept when the suffix is empty,
/// so existing notes named `03-15-2024 .md` keep being found.
pub fn day_file_name(props: &DateProps, suffix: &str) -> String {
    format!("{} {suffix}{NOTE_EXTENSION}", props.date)
}

/// `{root}/{year}/{month_index}. {month}/{date} {suffix}.md`, leaving out the
/// root when empty and the year/month folders when disabled.
pub fn daily_note_path(settings: &Settings, props: &DateProps) -> String {
    let mut path = String::new();
    if !settings.new_file_path.is_empty() {
        path.push_str(&settings.new_file_path);
        path.push('/');
    }
    if settings.is_year_enabled {
        path.push_str(&props.year);
        path.push('/');
    }
    if settings.is_month_enabled {
        path.push_str(&month_folder_name(props));
        path.push('/');
    }
    path.push_str(&day_file_name(props, &settings.file_name_suffix));
    path
}

/// Both paths, or `None` when no template is configured.
pub fn resolve_paths(settings: &Settings, props: &DateProps) -> Option<ResolvedPaths> {
    if settings.template_file_path.is_empty() {
        return None;
    }
    Some(ResolvedPaths {
        template_file_path: template_path(&settings.template_file_path),
        new_file_path: daily_note_path(settings, props),
    })
}
