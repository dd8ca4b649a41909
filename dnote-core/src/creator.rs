use crate::materialize::ensure_parent_folders;
use crate::paths::ResolvedPaths;
use crate::vault::{Vault, VaultEntry};
use anyhow::Result;

/// How a note creation pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// No template is configured.
    Disabled,
    /// The host never signalled it was ready.
    NotReady,
    /// Today's note is already there.
    AlreadyExists { path: String },
    /// Nothing usable at the template path (missing, or not a file).
    TemplateMissing { path: String },
    Created {
        path: String,
        created_folders: Vec<String>,
    },
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created { .. })
    }
}

/// Creates the daily note at `paths.new_file_path` as a copy of the template,
/// unless it already exists.
///
/// Safe to run on every start-up: an existing note is never touched. A missing
/// template is not an error. I/O failures while reading the template or creating
/// the note are returned as they are, without cleaning up folders created so far.
pub fn create_daily_note<V: Vault + ?Sized>(vault: &V, paths: &ResolvedPaths) -> Result<CreateOutcome> {
    let ResolvedPaths {
        template_file_path,
        new_file_path,
    } = paths;

    if vault.entry(new_file_path).is_some() {
        tracing::debug!(path = %new_file_path, "daily note already exists");
        return Ok(CreateOutcome::AlreadyExists {
            path: new_file_path.clone(),
        });
    }

    if vault.entry(template_file_path) != Some(VaultEntry::File) {
        tracing::debug!(path = %template_file_path, "template file not found");
        return Ok(CreateOutcome::TemplateMissing {
            path: template_file_path.clone(),
        });
    }

    let content = vault.read(template_file_path)?;
    let created_folders = ensure_parent_folders(vault, new_file_path)?;
    vault.create_file(new_file_path, &content)?;
    tracing::info!(path = %new_file_path, "daily note created");

    Ok(CreateOutcome::Created {
        path: new_file_path.clone(),
        created_folders,
    })
}
