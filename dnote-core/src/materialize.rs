use crate::vault::Vault;
use anyhow::Result;

/// Makes sure every folder above `file_path` exists, creating the missing ones
/// from the root outwards. Existing folders and files are left untouched.
///
/// When the immediate parent already exists nothing else is checked. Returns the
/// folders that were created.
pub fn ensure_parent_folders<V: Vault + ?Sized>(vault: &V, file_path: &str) -> Result<Vec<String>> {
    let Some((folder_path, _)) = file_path.rsplit_once('/') else {
        return Ok(Vec::new());
    };
    if vault.entry(folder_path).is_some() {
        return Ok(Vec::new());
    }

    let mut created = Vec::new();
    let mut current = String::with_capacity(folder_path.len());
    for (i, segment) in folder_path.split('/').enumerate() {
        if i > 0 {
            current.push('/');
        }
        current.push_str(segment);
        if vault.entry(&current).is_none() {
            vault.create_folder(&current)?;
            tracing::debug!(folder = %current, "created folder");
            created.push(current.clone());
        }
    }
    Ok(created)
}
