//! Access to the vault: the folder tree the daily notes are written into.
//!
//! Paths are vault-relative and slash-delimited (`Daily/2024/3. March/note.md`),
//! whatever the platform.

use anyhow::{Context, Result, bail};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Component, Path, PathBuf},
};

/// What exists at a vault path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultEntry {
    File,
    Folder,
    /// Anything else the filesystem can hold (sockets, devices...).
    Other,
}

/// File operations the note creator needs from its host.
///
/// Existence checks are expected to reflect the vault at call time.
pub trait Vault {
    /// What exists at `path`, or `None`.
    fn entry(&self, path: &str) -> Option<VaultEntry>;
    /// Full text content of the file at `path`.
    fn read(&self, path: &str) -> Result<String>;
    /// Creates a new file. Fails if anything already exists at `path`.
    fn create_file(&self, path: &str, content: &str) -> Result<()>;
    /// Creates one folder. Its parent must exist.
    fn create_folder(&self, path: &str) -> Result<()>;
}

/// A vault backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Opens the vault at `root`, creating the directory if needed.
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root).with_context(|| format!("creating vault dir {}", root.display()))?;
        Ok(Self::new(root.to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a vault path onto the filesystem. Empty and `.` segments are skipped;
    /// paths that would leave the vault are rejected.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let mut resolved = self.root.clone();
        for segment in path.split('/') {
            if segment.is_empty() || segment == "." {
                continue;
            }
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(name)), None) => resolved.push(name),
                _ => bail!("'{path}' is not a path inside the vault"),
            }
        }
        Ok(resolved)
    }
}

impl Vault for FsVault {
    fn entry(&self, path: &str) -> Option<VaultEntry> {
        let resolved = match self.resolve(path) {
            Ok(resolved) => resolved,
            Err(error) => {
                tracing::debug!("{error:#}");
                return None;
            }
        };
        let metadata = fs::metadata(resolved).ok()?;
        Some(if metadata.is_file() {
            VaultEntry::File
        } else if metadata.is_dir() {
            VaultEntry::Folder
        } else {
            VaultEntry::Other
        })
    }

    fn read(&self, path: &str) -> Result<String> {
        let resolved = self.resolve(path)?;
        fs::read_to_string(&resolved).with_context(|| format!("reading {}", resolved.display()))
    }

    fn create_file(&self, path: &str, content: &str) -> Result<()> {
        let resolved = self.resolve(path)?;
        let mut f = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&resolved)
            .with_context(|| format!("creating {}", resolved.display()))?;
        f.write_all(content.as_bytes())
            .with_context(|| format!("writing {}", resolved.display()))?;
        Ok(())
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        let resolved = self.resolve(path)?;
        fs::create_dir(&resolved)
            .with_context(|| format!("creating folder {}", resolved.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn mk_vault() -> (FsVault, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let vault = FsVault::open(&tmp.path().join("vault")).unwrap();
        (vault, tmp)
    }

    #[test]
    fn open_creates_the_root() {
        let (vault, _tmp) = mk_vault();
        assert!(vault.root().is_dir());
        assert_eq!(vault.entry(""), Some(VaultEntry::Folder));
    }

    #[test]
    fn entry_distinguishes_files_and_folders() {
        let (vault, _tmp) = mk_vault();
        fs::create_dir_all(vault.root().join("Templates")).unwrap();
        fs::write(vault.root().join("Templates/Daily.md"), "# Daily").unwrap();

        assert_eq!(vault.entry("Templates"), Some(VaultEntry::Folder));
        assert_eq!(vault.entry("Templates/Daily.md"), Some(VaultEntry::File));
        assert_eq!(vault.entry("Templates/Weekly.md"), None);
    }

    #[test]
    fn resolve_skips_empty_segments() {
        let (vault, _tmp) = mk_vault();
        assert_eq!(
            vault.resolve("Daily//2024/./x.md").unwrap(),
            vault.root().join("Daily").join("2024").join("x.md")
        );
    }

    #[test]
    fn resolve_rejects_parent_segments() {
        let (vault, _tmp) = mk_vault();
        assert!(vault.resolve("../outside.md").is_err());
        assert_eq!(vault.entry("../"), None);
    }

    #[test]
    fn create_file_never_overwrites() {
        let (vault, _tmp) = mk_vault();
        vault.create_file("note.md", "first").unwrap();
        assert!(vault.create_file("note.md", "second").is_err());
        assert_eq!(vault.read("note.md").unwrap(), "first");
    }

    #[test]
    fn create_folder_needs_its_parent() {
        let (vault, _tmp) = mk_vault();
        assert!(vault.create_folder("a/b").is_err());
        vault.create_folder("a").unwrap();
        vault.create_folder("a/b").unwrap();
        assert_eq!(vault.entry("a/b"), Some(VaultEntry::Folder));
    }

    #[test]
    fn read_missing_file_names_the_path() {
        let (vault, _tmp) = mk_vault();
        let err = vault.read("missing.md").unwrap_err();
        assert!(format!("{err:#}").contains("missing.md"));
    }
}
