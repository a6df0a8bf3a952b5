//! Locates the `.uproject` descriptor below the working directory and reads
//! the engine version it declares.


use anyhow::{Context, Result};
use serde::Deserialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File-name suffix of an Unreal project descriptor.
pub const DESCRIPTOR_SUFFIX: &str = ".uproject";

/// The subset of a `.uproject` file the diff tool cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Where the descriptor was loaded from.
    pub path: PathBuf,
    /// Engine version the project is associated with, e.g. `5.1`.
    pub engine_association: String,
}

#[derive(Deserialize)]
struct RawDescriptor {
    #[serde(rename = "EngineAssociation")]
    engine_association: Option<String>,
}

impl ProjectDescriptor {
    /// Find the descriptor below `root` and load it.
    ///
    /// # Errors
    ///
    /// Fails when no descriptor exists in the tree or it cannot be loaded.
    pub fn resolve(root: &Path) -> Result<Self> {
        let path = find_descriptor(root)?;
        Self::load(&path)
    }

    /// Load the descriptor at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is not valid JSON, or does not
    /// declare `EngineAssociation`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project descriptor {}", path.display()))?;
        let raw: RawDescriptor = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse project descriptor {}", path.display()))?;
        let engine_association = raw.engine_association.with_context(|| {
            format!(
                "Unable to find the `EngineAssociation` in the project descriptor {}",
                path.display()
            )
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            engine_association,
        })
    }
}

/// First `.uproject` file below `root`.
///
/// Within each directory files come before subdirectories, and entries are
/// ordered by name, so the pick is stable across filesystems.
///
/// # Errors
///
/// Fails when the tree holds no descriptor.
pub fn find_descriptor(root: &Path) -> Result<PathBuf> {
    let found = WalkDir::new(root)
        .sort_by(files_first)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(%err, "skipping unreadable entry");
                None
            }
        })
        .find(|entry| entry.file_type().is_file() && is_descriptor(entry));

    match found {
        Some(entry) => {
            tracing::debug!(path = %entry.path().display(), "found project descriptor");
            Ok(entry.into_path())
        }
        None => anyhow::bail!(
            "No `*{DESCRIPTOR_SUFFIX}` file found under {}; run the diff tool from the Unreal project directory.",
            root.display()
        ),
    }
}

fn is_descriptor(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.ends_with(DESCRIPTOR_SUFFIX))
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
