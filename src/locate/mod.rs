//! Finds the Unreal Editor binary for a given engine version.

#[cfg(test)]
mod tests;

use anyhow::{bail, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::environment::Environment;

/// Platform variables holding the conventional install roots.
pub const PROGRAM_FILES_VARS: [&str; 2] = ["ProgramFiles", "ProgramFiles(x86)"];

/// Name of the variable that overrides the editor path for `engine`,
/// e.g. `UE5.1_EDITOR_PATH`.
#[must_use]
pub fn override_var(engine: &str) -> String {
    format!("UE{engine}_EDITOR_PATH")
}

/// Editor binary location relative to an install root.
#[must_use]
pub fn editor_subpath(engine: &str) -> PathBuf {
    let install = format!("UE_{engine}");
    [
        "Epic Games",
        install.as_str(),
        "Engine",
        "Binaries",
        "Win64",
        "UnrealEditor.exe",
    ]
    .iter()
    .collect()
}

/// First candidate that exists on disk, or every candidate that was probed.
///
/// # Errors
///
/// Returns the probed candidates, in order, when none of them exists.
pub fn probe<I>(candidates: I) -> std::result::Result<PathBuf, Vec<PathBuf>>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut probed = Vec::new();
    for candidate in candidates {
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "editor found");
            return Ok(candidate);
        }
        tracing::debug!(path = %candidate.display(), "editor not found");
        probed.push(candidate);
    }
    Err(probed)
}

/// Resolves the editor path from the override variable, the user config, and
/// the install roots, in that order.
#[derive(Debug, Clone, Copy)]
pub struct EditorLocator<'a> {
    env: &'a Environment,
    config: &'a Config,
}

impl<'a> EditorLocator<'a> {
    /// Locator reading from `env` and `config`.
    #[must_use]
    pub const fn new(env: &'a Environment, config: &'a Config) -> Self {
        Self { env, config }
    }

    /// Install roots, in probe order.
    #[must_use]
    pub fn search_roots(&self) -> Vec<PathBuf> {
        let mut roots = self.config.search.roots.clone();
        if self.config.search.program_files {
            roots.extend(
                PROGRAM_FILES_VARS
                    .iter()
                    .filter_map(|var| self.env.get_non_empty(var))
                    .map(PathBuf::from),
            );
        }
        roots
    }

    /// Editor binary for `engine`.
    ///
    /// An explicit override (variable or config entry) is returned as-is,
    /// without checking that it exists.
    ///
    /// # Errors
    ///
    /// Fails when there is no override and no install root holds the editor.
    pub fn locate(&self, engine: &str) -> Result<PathBuf> {
        let var = override_var(engine);
        if let Some(path) = self.env.get_non_empty(&var) {
            let path = PathBuf::from(path);
            tracing::debug!(%var, path = %path.display(), "editor path from environment");
            warn_if_missing(&path);
            return Ok(path);
        }

        if let Some(path) = self.config.editor_path(engine) {
            tracing::debug!(path = %path.display(), "editor path from config");
            warn_if_missing(path);
            return Ok(path.to_path_buf());
        }

        let subpath = editor_subpath(engine);
        let candidates = self.search_roots().into_iter().map(|root| root.join(&subpath));
        match probe(candidates) {
            Ok(path) => Ok(path),
            Err(probed) => {
                let mut searched = String::new();
                for path in &probed {
                    let _ = write!(searched, "\n    {}", path.display());
                }
                if probed.is_empty() {
                    searched.push_str(" (no search roots)");
                }
                bail!(
                    "Unable to locate the Unreal Engine {engine} editor. If it is installed in a \
                     custom directory, set the `{var}` environment variable to the editor binary. \
                     Searched:{searched}"
                )
            }
        }
    }
}

fn warn_if_missing(path: &Path) {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "configured editor path does not exist");
    }
}
