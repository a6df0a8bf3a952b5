//! Optional user configuration.

mod ops;


use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// User configuration read from `~/.config/ue-difftool/config.toml`.
///
/// Every section is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor binary overrides.
    pub editor: EditorConfig,
    /// Where to look for engine installs.
    pub search: SearchConfig,
}

/// `[editor]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor binary per engine version, e.g. `"5.1" = 'D:\UE_5.1\...\UnrealEditor.exe'`.
    /// Consulted after the `UE<version>_EDITOR_PATH` variable.
    pub paths: BTreeMap<String, PathBuf>,
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Extra install roots, probed before the Program Files directories.
    pub roots: Vec<PathBuf>,
    /// Whether `ProgramFiles` and `ProgramFiles(x86)` are probed.
    pub program_files: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            program_files: true,
        }
    }
}
