//! Starts the editor in diff mode and waits for it.


use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Editor flag that opens the asset diff view.
pub const DIFF_FLAG: &str = "-diff";
/// Forwarded flag that asks the editor's diff tool for its usage text.
pub const HELP_FLAG: &str = "-h";

/// How the editor's diff tool is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compare the forwarded files.
    Diff,
    /// Print the diff tool usage; other arguments are dropped.
    Help,
}

/// A fully resolved editor launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLaunch {
    editor: PathBuf,
    project: PathBuf,
    args: Vec<String>,
}

impl DiffLaunch {
    /// Launch of `editor` on `project` with the normalized `args`.
    #[must_use]
    pub const fn new(editor: PathBuf, project: PathBuf, args: Vec<String>) -> Self {
        Self { editor, project, args }
    }

    /// Editor binary.
    #[must_use]
    pub fn editor(&self) -> &Path {
        &self.editor
    }

    /// Project descriptor handed to the editor.
    #[must_use]
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Normalized arguments, as received.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Help mode as soon as `-h` appears anywhere in the arguments.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.args.iter().any(|a| a == HELP_FLAG) {
            Mode::Help
        } else {
            Mode::Diff
        }
    }

    /// Arguments passed to the editor binary.
    #[must_use]
    pub fn editor_args(&self) -> Vec<OsString> {
        let mut out: Vec<OsString> = vec![self.project.clone().into(), DIFF_FLAG.into()];
        match self.mode() {
            Mode::Help => out.push(HELP_FLAG.into()),
            Mode::Diff => out.extend(self.args.iter().map(OsString::from)),
        }
        out
    }

    /// Full command line, program first.
    #[must_use]
    pub fn command_line(&self) -> Vec<OsString> {
        let mut out = vec![self.editor.clone().into_os_string()];
        out.extend(self.editor_args());
        out
    }

    /// The process to spawn. Stdio is inherited.
    #[must_use]
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.editor);
        cmd.args(self.editor_args());
        cmd
    }

    /// Spawn the editor and block until it exits.
    ///
    /// The exit status is returned as-is; a non-zero status is only logged.
    ///
    /// # Errors
    ///
    /// Fails when the editor cannot be started.
    pub fn run(&self) -> Result<ExitStatus> {
        tracing::debug!(command = ?self.command_line(), "launching editor");
        let status = self
            .command()
            .status()
            .with_context(|| format!("Failed to launch {}", self.editor.display()))?;

        if !status.success() {
            tracing::warn!(code = ?status.code(), "editor exited with non-zero status");
        }
        Ok(status)
    }
}
