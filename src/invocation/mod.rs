//! One run of the diff tool: normalize, resolve the project, locate the
//! editor, launch.


use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::config::Config;
use crate::environment::Environment;
use crate::launch::{DiffLaunch, Mode};
use crate::locate::EditorLocator;
use crate::normalize::{self, PathNormalizer};
use crate::project::ProjectDescriptor;

/// Everything a run reads from the outside world, captured up front.
pub struct Invocation {
    /// Directory the diff driver started us in.
    pub cwd: PathBuf,
    /// Environment variables at startup.
    pub env: Environment,
    /// User configuration.
    pub config: Config,
    normalizer: Box<dyn PathNormalizer>,
}

/// Output of the resolution steps, ready to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    /// Project the editor is opened on.
    pub project: ProjectDescriptor,
    /// The editor command.
    pub launch: DiffLaunch,
}

impl Invocation {
    /// Context built from explicit parts, using the host normalizer.
    #[must_use]
    pub fn new(cwd: PathBuf, env: Environment, config: Config) -> Self {
        Self {
            cwd,
            env,
            config,
            normalizer: normalize::host(),
        }
    }

    /// Context for the current process.
    ///
    /// # Errors
    ///
    /// Fails when the working directory is unavailable or the config file is
    /// unreadable.
    pub fn from_process() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the working directory")?;
        Ok(Self::new(cwd, Environment::from_process(), Config::load()?))
    }

    /// Replace the path normalizer.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Box<dyn PathNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Run every resolution step, without launching anything.
    ///
    /// # Errors
    ///
    /// Fails on the first step that cannot be satisfied.
    pub fn prepare(&self, args: &[String]) -> Result<Prepared> {
        let args = self.normalizer.normalize(&self.cwd, args)?;
        let project = ProjectDescriptor::resolve(&self.cwd)?;
        let editor = EditorLocator::new(&self.env, &self.config)
            .locate(&project.engine_association)?;
        let launch = DiffLaunch::new(editor, project.path.clone(), args);
        Ok(Prepared { project, launch })
    }

    /// Resolve, print the summary, launch the editor and wait for it.
    ///
    /// # Errors
    ///
    /// Fails when resolution fails or the editor cannot be started. The
    /// editor's own exit status is not an error.
    pub fn run(&self, args: &[String]) -> Result<()> {
        let prepared = self.prepare(args)?;
        print!("{}", prepared.summary());
        prepared.launch.run()?;
        println!("Difftool executed.");
        Ok(())
    }
}

impl Prepared {
    /// Progress lines printed before the editor starts.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "--- Unreal Engine diff tool ---");
        let _ = writeln!(out, "Unreal Engine version: {}", self.project.engine_association);
        let _ = writeln!(out, "Located editor path: {}", self.launch.editor().display());
        let _ = writeln!(out, "UProject path: {}", self.project.path.display());
        let _ = writeln!(out, "Difftool arguments:");
        for arg in self.launch.args() {
            let _ = writeln!(out, "    {arg}");
        }
        let _ = match self.launch.mode() {
            Mode::Help => writeln!(out, "~ Execute -h UE difftool ~"),
            Mode::Diff => writeln!(out, "~ Execute UE difftool ~"),
        };
        out
    }
}
