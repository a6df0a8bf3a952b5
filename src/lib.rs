//! Launches the Unreal Editor's asset diff viewer from `git difftool` and
//! `git mergetool`.

pub mod config;
pub mod environment;
pub mod invocation;
pub mod launch;
pub mod locate;
pub mod normalize;
pub mod project;

pub use config::Config;
pub use environment::Environment;
pub use invocation::Invocation;
pub use launch::DiffLaunch;
pub use project::ProjectDescriptor;
