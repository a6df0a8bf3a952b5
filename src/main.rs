//! `ue-difftool`: hand the files of a git diff or merge to the Unreal Editor.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

use ue_difftool::Invocation;

/// Variable holding the log filter, e.g. `UE_DIFFTOOL_LOG=debug`.
const LOG_ENV: &str = "UE_DIFFTOOL_LOG";

/// Token clap treats as the end of its own options.
const ESCAPE: &str = "--";

#[derive(Parser)]
#[command(
    name = "ue-difftool",
    about = "Open git difftool/mergetool files in the Unreal Editor diff viewer",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Files from the diff driver (`$REMOTE $LOCAL [$BASE $MERGED]`), or `-h`
    /// for the editor's diff usage. Everything is forwarded.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    /// Parse `raw` (program name first) so that every token after the
    /// program name ends up in `args`, including a leading `--`.
    fn parse_forwarded<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
        let mut cli = Self::try_parse_from(&raw)?;
        // clap swallows the escape when it comes first
        if raw.get(1).is_some_and(|arg| arg.as_os_str() == ESCAPE) {
            cli.args.insert(0, ESCAPE.to_string());
        }
        Ok(cli)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_forwarded(std::env::args_os()).unwrap_or_else(|err| err.exit());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    Invocation::from_process()?.run(&cli.args)
}
