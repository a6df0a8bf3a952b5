//! Rewrites path arguments from the diff driver into absolute, host-native
//! paths.
//!
//! Only drive-letter volumes are understood; on other hosts the arguments are
//! forwarded untouched.

mod drive_letter;


use anyhow::Result;
use std::path::Path;

pub use drive_letter::DriveLetter;

/// Prefix that marks an argument as a flag rather than a path.
pub const FLAG_MARKER: char = '-';

/// Turns the raw argument list into the list handed to the editor.
pub trait PathNormalizer {
    /// Normalize `args` relative to `cwd`.
    ///
    /// # Errors
    ///
    /// Implementations fail before touching any argument when `cwd` does not
    /// have the shape they require.
    fn normalize(&self, cwd: &Path, args: &[String]) -> Result<Vec<String>>;
}

/// Leaves every argument as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl PathNormalizer for Passthrough {
    fn normalize(&self, _cwd: &Path, args: &[String]) -> Result<Vec<String>> {
        Ok(args.to_vec())
    }
}

/// Whether `arg` is a flag token.
#[must_use]
pub fn is_flag(arg: &str) -> bool {
    arg.starts_with(FLAG_MARKER)
}

/// The normalizer for the host the binary was built for.
#[must_use]
pub fn host() -> Box<dyn PathNormalizer> {
    platform_host()
}

#[cfg(target_os = "windows")]
fn platform_host() -> Box<dyn PathNormalizer> { Box::new(DriveLetter) }

#[cfg(not(target_os = "windows"))]
fn platform_host() -> Box<dyn PathNormalizer> { Box::new(Passthrough) }
