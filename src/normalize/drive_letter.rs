use anyhow::{bail, Context, Result};
use std::path::Path;

use super::{is_flag, PathNormalizer};

const SEPARATOR: char = '\\';

/// Windows normalizer: git hands over paths relative to the working tree
/// (often with `/` separators), the editor wants absolute `X:\...` paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveLetter;

impl PathNormalizer for DriveLetter {
    fn normalize(&self, cwd: &Path, args: &[String]) -> Result<Vec<String>> {
        let cwd = cwd
            .to_str()
            .context("Working directory contains non-UTF-8 characters")?;
        let Some(drive) = drive_prefix(cwd) else {
            bail!(
                "The working directory `{cwd}` is not a valid path; on Windows it is expected \
                 to start with a disk letter, e.g. `C:\\`."
            );
        };

        Ok(args
            .iter()
            .map(|arg| {
                if arg.is_empty() || is_flag(arg) {
                    arg.clone()
                } else if arg.starts_with(drive) {
                    lexical_normalize(arg)
                } else {
                    lexical_normalize(&join(cwd, arg))
                }
            })
            .collect())
    }
}

/// `X:` when `path` starts with a drive letter.
pub(super) fn drive_prefix(path: &str) -> Option<&str> {
    match path.as_bytes() {
        [letter, b':', ..] if letter.is_ascii_alphabetic() => Some(&path[..2]),
        _ => None,
    }
}

fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// `\\server\share` (either separator) when `path` is a UNC path.
pub(super) fn unc_prefix(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(is_separator)?.strip_prefix(is_separator)?;
    if rest.is_empty() || rest.starts_with(is_separator) {
        return None;
    }
    let server_end = rest.find(is_separator).unwrap_or(rest.len());
    let share_len = rest[server_end..]
        .strip_prefix(is_separator)
        .map_or(0, |share| 1 + share.find(is_separator).unwrap_or(share.len()));
    Some(&path[..2 + server_end + share_len])
}

/// Drive letter or UNC share at the start of `path`.
fn volume_prefix(path: &str) -> Option<&str> {
    drive_prefix(path).or_else(|| unc_prefix(path))
}

/// Join with Windows semantics: a path carrying a drive or UNC share replaces
/// `base`, a rooted path keeps only the drive of `base`.
pub(super) fn join(base: &str, path: &str) -> String {
    if volume_prefix(path).is_some() {
        return path.to_string();
    }
    if path.starts_with(is_separator) {
        let drive = drive_prefix(base).unwrap_or_default();
        return format!("{drive}{path}");
    }
    let base = base.trim_end_matches(is_separator);
    format!("{base}{SEPARATOR}{path}")
}

/// Collapse `.` and `..` segments and convert separators to `\`, without
/// touching the filesystem.
pub(super) fn lexical_normalize(path: &str) -> String {
    let (volume, rest) = volume_prefix(path).map_or(("", path), |v| (v, &path[v.len()..]));
    let rooted = rest.starts_with(is_separator);

    let mut parts: Vec<&str> = Vec::new();
    for segment in rest.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` above the root stays at the root
                _ if rooted => {}
                _ => parts.push(segment),
            },
            _ => parts.push(segment),
        }
    }

    let mut out = volume.replace('/', "\\");
    if rooted {
        out.push(SEPARATOR);
    }
    out.push_str(&parts.join("\\"));
    if out.is_empty() {
        out.push('.');
    }
    out
}
