//! Snapshot of the process environment.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// Immutable copy of the process environment, taken once at startup.
///
/// Resolution steps read variables from here instead of `std::env`, so tests
/// can build a snapshot by hand without touching the real process state.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<OsString, OsString>,
}

impl Environment {
    /// Snapshot every variable of the current process.
    #[must_use]
    pub fn from_process() -> Self {
        std::env::vars_os().collect()
    }

    /// Return a copy of this snapshot with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Look up a variable. Names are case-insensitive on Windows, as they are
    /// for the OS itself.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OsStr> {
        if let Some(value) = self.vars.get(OsStr::new(key)) {
            return Some(value);
        }
        if cfg!(windows) {
            return self
                .vars
                .iter()
                .find(|(k, _)| k.to_str().is_some_and(|k| k.eq_ignore_ascii_case(key)))
                .map(|(_, v)| v.as_os_str());
        }
        None
    }

    /// Look up a variable, ignoring it when it is set to an empty string.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&OsStr> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
