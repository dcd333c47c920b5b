//! Purpose: Resolve which user directory file the CLI reads emails from.
//! Exports: `DIRECTORY_ENV`, `DirectorySource`, `default_directory_path`, `resolve_directory_path`.
//! Role: Keep flag/env/default precedence in one place for every command.
//! Invariants: Precedence is `--directory`, then `OWNERFMT_DIRECTORY`, then the default.
//! Invariants: Default directory file remains `~/.ownerfmt/users.json`.

use std::ffi::OsString;
use std::path::PathBuf;

pub(crate) const DIRECTORY_ENV: &str = "OWNERFMT_DIRECTORY";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum DirectorySource {
    Flag,
    Env,
    Default,
}

impl DirectorySource {
    /// Only the implicit default may be missing without failing the command.
    pub(crate) fn allows_missing(self) -> bool {
        matches!(self, DirectorySource::Default)
    }
}

pub(crate) fn default_directory_path() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_default();
    PathBuf::from(home).join(".ownerfmt").join("users.json")
}

pub(crate) fn resolve_directory_path(
    flag: Option<PathBuf>,
    env: Option<OsString>,
) -> (PathBuf, DirectorySource) {
    if let Some(path) = flag {
        return (path, DirectorySource::Flag);
    }
    match env {
        Some(value) if !value.is_empty() => (PathBuf::from(value), DirectorySource::Env),
        _ => (default_directory_path(), DirectorySource::Default),
    }
}
