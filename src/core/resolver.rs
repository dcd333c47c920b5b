//! Purpose: Define the email lookup capability consumed by the formatter.
//! Exports: `EmailResolver`, `UserDirectory`.
//! Role: Injected seam between formatting and whatever user store the host has.
//! Invariants: Resolution is total; a missing email is `None`, never an error.
//! Invariants: Resolvers hold no hidden global state and are not cached here.

use crate::core::error::{Error, ErrorKind, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Maps a user id to an email address.
pub trait EmailResolver {
    fn resolve_email(&self, user_id: &str) -> Option<String>;
}

impl<F> EmailResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_email(&self, user_id: &str) -> Option<String> {
        self(user_id)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
struct UserEntry {
    #[serde(default)]
    email: Option<String>,
}

/// User table loaded from JSON.
///
/// Listed users without an explicit email fall back to `<id><suffix>` when a
/// default suffix is configured. Unlisted ids never resolve.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDirectory {
    #[serde(default)]
    users: HashMap<String, UserEntry>,
    #[serde(default)]
    default_email_suffix: Option<String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: impl Into<String>, email: Option<&str>) -> Self {
        self.users.insert(
            user_id.into(),
            UserEntry {
                email: email.map(str::to_string),
            },
        );
        self
    }

    pub fn with_default_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.default_email_suffix = Some(suffix.into());
        self
    }

    pub fn default_suffix(&self) -> Option<&str> {
        self.default_email_suffix.as_deref()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|err| {
            Error::new(ErrorKind::Parse)
                .with_message("invalid user directory JSON")
                .with_hint("Expected {\"users\": {\"<id>\": {\"email\": \"...\"}}}.")
                .with_source(err)
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            let kind = match err.kind() {
                std::io::ErrorKind::NotFound => ErrorKind::NotFound,
                _ => ErrorKind::Io,
            };
            Error::new(kind)
                .with_message("failed to read user directory")
                .with_path(path)
                .with_source(err)
        })?;
        Self::from_json(&contents).map_err(|err| err.with_path(path))
    }
}

impl EmailResolver for UserDirectory {
    fn resolve_email(&self, user_id: &str) -> Option<String> {
        let entry = self.users.get(user_id)?;
        match (&entry.email, &self.default_email_suffix) {
            (Some(email), _) => Some(email.clone()),
            (None, Some(suffix)) => Some(format!("{user_id}{suffix}")),
            (None, None) => None,
        }
    }
}
