//! Purpose: Model the ownership description handed over by the host.
//! Exports: `OwnershipDescription`, `UNKNOWN_OWNER`, `OWNER_DELIMITER`.
//! Role: Immutable input record for the formatter; JSON boundary for the CLI.
//! Invariants: The primary owner id is never empty; unspecified means `"unknown"`.
//! Invariants: Co-owner order is kept exactly as declared and never deduplicated.

use crate::core::error::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};

/// Primary owner id used when the host did not specify one.
pub const UNKNOWN_OWNER: &str = "unknown";

/// Separator for owner id and email lists.
pub const OWNER_DELIMITER: char = ',';

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WireDescription")]
pub struct OwnershipDescription {
    primary_owner_id: String,
    co_owner_ids: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDescription {
    #[serde(default)]
    primary_owner_id: Option<String>,
    #[serde(default)]
    co_owner_ids: Option<Vec<String>>,
}

impl From<WireDescription> for OwnershipDescription {
    fn from(wire: WireDescription) -> Self {
        let description = match wire.primary_owner_id {
            Some(primary) => Self::new(primary),
            None => Self::unspecified(),
        };
        description.with_co_owners(wire.co_owner_ids.unwrap_or_default())
    }
}

impl OwnershipDescription {
    /// Creates a description owned by `primary`. An empty id is stored as the
    /// `"unknown"` sentinel.
    pub fn new(primary: impl Into<String>) -> Self {
        let primary = primary.into();
        let primary_owner_id = if primary.is_empty() {
            UNKNOWN_OWNER.to_string()
        } else {
            primary
        };
        Self {
            primary_owner_id,
            co_owner_ids: Vec::new(),
        }
    }

    pub fn unspecified() -> Self {
        Self::new(UNKNOWN_OWNER)
    }

    /// Appends co-owners after any already present, keeping their order.
    pub fn with_co_owners<I, S>(mut self, co_owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.co_owner_ids
            .extend(co_owners.into_iter().map(Into::into));
        self
    }

    /// Decodes a description from its JSON wire form.
    ///
    /// A `null` document means the host passed no description at all and is
    /// reported as `InvalidArgument`.
    pub fn from_json(input: &str) -> Result<Self> {
        let decoded: Option<Self> = serde_json::from_str(input).map_err(|err| {
            Error::new(ErrorKind::Parse)
                .with_message("invalid ownership description JSON")
                .with_hint("Expected an object like {\"primaryOwnerId\":\"alice\",\"coOwnerIds\":[\"bob\"]}.")
                .with_source(err)
        })?;
        decoded.ok_or_else(|| {
            Error::new(ErrorKind::InvalidArgument)
                .with_message("ownership description is required")
        })
    }

    pub fn primary_owner_id(&self) -> &str {
        &self.primary_owner_id
    }

    pub fn co_owner_ids(&self) -> &[String] {
        &self.co_owner_ids
    }

    pub fn has_primary_owner(&self) -> bool {
        self.primary_owner_id != UNKNOWN_OWNER
    }

    /// Primary owner first, then co-owners in declared order.
    pub fn owner_ids(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.primary_owner_id.as_str())
            .chain(self.co_owner_ids.iter().map(String::as_str))
    }
}
