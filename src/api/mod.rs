//! Purpose: Define the stable public Rust API boundary for ownerfmt.
//! Exports: Description model, resolver seam, formatting operations, summaries, errors.
//! Role: Public, additive-only surface used by hosts and the CLI.
//! Invariants: Re-exported operations behave exactly like their `core` counterparts.

mod formatter;
mod summary;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::format::{co_owner_emails, co_owner_ids, owner_email, owner_id};
pub use crate::core::ownership::{OWNER_DELIMITER, OwnershipDescription, UNKNOWN_OWNER};
pub use crate::core::resolver::{EmailResolver, UserDirectory};
pub use formatter::OwnershipFormatter;
pub use summary::{OwnershipSummary, summary_json};
