//! Purpose: Format owner ids and emails of an ownership description for display.
//! Exports: `owner_id`, `owner_email`, `co_owner_ids`, `co_owner_emails`.
//! Role: Pure formatting core; email lookups go through an injected resolver.
//! Invariants: Lists use a bare `,` between elements, never leading or trailing.
//! Invariants: The resolver is called at most once per owner id and never cached.

use crate::core::ownership::{OWNER_DELIMITER, OwnershipDescription};
use crate::core::resolver::EmailResolver;

/// Primary owner id, `"unknown"` when the host did not specify one.
pub fn owner_id(description: &OwnershipDescription) -> String {
    description.primary_owner_id().to_string()
}

/// Primary owner email, or an empty string when it cannot be resolved.
pub fn owner_email<R>(description: &OwnershipDescription, resolver: &R) -> String
where
    R: EmailResolver + ?Sized,
{
    resolve_non_empty(resolver, description.primary_owner_id()).unwrap_or_default()
}

/// Primary owner id followed by every co-owner id, in declared order.
///
/// Empty co-owner ids are dropped so they cannot leave a dangling delimiter.
pub fn co_owner_ids(description: &OwnershipDescription) -> String {
    description
        .owner_ids()
        .filter(|user_id| !user_id.is_empty())
        .fold(String::new(), |mut ids, user_id| {
            if !ids.is_empty() {
                ids.push(OWNER_DELIMITER);
            }
            ids.push_str(user_id);
            ids
        })
}

/// Primary owner email followed by the co-owner emails that resolve.
///
/// Owners without an email are skipped, so the result may be empty.
pub fn co_owner_emails<R>(description: &OwnershipDescription, resolver: &R) -> String
where
    R: EmailResolver + ?Sized,
{
    let mut emails = owner_email(description, resolver);
    for user_id in description.co_owner_ids() {
        let Some(email) = resolve_non_empty(resolver, user_id) else {
            continue;
        };
        if !emails.is_empty() {
            emails.push(OWNER_DELIMITER);
        }
        emails.push_str(&email);
    }
    emails
}

// An empty email would produce a dangling delimiter; treat it as a miss.
fn resolve_non_empty<R>(resolver: &R, user_id: &str) -> Option<String>
where
    R: EmailResolver + ?Sized,
{
    match resolver.resolve_email(user_id) {
        Some(email) if !email.is_empty() => Some(email),
        _ => {
            tracing::trace!(user_id, "no email for owner");
            None
        }
    }
}
