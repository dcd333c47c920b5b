//! Purpose: Bind a resolver once and format many descriptions with it.
//! Exports: `OwnershipFormatter`.
//! Role: Convenience facade over `core::format` for hosts and the CLI.
//! Invariants: Delegates verbatim; adds no caching or state beyond the resolver.

use super::summary::OwnershipSummary;
use crate::core::format;
use crate::core::ownership::OwnershipDescription;
use crate::core::resolver::EmailResolver;

#[derive(Clone, Debug, Default)]
pub struct OwnershipFormatter<R> {
    resolver: R,
}

impl<R: EmailResolver> OwnershipFormatter<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn owner_id(&self, description: &OwnershipDescription) -> String {
        format::owner_id(description)
    }

    pub fn owner_email(&self, description: &OwnershipDescription) -> String {
        format::owner_email(description, &self.resolver)
    }

    pub fn co_owner_ids(&self, description: &OwnershipDescription) -> String {
        format::co_owner_ids(description)
    }

    pub fn co_owner_emails(&self, description: &OwnershipDescription) -> String {
        format::co_owner_emails(description, &self.resolver)
    }

    pub fn summary(&self, description: &OwnershipDescription) -> OwnershipSummary {
        OwnershipSummary::build(description, &self.resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::OwnershipFormatter;
    use crate::core::ownership::OwnershipDescription;
    use crate::core::resolver::UserDirectory;

    #[test]
    fn formatter_delegates_to_bound_resolver() {
        let formatter = OwnershipFormatter::new(
            UserDirectory::new()
                .with_user("alice", Some("a@x"))
                .with_user("bob", None)
                .with_default_suffix("@corp"),
        );
        let descr = OwnershipDescription::new("alice").with_co_owners(["bob", "zed"]);

        assert_eq!(formatter.owner_id(&descr), "alice");
        assert_eq!(formatter.owner_email(&descr), "a@x");
        assert_eq!(formatter.co_owner_ids(&descr), "alice,bob,zed");
        assert_eq!(formatter.co_owner_emails(&descr), "a@x,bob@corp");
        assert_eq!(formatter.resolver().len(), 2);
    }
}
