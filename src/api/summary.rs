//! Purpose: Collect every formatted ownership value for one description.
//! Exports: `OwnershipSummary`, `summary_json`.
//! Role: Shared payload for notifications, UI rendering, and the CLI `summary` command.
//! Invariants: JSON key names are stable: `ownerId`, `ownerEmail`, `coOwnerIds`, `coOwnerEmails`.
//! Invariants: Values are identical to the individual `core::format` operations.

use crate::core::format;
use crate::core::ownership::OwnershipDescription;
use crate::core::resolver::EmailResolver;
use serde::Serialize;
use serde_json::{Map, Value, json};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipSummary {
    pub owner_id: String,
    pub owner_email: String,
    pub co_owner_ids: String,
    pub co_owner_emails: String,
}

impl OwnershipSummary {
    pub fn build<R>(description: &OwnershipDescription, resolver: &R) -> Self
    where
        R: EmailResolver + ?Sized,
    {
        Self {
            owner_id: format::owner_id(description),
            owner_email: format::owner_email(description, resolver),
            co_owner_ids: format::co_owner_ids(description),
            co_owner_emails: format::co_owner_emails(description, resolver),
        }
    }
}

pub fn summary_json(summary: &OwnershipSummary) -> Value {
    let mut map = Map::new();
    map.insert("ownerId".to_string(), json!(summary.owner_id));
    map.insert("ownerEmail".to_string(), json!(summary.owner_email));
    map.insert("coOwnerIds".to_string(), json!(summary.co_owner_ids));
    map.insert("coOwnerEmails".to_string(), json!(summary.co_owner_emails));
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::{OwnershipSummary, summary_json};
    use crate::core::ownership::OwnershipDescription;

    #[test]
    fn summary_json_has_stable_keys() {
        let descr = OwnershipDescription::unspecified().with_co_owners(["bob"]);
        let resolver = |id: &str| (id == "bob").then(|| "b@x".to_string());
        let summary = OwnershipSummary::build(&descr, &resolver);

        let value = summary_json(&summary);
        let obj = value.as_object().expect("object");
        assert_eq!(obj.len(), 4);
        assert_eq!(obj.get("ownerId").and_then(|v| v.as_str()), Some("unknown"));
        assert_eq!(obj.get("ownerEmail").and_then(|v| v.as_str()), Some(""));
        assert_eq!(
            obj.get("coOwnerIds").and_then(|v| v.as_str()),
            Some("unknown,bob")
        );
        assert_eq!(obj.get("coOwnerEmails").and_then(|v| v.as_str()), Some("b@x"));
    }

    #[test]
    fn serde_matches_summary_json() {
        let descr = OwnershipDescription::new("alice");
        let summary = OwnershipSummary::build(&descr, &|_: &str| None::<String>);
        let via_serde = serde_json::to_value(&summary).expect("json");
        assert_eq!(via_serde, summary_json(&summary));
    }
}
