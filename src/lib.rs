//! Purpose: Library crate behind the `ownerfmt` CLI and host integrations.
//! Exports: `core` (description model, resolver seam, formatting, errors), `api`.
//! Role: Formats owner ids and emails of an ownership description for display.
//! Invariants: Formatting is pure; email lookups only go through `EmailResolver`.
//! Invariants: The `"unknown"` sentinel and `,` delimiter are part of the output contract.
pub mod api;
pub mod core;
