// Public fallible APIs in this crate share one concrete error contract (`VaultError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod search;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;

pub use client::PayVault;
pub use error::{Result, VaultError};
pub use models::{Entry, EntrySource, EntryView, MatchMode, SearchFilter, SortCriterion};
