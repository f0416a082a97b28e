//! Remote store adapter: typed access to the REST document store.

pub mod client;
pub mod paths;

pub use client::{RestStoreClient, StoreError};

/// Returns the store module name for smoke checks.
pub fn module_name() -> &'static str {
    "store"
}
