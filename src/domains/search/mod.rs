//! Search domain module.
//!
//! This module owns the outbound call to the remote OwlPay documentation
//! endpoint. Both the tool and the prompt surfaces go through
//! [`perform_search`] and only differ in how they map its failures.
//!
//! ## Architecture
//!
//! - `client.rs` - `DocumentationSearch` trait and the reqwest-backed client
//! - `error.rs` - Search-specific error types

mod client;
mod error;

pub use client::{DocumentationSearch, SearchClient};
pub use error::SearchError;

use tracing::{error, info};

/// Run a documentation search against the given backend.
pub async fn perform_search(
    backend: &dyn DocumentationSearch,
    query: &str,
) -> Result<String, SearchError> {
    info!("Searching documentation for: {:?}", query);

    backend.search(query).await.inspect_err(|e| {
        error!("Documentation search failed: {}", e);
    })
}

/// Caller-facing description of a failed search.
pub fn failure_message(err: &SearchError) -> String {
    format!("Failed to search documentation: {}", err)
}
