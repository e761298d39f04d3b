//! Search-specific error types.

use std::error::Error as StdError;
use thiserror::Error;

/// Errors raised while calling the remote documentation endpoint.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {}", describe(.0))]
    Client(#[source] reqwest::Error),

    /// No connection could be established, retries included.
    #[error("connection failed after {attempts} attempt(s): {}", describe(.source))]
    Connect {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint did not answer within the configured timeout.
    #[error("request timed out after {timeout_secs}s: {}", describe(.source))]
    Timeout {
        timeout_secs: u64,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{}", describe(.0))]
    Status(#[source] reqwest::Error),

    /// Any other failure while sending the request or reading the body.
    #[error("request failed: {}", describe(.0))]
    Request(#[source] reqwest::Error),
}

impl SearchError {
    /// Classify a reqwest failure raised on the given attempt.
    pub fn from_reqwest(err: reqwest::Error, attempts: u32, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                timeout_secs,
                source: err,
            }
        } else if err.is_connect() {
            Self::Connect {
                attempts,
                source: err,
            }
        } else if err.is_status() {
            Self::Status(err)
        } else {
            Self::Request(err)
        }
    }

    /// Whether another attempt may be made for this failure.
    ///
    /// Only connection-level failures qualify. Timeouts and HTTP status
    /// errors are final.
    pub fn is_retryable(err: &reqwest::Error) -> bool {
        err.is_connect() && !err.is_timeout()
    }
}

/// Render an error together with its source chain.
///
/// reqwest keeps the interesting part (`Connection refused`, `operation timed
/// out`, ...) in nested sources, so the top-level message alone is not enough.
fn describe(err: &reqwest::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = inner.source();
    }
    out
}
