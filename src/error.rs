//! Unified SDK error types.

use crate::network::{EndpointDomain, NetworkId};
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error(transparent)]
    UnsupportedNetwork(#[from] UnsupportedNetworkError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// The resolver has no endpoint for this (domain, network) pair.
///
/// Surfaced to the caller rather than folded into a query state: falling back to a
/// default endpoint could serve mainnet data on a testnet session or vice versa.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No {domain} endpoint for network {network}")]
pub struct UnsupportedNetworkError {
    pub domain: EndpointDomain,
    pub network: NetworkId,
}

/// Failure of a single query, stored inside `QueryState::Error`.
///
/// Cloneable so that every waiter on a shared in-flight request observes the same value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("GraphQL errors: {}", .0.join("; "))]
    Graphql(Vec<String>),

    #[error("Decode failure: {0}")]
    Decode(String),

    #[error("Request timed out after {0}ms")]
    Timeout(u64),
}

impl From<HttpError> for QueryError {
    fn from(e: HttpError) -> Self {
        QueryError::Transport(e.to_string())
    }
}

impl From<DecodeError> for QueryError {
    fn from(e: DecodeError) -> Self {
        QueryError::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Decode(e.to_string())
    }
}

/// Errors raised while normalizing indexer encodings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid hex in bytes32 value '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    #[error("bytes32 value must be 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("bytes32 string is not null-terminated")]
    Unterminated,

    #[error("bytes32 string is not valid UTF-8")]
    InvalidUtf8,

    #[error("String too long for bytes32: {0} bytes")]
    TooLong(usize),

    #[error("Invalid fixed-point value '{input}': {reason}")]
    InvalidFixedPoint { input: String, reason: String },

    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// Table model errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}
