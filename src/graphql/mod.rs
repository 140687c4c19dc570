//! GraphQL envelope types and the transport port.
//!
//! Queries are plain strings plus a JSON variables object, posted to a subgraph URL.
//! The transport returns the raw JSON envelope; [`decode`] validates it into a typed
//! wire struct so nothing downstream handles untyped values.

use crate::error::{HttpError, QueryError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A GraphQL POST body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: serde_json::Value,
}

impl GraphqlRequest {
    pub fn new(operation_name: &'static str, query: &'static str, variables: serde_json::Value) -> Self {
        Self {
            query,
            operation_name,
            variables,
        }
    }
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

/// Port for posting GraphQL requests. The reqwest implementation lives in `http`;
/// tests substitute an in-memory fake.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn post(
        &self,
        endpoint: &str,
        request: &GraphqlRequest,
    ) -> Result<serde_json::Value, HttpError>;
}

/// Validate a raw envelope into its typed `data` payload.
///
/// A non-empty `errors` array wins over any partial `data`; a missing `data` is a
/// decode failure.
pub fn decode<D: DeserializeOwned>(raw: serde_json::Value) -> Result<D, QueryError> {
    let envelope: GraphqlResponse<D> = serde_json::from_value(raw)?;
    if !envelope.errors.is_empty() {
        return Err(QueryError::Graphql(
            envelope.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    envelope
        .data
        .ok_or_else(|| QueryError::Decode("response has no data".to_string()))
}

/// Post a request and decode the typed payload.
pub async fn execute<D: DeserializeOwned>(
    transport: &dyn GraphqlTransport,
    endpoint: &str,
    request: &GraphqlRequest,
) -> Result<D, QueryError> {
    let raw = transport.post(endpoint, request).await?;
    decode(raw)
}
