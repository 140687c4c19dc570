//! HTTP transport layer: `SubgraphHttp` with retry policies.

pub mod client;
pub mod retry;

pub use client::SubgraphHttp;
pub use retry::{RetryConfig, RetryPolicy};
