//! Domain modules organized as vertical slices.
//!
//! Each queried sub-module contains:
//! - `mod.rs`: Rich domain types and the row mappers built from them
//! - `wire.rs`: Raw serde structs matching subgraph responses, plus the query text
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: Sub-client running the gated, cached query
//!
//! `balance` has no wire side: balances and rates are supplied by the caller.

pub mod balance;
pub mod market;
pub mod order;
pub mod position;
pub mod price;
pub mod rate;
pub mod trade;
