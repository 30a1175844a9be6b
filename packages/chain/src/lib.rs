//! In-process execution ledger for the vanity contracts.
//!
//! Calls are applied one at a time in the order they are submitted. Each call
//! gets the next sequence number, runs against a snapshot of every contract's
//! storage and either commits all of its effects, sub-calls included, or none.

pub mod chain;
pub mod config;
mod error;


pub use crate::chain::{AppResponse, Chain, ContractKind, EventRecord};
pub use crate::config::ChainConfig;
pub use crate::error::ChainError;
