pub mod admin;
pub mod contract;
pub mod entry;
mod error;
pub mod handler;
pub mod query;
pub mod state;

#[cfg(test)]
pub mod test;

pub use crate::error::ContractError;
