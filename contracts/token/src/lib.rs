pub mod contract;
pub mod entry;
mod error;
pub mod state;


pub use crate::error::TokenError;
