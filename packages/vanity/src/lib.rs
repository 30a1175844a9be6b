pub mod context;
pub mod eip712;
pub mod error;
pub mod registry;
pub mod signature;
pub mod signer;
pub mod token;
pub mod utils;
pub mod wire;


pub use crate::error::VanityError;
