use cosmwasm_std::StdError;
use thiserror::Error;
use vanity::VanityError;
use vanity_registry::ContractError;
use vanity_token::TokenError;

#[derive(Error, Debug, PartialEq)]
pub enum ChainError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Vanity(#[from] VanityError),

    #[error("registry: {0}")]
    Registry(#[from] ContractError),

    #[error("token: {0}")]
    Token(#[from] TokenError),

    #[error("UnknownContract: nothing is deployed at {address}")]
    UnknownContract { address: String },

    #[error("UnsupportedMessage: {msg}")]
    UnsupportedMessage { msg: String },

    #[error("Config: {msg}")]
    Config { msg: String },
}
