use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;
use vanity::VanityError;

#[derive(Error, Debug, PartialEq)]
pub enum TokenError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Vanity(#[from] VanityError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("InvalidZeroAmount")]
    InvalidZeroAmount {},

    #[error("InsufficientBalance: balance is {balance}, but {required} is required")]
    InsufficientBalance { balance: Uint128, required: Uint128 },

    #[error("InsufficientAllowance: allowance is {allowance}, but {required} is required")]
    InsufficientAllowance {
        allowance: Uint128,
        required: Uint128,
    },

    #[error("CannotSetOwnAccount")]
    CannotSetOwnAccount {},

    #[error("UnsupportedMessage: {kind}")]
    UnsupportedMessage { kind: String },
}
