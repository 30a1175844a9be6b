use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;
use vanity::VanityError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Vanity(#[from] VanityError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: Sender is {sender}, but admin is {admin}.")]
    Unauthorized { sender: String, admin: String },

    #[error("InvalidHashFormat: {hash} is not a 32-byte hex digest")]
    InvalidHashFormat { hash: String },

    #[error("HashAlreadyCommitted: {hash} was committed at height {committed_at}")]
    HashAlreadyCommitted { hash: String, committed_at: u64 },

    #[error("CommitmentNotFound: no commitment exists for {hash}")]
    CommitmentNotFound { hash: String },

    #[error("SignatureMismatch: signature does not recover to any signer")]
    SignatureMismatch {},

    #[error("SignerMismatch: signed by {signer}, but record owner is {owner}")]
    SignerMismatch { signer: String, owner: String },

    #[error("CallerNotOwner: struct user is not msg.sender ({caller} != {owner})")]
    CallerNotOwner { caller: String, owner: String },

    #[error("GasPriceExceeded: gas price {gas_price} is above the cap of {max_allowed}")]
    GasPriceExceeded {
        gas_price: Uint128,
        max_allowed: Uint128,
    },

    #[error("CommitExpired: committed at {committed_at}, grace ended at {expired_at}, current height is {current}")]
    CommitExpired {
        committed_at: u64,
        expired_at: u64,
        current: u64,
    },

    #[error("ExpirationTooLong: {expiration} seconds is above the limit of {max_allowed}")]
    ExpirationTooLong { expiration: u64, max_allowed: u64 },

    #[error("NotDomainOwner: domain {name} is not registered by user {sender}")]
    NotDomainOwner { name: String, sender: String },

    #[error("AlreadyActivated: domain {name} is already activated")]
    AlreadyActivated { name: String },

    #[error("ActivationTooEarly: activation opens after height {opens_after}, current height is {current}")]
    ActivationTooEarly { opens_after: u64, current: u64 },

    #[error("ActivationWindowClosed: activation closed at height {closed_at}, current height is {current}")]
    ActivationWindowClosed { closed_at: u64, current: u64 },

    #[error("TokenNotConfigured")]
    TokenNotConfigured {},

    #[error("NotActivated: domain {name} has not been activated")]
    NotActivated { name: String },

    #[error("RecordNotExpired: the record expires at {expires_at}, current time is {current}")]
    RecordNotExpired { expires_at: u64, current: u64 },

    #[error("InvalidFeeRatio: {fee_ratio} is above {max}")]
    InvalidFeeRatio { fee_ratio: u64, max: u64 },
}
