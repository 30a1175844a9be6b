use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum VanityError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("InvalidName: {name:?} is not 1-32 ASCII bytes without NUL")]
    InvalidName { name: String },

    #[error("InvalidAddress: {address} is not a 0x-prefixed 20-byte hex address")]
    InvalidAddress { address: String },

    #[error("InvalidHashFormat: {hash} is not a 32-byte hex digest")]
    InvalidHashFormat { hash: String },

    #[error("InvalidSignature")]
    InvalidSignature {},

    #[error("InvalidPayloadLength: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength { expected: usize, actual: usize },

    #[error("DirtyPadding: non-zero padding in {field}")]
    DirtyPadding { field: String },

    #[error("ValueOverflow: {field} does not fit its declared width")]
    ValueOverflow { field: String },

    #[error("UnsupportedSignatureType: {signature_type}")]
    UnsupportedSignatureType { signature_type: u8 },
}
