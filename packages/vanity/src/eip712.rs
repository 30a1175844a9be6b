//! Domain-separated struct hashing for vanity records.
//!
//! The registry and the off-ledger signer both derive the commitment and the
//! signed message from these functions, so every byte here is part of the
//! protocol: the domain separator binds a signature to one chain and one
//! registry deployment, the struct hash binds it to one record.

use crate::error::VanityError;
use crate::utils::{address_to_word, keccak256_word, name_to_slot, u128_to_word, u64_to_word};
use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";
pub const EIP712_DOMAIN_NAME: &str = "VanityRegistry";
pub const EIP712_DOMAIN_VERSION: &str = "1.0";
pub const VANITY_RECORD_TYPE: &str =
    "VanityRegistry(bytes32 name,address user,uint256 expiration,uint256 salt)";

/// Leading bytes of every signable hash (EIP-191 version 0x01).
pub const SIGNABLE_PREFIX: [u8; 2] = [0x19, 0x01];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct VanityRecord {
    pub name: String,
    pub owner: Addr,
    /// Seconds the stake stays locked once the name is activated.
    pub expiration: u64,
    pub salt: Uint128,
}

impl VanityRecord {
    pub fn new(
        name: &str,
        owner: &str,
        expiration: u64,
        salt: Uint128,
    ) -> Result<Self, VanityError> {
        name_to_slot(name)?;
        Ok(VanityRecord {
            name: name.to_string(),
            owner: crate::utils::validate_address(owner)?,
            expiration,
            salt,
        })
    }
}

pub fn domain_separator(chain_id: u64, verifying_contract: &Addr) -> Result<[u8; 32], VanityError> {
    let encoded = [
        keccak256_word(EIP712_DOMAIN_TYPE.as_bytes()),
        keccak256_word(EIP712_DOMAIN_NAME.as_bytes()),
        keccak256_word(EIP712_DOMAIN_VERSION.as_bytes()),
        u64_to_word(chain_id),
        address_to_word(verifying_contract)?,
    ]
    .concat();
    Ok(keccak256_word(&encoded))
}

pub fn struct_hash(record: &VanityRecord) -> Result<[u8; 32], VanityError> {
    let encoded = [
        keccak256_word(VANITY_RECORD_TYPE.as_bytes()),
        name_to_slot(&record.name)?,
        address_to_word(&record.owner)?,
        u64_to_word(record.expiration),
        u128_to_word(record.salt.u128()),
    ]
    .concat();
    Ok(keccak256_word(&encoded))
}

pub fn signable_hash(domain_separator: &[u8; 32], struct_hash: &[u8; 32]) -> [u8; 32] {
    let encoded = [&SIGNABLE_PREFIX[..], &domain_separator[..], &struct_hash[..]].concat();
    keccak256_word(&encoded)
}

/// Hasher bound to one deployment; caches the domain separator.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalHasher {
    domain_separator: [u8; 32],
}

impl CanonicalHasher {
    pub fn new(chain_id: u64, verifying_contract: &Addr) -> Result<Self, VanityError> {
        Ok(CanonicalHasher {
            domain_separator: domain_separator(chain_id, verifying_contract)?,
        })
    }

    pub fn domain_separator(&self) -> [u8; 32] {
        self.domain_separator
    }

    pub fn struct_hash(&self, record: &VanityRecord) -> Result<[u8; 32], VanityError> {
        struct_hash(record)
    }

    /// The digest a wallet signs and the commitment a user publishes.
    pub fn signable_hash(&self, record: &VanityRecord) -> Result<[u8; 32], VanityError> {
        Ok(signable_hash(&self.domain_separator, &struct_hash(record)?))
    }
}
