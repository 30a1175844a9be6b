//! Off-ledger companion run by the user's agent: computes the commitment,
//! signs the record and frames it the way `ExecuteMsg::Register` expects.

use crate::eip712::{CanonicalHasher, VanityRecord};
use crate::error::VanityError;
use crate::signature::RecoverableSignature;
use crate::utils::hash_to_hex;
use crate::wire::{RegistrationPayload, SignatureType};
use cosmwasm_std::{Addr, Binary};
use k256::ecdsa::SigningKey;

#[derive(Clone, Debug)]
pub struct VanitySigner {
    chain_id: u64,
    verifying_contract: Addr,
    hasher: CanonicalHasher,
}

impl VanitySigner {
    pub fn new(chain_id: u64, verifying_contract: &Addr) -> Result<Self, VanityError> {
        Ok(VanitySigner {
            chain_id,
            verifying_contract: verifying_contract.clone(),
            hasher: CanonicalHasher::new(chain_id, verifying_contract)?,
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn verifying_contract(&self) -> &Addr {
        &self.verifying_contract
    }

    pub fn domain_separator(&self) -> [u8; 32] {
        self.hasher.domain_separator()
    }

    pub fn record_hash(&self, record: &VanityRecord) -> Result<[u8; 32], VanityError> {
        self.hasher.signable_hash(record)
    }

    /// Hex commitment to publish with `ExecuteMsg::Commit`.
    pub fn commitment(&self, record: &VanityRecord) -> Result<String, VanityError> {
        Ok(hash_to_hex(&self.record_hash(record)?))
    }

    pub fn sign(
        &self,
        record: &VanityRecord,
        key: &SigningKey,
    ) -> Result<RegistrationPayload, VanityError> {
        let hash = self.record_hash(record)?;
        Ok(RegistrationPayload {
            record: record.clone(),
            signature: RecoverableSignature::sign(&hash, key)?,
            signature_type: SignatureType::NoPrepend,
        })
    }

    pub fn registration_payload(
        &self,
        record: &VanityRecord,
        key: &SigningKey,
    ) -> Result<Binary, VanityError> {
        self.sign(record, key)?.encode()
    }
}
