use crate::error::VanityError;
use crate::utils::address_from_public_key;
use cosmwasm_std::Addr;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;
use std::convert::TryInto;

pub const SIGNATURE_LEN: usize = 65;

/// `r ‖ s ‖ v` secp256k1 signature; `v` is 27/28 (or 0/1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature([u8; SIGNATURE_LEN]);

impl RecoverableSignature {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VanityError> {
        let bytes: [u8; SIGNATURE_LEN] = bytes
            .try_into()
            .map_err(|_| VanityError::InvalidSignature {})?;
        Ok(RecoverableSignature(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    pub fn sign(prehash: &[u8; 32], key: &SigningKey) -> Result<Self, VanityError> {
        let (signature, recovery_id) = key
            .sign_prehash_recoverable(prehash)
            .map_err(|_| VanityError::InvalidSignature {})?;
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = 27 + recovery_id.to_byte();
        Ok(RecoverableSignature(bytes))
    }

    /// Address whose key produced this signature over `prehash`.
    pub fn recover(&self, prehash: &[u8; 32]) -> Result<Addr, VanityError> {
        let v = self.0[64];
        let recovery = match v {
            27 | 28 => v - 27,
            0 | 1 => v,
            _ => return Err(VanityError::InvalidSignature {}),
        };
        let recovery_id = RecoveryId::from_byte(recovery).ok_or(VanityError::InvalidSignature {})?;
        let signature =
            Signature::from_slice(&self.0[..64]).map_err(|_| VanityError::InvalidSignature {})?;
        let key = VerifyingKey::recover_from_prehash(prehash, &signature, recovery_id)
            .map_err(|_| VanityError::InvalidSignature {})?;
        let point = PublicKey::from(&key).to_encoded_point(false);
        address_from_public_key(point.as_bytes())
    }
}

pub fn address_of(key: &SigningKey) -> Result<Addr, VanityError> {
    let point = PublicKey::from(key.verifying_key()).to_encoded_point(false);
    address_from_public_key(point.as_bytes())
}
