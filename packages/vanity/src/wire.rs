//! Fixed-width framing of a registration submission.
//!
//! ```text
//! offset  len  field
//!      0   32  name, ASCII left-aligned
//!     32   32  owner, 12 zero bytes then 20 address bytes
//!     64   32  expiration, uint256 big-endian
//!     96   32  salt, uint256 big-endian
//!    128   65  signature r ‖ s ‖ v
//!    193    1  signature type
//!    194   30  zero
//! ```

use crate::eip712::VanityRecord;
use crate::error::VanityError;
use crate::signature::{RecoverableSignature, SIGNATURE_LEN};
use crate::utils::{
    address_from_bytes, address_to_word, name_from_slot, name_to_slot, u128_to_word, u64_to_word,
    WORD_LEN,
};
use cosmwasm_std::{Binary, Uint128};

pub const RECORD_ENCODED_LEN: usize = 4 * WORD_LEN;
pub const SIGNATURE_PADDING_LEN: usize = 30;
pub const SIGNATURE_FRAME_LEN: usize = SIGNATURE_LEN + 1 + SIGNATURE_PADDING_LEN;
pub const REGISTRATION_PAYLOAD_LEN: usize = RECORD_ENCODED_LEN + SIGNATURE_FRAME_LEN;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureType {
    /// Signature is over the signable hash itself.
    NoPrepend,
}

impl SignatureType {
    pub fn to_byte(self) -> u8 {
        match self {
            SignatureType::NoPrepend => 0,
        }
    }

    pub fn from_byte(byte: u8) -> Result<Self, VanityError> {
        match byte {
            0 => Ok(SignatureType::NoPrepend),
            signature_type => Err(VanityError::UnsupportedSignatureType { signature_type }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationPayload {
    pub record: VanityRecord,
    pub signature: RecoverableSignature,
    pub signature_type: SignatureType,
}

impl RegistrationPayload {
    pub fn encode(&self) -> Result<Binary, VanityError> {
        let mut out = Vec::with_capacity(REGISTRATION_PAYLOAD_LEN);
        out.extend_from_slice(&name_to_slot(&self.record.name)?);
        out.extend_from_slice(&address_to_word(&self.record.owner)?);
        out.extend_from_slice(&u64_to_word(self.record.expiration));
        out.extend_from_slice(&u128_to_word(self.record.salt.u128()));
        out.extend_from_slice(self.signature.as_bytes());
        out.push(self.signature_type.to_byte());
        out.extend_from_slice(&[0u8; SIGNATURE_PADDING_LEN]);
        Ok(Binary::from(out))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, VanityError> {
        if bytes.len() != REGISTRATION_PAYLOAD_LEN {
            return Err(VanityError::InvalidPayloadLength {
                expected: REGISTRATION_PAYLOAD_LEN,
                actual: bytes.len(),
            });
        }
        let word = move |index: usize| &bytes[index * WORD_LEN..(index + 1) * WORD_LEN];

        let name = name_from_slot(word(0))?;

        let owner_word = word(1);
        require_zero(&owner_word[..12], "owner")?;
        let mut owner = [0u8; 20];
        owner.copy_from_slice(&owner_word[12..]);

        let expiration_word = word(2);
        if expiration_word[..24].iter().any(|b| *b != 0) {
            return Err(VanityError::ValueOverflow {
                field: String::from("expiration"),
            });
        }
        let mut expiration = [0u8; 8];
        expiration.copy_from_slice(&expiration_word[24..]);

        let salt_word = word(3);
        if salt_word[..16].iter().any(|b| *b != 0) {
            return Err(VanityError::ValueOverflow {
                field: String::from("salt"),
            });
        }
        let mut salt = [0u8; 16];
        salt.copy_from_slice(&salt_word[16..]);

        let frame = &bytes[RECORD_ENCODED_LEN..];
        let signature = RecoverableSignature::from_bytes(&frame[..SIGNATURE_LEN])?;
        let signature_type = SignatureType::from_byte(frame[SIGNATURE_LEN])?;
        require_zero(&frame[SIGNATURE_LEN + 1..], "signature")?;

        Ok(RegistrationPayload {
            record: VanityRecord {
                name,
                owner: address_from_bytes(&owner),
                expiration: u64::from_be_bytes(expiration),
                salt: Uint128::new(u128::from_be_bytes(salt)),
            },
            signature,
            signature_type,
        })
    }
}

fn require_zero(bytes: &[u8], field: &str) -> Result<(), VanityError> {
    if bytes.iter().any(|b| *b != 0) {
        return Err(VanityError::DirtyPadding {
            field: field.to_string(),
        });
    }
    Ok(())
}
