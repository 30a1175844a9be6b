use crate::error::VanityError;
use cosmwasm_std::Addr;
use hex;
use std::convert::TryInto;
use tiny_keccak::Keccak;

pub const NAME_SLOT_LEN: usize = 32;
pub const ADDRESS_LEN: usize = 20;
pub const WORD_LEN: usize = 32;

pub fn keccak256(i: &[u8]) -> Vec<u8> {
    let mut o = vec![0u8; 32];
    Keccak::keccak256(i, &mut o);
    return o;
}

pub fn keccak256_word(i: &[u8]) -> [u8; 32] {
    let mut o = [0u8; 32];
    Keccak::keccak256(i, &mut o);
    o
}

/// 1 to 32 ASCII bytes; NUL is reserved as the slot terminator.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= NAME_SLOT_LEN
        && name.bytes().all(|b| b.is_ascii() && b != 0)
}

pub fn validate_name(name: &str) -> Result<(), VanityError> {
    if !is_valid_name(name) {
        return Err(VanityError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// ASCII bytes left-aligned in a 32-byte slot, zero-filled on the right.
pub fn name_to_slot(name: &str) -> Result<[u8; 32], VanityError> {
    validate_name(name)?;
    let mut slot = [0u8; NAME_SLOT_LEN];
    slot[..name.len()].copy_from_slice(name.as_bytes());
    Ok(slot)
}

pub fn name_from_slot(slot: &[u8]) -> Result<String, VanityError> {
    let invalid = || VanityError::InvalidName {
        name: hex::encode(slot),
    };
    if slot.len() != NAME_SLOT_LEN {
        return Err(invalid());
    }
    let len = slot.iter().position(|b| *b == 0).unwrap_or(NAME_SLOT_LEN);
    if slot[len..].iter().any(|b| *b != 0) {
        return Err(invalid());
    }
    let name = std::str::from_utf8(&slot[..len]).map_err(|_| invalid())?;
    if !is_valid_name(name) {
        return Err(invalid());
    }
    Ok(name.to_string())
}

/// Accepts `0x` followed by 40 hex digits in any case and returns the lower-case form.
pub fn validate_address(address: &str) -> Result<Addr, VanityError> {
    let bytes = parse_address(address)?;
    Ok(address_from_bytes(&bytes))
}

fn parse_address(address: &str) -> Result<[u8; 20], VanityError> {
    let invalid = || VanityError::InvalidAddress {
        address: address.to_string(),
    };
    let digits = address.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != ADDRESS_LEN * 2 {
        return Err(invalid());
    }
    let decoded = hex::decode(digits).map_err(|_| invalid())?;
    decoded.as_slice().try_into().map_err(|_| invalid())
}

pub fn address_to_bytes(address: &Addr) -> Result<[u8; 20], VanityError> {
    parse_address(address.as_str())
}

pub fn address_from_bytes(bytes: &[u8; 20]) -> Addr {
    Addr::unchecked(format!("0x{}", hex::encode(bytes)))
}

/// Address left-padded with zeros to a full ABI word.
pub fn address_to_word(address: &Addr) -> Result<[u8; 32], VanityError> {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - ADDRESS_LEN..].copy_from_slice(&address_to_bytes(address)?);
    Ok(word)
}

/// Last 20 bytes of keccak256 over the uncompressed point without its 0x04 tag.
pub fn address_from_public_key(uncompressed: &[u8]) -> Result<Addr, VanityError> {
    if uncompressed.len() != 65 || uncompressed[0] != 0x04 {
        return Err(VanityError::InvalidSignature {});
    }
    let hash = keccak256_word(&uncompressed[1..]);
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes.copy_from_slice(&hash[WORD_LEN - ADDRESS_LEN..]);
    Ok(address_from_bytes(&bytes))
}

pub fn u64_to_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

pub fn u128_to_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - 16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Parses a 32-byte digest written as 64 hex digits, with or without `0x`.
pub fn parse_hash(hash: &str) -> Result<[u8; 32], VanityError> {
    let invalid = || VanityError::InvalidHashFormat {
        hash: hash.to_string(),
    };
    let digits = hash.strip_prefix("0x").unwrap_or(hash);
    if digits.len() != WORD_LEN * 2 {
        return Err(invalid());
    }
    let decoded = hex::decode(digits).map_err(|_| invalid())?;
    decoded.as_slice().try_into().map_err(|_| invalid())
}

pub fn hash_to_hex(hash: &[u8; 32]) -> String {
    hex::encode(hash)
}
