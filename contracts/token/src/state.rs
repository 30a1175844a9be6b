use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw0::Expiration;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
    pub minter: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Allowance {
    pub amount: Uint128,
    pub expires: Expiration,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("TOKEN_INFO");

pub const BALANCES: Map<Vec<u8>, Uint128> = Map::new("BALANCES");

/// Keyed by (owner, spender).
pub const ALLOWANCES: Map<(Vec<u8>, Vec<u8>), Allowance> = Map::new("ALLOWANCES");

pub fn account_key(address: &Addr) -> Vec<u8> {
    address.as_bytes().to_vec()
}

pub const CALL_SEQUENCE: Item<u64> = Item::new("CALL_SEQUENCE");

pub fn next_sequence(storage: &mut dyn Storage) -> StdResult<u64> {
    let sequence = CALL_SEQUENCE.may_load(storage)?.unwrap_or_default();
    CALL_SEQUENCE.save(storage, &(sequence + 1))?;
    Ok(sequence)
}
