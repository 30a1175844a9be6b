use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMMIT_GRACE_BLOCKS: u64 = 20;
pub const DEFAULT_ACTIVATION_GRACE_BLOCKS: u64 = 100;
/// 100 gwei.
pub const DEFAULT_MAX_ALLOWED_GAS_PRICE: u128 = 100_000_000_000;
/// Two whole tokens at 18 decimals.
pub const DEFAULT_COST_PER_CHARACTER: u128 = 2_000_000_000_000_000_000;
pub const DEFAULT_FEE_RATIO: u64 = 100;
/// One year.
pub const DEFAULT_MAX_EXPIRATION_ALLOWED: u64 = 31_536_000;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub admin: Addr,
    pub accepted_token: Option<Addr>,
    pub fee_pool: Option<Addr>,
    pub max_allowed_gas_price: Uint128,
    pub commit_grace_blocks: u64,
    pub activation_grace_blocks: u64,
    pub cost_per_character: Uint128,
    pub fee_ratio: u64,
    pub max_expiration_allowed: u64,
    pub chain_id: u64,
    pub verifying_contract: Addr,
}

impl Config {
    /// Last height at which a commit made at `committer_height` may still be revealed.
    pub fn commit_deadline(&self, committer_height: u64) -> u64 {
        committer_height.saturating_add(self.commit_grace_blocks)
    }

    /// Last height at which a record won at `committer_height` may be activated.
    pub fn activation_deadline(&self, committer_height: u64) -> u64 {
        self.commit_deadline(committer_height)
            .saturating_add(self.activation_grace_blocks)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CommitEntry {
    pub hash: String,
    pub committer_height: u64,
    pub sequence: u64,
}

impl CommitEntry {
    /// Earlier height wins; within one height the earlier call wins.
    pub fn precedes(&self, height: u64, sequence: u64) -> bool {
        (self.committer_height, self.sequence) < (height, sequence)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DomainRecord {
    pub owner: Addr,
    pub committer_height: u64,
    pub commit_sequence: u64,
    pub expiration: u64,
    pub activated: bool,
    pub activated_at: Option<u64>,
    pub staked_amount: Uint128,
    /// Token the stake was paid in; refunds go out in the same token.
    pub stake_token: Option<Addr>,
}

impl DomainRecord {
    /// Once the commit grace window has passed, an unactivated record no longer
    /// blocks a later commit. Its owner may still activate until someone replaces it.
    pub fn is_stale(&self, config: &Config, height: u64) -> bool {
        !self.activated && height > config.commit_deadline(self.committer_height)
    }
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");
pub const COMMITMENTS: Map<String, CommitEntry> = Map::new("COMMITMENTS");
pub const DOMAINS: Map<String, DomainRecord> = Map::new("DOMAINS");

/// Calls seen through the wasm entry points.
pub const CALL_SEQUENCE: Item<u64> = Item::new("CALL_SEQUENCE");

pub fn next_sequence(storage: &mut dyn Storage) -> StdResult<u64> {
    let sequence = CALL_SEQUENCE.may_load(storage)?.unwrap_or_default();
    CALL_SEQUENCE.save(storage, &(sequence + 1))?;
    Ok(sequence)
}
