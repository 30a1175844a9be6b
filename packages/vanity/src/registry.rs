use crate::eip712::VanityRecord;
use cosmwasm_std::{Addr, Binary, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const EVENT_HASH_COMMITTED: &str = "HashCommitted";
pub const EVENT_REGISTERED: &str = "RegisteredVanityRecord";
pub const EVENT_ACTIVATED: &str = "UserActiveVanityRecord";
pub const EVENT_CLAIMED: &str = "UserClaimedExpiredDomain";

/// Denominator of `fee_ratio`; a ratio of 100 is 1%.
pub const FEE_RATIO_DENOMINATOR: u64 = 10_000;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub chain_id: u64,
    pub accepted_token: Option<String>,
    pub fee_pool: Option<String>,
    pub max_allowed_gas_price: Option<Uint128>,
    pub commit_grace_blocks: Option<u64>,
    pub activation_grace_blocks: Option<u64>,
    pub cost_per_character: Option<Uint128>,
    pub fee_ratio: Option<u64>,
    pub max_expiration_allowed: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Commit {
        commitment: String,
    },
    /// `payload` is the fixed-width frame built by `wire::RegistrationPayload`.
    Register {
        payload: Binary,
    },
    Activate {
        name: String,
    },
    Claim {
        name: String,
    },

    // Only admin
    SetAdmin {
        admin: String,
    },
    SetAcceptedToken {
        token: String,
    },
    SetFeePool {
        fee_pool: Option<String>,
    },
    SetMaxAllowedGasPrice {
        gas_price: Uint128,
    },
    SetCommitGraceBlocks {
        blocks: u64,
    },
    SetActivationGraceBlocks {
        blocks: u64,
    },
    SetCostPerCharacter {
        cost: Uint128,
    },
    SetFeeRatio {
        fee_ratio: u64,
    },
    SetMaxExpirationAllowed {
        seconds: u64,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    Admin {},
    AcceptedToken {},
    FeePool {},
    MaxAllowedGasPrice {},
    CommitGraceBlocks {},
    ActivationGraceBlocks {},
    CostPerCharacter {},
    FeeRatio {},
    MaxExpirationAllowed {},
    DomainSeparator {},
    RecordHash { record: VanityRecord },
    Commitment { hash: String },
    DomainOwnership { name: String },
    ActivationCost { name: String },
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// No live holder; the caller now owns the name.
    Installed,
    /// The caller's commit predates the holder's and replaced it.
    Overwritten,
    /// The holder's commit is earlier; nothing changed.
    Rejected,
}

impl RegistrationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationOutcome::Installed => "installed",
            RegistrationOutcome::Overwritten => "overwritten",
            RegistrationOutcome::Rejected => "rejected",
        }
    }
}

// We define a custom struct for each query response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RegisterResponse {
    pub outcome: RegistrationOutcome,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
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

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AdminResponse {
    pub admin: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AcceptedTokenResponse {
    pub token: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct FeePoolResponse {
    pub fee_pool: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GasPriceResponse {
    pub gas_price: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GraceBlocksResponse {
    pub blocks: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CostPerCharacterResponse {
    pub cost: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct FeeRatioResponse {
    pub fee_ratio: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MaxExpirationResponse {
    pub seconds: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DomainSeparatorResponse {
    pub domain_separator: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RecordHashResponse {
    pub hash: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CommitmentResponse {
    pub hash: String,
    pub committer_height: u64,
    pub sequence: u64,
}

/// An unregistered name answers with `owner: None` and zeroed fields.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DomainOwnershipResponse {
    pub name: String,
    pub owner: Option<Addr>,
    pub committer_height: u64,
    pub commit_sequence: u64,
    pub expiration: u64,
    pub activated: bool,
    pub activated_at: Option<u64>,
    pub staked_amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ActivationCostResponse {
    pub cost: Uint128,
    pub fee: Uint128,
    pub staked: Uint128,
}
