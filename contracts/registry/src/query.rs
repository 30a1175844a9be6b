use crate::handler::activation_cost;
use crate::state::{COMMITMENTS, CONFIG, DOMAINS};
use cosmwasm_std::{StdError, StdResult, Storage, Uint128};
use vanity::eip712::{CanonicalHasher, VanityRecord};
use vanity::registry::{
    AcceptedTokenResponse, ActivationCostResponse, AdminResponse, CommitmentResponse,
    ConfigResponse, CostPerCharacterResponse, DomainOwnershipResponse, DomainSeparatorResponse,
    FeePoolResponse, FeeRatioResponse, GasPriceResponse, GraceBlocksResponse,
    MaxExpirationResponse, RecordHashResponse,
};
use vanity::utils::{hash_to_hex, parse_hash};

fn query_err<E: ToString>(err: E) -> StdError {
    StdError::generic_err(err.to_string())
}

fn hasher(storage: &dyn Storage) -> StdResult<CanonicalHasher> {
    let config = CONFIG.load(storage)?;
    CanonicalHasher::new(config.chain_id, &config.verifying_contract).map_err(query_err)
}

pub fn get_config(storage: &dyn Storage) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        accepted_token: config.accepted_token,
        fee_pool: config.fee_pool,
        max_allowed_gas_price: config.max_allowed_gas_price,
        commit_grace_blocks: config.commit_grace_blocks,
        activation_grace_blocks: config.activation_grace_blocks,
        cost_per_character: config.cost_per_character,
        fee_ratio: config.fee_ratio,
        max_expiration_allowed: config.max_expiration_allowed,
        chain_id: config.chain_id,
        verifying_contract: config.verifying_contract,
    })
}

pub fn get_admin(storage: &dyn Storage) -> StdResult<AdminResponse> {
    let config = CONFIG.load(storage)?;
    Ok(AdminResponse {
        admin: config.admin,
    })
}

pub fn get_accepted_token(storage: &dyn Storage) -> StdResult<AcceptedTokenResponse> {
    let config = CONFIG.load(storage)?;
    Ok(AcceptedTokenResponse {
        token: config.accepted_token,
    })
}

pub fn get_fee_pool(storage: &dyn Storage) -> StdResult<FeePoolResponse> {
    let config = CONFIG.load(storage)?;
    Ok(FeePoolResponse {
        fee_pool: config.fee_pool,
    })
}

pub fn get_max_allowed_gas_price(storage: &dyn Storage) -> StdResult<GasPriceResponse> {
    let config = CONFIG.load(storage)?;
    Ok(GasPriceResponse {
        gas_price: config.max_allowed_gas_price,
    })
}

pub fn get_commit_grace_blocks(storage: &dyn Storage) -> StdResult<GraceBlocksResponse> {
    let config = CONFIG.load(storage)?;
    Ok(GraceBlocksResponse {
        blocks: config.commit_grace_blocks,
    })
}

pub fn get_activation_grace_blocks(storage: &dyn Storage) -> StdResult<GraceBlocksResponse> {
    let config = CONFIG.load(storage)?;
    Ok(GraceBlocksResponse {
        blocks: config.activation_grace_blocks,
    })
}

pub fn get_cost_per_character(storage: &dyn Storage) -> StdResult<CostPerCharacterResponse> {
    let config = CONFIG.load(storage)?;
    Ok(CostPerCharacterResponse {
        cost: config.cost_per_character,
    })
}

pub fn get_fee_ratio(storage: &dyn Storage) -> StdResult<FeeRatioResponse> {
    let config = CONFIG.load(storage)?;
    Ok(FeeRatioResponse {
        fee_ratio: config.fee_ratio,
    })
}

pub fn get_max_expiration_allowed(storage: &dyn Storage) -> StdResult<MaxExpirationResponse> {
    let config = CONFIG.load(storage)?;
    Ok(MaxExpirationResponse {
        seconds: config.max_expiration_allowed,
    })
}

pub fn get_domain_separator(storage: &dyn Storage) -> StdResult<DomainSeparatorResponse> {
    Ok(DomainSeparatorResponse {
        domain_separator: hash_to_hex(&hasher(storage)?.domain_separator()),
    })
}

/// The commitment a user publishes for `record`.
pub fn get_record_hash(
    storage: &dyn Storage,
    record: &VanityRecord,
) -> StdResult<RecordHashResponse> {
    let hash = hasher(storage)?.signable_hash(record).map_err(query_err)?;
    Ok(RecordHashResponse {
        hash: hash_to_hex(&hash),
    })
}

pub fn get_commitment(storage: &dyn Storage, hash: String) -> StdResult<CommitmentResponse> {
    let key = hash_to_hex(&parse_hash(&hash).map_err(query_err)?);
    let entry = COMMITMENTS.load(storage, key)?;
    Ok(CommitmentResponse {
        hash: entry.hash,
        committer_height: entry.committer_height,
        sequence: entry.sequence,
    })
}

pub fn get_domain_ownership(
    storage: &dyn Storage,
    name: String,
) -> StdResult<DomainOwnershipResponse> {
    let response = match DOMAINS.may_load(storage, name.clone())? {
        Some(record) => DomainOwnershipResponse {
            name,
            owner: Some(record.owner),
            committer_height: record.committer_height,
            commit_sequence: record.commit_sequence,
            expiration: record.expiration,
            activated: record.activated,
            activated_at: record.activated_at,
            staked_amount: record.staked_amount,
        },
        None => DomainOwnershipResponse {
            name,
            owner: None,
            committer_height: 0,
            commit_sequence: 0,
            expiration: 0,
            activated: false,
            activated_at: None,
            staked_amount: Uint128::zero(),
        },
    };
    Ok(response)
}

pub fn get_activation_cost(
    storage: &dyn Storage,
    name: &str,
) -> StdResult<ActivationCostResponse> {
    let config = CONFIG.load(storage)?;
    let (cost, fee) = activation_cost(&config, name).map_err(query_err)?;
    Ok(ActivationCostResponse {
        cost,
        fee,
        staked: cost.checked_sub(fee)?,
    })
}
