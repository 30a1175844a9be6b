use crate::admin::{
    set_accepted_token, set_activation_grace_blocks, set_admin, set_commit_grace_blocks,
    set_cost_per_character, set_fee_pool, set_fee_ratio, set_max_allowed_gas_price,
    set_max_expiration_allowed, validate_fee_ratio,
};
use crate::error::ContractError;
use crate::handler::{activate, claim, commit, register};
use crate::query::{
    get_accepted_token, get_activation_cost, get_activation_grace_blocks, get_admin,
    get_commit_grace_blocks, get_commitment, get_config, get_cost_per_character,
    get_domain_ownership, get_domain_separator, get_fee_pool, get_fee_ratio,
    get_max_allowed_gas_price, get_max_expiration_allowed, get_record_hash,
};
use crate::state::{
    Config, CONFIG, DEFAULT_ACTIVATION_GRACE_BLOCKS, DEFAULT_COMMIT_GRACE_BLOCKS,
    DEFAULT_COST_PER_CHARACTER, DEFAULT_FEE_RATIO, DEFAULT_MAX_ALLOWED_GAS_PRICE,
    DEFAULT_MAX_EXPIRATION_ALLOWED,
};
use cosmwasm_std::{to_binary, Binary, Response, StdResult, Storage, Uint128};
use cw2::set_contract_version;
use vanity::context::CallContext;
use vanity::registry::{ExecuteMsg, InstantiateMsg, QueryMsg};
use vanity::utils::validate_address;

const CONTRACT_NAME: &str = "crates.io:vanity-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The deployer becomes admin; the deployed address is the verifying contract
/// of every signature this registry accepts.
pub fn instantiate(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let fee_ratio = msg.fee_ratio.unwrap_or(DEFAULT_FEE_RATIO);
    validate_fee_ratio(fee_ratio)?;

    let config = Config {
        admin: ctx.caller.clone(),
        accepted_token: msg
            .accepted_token
            .as_deref()
            .map(validate_address)
            .transpose()?,
        fee_pool: msg.fee_pool.as_deref().map(validate_address).transpose()?,
        max_allowed_gas_price: msg
            .max_allowed_gas_price
            .unwrap_or_else(|| Uint128::new(DEFAULT_MAX_ALLOWED_GAS_PRICE)),
        commit_grace_blocks: msg
            .commit_grace_blocks
            .unwrap_or(DEFAULT_COMMIT_GRACE_BLOCKS),
        activation_grace_blocks: msg
            .activation_grace_blocks
            .unwrap_or(DEFAULT_ACTIVATION_GRACE_BLOCKS),
        cost_per_character: msg
            .cost_per_character
            .unwrap_or_else(|| Uint128::new(DEFAULT_COST_PER_CHARACTER)),
        fee_ratio,
        max_expiration_allowed: msg
            .max_expiration_allowed
            .unwrap_or(DEFAULT_MAX_EXPIRATION_ALLOWED),
        chain_id: msg.chain_id,
        verifying_contract: ctx.contract.clone(),
    };
    CONFIG.save(storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", ctx.caller.as_str())
        .add_attribute("chain_id", msg.chain_id.to_string()))
}

pub fn execute(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Commit { commitment } => commit(storage, ctx, commitment),
        ExecuteMsg::Register { payload } => register(storage, ctx, payload),
        ExecuteMsg::Activate { name } => activate(storage, ctx, name),
        ExecuteMsg::Claim { name } => claim(storage, ctx, name),

        // Only admin
        ExecuteMsg::SetAdmin { admin } => set_admin(storage, ctx, admin),
        ExecuteMsg::SetAcceptedToken { token } => set_accepted_token(storage, ctx, token),
        ExecuteMsg::SetFeePool { fee_pool } => set_fee_pool(storage, ctx, fee_pool),
        ExecuteMsg::SetMaxAllowedGasPrice { gas_price } => {
            set_max_allowed_gas_price(storage, ctx, gas_price)
        }
        ExecuteMsg::SetCommitGraceBlocks { blocks } => {
            set_commit_grace_blocks(storage, ctx, blocks)
        }
        ExecuteMsg::SetActivationGraceBlocks { blocks } => {
            set_activation_grace_blocks(storage, ctx, blocks)
        }
        ExecuteMsg::SetCostPerCharacter { cost } => set_cost_per_character(storage, ctx, cost),
        ExecuteMsg::SetFeeRatio { fee_ratio } => set_fee_ratio(storage, ctx, fee_ratio),
        ExecuteMsg::SetMaxExpirationAllowed { seconds } => {
            set_max_expiration_allowed(storage, ctx, seconds)
        }
    }
}

pub fn query(storage: &dyn Storage, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&get_config(storage)?),
        QueryMsg::Admin {} => to_binary(&get_admin(storage)?),
        QueryMsg::AcceptedToken {} => to_binary(&get_accepted_token(storage)?),
        QueryMsg::FeePool {} => to_binary(&get_fee_pool(storage)?),
        QueryMsg::MaxAllowedGasPrice {} => to_binary(&get_max_allowed_gas_price(storage)?),
        QueryMsg::CommitGraceBlocks {} => to_binary(&get_commit_grace_blocks(storage)?),
        QueryMsg::ActivationGraceBlocks {} => to_binary(&get_activation_grace_blocks(storage)?),
        QueryMsg::CostPerCharacter {} => to_binary(&get_cost_per_character(storage)?),
        QueryMsg::FeeRatio {} => to_binary(&get_fee_ratio(storage)?),
        QueryMsg::MaxExpirationAllowed {} => to_binary(&get_max_expiration_allowed(storage)?),

        QueryMsg::DomainSeparator {} => to_binary(&get_domain_separator(storage)?),
        QueryMsg::RecordHash { record } => to_binary(&get_record_hash(storage, &record)?),
        QueryMsg::Commitment { hash } => to_binary(&get_commitment(storage, hash)?),
        QueryMsg::DomainOwnership { name } => to_binary(&get_domain_ownership(storage, name)?),
        QueryMsg::ActivationCost { name } => to_binary(&get_activation_cost(storage, &name)?),
    }
}
