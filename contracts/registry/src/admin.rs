use crate::error::ContractError;
use crate::state::{Config, CONFIG};
use cosmwasm_std::{Response, Storage, Uint128};
use vanity::context::CallContext;
use vanity::registry::FEE_RATIO_DENOMINATOR;
use vanity::utils::validate_address;

fn only_admin(storage: &dyn Storage, ctx: &CallContext) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if ctx.caller != config.admin {
        return Err(ContractError::Unauthorized {
            sender: ctx.caller.to_string(),
            admin: config.admin.to_string(),
        });
    }
    Ok(config)
}

pub fn validate_fee_ratio(fee_ratio: u64) -> Result<(), ContractError> {
    if fee_ratio > FEE_RATIO_DENOMINATOR {
        return Err(ContractError::InvalidFeeRatio {
            fee_ratio,
            max: FEE_RATIO_DENOMINATOR,
        });
    }
    Ok(())
}

pub fn set_admin(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    admin: String,
) -> Result<Response, ContractError> {
    let mut config = only_admin(storage, ctx)?;
    config.admin = validate_address(&admin)?;
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_admin")
        .add_attribute("admin", config.admin.as_str()))
}

pub fn set_accepted_token(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    token: String,
) -> Result<Response, ContractError> {
    let mut config = only_admin(storage, ctx)?;
    let token = validate_address(&token)?;
    config.accepted_token = Some(token.clone());
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_accepted_token")
        .add_attribute("token", token.as_str()))
}

pub fn set_fee_pool(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    fee_pool: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = only_admin(storage, ctx)?;
    config.fee_pool = fee_pool.as_deref().map(validate_address).transpose()?;
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_fee_pool")
        .add_attribute(
            "fee_pool",
            config
                .fee_pool
                .map(|pool| pool.to_string())
                .unwrap_or_else(|| String::from("none")),
        ))
}

pub fn set_max_allowed_gas_price(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    gas_price: Uint128,
) -> Result<Response, ContractError> {
    let mut config = only_admin(storage, ctx)?;
    config.max_allowed_gas_price = gas_price;
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_max_allowed_gas_price")
        .add_attribute("gas_price", gas_price))
}

pub fn set_commit_grace_blocks(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    blocks: u64,
) -> Result<Response, ContractError> {
    let mut config = only_admin(storage, ctx)?;
    config.commit_grace_blocks = blocks;
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_commit_grace_blocks")
        .add_attribute("blocks", blocks.to_string()))
}

pub fn set_activation_grace_blocks(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    blocks: u64,
) -> Result<Response, ContractError> {
    let mut config = only_admin(storage, ctx)?;
    config.activation_grace_blocks = blocks;
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_activation_grace_blocks")
        .add_attribute("blocks", blocks.to_string()))
}

pub fn set_cost_per_character(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    cost: Uint128,
) -> Result<Response, ContractError> {
    let mut config = only_admin(storage, ctx)?;
    config.cost_per_character = cost;
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_cost_per_character")
        .add_attribute("cost", cost))
}

pub fn set_fee_ratio(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    fee_ratio: u64,
) -> Result<Response, ContractError> {
    let mut config = only_admin(storage, ctx)?;
    validate_fee_ratio(fee_ratio)?;
    config.fee_ratio = fee_ratio;
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_fee_ratio")
        .add_attribute("fee_ratio", fee_ratio.to_string()))
}

pub fn set_max_expiration_allowed(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    seconds: u64,
) -> Result<Response, ContractError> {
    let mut config = only_admin(storage, ctx)?;
    config.max_expiration_allowed = seconds;
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_max_expiration_allowed")
        .add_attribute("seconds", seconds.to_string()))
}
