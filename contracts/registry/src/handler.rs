use crate::error::ContractError;
use crate::state::{CommitEntry, Config, DomainRecord, COMMITMENTS, CONFIG, DOMAINS};
use cosmwasm_std::{
    to_binary, Addr, Binary, CosmosMsg, Event, Response, StdResult, Storage, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use vanity::context::CallContext;
use vanity::eip712::CanonicalHasher;
use vanity::registry::{
    RegisterResponse, RegistrationOutcome, EVENT_ACTIVATED, EVENT_CLAIMED, EVENT_HASH_COMMITTED,
    EVENT_REGISTERED, FEE_RATIO_DENOMINATOR,
};
use vanity::utils::{hash_to_hex, parse_hash, validate_name};
use vanity::wire::RegistrationPayload;

pub fn commit(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    commitment: String,
) -> Result<Response, ContractError> {
    let hash = parse_hash(&commitment).map_err(|_| ContractError::InvalidHashFormat {
        hash: commitment.clone(),
    })?;
    let key = hash_to_hex(&hash);

    if let Some(existing) = COMMITMENTS.may_load(storage, key.clone())? {
        return Err(ContractError::HashAlreadyCommitted {
            hash: key,
            committed_at: existing.committer_height,
        });
    }

    COMMITMENTS.save(
        storage,
        key.clone(),
        &CommitEntry {
            hash: key.clone(),
            committer_height: ctx.height(),
            sequence: ctx.sequence,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "commit")
        .add_attribute("commitment", key.clone())
        .add_attribute("committer_height", ctx.height().to_string())
        .add_event(Event::new(EVENT_HASH_COMMITTED).add_attribute("hash", key)))
}

pub fn register(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(storage)?;
    let RegistrationPayload {
        record, signature, ..
    } = RegistrationPayload::decode(payload.as_slice())?;

    let hasher = CanonicalHasher::new(config.chain_id, &config.verifying_contract)?;
    let hash = hasher.signable_hash(&record)?;

    let signer = signature
        .recover(&hash)
        .map_err(|_| ContractError::SignatureMismatch {})?;
    if signer != record.owner {
        return Err(ContractError::SignerMismatch {
            signer: signer.to_string(),
            owner: record.owner.to_string(),
        });
    }
    if ctx.caller != record.owner {
        return Err(ContractError::CallerNotOwner {
            caller: ctx.caller.to_string(),
            owner: record.owner.to_string(),
        });
    }
    if ctx.gas_price > config.max_allowed_gas_price {
        return Err(ContractError::GasPriceExceeded {
            gas_price: ctx.gas_price,
            max_allowed: config.max_allowed_gas_price,
        });
    }
    if record.expiration > config.max_expiration_allowed {
        return Err(ContractError::ExpirationTooLong {
            expiration: record.expiration,
            max_allowed: config.max_expiration_allowed,
        });
    }

    let key = hash_to_hex(&hash);
    let entry = COMMITMENTS
        .may_load(storage, key.clone())?
        .ok_or(ContractError::CommitmentNotFound { hash: key })?;
    let expired_at = config.commit_deadline(entry.committer_height);
    if ctx.height() > expired_at {
        return Err(ContractError::CommitExpired {
            committed_at: entry.committer_height,
            expired_at,
            current: ctx.height(),
        });
    }

    let holder = DOMAINS
        .may_load(storage, record.name.clone())?
        .filter(|holder| !holder.is_stale(&config, ctx.height()));
    let outcome = match holder {
        None => RegistrationOutcome::Installed,
        Some(holder) if holder.activated => RegistrationOutcome::Rejected,
        Some(holder) if entry.precedes(holder.committer_height, holder.commit_sequence) => {
            RegistrationOutcome::Overwritten
        }
        Some(_) => RegistrationOutcome::Rejected,
    };

    let mut response = Response::new()
        .add_attribute("method", "register")
        .add_attribute("name", record.name.clone())
        .add_attribute("owner", record.owner.as_str())
        .add_attribute("outcome", outcome.as_str())
        .set_data(to_binary(&RegisterResponse { outcome })?);

    if outcome == RegistrationOutcome::Rejected {
        return Ok(response);
    }

    DOMAINS.save(
        storage,
        record.name.clone(),
        &DomainRecord {
            owner: record.owner.clone(),
            committer_height: entry.committer_height,
            commit_sequence: entry.sequence,
            expiration: record.expiration,
            activated: false,
            activated_at: None,
            staked_amount: Uint128::zero(),
            stake_token: None,
        },
    )?;

    response = response.add_event(
        Event::new(EVENT_REGISTERED)
            .add_attribute("name", record.name)
            .add_attribute("owner", record.owner.as_str())
            .add_attribute("committer_height", entry.committer_height.to_string()),
    );
    Ok(response)
}

/// `(cost, fee)` for staking `name`; the fee rounds toward zero.
pub fn activation_cost(config: &Config, name: &str) -> Result<(Uint128, Uint128), ContractError> {
    validate_name(name)?;
    let cost = config
        .cost_per_character
        .checked_mul(Uint128::from(name.len() as u128))?;
    let fee = cost.multiply_ratio(config.fee_ratio, FEE_RATIO_DENOMINATOR);
    Ok((cost, fee))
}

fn token_msg(token: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_binary(msg)?,
        funds: vec![],
    }))
}

fn load_owned(
    storage: &dyn Storage,
    ctx: &CallContext,
    name: &str,
) -> Result<DomainRecord, ContractError> {
    let not_owner = || ContractError::NotDomainOwner {
        name: name.to_string(),
        sender: ctx.caller.to_string(),
    };
    let record = DOMAINS
        .may_load(storage, name.to_string())?
        .ok_or_else(not_owner)?;
    if record.owner != ctx.caller {
        return Err(not_owner());
    }
    Ok(record)
}

pub fn activate(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    name: String,
) -> Result<Response, ContractError> {
    validate_name(&name)?;
    let config = CONFIG.load(storage)?;
    let mut record = load_owned(storage, ctx, &name)?;
    if record.activated {
        return Err(ContractError::AlreadyActivated { name });
    }

    let opens_after = config.commit_deadline(record.committer_height);
    if ctx.height() <= opens_after {
        return Err(ContractError::ActivationTooEarly {
            opens_after,
            current: ctx.height(),
        });
    }
    let closed_at = config.activation_deadline(record.committer_height);
    if ctx.height() > closed_at {
        return Err(ContractError::ActivationWindowClosed {
            closed_at,
            current: ctx.height(),
        });
    }

    let token = config
        .accepted_token
        .clone()
        .ok_or(ContractError::TokenNotConfigured {})?;
    let (cost, fee) = activation_cost(&config, &name)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if !cost.is_zero() {
        messages.push(token_msg(
            &token,
            &Cw20ExecuteMsg::TransferFrom {
                owner: ctx.caller.to_string(),
                recipient: ctx.contract.to_string(),
                amount: cost,
            },
        )?);
    }
    // Without a pool the fee stays in the registry's balance.
    if let Some(fee_pool) = &config.fee_pool {
        if !fee.is_zero() {
            messages.push(token_msg(
                &token,
                &Cw20ExecuteMsg::Transfer {
                    recipient: fee_pool.to_string(),
                    amount: fee,
                },
            )?);
        }
    }

    let staked = cost.checked_sub(fee)?;
    record.activated = true;
    record.activated_at = Some(ctx.now());
    record.staked_amount = staked;
    record.stake_token = Some(token);
    DOMAINS.save(storage, name.clone(), &record)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "activate")
        .add_attribute("name", name.clone())
        .add_attribute("cost", cost)
        .add_attribute("fee", fee)
        .add_attribute("staked", staked)
        .add_event(
            Event::new(EVENT_ACTIVATED)
                .add_attribute("name", name)
                .add_attribute("owner", ctx.caller.as_str())
                .add_attribute("cost", cost),
        ))
}

pub fn claim(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    name: String,
) -> Result<Response, ContractError> {
    validate_name(&name)?;
    let record = load_owned(storage, ctx, &name)?;
    let activated_at = match (record.activated, record.activated_at) {
        (true, Some(activated_at)) => activated_at,
        _ => return Err(ContractError::NotActivated { name }),
    };

    let expires_at = activated_at.saturating_add(record.expiration);
    if ctx.now() < expires_at {
        return Err(ContractError::RecordNotExpired {
            expires_at,
            current: ctx.now(),
        });
    }

    let amount = record.staked_amount;
    let mut messages: Vec<CosmosMsg> = vec![];
    if !amount.is_zero() {
        let token = record
            .stake_token
            .as_ref()
            .ok_or(ContractError::TokenNotConfigured {})?;
        messages.push(token_msg(
            token,
            &Cw20ExecuteMsg::Transfer {
                recipient: ctx.caller.to_string(),
                amount,
            },
        )?);
    }
    DOMAINS.remove(storage, name.clone());

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "claim")
        .add_attribute("name", name.clone())
        .add_attribute("amount", amount)
        .add_event(
            Event::new(EVENT_CLAIMED)
                .add_attribute("name", name)
                .add_attribute("owner", ctx.caller.as_str())
                .add_attribute("amount", amount),
        ))
}
