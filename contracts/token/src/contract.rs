use crate::error::TokenError;
use crate::state::{account_key, Allowance, TokenInfo, ALLOWANCES, BALANCES, TOKEN_INFO};
use cosmwasm_std::{
    to_binary, Addr, Binary, BlockInfo, Response, StdError, StdResult, Storage, Uint128,
};
use cw0::Expiration;
use cw2::set_contract_version;
use cw20::{AllowanceResponse, BalanceResponse, MinterResponse, TokenInfoResponse};
use vanity::context::CallContext;
use vanity::token::{ExecuteMsg, InstantiateMsg, QueryMsg};
use vanity::utils::validate_address;

const CONTRACT_NAME: &str = "crates.io:vanity-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn instantiate(
    storage: &mut dyn Storage,
    _ctx: &CallContext,
    msg: InstantiateMsg,
) -> Result<Response, TokenError> {
    set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut total_supply = Uint128::zero();
    for coin in msg.initial_balances.iter() {
        let address = validate_address(&coin.address)?;
        credit(storage, &address, coin.amount)?;
        total_supply = total_supply.checked_add(coin.amount)?;
    }

    TOKEN_INFO.save(
        storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply,
            minter: msg.minter.as_deref().map(validate_address).transpose()?,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("symbol", msg.symbol)
        .add_attribute("total_supply", total_supply))
}

pub fn execute(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    msg: ExecuteMsg,
) -> Result<Response, TokenError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => transfer(storage, ctx, recipient, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => transfer_from(storage, ctx, owner, recipient, amount),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => increase_allowance(storage, ctx, spender, amount, expires),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => decrease_allowance(storage, ctx, spender, amount, expires),
        ExecuteMsg::Burn { amount } => burn(storage, ctx, amount),
        ExecuteMsg::Mint { recipient, amount } => mint(storage, ctx, recipient, amount),
        other => Err(TokenError::UnsupportedMessage {
            kind: format!("{:?}", other),
        }),
    }
}

fn credit(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<(), TokenError> {
    let key = account_key(account);
    let balance = BALANCES.may_load(storage, key.clone())?.unwrap_or_default();
    BALANCES.save(storage, key, &balance.checked_add(amount)?)?;
    Ok(())
}

fn debit(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<(), TokenError> {
    let key = account_key(account);
    let balance = BALANCES.may_load(storage, key.clone())?.unwrap_or_default();
    if balance < amount {
        return Err(TokenError::InsufficientBalance {
            balance,
            required: amount,
        });
    }
    BALANCES.save(storage, key, &(balance - amount))?;
    Ok(())
}

fn live_allowance(
    storage: &dyn Storage,
    block: &BlockInfo,
    owner: &Addr,
    spender: &Addr,
) -> StdResult<Option<Allowance>> {
    let allowance = ALLOWANCES.may_load(storage, (account_key(owner), account_key(spender)))?;
    Ok(allowance.filter(|allowance| !allowance.expires.is_expired(block)))
}

pub fn transfer(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    recipient: String,
    amount: Uint128,
) -> Result<Response, TokenError> {
    if amount.is_zero() {
        return Err(TokenError::InvalidZeroAmount {});
    }
    let recipient = validate_address(&recipient)?;
    debit(storage, &ctx.caller, amount)?;
    credit(storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", ctx.caller.as_str())
        .add_attribute("to", recipient.as_str())
        .add_attribute("amount", amount))
}

/// Spends `amount` of the caller's allowance on `owner`, failing loudly when short.
pub fn transfer_from(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, TokenError> {
    if amount.is_zero() {
        return Err(TokenError::InvalidZeroAmount {});
    }
    let owner = validate_address(&owner)?;
    let recipient = validate_address(&recipient)?;

    let key = (account_key(&owner), account_key(&ctx.caller));
    let mut allowance = live_allowance(storage, &ctx.block, &owner, &ctx.caller)?.unwrap_or(
        Allowance {
            amount: Uint128::zero(),
            expires: Expiration::Never {},
        },
    );
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance {
            allowance: allowance.amount,
            required: amount,
        });
    }
    allowance.amount = allowance.amount - amount;
    if allowance.amount.is_zero() {
        ALLOWANCES.remove(storage, key);
    } else {
        ALLOWANCES.save(storage, key, &allowance)?;
    }

    debit(storage, &owner, amount)?;
    credit(storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_from")
        .add_attribute("from", owner.as_str())
        .add_attribute("to", recipient.as_str())
        .add_attribute("by", ctx.caller.as_str())
        .add_attribute("amount", amount))
}

pub fn increase_allowance(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, TokenError> {
    let spender = validate_address(&spender)?;
    if spender == ctx.caller {
        return Err(TokenError::CannotSetOwnAccount {});
    }

    let current = live_allowance(storage, &ctx.block, &ctx.caller, &spender)?;
    let allowance = Allowance {
        amount: current
            .as_ref()
            .map(|allowance| allowance.amount)
            .unwrap_or_default()
            .checked_add(amount)?,
        expires: expires
            .or_else(|| current.map(|allowance| allowance.expires))
            .unwrap_or_default(),
    };
    ALLOWANCES.save(
        storage,
        (account_key(&ctx.caller), account_key(&spender)),
        &allowance,
    )?;

    Ok(Response::new()
        .add_attribute("method", "increase_allowance")
        .add_attribute("owner", ctx.caller.as_str())
        .add_attribute("spender", spender.as_str())
        .add_attribute("amount", amount))
}

pub fn decrease_allowance(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, TokenError> {
    let spender = validate_address(&spender)?;
    if spender == ctx.caller {
        return Err(TokenError::CannotSetOwnAccount {});
    }

    let key = (account_key(&ctx.caller), account_key(&spender));
    match live_allowance(storage, &ctx.block, &ctx.caller, &spender)? {
        Some(current) if current.amount > amount => {
            let allowance = Allowance {
                amount: current.amount - amount,
                expires: expires.unwrap_or(current.expires),
            };
            ALLOWANCES.save(storage, key, &allowance)?;
        }
        _ => ALLOWANCES.remove(storage, key),
    }

    Ok(Response::new()
        .add_attribute("method", "decrease_allowance")
        .add_attribute("owner", ctx.caller.as_str())
        .add_attribute("spender", spender.as_str())
        .add_attribute("amount", amount))
}

pub fn burn(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    amount: Uint128,
) -> Result<Response, TokenError> {
    if amount.is_zero() {
        return Err(TokenError::InvalidZeroAmount {});
    }
    debit(storage, &ctx.caller, amount)?;
    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info.total_supply.checked_sub(amount)?;
    TOKEN_INFO.save(storage, &info)?;

    Ok(Response::new()
        .add_attribute("method", "burn")
        .add_attribute("from", ctx.caller.as_str())
        .add_attribute("amount", amount))
}

pub fn mint(
    storage: &mut dyn Storage,
    ctx: &CallContext,
    recipient: String,
    amount: Uint128,
) -> Result<Response, TokenError> {
    if amount.is_zero() {
        return Err(TokenError::InvalidZeroAmount {});
    }
    let mut info = TOKEN_INFO.load(storage)?;
    if info.minter.as_ref() != Some(&ctx.caller) {
        return Err(TokenError::Unauthorized {});
    }

    let recipient = validate_address(&recipient)?;
    info.total_supply = info.total_supply.checked_add(amount)?;
    TOKEN_INFO.save(storage, &info)?;
    credit(storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("method", "mint")
        .add_attribute("to", recipient.as_str())
        .add_attribute("amount", amount))
}

pub fn query(storage: &dyn Storage, block: &BlockInfo, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_binary(&query_balance(storage, address)?),
        QueryMsg::TokenInfo {} => to_binary(&query_token_info(storage)?),
        QueryMsg::Minter {} => to_binary(&query_minter(storage)?),
        QueryMsg::Allowance { owner, spender } => {
            to_binary(&query_allowance(storage, block, owner, spender)?)
        }
        other => Err(StdError::generic_err(format!(
            "unsupported query {:?}",
            other
        ))),
    }
}

fn parse_account(address: &str) -> StdResult<Addr> {
    validate_address(address).map_err(|err| StdError::generic_err(err.to_string()))
}

pub fn query_balance(storage: &dyn Storage, address: String) -> StdResult<BalanceResponse> {
    let address = parse_account(&address)?;
    let balance = BALANCES
        .may_load(storage, account_key(&address))?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_token_info(storage: &dyn Storage) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

pub fn query_minter(storage: &dyn Storage) -> StdResult<Option<MinterResponse>> {
    let info = TOKEN_INFO.load(storage)?;
    Ok(info.minter.map(|minter| MinterResponse {
        minter: minter.to_string(),
        cap: None,
    }))
}

pub fn query_allowance(
    storage: &dyn Storage,
    block: &BlockInfo,
    owner: String,
    spender: String,
) -> StdResult<AllowanceResponse> {
    let owner = parse_account(&owner)?;
    let spender = parse_account(&spender)?;
    let response = match live_allowance(storage, block, &owner, &spender)? {
        Some(allowance) => AllowanceResponse {
            allowance: allowance.amount,
            expires: allowance.expires,
        },
        None => AllowanceResponse::default(),
    };
    Ok(response)
}
