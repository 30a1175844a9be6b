use crate::contract;
use crate::error::TokenError;
use crate::state::next_sequence;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use vanity::context::CallContext;
use vanity::token::{ExecuteMsg, InstantiateMsg, QueryMsg};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, TokenError> {
    let sequence = next_sequence(deps.storage)?;
    contract::instantiate(deps.storage, &CallContext::from_env(env, info, sequence), msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, TokenError> {
    let sequence = next_sequence(deps.storage)?;
    contract::execute(deps.storage, &CallContext::from_env(env, info, sequence), msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    contract::query(deps.storage, &env.block, msg)
}
