use cw20::Cw20Coin;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Execute and query messages are the plain `cw20` ones.
pub use cw20::{Cw20ExecuteMsg as ExecuteMsg, Cw20QueryMsg as QueryMsg};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    /// Only this account may mint; `None` fixes the supply.
    pub minter: Option<String>,
}
