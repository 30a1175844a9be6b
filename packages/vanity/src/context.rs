use cosmwasm_std::{Addr, BlockInfo, Env, MessageInfo, Uint128};

/// Everything a call may know about where it runs, passed explicitly to
/// every contract operation.
#[derive(Clone, Debug, PartialEq)]
pub struct CallContext {
    pub caller: Addr,
    pub block: BlockInfo,
    pub contract: Addr,
    pub gas_price: Uint128,
    /// Position of the call in the ledger's total order; strictly increasing,
    /// so it orders calls that share a block height.
    pub sequence: u64,
}

impl CallContext {
    /// Context for a call arriving through a wasm entry point. The wasm host
    /// exposes neither gas price nor call order, so `gas_price` is zero and
    /// `sequence` comes from the contract's own call counter.
    pub fn from_env(env: Env, info: MessageInfo, sequence: u64) -> Self {
        CallContext {
            caller: info.sender,
            block: env.block,
            contract: env.contract.address,
            gas_price: Uint128::zero(),
            sequence,
        }
    }

    pub fn height(&self) -> u64 {
        self.block.height
    }

    pub fn now(&self) -> u64 {
        self.block.time.seconds()
    }
}
