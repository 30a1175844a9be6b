use crate::config::ChainConfig;
use crate::error::ChainError;
use cosmwasm_std::{
    from_binary, to_binary, Addr, Binary, BlockInfo, CosmosMsg, Event, MemoryStorage, Order,
    Response, Storage, Timestamp, Uint128, WasmMsg,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use vanity::context::CallContext;
use vanity::registry::InstantiateMsg as RegistryInstantiateMsg;
use vanity::token::InstantiateMsg as TokenInstantiateMsg;
use vanity::utils::{address_from_bytes, address_to_bytes, keccak256_word};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractKind {
    Registry,
    Token,
}

struct Instance {
    kind: ContractKind,
    storage: MemoryStorage,
}

/// One entry of the append-only event log.
#[derive(Clone, Debug, PartialEq)]
pub struct EventRecord {
    pub height: u64,
    pub sequence: u64,
    pub contract: Addr,
    pub event: Event,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppResponse {
    pub height: u64,
    pub sequence: u64,
    /// Events of the call and of every sub-call, in execution order.
    pub events: Vec<EventRecord>,
    /// Data set by the top-level contract.
    pub data: Option<Binary>,
}

impl AppResponse {
    pub fn has_event(&self, ty: &str) -> bool {
        self.events.iter().any(|record| record.event.ty == ty)
    }
}

pub struct Chain {
    config: ChainConfig,
    height: u64,
    time: u64,
    next_sequence: u64,
    nonces: BTreeMap<Addr, u64>,
    contracts: BTreeMap<Addr, Instance>,
    events: Vec<EventRecord>,
}

fn copy_storage(storage: &MemoryStorage) -> MemoryStorage {
    let mut copy = MemoryStorage::new();
    for (key, value) in storage.range(None, None, Order::Ascending) {
        copy.set(&key, &value);
    }
    copy
}

impl Chain {
    pub fn new(config: ChainConfig) -> Self {
        Chain {
            height: config.genesis_height,
            time: config.genesis_time,
            config,
            next_sequence: 0,
            nonces: BTreeMap::new(),
            contracts: BTreeMap::new(),
            events: vec![],
        }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn block_info(&self) -> BlockInfo {
        BlockInfo {
            height: self.height,
            time: Timestamp::from_seconds(self.time),
            chain_id: self.config.chain_id.to_string(),
        }
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Height and clock saturate at `u64::MAX`.
    pub fn mine_blocks(&mut self, blocks: u64) {
        self.height = self.height.saturating_add(blocks);
        self.time = self
            .time
            .saturating_add(blocks.saturating_mul(self.config.block_time));
        info!(height = self.height, time = self.time, blocks, "mined blocks");
    }

    pub fn increase_time(&mut self, seconds: u64) {
        self.time = self.time.saturating_add(seconds);
        debug!(time = self.time, seconds, "advanced clock");
    }

    fn take_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    /// `keccak256(deployer ‖ nonce)[12..]`, as an externally owned account would get.
    fn next_address(&mut self, deployer: &Addr) -> Result<Addr, ChainError> {
        let nonce = self.nonces.entry(deployer.clone()).or_insert(0);
        let preimage = [&address_to_bytes(deployer)?[..], &nonce.to_be_bytes()[..]].concat();
        *nonce += 1;
        let hash = keccak256_word(&preimage);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        Ok(address_from_bytes(&bytes))
    }

    pub fn deploy_registry(
        &mut self,
        deployer: &Addr,
        msg: RegistryInstantiateMsg,
    ) -> Result<Addr, ChainError> {
        self.deploy(deployer, ContractKind::Registry, &to_binary(&msg)?)
    }

    pub fn deploy_token(
        &mut self,
        deployer: &Addr,
        msg: TokenInstantiateMsg,
    ) -> Result<Addr, ChainError> {
        self.deploy(deployer, ContractKind::Token, &to_binary(&msg)?)
    }

    fn deploy(
        &mut self,
        deployer: &Addr,
        kind: ContractKind,
        msg: &Binary,
    ) -> Result<Addr, ChainError> {
        let address = self.next_address(deployer)?;
        let ctx = CallContext {
            caller: deployer.clone(),
            block: self.block_info(),
            contract: address.clone(),
            gas_price: Uint128::zero(),
            sequence: self.take_sequence(),
        };

        let mut storage = MemoryStorage::new();
        match kind {
            ContractKind::Registry => {
                vanity_registry::contract::instantiate(&mut storage, &ctx, from_binary(msg)?)?;
            }
            ContractKind::Token => {
                vanity_token::contract::instantiate(&mut storage, &ctx, from_binary(msg)?)?;
            }
        }
        self.contracts.insert(address.clone(), Instance { kind, storage });

        info!(contract = %address, deployer = %deployer, ?kind, "deployed contract");
        Ok(address)
    }

    pub fn execute<M: Serialize>(
        &mut self,
        sender: &Addr,
        contract: &Addr,
        gas_price: Uint128,
        msg: &M,
    ) -> Result<AppResponse, ChainError> {
        let sequence = self.take_sequence();
        let msg = to_binary(msg)?;
        let snapshot: BTreeMap<Addr, MemoryStorage> = self
            .contracts
            .iter()
            .map(|(address, instance)| (address.clone(), copy_storage(&instance.storage)))
            .collect();

        let mut events = vec![];
        let result = self.dispatch(sender, contract, gas_price, sequence, &msg, &mut events);
        let outcome = match result {
            Ok(response) => {
                self.events.extend(events.iter().cloned());
                Ok(AppResponse {
                    height: self.height,
                    sequence,
                    events,
                    data: response.data,
                })
            }
            Err(err) => {
                warn!(sequence, contract = %contract, sender = %sender, error = %err, "call reverted");
                for (address, storage) in snapshot {
                    if let Some(instance) = self.contracts.get_mut(&address) {
                        instance.storage = storage;
                    }
                }
                Err(err)
            }
        };

        if self.config.auto_mine {
            self.mine_blocks(1);
        }
        outcome
    }

    fn dispatch(
        &mut self,
        sender: &Addr,
        contract: &Addr,
        gas_price: Uint128,
        sequence: u64,
        msg: &Binary,
        events: &mut Vec<EventRecord>,
    ) -> Result<Response, ChainError> {
        debug!(sequence, contract = %contract, sender = %sender, "dispatch");
        let ctx = CallContext {
            caller: sender.clone(),
            block: self.block_info(),
            contract: contract.clone(),
            gas_price,
            sequence,
        };
        let instance = self
            .contracts
            .get_mut(contract)
            .ok_or_else(|| ChainError::UnknownContract {
                address: contract.to_string(),
            })?;
        let response = match instance.kind {
            ContractKind::Registry => {
                vanity_registry::contract::execute(&mut instance.storage, &ctx, from_binary(msg)?)?
            }
            ContractKind::Token => {
                vanity_token::contract::execute(&mut instance.storage, &ctx, from_binary(msg)?)?
            }
        };

        let height = self.height;
        events.extend(response.events.iter().map(|event| EventRecord {
            height,
            sequence,
            contract: contract.clone(),
            event: event.clone(),
        }));

        // Sub-calls run depth-first with the calling contract as sender.
        for sub in response.messages.iter() {
            match &sub.msg {
                CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr, msg, ..
                }) => {
                    let target = Addr::unchecked(contract_addr.as_str());
                    self.dispatch(contract, &target, gas_price, sequence, msg, events)?;
                }
                other => {
                    return Err(ChainError::UnsupportedMessage {
                        msg: format!("{:?}", other),
                    })
                }
            }
        }
        Ok(response)
    }

    pub fn query<M: Serialize, T: DeserializeOwned>(
        &self,
        contract: &Addr,
        msg: &M,
    ) -> Result<T, ChainError> {
        let instance = self
            .contracts
            .get(contract)
            .ok_or_else(|| ChainError::UnknownContract {
                address: contract.to_string(),
            })?;
        let msg = to_binary(msg)?;
        let res = match instance.kind {
            ContractKind::Registry => {
                vanity_registry::contract::query(&instance.storage, from_binary(&msg)?)?
            }
            ContractKind::Token => vanity_token::contract::query(
                &instance.storage,
                &self.block_info(),
                from_binary(&msg)?,
            )?,
        };
        Ok(from_binary(&res)?)
    }
}
