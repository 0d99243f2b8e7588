use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery};
use sg_std::CosmosMsg;

use crate::msg::{ExecuteMsg, QueryMsg};

/// AccessRegistryContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct AccessRegistryContract(pub Addr);

impl AccessRegistryContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    pub fn add_to_whitelist(&self, address: &str) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::AddToWhitelist {
            address: address.to_string(),
        })
    }

    pub fn remove_from_whitelist(&self, address: &str) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::RemoveFromWhitelist {
            address: address.to_string(),
        })
    }

    pub fn is_whitelisted(&self, querier: &QuerierWrapper, address: &Addr) -> StdResult<bool> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::IsWhitelisted {
                address: address.to_string(),
            })?,
        }))
    }
}
