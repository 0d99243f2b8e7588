use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, Coin, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery,
};
use sg_std::CosmosMsg;

use crate::msg::{ConfigResponse, ExecuteMsg, QueryMsg};

/// MintingLedgerContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct MintingLedgerContract(pub Addr);

impl MintingLedgerContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    pub fn mint(&self, payment: Vec<Coin>) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Mint {}, payment)
    }

    pub fn withdraw(&self) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Withdraw {}, vec![])
    }

    pub fn set_paused(&self, paused: bool) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::SetPaused { paused }, vec![])
    }

    fn query<T: serde::de::DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        msg: &QueryMsg,
    ) -> StdResult<T> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(msg)?,
        }))
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<ConfigResponse> {
        self.query(querier, &QueryMsg::Config {})
    }

    pub fn issued_count(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        self.query(querier, &QueryMsg::IssuedCount {})
    }

    pub fn custody_balance(&self, querier: &QuerierWrapper) -> StdResult<Coin> {
        self.query(querier, &QueryMsg::CustodyBalance {})
    }

    pub fn paused(&self, querier: &QuerierWrapper) -> StdResult<bool> {
        self.query(querier, &QueryMsg::Paused {})
    }
}
