use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};

use crate::state::TokenId;

#[cw_serde]
pub struct InstantiateMsg {
    pub base_token_uri: String,
    /// Address of the access registry consulted on every mint
    pub registry: String,
    pub unit_price: Uint128,
    pub supply_cap: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pay at least the unit price in the native denom to mint the next token
    Mint {},
    /// Send the whole custody balance to the admin
    Withdraw {},
    SetPaused { paused: bool },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Coin)]
    Price {},
    #[returns(u64)]
    SupplyCap {},
    #[returns(bool)]
    Paused {},
    #[returns(ConfigResponse)]
    Config {},
    #[returns(cw_controllers::AdminResponse)]
    Admin {},
    #[returns(u64)]
    IssuedCount {},
    #[returns(Coin)]
    CustodyBalance {},
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: TokenId },
    /// Number of tokens held by `owner`
    #[returns(u64)]
    Balance { owner: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub base_token_uri: String,
    pub registry: String,
    pub unit_price: Coin,
    pub supply_cap: u64,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct MigrateMsg {}
