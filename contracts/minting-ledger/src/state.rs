use access_registry::AccessRegistryContract;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use shield_controllers::AdminGuard;

pub type TokenId = u64;

#[cw_serde]
pub struct Config {
    pub base_token_uri: String,
    /// Queried on every mint, never written to
    pub registry: AccessRegistryContract,
    /// Charged in `NATIVE_DENOM`
    pub unit_price: Uint128,
    pub supply_cap: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const ADMIN: AdminGuard = AdminGuard::new("admin");

/// Controls if minting is paused or not by admin
pub const PAUSED: Item<bool> = Item::new("paused");

/// Tokens issued so far, also the id of the last issued token
pub const ISSUED_COUNT: Item<u64> = Item::new("issued_count");

/// Accepted mint payments minus withdrawals
pub const CUSTODY_BALANCE: Item<Uint128> = Item::new("custody_balance");

pub const TOKEN_OWNERS: Map<TokenId, Addr> = Map::new("token_owners");

pub const TOKEN_COUNT_BY_OWNER: Map<&Addr, u64> = Map::new("token_count_by_owner");
