#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{coin, to_binary, Binary, Coin, Deps, Env, StdResult};
use sg_std::NATIVE_DENOM;

use crate::{
    msg::{ConfigResponse, OwnerOfResponse, QueryMsg},
    state::{
        TokenId, ADMIN, CONFIG, CUSTODY_BALANCE, ISSUED_COUNT, PAUSED, TOKEN_COUNT_BY_OWNER,
        TOKEN_OWNERS,
    },
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Price {} => to_binary(&query_price(deps)?),
        QueryMsg::SupplyCap {} => to_binary(&CONFIG.load(deps.storage)?.supply_cap),
        QueryMsg::Paused {} => to_binary(&PAUSED.load(deps.storage)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Admin {} => to_binary(&ADMIN.query_admin(deps)?),
        QueryMsg::IssuedCount {} => to_binary(&ISSUED_COUNT.load(deps.storage)?),
        QueryMsg::CustodyBalance {} => to_binary(&query_custody_balance(deps)?),
        QueryMsg::OwnerOf { token_id } => to_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::Balance { owner } => to_binary(&query_balance(deps, owner)?),
    }
}

fn query_price(deps: Deps) -> StdResult<Coin> {
    let config = CONFIG.load(deps.storage)?;
    Ok(coin(config.unit_price.u128(), NATIVE_DENOM))
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        base_token_uri: config.base_token_uri,
        registry: config.registry.addr().to_string(),
        unit_price: coin(config.unit_price.u128(), NATIVE_DENOM),
        supply_cap: config.supply_cap,
    })
}

fn query_custody_balance(deps: Deps) -> StdResult<Coin> {
    let balance = CUSTODY_BALANCE.load(deps.storage)?;
    Ok(coin(balance.u128(), NATIVE_DENOM))
}

fn query_owner_of(deps: Deps, token_id: TokenId) -> StdResult<OwnerOfResponse> {
    let owner = TOKEN_OWNERS.load(deps.storage, token_id)?;
    Ok(OwnerOfResponse {
        owner: owner.to_string(),
    })
}

fn query_balance(deps: Deps, owner: String) -> StdResult<u64> {
    let owner = deps.api.addr_validate(&owner)?;
    Ok(TOKEN_COUNT_BY_OWNER
        .may_load(deps.storage, &owner)?
        .unwrap_or_default())
}
