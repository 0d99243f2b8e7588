use crate::state::{ADMIN, MEMBERS, TOTAL_MEMBER_COUNT};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order, StdResult};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::nonpayable;
use sg_std::Response;
use shield_controllers::ensure_upgrade;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MembersResponse, MigrateMsg, QueryMsg};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:access-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Query limits
const DEFAULT_QUERY_LIMIT: u32 = 10;
const MAX_QUERY_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    mut msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    ADMIN.init(deps.branch(), info.sender.clone())?;

    // remove duplicate addresses
    msg.members.sort_unstable();
    msg.members.dedup();

    let mut count = 0u64;
    for address in msg.members.into_iter() {
        let addr = deps.api.addr_validate(&address)?;
        // distinct strings may still validate to the same address
        if !MEMBERS.has(deps.storage, addr.clone()) {
            MEMBERS.save(deps.storage, addr, &true)?;
            count += 1;
        }
    }

    TOTAL_MEMBER_COUNT.save(deps.storage, &count)?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("registry_addr", env.contract.address.to_string())
        .add_attribute("admin", info.sender)
        .add_attribute("member_count", count.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddToWhitelist { address } => execute_add_to_whitelist(deps, info, address),
        ExecuteMsg::RemoveFromWhitelist { address } => {
            execute_remove_from_whitelist(deps, info, address)
        }
    }
}

pub fn execute_add_to_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    let addr = deps.api.addr_validate(&address)?;
    if MEMBERS.has(deps.storage, addr.clone()) {
        return Err(ContractError::AlreadyMember {
            addr: addr.to_string(),
        });
    }

    MEMBERS.save(deps.storage, addr.clone(), &true)?;
    let count = TOTAL_MEMBER_COUNT.load(deps.storage)? + 1;
    TOTAL_MEMBER_COUNT.save(deps.storage, &count)?;

    let event = Event::new("add_to_whitelist")
        .add_attribute("address", addr)
        .add_attribute("member_count", count.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_remove_from_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    let addr = deps.api.addr_validate(&address)?;
    if !MEMBERS.has(deps.storage, addr.clone()) {
        return Err(ContractError::NotMember {
            addr: addr.to_string(),
        });
    }

    MEMBERS.remove(deps.storage, addr.clone());
    let count = TOTAL_MEMBER_COUNT.load(deps.storage)? - 1;
    TOTAL_MEMBER_COUNT.save(deps.storage, &count)?;

    let event = Event::new("remove_from_whitelist")
        .add_attribute("address", addr)
        .add_attribute("member_count", count.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsWhitelisted { address } => to_binary(&query_is_whitelisted(deps, address)?),
        QueryMsg::Admin {} => to_binary(&ADMIN.query_admin(deps)?),
        QueryMsg::MemberCount {} => to_binary(&query_member_count(deps)?),
        QueryMsg::Members { start_after, limit } => {
            to_binary(&query_members(deps, start_after, limit)?)
        }
    }
}

pub fn query_is_whitelisted(deps: Deps, address: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(MEMBERS.has(deps.storage, addr))
}

pub fn query_member_count(deps: Deps) -> StdResult<u64> {
    TOTAL_MEMBER_COUNT.load(deps.storage)
}

pub fn query_members(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<MembersResponse> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after
        .map(|address| deps.api.addr_validate(&address))
        .transpose()?
        .map(Bound::exclusive);

    let members = MEMBERS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MembersResponse { members })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = match ensure_upgrade(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)? {
        Some(previous) => previous,
        // same version
        None => return Ok(Response::new()),
    };

    let event = Event::new("migrate")
        .add_attribute("from_version", previous.version)
        .add_attribute("to_version", CONTRACT_VERSION);
    Ok(Response::new().add_event(event))
}
