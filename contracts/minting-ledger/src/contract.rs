#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{coin, to_binary, BankMsg, DepsMut, Env, Event, MessageInfo, StdResult, Uint128};
use cw2::set_contract_version;
use cw_utils::{may_pay, nonpayable};
use sg_std::{Response, NATIVE_DENOM};
use shield_controllers::ensure_upgrade;

use access_registry::AccessRegistryContract;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg};
use crate::state::{
    Config, ADMIN, CONFIG, CUSTODY_BALANCE, ISSUED_COUNT, PAUSED, TOKEN_COUNT_BY_OWNER,
    TOKEN_OWNERS,
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:minting-ledger";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.unit_price.is_zero() {
        return Err(ContractError::InvalidUnitPrice {});
    }
    if msg.supply_cap == 0 {
        return Err(ContractError::InvalidSupplyCap {});
    }
    if msg.base_token_uri.trim().is_empty() {
        return Err(ContractError::InvalidBaseTokenUri {});
    }

    let registry = deps.api.addr_validate(&msg.registry)?;
    let config = Config {
        base_token_uri: msg.base_token_uri,
        registry: AccessRegistryContract(registry.clone()),
        unit_price: msg.unit_price,
        supply_cap: msg.supply_cap,
    };
    CONFIG.save(deps.storage, &config)?;

    ADMIN.init(deps.branch(), info.sender.clone())?;
    PAUSED.save(deps.storage, &false)?;
    ISSUED_COUNT.save(deps.storage, &0u64)?;
    CUSTODY_BALANCE.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("ledger_addr", env.contract.address.to_string())
        .add_attribute("admin", info.sender)
        .add_attribute("registry", registry)
        .add_attribute("unit_price", config.unit_price.to_string())
        .add_attribute("supply_cap", config.supply_cap.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {} => execute_mint(deps, info),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, info),
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
    }
}

/// Checks run in a fixed order so a rejected caller learns which one failed:
/// paused, whitelisted, supply, payment. Nothing is written until all pass.
/// Payment above the unit price is kept by the contract but only the unit
/// price is credited to the custody balance. The excess is not refunded and
/// no operation, `Withdraw` included, can ever pay it out.
pub fn execute_mint(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    if PAUSED.load(deps.storage)? {
        return Err(ContractError::Paused {});
    }

    let config = CONFIG.load(deps.storage)?;
    if !config
        .registry
        .is_whitelisted(&deps.querier, &info.sender)?
    {
        return Err(ContractError::NotWhitelisted {
            addr: info.sender.to_string(),
        });
    }

    let issued_count = ISSUED_COUNT.load(deps.storage)?;
    if issued_count >= config.supply_cap {
        return Err(ContractError::SupplyExhausted {
            supply_cap: config.supply_cap,
        });
    }

    let payment = may_pay(&info, NATIVE_DENOM)?;
    if payment < config.unit_price {
        return Err(ContractError::InsufficientPayment {
            got: payment,
            expected: config.unit_price,
        });
    }

    // ids start at 1 and are never reused
    let token_id = issued_count + 1;
    TOKEN_OWNERS.save(deps.storage, token_id, &info.sender)?;
    TOKEN_COUNT_BY_OWNER.update(deps.storage, &info.sender, |count| -> StdResult<_> {
        Ok(count.unwrap_or_default() + 1)
    })?;
    ISSUED_COUNT.save(deps.storage, &token_id)?;
    CUSTODY_BALANCE.update(deps.storage, |balance| -> StdResult<_> {
        Ok(balance.checked_add(config.unit_price)?)
    })?;

    let event = Event::new("mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("price", config.unit_price.to_string());

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id.to_string())
        .add_event(event)
        .set_data(to_binary(&token_id)?))
}

/// The balance is zeroed in storage before the payout is queued. The bank
/// message is only dispatched after this call's state has committed, so a
/// re-entrant withdraw reads zero.
pub fn execute_withdraw(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    let amount = CUSTODY_BALANCE.load(deps.storage)?;
    CUSTODY_BALANCE.save(deps.storage, &Uint128::zero())?;

    let event = Event::new("withdraw")
        .add_attribute("recipient", info.sender.to_string())
        .add_attribute("amount", amount.to_string());
    let res = Response::new().add_event(event);

    // the bank module rejects empty sends
    if amount.is_zero() {
        return Ok(res);
    }

    let payout = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![coin(amount.u128(), NATIVE_DENOM)],
    };
    Ok(res.add_message(payout))
}

pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    PAUSED.save(deps.storage, &paused)?;

    let event = Event::new("set_paused")
        .add_attribute("paused", paused.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = match ensure_upgrade(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)? {
        Some(previous) => previous,
        // same version
        None => return Ok(Response::new()),
    };

    let event = Event::new("migrate")
        .add_attribute("from_name", previous.contract)
        .add_attribute("from_version", previous.version)
        .add_attribute("to_name", CONTRACT_NAME)
        .add_attribute("to_version", CONTRACT_VERSION);
    Ok(Response::new().add_event(event))
}
