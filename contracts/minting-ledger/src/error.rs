use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use shield_controllers::GuardError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized: {sender} is not the administrator")]
    Unauthorized { sender: String },

    #[error("Paused: minting is currently paused")]
    Paused {},

    #[error("NotWhitelisted: {addr}")]
    NotWhitelisted { addr: String },

    #[error("SupplyExhausted: all {supply_cap} tokens have been minted")]
    SupplyExhausted { supply_cap: u64 },

    #[error("InsufficientPayment: got {got}, expected at least {expected}")]
    InsufficientPayment { got: Uint128, expected: Uint128 },

    #[error("InvalidUnitPrice: price must be greater than zero")]
    InvalidUnitPrice {},

    #[error("InvalidSupplyCap: supply cap must be greater than zero")]
    InvalidSupplyCap {},

    #[error("InvalidBaseTokenUri")]
    InvalidBaseTokenUri {},
}

impl From<GuardError> for ContractError {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::Std(err) => ContractError::Std(err),
            GuardError::Unauthorized { sender } => ContractError::Unauthorized { sender },
        }
    }
}
