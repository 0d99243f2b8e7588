use cosmwasm_std::StdError;
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

    #[error("AlreadyMember: {addr}")]
    AlreadyMember { addr: String },

    #[error("NotMember: {addr}")]
    NotMember { addr: String },
}

impl From<GuardError> for ContractError {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::Std(err) => ContractError::Std(err),
            GuardError::Unauthorized { sender } => ContractError::Unauthorized { sender },
        }
    }
}
