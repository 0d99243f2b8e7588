use cosmwasm_std::{Addr, Deps, DepsMut, StdError, StdResult};
use cw_controllers::{Admin, AdminResponse};
use thiserror::Error;

mod version;

pub use version::ensure_upgrade;

#[derive(Error, Debug, PartialEq)]
pub enum GuardError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: {sender} is not the administrator")]
    Unauthorized { sender: String },
}

/// AdminGuard stores the fixed administrator of a contract and gates every
/// administrator-only entry point. Unlike `cw_controllers::Admin` it exposes
/// no way to change or clear the administrator after instantiation.
pub struct AdminGuard<'a>(Admin<'a>);

impl<'a> AdminGuard<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        AdminGuard(Admin::new(namespace))
    }

    /// Only called from `instantiate`.
    pub fn init(&self, deps: DepsMut, admin: Addr) -> StdResult<()> {
        self.0.set(deps, Some(admin))
    }

    pub fn get(&self, deps: Deps) -> StdResult<Addr> {
        self.0
            .get(deps)?
            .ok_or_else(|| StdError::not_found("administrator"))
    }

    pub fn assert_admin(&self, deps: Deps, sender: &Addr) -> Result<(), GuardError> {
        if !self.0.is_admin(deps, sender)? {
            return Err(GuardError::Unauthorized {
                sender: sender.to_string(),
            });
        }
        Ok(())
    }

    pub fn query_admin(&self, deps: Deps) -> StdResult<AdminResponse> {
        self.0.query_admin(deps)
    }
}
