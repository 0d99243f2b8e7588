use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial members. The instantiating sender becomes the administrator
    /// but is only a member if listed here.
    pub members: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    AddToWhitelist { address: String },
    RemoveFromWhitelist { address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(bool)]
    IsWhitelisted { address: String },
    #[returns(cw_controllers::AdminResponse)]
    Admin {},
    #[returns(u64)]
    MemberCount {},
    /// Members in ascending address order
    #[returns(MembersResponse)]
    Members {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MembersResponse {
    pub members: Vec<Addr>,
}

#[cw_serde]
pub struct MigrateMsg {}
