use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use shield_controllers::AdminGuard;

/// Fixed at instantiation, never reassigned
pub const ADMIN: AdminGuard = AdminGuard::new("admin");

pub const TOTAL_MEMBER_COUNT: Item<u64> = Item::new("total_member_count");

// Address -> membership flag. Absent keys are non-members.
pub const MEMBERS: Map<Addr, bool> = Map::new("members");
