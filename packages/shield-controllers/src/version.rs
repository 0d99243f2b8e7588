use cosmwasm_std::{StdError, StdResult, Storage};
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use semver::Version;

/// Moves the stored cw2 version forward to `version`. Returns the version
/// that was replaced, or `None` when the stored version is already current.
/// Fails when the stored name differs or the move would be a downgrade.
pub fn ensure_upgrade(
    storage: &mut dyn Storage,
    name: &str,
    version: &str,
) -> StdResult<Option<ContractVersion>> {
    let current = get_contract_version(storage)?;
    if current.contract != name {
        return Err(StdError::generic_err("Cannot upgrade to a different contract"));
    }

    let stored: Version = current
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let target: Version = version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if stored > target {
        return Err(StdError::generic_err(
            "Cannot upgrade to a previous contract version",
        ));
    }
    if stored == target {
        return Ok(None);
    }

    set_contract_version(storage, name, version)?;
    Ok(Some(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    const NAME: &str = "crates.io:shield-test";

    #[test]
    fn upgrade_moves_version_forward() {
        let mut storage = MockStorage::new();
        set_contract_version(&mut storage, NAME, "0.1.0").unwrap();

        let previous = ensure_upgrade(&mut storage, NAME, "1.0.0").unwrap().unwrap();
        assert_eq!(previous.version, "0.1.0");
        assert_eq!(get_contract_version(&storage).unwrap().version, "1.0.0");

        assert_eq!(ensure_upgrade(&mut storage, NAME, "1.0.0").unwrap(), None);
    }

    #[test]
    fn upgrade_rejects_bad_moves() {
        let mut storage = MockStorage::new();
        set_contract_version(&mut storage, NAME, "2.0.0").unwrap();

        let err = ensure_upgrade(&mut storage, NAME, "1.0.0").unwrap_err();
        assert_eq!(
            err,
            StdError::generic_err("Cannot upgrade to a previous contract version")
        );

        let err = ensure_upgrade(&mut storage, "crates.io:other", "3.0.0").unwrap_err();
        assert_eq!(
            err,
            StdError::generic_err("Cannot upgrade to a different contract")
        );

        let err = ensure_upgrade(&mut storage, NAME, "not-a-version").unwrap_err();
        assert_eq!(err, StdError::generic_err("Invalid contract version"));

        assert_eq!(get_contract_version(&storage).unwrap().version, "2.0.0");
    }
}
