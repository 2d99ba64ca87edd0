use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::MarketplaceConfig;

/// Load the config and check `admin` against it
pub fn require_admin(env: &Env, admin: &Address) -> Result<MarketplaceConfig, Error> {
    admin.require_auth();
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    if config.admin != *admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}
