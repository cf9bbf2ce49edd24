//! Account resolution for the deploy scripts.

use std::env;

use alloy::{hex, primitives::B256, signers::local::PrivateKeySigner};

use crate::{config::Config, constants::DEV_ACCOUNT_KEYS, errors::ScriptError};

/// Resolve the signing account for the current run.
///
/// Precedence: an explicit dev-account `index` wins regardless of network,
/// then a stored keystore `id`, then the default dev account when the active
/// network is local or forked, then the key configured under
/// `wallets.from_key`. When all four sources are exhausted the error names
/// what was missing.
pub fn get_account(
    config: &Config,
    index: Option<usize>,
    id: Option<&str>,
) -> Result<PrivateKeySigner, ScriptError> {
    if let Some(index) = index {
        return dev_account(index);
    }
    if let Some(id) = id {
        return load_keystore_account(config, id);
    }
    if config.network().is_local_or_forked() {
        return dev_account(0);
    }
    signer_from_key(&config.from_key()?)
}

/// The well-known unlocked dev account at `index`
fn dev_account(index: usize) -> Result<PrivateKeySigner, ScriptError> {
    let key = DEV_ACCOUNT_KEYS.get(index).ok_or_else(|| {
        ScriptError::AccountResolution(format!(
            "no dev account at index {index}, only {} are available",
            DEV_ACCOUNT_KEYS.len()
        ))
    })?;
    signer_from_key(key)
}

/// Decrypt the keystore stored under `<keystore_dir>/<id>.json`
fn load_keystore_account(config: &Config, id: &str) -> Result<PrivateKeySigner, ScriptError> {
    let path = config.keystore_dir().join(format!("{id}.json"));
    let password = env::var("KEYSTORE_PASSWORD").map_err(|_| {
        ScriptError::AccountResolution(format!(
            "loading keystore `{id}` requires the KEYSTORE_PASSWORD env var"
        ))
    })?;
    PrivateKeySigner::decrypt_keystore(&path, password).map_err(|e| {
        ScriptError::AccountResolution(format!(
            "could not decrypt keystore `{}`: {e}",
            path.display()
        ))
    })
}

/// Build a signer from a raw hex private key
fn signer_from_key(key: &str) -> Result<PrivateKeySigner, ScriptError> {
    let bytes = hex::decode(key.trim_start_matches("0x"))
        .map_err(|e| ScriptError::AccountResolution(format!("bad private key: {e}")))?;
    let key = B256::try_from(bytes.as_slice())
        .map_err(|e| ScriptError::AccountResolution(format!("bad private key: {e}")))?;
    PrivateKeySigner::from_bytes(&key)
        .map_err(|e| ScriptError::AccountResolution(e.to_string()))
}
