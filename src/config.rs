//! Read-only configuration for the deploy scripts: the active network
//! identity and the json config file holding wallet key material and the
//! per-network contract address book.

use std::{env, fs, path::PathBuf};

use alloy::primitives::Address;
use json::JsonValue;

use crate::{
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIG_FILE, DEFAULT_KEYSTORE_DIR, DEFAULT_LOCAL_RPC,
        DEFAULT_OUTPUT_FILE, FORKED_LOCAL_ENVIRONMENTS, LOCAL_BLOCKCHAIN_ENVIRONMENTS,
    },
    errors::ScriptError,
};

/// Classification of the active network name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    /// Throwaway local chain, mocks get deployed here
    LocalDevelopment,
    /// Local chain replaying forked mainnet state
    ForkedMainnet,
    /// Anything else, addresses come from the address book
    Live,
}

/// The active network identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network(String);

impl Network {
    /// Wrap a network name
    pub fn new(name: impl Into<String>) -> Self {
        Network(name.into())
    }

    /// The raw network name, as used in the config address book
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Which of the three disjoint sets this network falls in
    pub fn kind(&self) -> NetworkKind {
        if LOCAL_BLOCKCHAIN_ENVIRONMENTS.contains(&self.0.as_str()) {
            NetworkKind::LocalDevelopment
        } else if FORKED_LOCAL_ENVIRONMENTS.contains(&self.0.as_str()) {
            NetworkKind::ForkedMainnet
        } else {
            NetworkKind::Live
        }
    }

    /// Whether this network runs on a local node (development or forked)
    pub fn is_local_or_forked(&self) -> bool {
        !matches!(self.kind(), NetworkKind::Live)
    }
}

/// The loaded script configuration, never written by this crate
pub struct Config {
    /// Parsed content of the json config file
    raw: JsonValue,
    /// The active network
    network: Network,
}

impl Config {
    /// Load the config file and bind the active network.
    ///
    /// The path falls back to the `CONFIG_FILE` env var, then to
    /// [`DEFAULT_CONFIG_FILE`]; a missing file is treated as an empty config
    /// so that purely local runs need no file at all. The network name falls
    /// back to the `NETWORK` env var, then to `development`.
    pub fn load(path: Option<&str>, network: Option<String>) -> Result<Config, ScriptError> {
        let path = path
            .map(str::to_owned)
            .or_else(|| env::var("CONFIG_FILE").ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let raw = if PathBuf::from(&path).exists() {
            let contents = fs::read_to_string(&path)
                .map_err(|e| ScriptError::ConfigLookup(format!("could not read `{path}`: {e}")))?;
            json::parse(&contents)
                .map_err(|e| ScriptError::ConfigLookup(format!("`{path}` is not valid json: {e}")))?
        } else {
            JsonValue::new_object()
        };

        let network = network
            .or_else(|| env::var("NETWORK").ok())
            .unwrap_or_else(|| "development".to_string());

        Ok(Config {
            raw,
            network: Network::new(network),
        })
    }

    /// Build a config from an already-parsed json value
    pub fn from_parts(raw: JsonValue, network: Network) -> Config {
        Config { raw, network }
    }

    /// The active network
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The configured deployer key for live networks, from `wallets.from_key`.
    /// `${VAR}` values are resolved through the environment.
    pub fn from_key(&self) -> Result<String, ScriptError> {
        let value = self.raw["wallets"]["from_key"].as_str().ok_or_else(|| {
            ScriptError::AccountResolution(format!(
                "no account source for network `{}`: no index, no keystore id, and no `wallets.from_key` in the config",
                self.network.name()
            ))
        })?;
        resolve_env_placeholder(value)
    }

    /// Static address-book lookup for (active network, contract key)
    pub fn contract_address(&self, key: &str) -> Result<Address, ScriptError> {
        let value = self.raw["networks"][self.network.name()][key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ConfigLookup(format!(
                    "no address for contract `{key}` on network `{}`",
                    self.network.name()
                ))
            })?;
        value.parse::<Address>().map_err(|e| {
            ScriptError::ConfigLookup(format!(
                "bad address for contract `{key}` on network `{}`: {e}",
                self.network.name()
            ))
        })
    }

    /// The RPC url for the active network: per-network `rpc_url` key, then the
    /// `RPC_URL` env var, then the loopback default for local chains.
    pub fn rpc_url(&self) -> Result<String, ScriptError> {
        if let Some(url) = self.raw["networks"][self.network.name()]["rpc_url"].as_str() {
            return resolve_env_placeholder(url);
        }
        if let Ok(url) = env::var("RPC_URL") {
            return Ok(url);
        }
        if self.network.is_local_or_forked() {
            return Ok(DEFAULT_LOCAL_RPC.to_string());
        }
        Err(ScriptError::ClientInitialization(format!(
            "no RPC url for network `{}`: set `networks.{}.rpc_url` or the RPC_URL env var",
            self.network.name(),
            self.network.name()
        )))
    }

    /// Directory holding encrypted account keystores
    pub fn keystore_dir(&self) -> PathBuf {
        self.raw["keystore_dir"]
            .as_str()
            .unwrap_or(DEFAULT_KEYSTORE_DIR)
            .into()
    }

    /// Directory holding compiled contract artifacts
    pub fn artifacts_dir(&self) -> PathBuf {
        self.raw["artifacts_dir"]
            .as_str()
            .unwrap_or(DEFAULT_ARTIFACTS_DIR)
            .into()
    }

    /// Path of the deployed-address output file
    pub fn output_file(&self) -> String {
        self.raw["output_file"]
            .as_str()
            .unwrap_or(DEFAULT_OUTPUT_FILE)
            .to_string()
    }
}

/// Resolve a `${VAR}` config value through the environment
fn resolve_env_placeholder(value: &str) -> Result<String, ScriptError> {
    if let Some(var) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        env::var(var).map_err(|_| {
            ScriptError::ConfigLookup(format!(
                "config references `${{{var}}}` but the variable is not set"
            ))
        })
    } else {
        Ok(value.to_string())
    }
}
