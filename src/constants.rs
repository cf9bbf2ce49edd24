//! Constants used in the deploy scripts

/// Network names treated as throwaway local development chains
pub const LOCAL_BLOCKCHAIN_ENVIRONMENTS: [&str; 3] =
    ["development", "ganache-local", "anvil-local"];

/// Network names for local chains forked from live mainnet state
pub const FORKED_LOCAL_ENVIRONMENTS: [&str; 2] = ["mainnet-fork", "mainnet-fork-dev"];

/// Default RPC endpoint for local and forked chains
pub const DEFAULT_LOCAL_RPC: &str = "http://127.0.0.1:8545";

/// Decimal precision reported by the mock price-feed aggregator
pub const DECIMALS: u8 = 18;

/// Initial answer reported by the mock price-feed aggregator
pub const INITIAL_VALUE: i128 = 2_000_000_000_000_000_000_000;

/// Default amount sent by the funding helper, in base units (0.1 LINK)
pub const DEFAULT_FUND_AMOUNT: u128 = 100_000_000_000_000_000;

/// Default config file path
pub const DEFAULT_CONFIG_FILE: &str = "farm-config.json";

/// Default deployed-address output file
pub const DEFAULT_OUTPUT_FILE: &str = "deployed.json";

/// Default directory holding encrypted account keystores
pub const DEFAULT_KEYSTORE_DIR: &str = "keystores";

/// Default directory holding compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Private keys of the well-known unlocked accounts local dev nodes
/// (anvil, hardhat) start with. Index 0 is the default deployer.
pub const DEV_ACCOUNT_KEYS: [&str; 10] = [
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
    "7c852118294e51e653712a81e05800f419141751be58f605c371e15141b007a6",
    "47e179ec197488593b187f80a00eb0da91f1b9d0b13f8733639f19c30a34926a",
    "8b3a350cf5c34c9194ca85829a2df0ec3153be0318b5e2d3348e872092edffba",
    "92db14e403b83dfe3df233f83dfa3a0d7096f21ca9b0d6d6b8d88b2b4ec1564e",
    "4bbbf85ce3377467afe5d46f804f221813b2bb87f24d81f60f1fcdbf7cbf4356",
    "dbda1821b80551c9d65939329250298aa3472ba22feea921c0cf5d620ea67b97",
    "2a871d0798f97d79848a013d4936a73bf4cc922c825d33c1cf7073dff6d409c6",
];
