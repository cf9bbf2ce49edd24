//! Contract resolution: named deployment targets resolve to a live address
//! from the config address book, or to a locally deployed mock.

use std::{collections::HashMap, fmt, str::FromStr};

use alloy::primitives::Address;

use crate::{
    config::{Config, NetworkKind},
    constants::{DECIMALS, INITIAL_VALUE},
    deploy,
    errors::ScriptError,
    tx::client::RpcProvider,
};

/// The named deployment targets the scripts know how to resolve.
///
/// String forms are the address-book keys used in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractName {
    /// The ETH/USD price feed
    EthUsdPriceFeed,
    /// The DAI/USD price feed
    DaiUsdPriceFeed,
    /// The FAU test token, standing in for DAI
    FauToken,
    /// The wrapped-ether token
    WethToken,
    /// The LINK token used by the funding helper
    LinkToken,
}

impl ContractName {
    /// The address-book key for this contract
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::EthUsdPriceFeed => "eth_usd_price_feed",
            ContractName::DaiUsdPriceFeed => "dai_usd_price_feed",
            ContractName::FauToken => "fau_token",
            ContractName::WethToken => "weth_token",
            ContractName::LinkToken => "link_token",
        }
    }

    /// The mock that stands in for this contract on local chains
    pub fn mock_kind(&self) -> MockKind {
        match self {
            ContractName::EthUsdPriceFeed | ContractName::DaiUsdPriceFeed => {
                MockKind::PriceFeedAggregator
            }
            ContractName::FauToken => MockKind::Dai,
            ContractName::WethToken => MockKind::Weth,
            ContractName::LinkToken => MockKind::LinkToken,
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eth_usd_price_feed" => Ok(ContractName::EthUsdPriceFeed),
            "dai_usd_price_feed" => Ok(ContractName::DaiUsdPriceFeed),
            "fau_token" => Ok(ContractName::FauToken),
            "weth_token" => Ok(ContractName::WethToken),
            "link_token" => Ok(ContractName::LinkToken),
            other => Err(ScriptError::ConfigLookup(format!(
                "unknown contract name `{other}`"
            ))),
        }
    }
}

/// The kinds of mock contract the deployer can put on a local chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockKind {
    /// Mock LINK token
    LinkToken,
    /// Mock price-feed aggregator
    PriceFeedAggregator,
    /// Mock DAI token
    Dai,
    /// Mock wrapped-ether token
    Weth,
}

impl MockKind {
    /// The compiled-artifact (and log) name of the mock contract
    pub fn artifact_name(&self) -> &'static str {
        match self {
            MockKind::LinkToken => "LinkToken",
            MockKind::PriceFeedAggregator => "MockV3Aggregator",
            MockKind::Dai => "MockDAI",
            MockKind::Weth => "MockWETH",
        }
    }

    /// The key the deployed mock is recorded under in the output file
    pub fn output_key(&self) -> &'static str {
        match self {
            MockKind::LinkToken => "link_token",
            MockKind::PriceFeedAggregator => "price_feed",
            MockKind::Dai => "fau_token",
            MockKind::Weth => "weth_token",
        }
    }
}

impl fmt::Display for MockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.artifact_name())
    }
}

/// Explicit mapping from mock kind to its most recently deployed instance
#[derive(Debug, Default)]
pub struct MockRegistry {
    /// Most recent deployment per kind
    deployed: HashMap<MockKind, Address>,
}

impl MockRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deployment; the newest instance of a kind wins
    pub fn record(&mut self, kind: MockKind, address: Address) {
        self.deployed.insert(kind, address);
    }

    /// The most recently deployed instance of `kind`, if any
    pub fn most_recent(&self, kind: MockKind) -> Option<Address> {
        self.deployed.get(&kind).copied()
    }

    /// Whether every mock kind has a deployed instance
    pub fn is_complete(&self) -> bool {
        deploy::DEPLOY_ORDER
            .iter()
            .all(|kind| self.deployed.contains_key(kind))
    }
}

/// Resolve `name` to a callable address.
///
/// On local development chains the full mock set is deployed on first use and
/// the most recent mock of the right kind is returned; everywhere else the
/// address comes from the config address book. Requesting a single mock may
/// therefore deploy all four.
pub async fn get_contract(
    name: ContractName,
    config: &Config,
    client: &RpcProvider,
    registry: &mut MockRegistry,
) -> Result<Address, ScriptError> {
    if config.network().kind() == NetworkKind::LocalDevelopment {
        let kind = name.mock_kind();
        if registry.most_recent(kind).is_none() {
            deploy::deploy_mocks(DECIMALS, INITIAL_VALUE, config, client, registry).await?;
        }
        registry.most_recent(kind).ok_or_else(|| {
            ScriptError::ContractDeployment(format!("mock {kind} missing after deployment pass"))
        })
    } else {
        config.contract_address(name.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use super::*;
    use crate::{
        accounts::get_account,
        config::Network,
        tx::client::build_provider,
    };

    #[test]
    fn every_name_maps_to_a_mock() {
        assert_eq!(
            ContractName::EthUsdPriceFeed.mock_kind(),
            MockKind::PriceFeedAggregator
        );
        assert_eq!(
            ContractName::DaiUsdPriceFeed.mock_kind(),
            MockKind::PriceFeedAggregator
        );
        assert_eq!(ContractName::FauToken.mock_kind(), MockKind::Dai);
        assert_eq!(ContractName::WethToken.mock_kind(), MockKind::Weth);
        assert_eq!(ContractName::LinkToken.mock_kind(), MockKind::LinkToken);
    }

    #[test]
    fn names_round_trip_through_strings() {
        let names = [
            ContractName::EthUsdPriceFeed,
            ContractName::DaiUsdPriceFeed,
            ContractName::FauToken,
            ContractName::WethToken,
            ContractName::LinkToken,
        ];
        for name in names {
            assert_eq!(name.as_str().parse::<ContractName>().unwrap(), name);
        }
        assert!("vrf_coordinator".parse::<ContractName>().is_err());
    }

    #[test]
    fn registry_keeps_the_most_recent_instance() {
        let mut registry = MockRegistry::new();
        registry.record(MockKind::Dai, Address::repeat_byte(0x11));
        registry.record(MockKind::Dai, Address::repeat_byte(0x22));
        assert_eq!(
            registry.most_recent(MockKind::Dai),
            Some(Address::repeat_byte(0x22))
        );
    }

    #[test]
    fn registry_is_complete_once_all_kinds_are_recorded() {
        let mut registry = MockRegistry::new();
        assert!(!registry.is_complete());
        for kind in deploy::DEPLOY_ORDER {
            registry.record(kind, Address::repeat_byte(0x33));
        }
        assert!(registry.is_complete());
    }

    fn offline_client() -> RpcProvider {
        let config = Config::from_parts(json::JsonValue::new_object(), Network::new("development"));
        let signer = get_account(&config, Some(0), None).unwrap();
        // Nothing below issues a request, so the endpoint never has to answer
        build_provider(signer, "http://127.0.0.1:1").unwrap()
    }

    #[tokio::test]
    async fn live_networks_resolve_from_config_only() {
        let raw = json::parse(
            r#"{"networks":{"sepolia":{"link_token":"0x779877A7B0D9E8603169DdbD7836e478b4624789"}}}"#,
        )
        .unwrap();
        let config = Config::from_parts(raw, Network::new("sepolia"));
        let client = offline_client();
        let mut registry = MockRegistry::new();

        let address = get_contract(ContractName::LinkToken, &config, &client, &mut registry)
            .await
            .unwrap();
        assert_eq!(
            format!("{address:#x}"),
            "0x779877a7b0d9e8603169ddbd7836e478b4624789"
        );
        // No mock deployment happened along the way
        assert!(registry.most_recent(MockKind::LinkToken).is_none());
    }

    #[tokio::test]
    async fn live_network_missing_entry_is_a_config_error() {
        let config = Config::from_parts(json::JsonValue::new_object(), Network::new("sepolia"));
        let client = offline_client();
        let mut registry = MockRegistry::new();

        let err = get_contract(ContractName::FauToken, &config, &client, &mut registry)
            .await
            .unwrap_err();
        assert!(matches!(err, ScriptError::ConfigLookup(_)));
    }

    #[tokio::test]
    async fn local_resolution_reuses_existing_mocks() {
        let config = Config::from_parts(json::JsonValue::new_object(), Network::new("development"));
        let client = offline_client();
        let mut registry = MockRegistry::new();
        let aggregator = Address::repeat_byte(0x44);
        registry.record(MockKind::LinkToken, Address::repeat_byte(0x41));
        registry.record(MockKind::PriceFeedAggregator, aggregator);
        registry.record(MockKind::Dai, Address::repeat_byte(0x42));
        registry.record(MockKind::Weth, Address::repeat_byte(0x43));

        // Both price feeds resolve to the one deployed aggregator, and no
        // second deployment pass runs (the client is offline)
        let eth_usd = get_contract(ContractName::EthUsdPriceFeed, &config, &client, &mut registry)
            .await
            .unwrap();
        let dai_usd = get_contract(ContractName::DaiUsdPriceFeed, &config, &client, &mut registry)
            .await
            .unwrap();
        assert_eq!(eth_usd, aggregator);
        assert_eq!(dai_usd, aggregator);

        let weth = get_contract(ContractName::WethToken, &config, &client, &mut registry)
            .await
            .unwrap();
        assert_eq!(weth, Address::repeat_byte(0x43));
    }
}
