//! Construction of the signing RPC client.

use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::{config::Config, errors::ScriptError};

/// Re-export from alloy recommend filler
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that uses a local wallet to generate signatures
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Build the provider around an already-resolved signer
pub fn build_provider(signer: PrivateKeySigner, rpc_url: &str) -> Result<RpcProvider, ScriptError> {
    let url = rpc_url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = EthereumWallet::from(signer);

    // Create our provider with the rpc client + signer
    Ok(ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(url))
}

/// Build the signing RPC client for the active network, logging the chain it
/// landed on.
pub async fn create_rpc_provider(
    config: &Config,
    signer: PrivateKeySigner,
) -> Result<RpcProvider, ScriptError> {
    let provider = build_provider(signer, &config.rpc_url()?)?;

    // Fetch chain id
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    info!("Built client on chain ID: {}", chain_id);

    Ok(provider)
}
