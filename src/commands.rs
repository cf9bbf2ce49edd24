//! The operations behind each CLI command.

use alloy::primitives::{TxHash, U256};
use tracing::info;

use crate::{
    cli::{DeployMocksArgs, FundArgs, ResolveArgs},
    config::{Config, NetworkKind},
    contracts::{get_contract, ContractName, MockRegistry},
    deploy,
    errors::ScriptError,
    tx::{client::RpcProvider, reader, sender},
};

/// Deploy the full mock set to the active network.
///
/// Refuses to run against a live network; mocks belong on local and forked
/// chains only.
pub async fn deploy_mock_set(
    args: DeployMocksArgs,
    config: &Config,
    client: &RpcProvider,
) -> Result<(), ScriptError> {
    if config.network().kind() == NetworkKind::Live {
        return Err(ScriptError::ContractDeployment(format!(
            "refusing to deploy mocks on live network `{}`",
            config.network().name()
        )));
    }

    let mut registry = MockRegistry::new();
    deploy::deploy_mocks(args.decimals, args.initial_value, config, client, &mut registry).await
}

/// Fund the target contract with LINK, defaulting the token to the resolved
/// `link_token` and the amount to 0.1 LINK. Returns the transfer hash once
/// the transaction has one confirmation.
pub async fn fund_with_link(
    args: FundArgs,
    config: &Config,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    let mut registry = MockRegistry::new();
    let token = match args.token {
        Some(token) => token,
        None => get_contract(ContractName::LinkToken, config, client, &mut registry).await?,
    };

    let tx_hash = sender::send_token_transfer(token, args.to, U256::from(args.amount), client).await?;

    let balance = reader::get_token_balance(token, args.to, client).await?;
    info!("Funded {} (tx {}), balance is now {}", args.to, tx_hash, balance);

    Ok(tx_hash)
}

/// Resolve a named contract and print its address
pub async fn resolve_contract(
    args: ResolveArgs,
    config: &Config,
    client: &RpcProvider,
) -> Result<(), ScriptError> {
    let mut registry = MockRegistry::new();
    let address = get_contract(args.name, config, client, &mut registry).await?;
    println!("{} -> {}", args.name, address);

    Ok(())
}
