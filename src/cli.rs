//! Definitions of CLI arguments and commands for the deploy scripts

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{deploy_mock_set, fund_with_link, resolve_contract},
    config::Config,
    constants::{DECIMALS, DEFAULT_FUND_AMOUNT, INITIAL_VALUE},
    contracts::ContractName,
    errors::ScriptError,
    tx::client::RpcProvider,
};

/// Scripts for deploying & funding the Token Farm contracts
#[derive(Parser)]
pub struct Cli {
    /// Name of the network to run against (falls back to NETWORK, then `development`)
    #[arg(short, long)]
    pub network: Option<String>,

    /// Use the well-known dev account at this index
    #[arg(short, long)]
    pub index: Option<usize>,

    /// Load the account stored under this keystore id
    #[arg(long)]
    pub id: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the full mock contract set to the active local network
    DeployMocks(DeployMocksArgs),
    /// Fund a contract with LINK
    Fund(FundArgs),
    /// Resolve a named contract to an address
    Resolve(ResolveArgs),
}

impl Command {
    /// Run the command
    pub async fn run(self, config: Config, client: RpcProvider) -> Result<(), ScriptError> {
        match self {
            Command::DeployMocks(args) => {
                info!("Deploying mocks...");
                deploy_mock_set(args, &config, &client).await?;

                Ok(())
            }
            Command::Fund(args) => {
                info!("Funding contract...");
                fund_with_link(args, &config, &client).await?;

                Ok(())
            }
            Command::Resolve(args) => resolve_contract(args, &config, &client).await,
        }
    }
}

/// Deploy the mock contract set
#[derive(Args)]
pub struct DeployMocksArgs {
    /// Decimal precision reported by the mock price feed
    #[arg(long, default_value_t = DECIMALS)]
    pub decimals: u8,

    /// Initial value reported by the mock price feed
    #[arg(long, default_value_t = INITIAL_VALUE)]
    pub initial_value: i128,
}

/// Fund a contract with LINK
#[derive(Args)]
pub struct FundArgs {
    /// Address of the contract to fund
    #[arg(short, long)]
    pub to: Address,

    /// Amount to send, in base units
    #[arg(short, long, default_value_t = DEFAULT_FUND_AMOUNT)]
    pub amount: u128,

    /// Address of the LINK token (resolved from the active network when omitted)
    #[arg(long)]
    pub token: Option<Address>,
}

/// Resolve a named contract
#[derive(Args)]
pub struct ResolveArgs {
    /// The contract name, as written in the address book (e.g. `eth_usd_price_feed`)
    pub name: ContractName,
}
