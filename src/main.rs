use clap::Parser;
use dotenv::dotenv;
use farm_scripts::{
    accounts::get_account, cli::Cli, config::Config, errors::ScriptError,
    tx::client::create_rpc_provider,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli {
        network,
        index,
        id,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    // Load the config file and bind the active network
    let config = Config::load(None, network)?;

    // Resolve the signing account, then build our RPC client around it
    let account = get_account(&config, index, id.as_deref())?;
    let client = create_rpc_provider(&config, account).await?;

    command.run(config, client).await
}
