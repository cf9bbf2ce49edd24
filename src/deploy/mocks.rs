//! Deploys the full mock set (LINK, price feed, DAI, WETH) to a local chain.

use std::{fs, path::Path};

use alloy::{
    hex,
    network::TransactionBuilder,
    primitives::{Address, I256, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::{sol_data, SolType},
};
use tracing::info;

use crate::{
    config::Config,
    contracts::{MockKind, MockRegistry},
    errors::ScriptError,
    output_writer,
    tx::client::RpcProvider,
};

/// The fixed order mocks are deployed in
pub const DEPLOY_ORDER: [MockKind; 4] = [
    MockKind::LinkToken,
    MockKind::PriceFeedAggregator,
    MockKind::Dai,
    MockKind::Weth,
];

/// Deploy the full mock set in [`DEPLOY_ORDER`], recording each address in
/// `registry` and in the deployed-address output file.
///
/// There is no rollback: if a deployment fails, earlier mocks stay on chain
/// and the error propagates.
pub async fn deploy_mocks(
    decimals: u8,
    initial_value: i128,
    config: &Config,
    client: &RpcProvider,
    registry: &mut MockRegistry,
) -> Result<(), ScriptError> {
    for kind in DEPLOY_ORDER {
        info!("Deploying mock {}...", kind);
        let ctor_args = constructor_args(kind, decimals, initial_value)?;
        let address = deploy_mock(kind, ctor_args, config, client).await?;
        registry.record(kind, address);
        output_writer::write_output_file(
            &config.output_file(),
            config.network().name(),
            kind.output_key(),
            address,
        )?;
        info!("Mock {} deployed at {}", kind, address);
    }
    info!("All mocks deployed");

    Ok(())
}

/// ABI-encoded constructor arguments for `kind`.
///
/// Only the aggregator takes any: `(uint8 decimals, int256 initialAnswer)`.
fn constructor_args(kind: MockKind, decimals: u8, initial_value: i128) -> Result<Vec<u8>, ScriptError> {
    match kind {
        MockKind::PriceFeedAggregator => {
            let answer = I256::try_from(initial_value)
                .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
            Ok(<(sol_data::Uint<8>, sol_data::Int<256>)>::abi_encode_params(&(decimals, answer)))
        }
        _ => Ok(Vec::new()),
    }
}

/// Send a deploy transaction for `kind` and wait for its receipt
async fn deploy_mock(
    kind: MockKind,
    ctor_args: Vec<u8>,
    config: &Config,
    client: &RpcProvider,
) -> Result<Address, ScriptError> {
    let mut code = read_creation_code(&config.artifacts_dir(), kind.artifact_name())?;
    code.extend_from_slice(&ctor_args);

    // Build the tx
    let tx_request = TransactionRequest::default()
        .with_deploy_code(code)
        .with_value(U256::from(0));

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!("Pending mock {} deployment... {}", kind, pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!("no contract address in receipt for mock {kind}"))
    })
}

/// Read the hex creation bytecode compiled for `name` from the artifacts dir
fn read_creation_code(artifacts_dir: &Path, name: &str) -> Result<Vec<u8>, ScriptError> {
    let path = artifacts_dir.join(format!("{name}.bin"));
    let contents = fs::read_to_string(&path).map_err(|e| {
        ScriptError::ArtifactLoading(format!("could not read `{}`: {e}", path.display()))
    })?;
    let trimmed = contents.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(trimmed).map_err(|e| {
        ScriptError::ArtifactLoading(format!("`{}` is not valid hex: {e}", path.display()))
    })
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use super::*;
    use crate::constants::INITIAL_VALUE;

    #[test]
    fn mocks_deploy_in_fixed_order() {
        assert_eq!(
            DEPLOY_ORDER,
            [
                MockKind::LinkToken,
                MockKind::PriceFeedAggregator,
                MockKind::Dai,
                MockKind::Weth,
            ]
        );
    }

    #[test]
    fn aggregator_constructor_args_encode_as_uint8_int256() {
        let args = constructor_args(MockKind::PriceFeedAggregator, 18, INITIAL_VALUE).unwrap();
        assert_eq!(args.len(), 64);

        let (decimals, answer) =
            <(sol_data::Uint<8>, sol_data::Int<256>)>::abi_decode_params(&args, true).unwrap();
        assert_eq!(decimals, 18);
        assert_eq!(answer, I256::try_from(INITIAL_VALUE).unwrap());
    }

    #[test]
    fn token_mocks_take_no_constructor_args() {
        for kind in [MockKind::LinkToken, MockKind::Dai, MockKind::Weth] {
            assert!(constructor_args(kind, 18, INITIAL_VALUE).unwrap().is_empty());
        }
    }

    #[test]
    fn creation_code_accepts_prefixed_and_bare_hex() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("MockDAI.bin"), "0x6001600155\n").unwrap();
        fs::write(dir.path().join("MockWETH.bin"), "6001600155").unwrap();
        assert_eq!(
            read_creation_code(dir.path(), "MockDAI").unwrap(),
            read_creation_code(dir.path(), "MockWETH").unwrap()
        );
    }

    #[test]
    fn missing_artifact_is_a_typed_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_creation_code(dir.path(), "LinkToken").unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactLoading(_)));
    }
}
