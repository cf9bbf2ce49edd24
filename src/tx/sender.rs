//! Sending of token transfer transactions.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use tracing::info;

use crate::{
    errors::ScriptError,
    tx::{abi::LinkToken::transferCall, client::RpcProvider},
};

/// Transfer `amount` base units of the token at `token` to `to`, waiting for
/// one confirmation.
pub async fn send_token_transfer(
    token: Address,
    to: Address,
    amount: U256,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    // Build the tx
    let tx_request = TransactionRequest::default()
        .to(token)
        .with_call(&transferCall { to, value: amount })
        .with_value(U256::from(0));

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Pending transfer transaction... {}", pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!(
        "Transfer done on block: {}",
        receipt.block_number.unwrap_or_default()
    );

    Ok(receipt.transaction_hash)
}
