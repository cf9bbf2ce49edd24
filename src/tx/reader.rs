//! Read-only contract queries.

use alloy::primitives::{Address, U256};

use crate::{
    errors::ScriptError,
    tx::{abi::LinkToken, client::RpcProvider},
};

/// Get the current token balance of `owner`
pub async fn get_token_balance(
    token_address: Address,
    owner: Address,
    client: &RpcProvider,
) -> Result<U256, ScriptError> {
    // Build our contract
    let contract = LinkToken::new(token_address, client.clone());

    // Read the smart contract
    let balance = contract
        .balanceOf(owner)
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(balance.balance)
}
