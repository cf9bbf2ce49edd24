//! The ABI surface the scripts interact with.

use alloy::sol;

sol! {
#[sol(rpc)]
interface LinkToken {
    function transfer(address to, uint256 value) external returns (bool success);

    function balanceOf(address owner) external view returns (uint256 balance);

    function decimals() external view returns (uint8);
}

}
