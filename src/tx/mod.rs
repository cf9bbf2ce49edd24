//! Transaction plumbing: the signing RPC client, the ABI surface, and the
//! send/read helpers.

pub mod abi;
pub mod client;
pub mod reader;
pub mod sender;
