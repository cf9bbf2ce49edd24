//! Deployment of the mock contract set for local development chains.

/// The mock deployment pass
mod mocks;

pub use mocks::{deploy_mocks, DEPLOY_ORDER};
