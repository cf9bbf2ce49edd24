//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error when creating the client
    ClientInitialization(String),
    /// Error resolving the signing account
    AccountResolution(String),
    /// Error looking up a value in the config file
    ConfigLookup(String),
    /// Error when reading or writing the deployed-address output file
    JsonOutputError(String),
    /// Error loading a compiled contract artifact
    ArtifactLoading(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::AccountResolution(s) => write!(f, "error resolving account: {}", s),
            ScriptError::ConfigLookup(s) => write!(f, "error reading config: {}", s),
            ScriptError::JsonOutputError(s) => write!(f, "error writing json output: {}", s),
            ScriptError::ArtifactLoading(s) => write!(f, "error loading artifact: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
        }
    }
}

impl Error for ScriptError {}
