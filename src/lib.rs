//! Scripts for deploying and funding the Token Farm smart contracts.

#![deny(clippy::missing_docs_in_private_items)]

pub mod accounts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod errors;

/// Our mock deploy utils
pub mod deploy;

/// Our deployed-address output utils
mod output_writer;

pub mod tx;
