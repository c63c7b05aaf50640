//! Scripts that deploy the `TestERC20` contract to an Arbitrum chain and walk
//! it through a mint/transfer/burn scenario.
//!
//! Both binaries load `.env`, read their flags with [`clap`] and log through
//! [`tracing`]. Keys and the node endpoint are shared through
//! [`config::NetworkArgs`].
pub mod abi;
pub mod config;
pub mod deploy;
pub mod interact;
pub mod logging;
pub mod record;
pub mod units;
