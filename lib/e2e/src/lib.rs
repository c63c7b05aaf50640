//! Helpers to deploy the `TestERC20` contract and drive it from Rust.
//!
//! The crate serves two consumers: the end-to-end tests, which get freshly
//! funded [`Account`]s injected by [`test`], and the deployment/interaction
//! scripts, which wrap existing keys with [`Account::from_private_key`].
//!
//! Deployment shells out to `cargo stylus deploy`, so a compiled contract
//! and a running node at `RPC_URL` are required.
mod account;
mod constructor;
mod deploy;
mod error;
mod event;
mod system;

pub use account::Account;
pub use constructor::{sol_type_name, AbiTypeToString, Constructor};
pub use deploy::{Deployer, Deployment, StylusDeployerError};
pub use e2e_proc::test;
pub use error::{Revert, RustPanic};
pub use event::Ext as EventExt;
pub use system::{
    provider, Wallet, DEPLOYER_ADDRESS, PRIVATE_KEY, RPC_URL_ENV_VAR_NAME,
};

/// Sends a transaction without waiting for it to be included.
///
/// Evaluates to the `Result` of `send`, which fails when the node rejects the
/// call during gas estimation (e.g. a revert).
#[macro_export]
macro_rules! send {
    ($e:expr) => {
        $e.send().await
    };
}

/// Sends a transaction and waits until it is included, evaluating to the
/// transaction hash.
#[macro_export]
macro_rules! watch {
    ($e:expr) => {
        $e.send().await?.watch().await
    };
}

/// Sends a transaction and waits for its receipt.
#[macro_export]
macro_rules! receipt {
    ($e:expr) => {
        $e.send().await?.get_receipt().await
    };
}
