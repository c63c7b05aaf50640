use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::Context;

/// Environment variable holding the node's RPC endpoint.
pub const RPC_URL_ENV_VAR_NAME: &str = "RPC_URL";

/// Environment variable holding the address of the `StylusDeployer` used to
/// run contract constructors.
pub const DEPLOYER_ADDRESS: &str = "DEPLOYER_ADDRESS";

/// Environment variable holding the key of the deploying account.
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";

/// Convenience type alias that represents an Ethereum wallet: a provider
/// that fills gas, nonce and chain id and signs with a local key.
pub type Wallet = DynProvider;

/// Load the `name` environment variable.
pub(crate) fn env(name: &str) -> eyre::Result<String> {
    std::env::var(name).wrap_err(format!("failed to load {name}"))
}

/// Load and parse the RPC endpoint from [`RPC_URL_ENV_VAR_NAME`].
pub(crate) fn rpc_url() -> eyre::Result<Url> {
    env(RPC_URL_ENV_VAR_NAME)?
        .parse()
        .wrap_err("failed to parse RPC_URL string into a URL")
}

/// Build a signing [`Wallet`] for `signer` connected to `rpc_url`.
#[must_use]
pub fn provider(rpc_url: Url, signer: PrivateKeySigner) -> Wallet {
    ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(rpc_url)
        .erased()
}
