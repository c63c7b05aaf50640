use alloy::{
    network::TransactionBuilder,
    primitives::{uint, Address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::Context;
use once_cell::sync::Lazy;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    deploy::Deployer,
    system::{provider, rpc_url, Wallet},
};

/// Pre-funded development key of the nitro devnode.
const MASTER_PRIVATE_KEY: &str =
    "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";
const DEFAULT_FUNDING_ETH: U256 = uint!(100_000_000_000_000_000_U256);

/// An externally owned account able to sign and send transactions.
#[derive(Clone, Debug)]
pub struct Account {
    /// The account's local private key wrapper.
    pub signer: PrivateKeySigner,
    /// The account's wallet -- an `alloy` provider that signs with
    /// [`Self::signer`].
    pub wallet: Wallet,
    rpc_url: Url,
}

impl Account {
    /// Create a new account funded with [`DEFAULT_FUNDING_ETH`] from the
    /// node's master key.
    ///
    /// # Errors
    ///
    /// May fail if `RPC_URL` is missing or funding the account fails.
    pub async fn new() -> eyre::Result<Self> {
        AccountFactory::create().await
    }

    /// Wrap an existing `private_key` connected to `rpc_url`.
    ///
    /// # Errors
    ///
    /// May fail if the key or the URL cannot be parsed.
    pub fn from_private_key(
        rpc_url: &str,
        private_key: &str,
    ) -> eyre::Result<Self> {
        let signer = private_key
            .parse::<PrivateKeySigner>()
            .wrap_err("failed to parse private key")?;
        let rpc_url: Url = rpc_url
            .parse()
            .wrap_err(format!("failed to parse rpc url {rpc_url}"))?;
        let wallet = provider(rpc_url.clone(), signer.clone());
        Ok(Self { signer, wallet, rpc_url })
    }

    /// Get a hex-encoded String representing this account's private key.
    #[must_use]
    pub fn pk(&self) -> String {
        alloy::hex::encode(self.signer.to_bytes())
    }

    /// Retrieve this account's address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The rpc endpoint this account's provider is connected to.
    #[must_use]
    pub fn url(&self) -> &str {
        self.rpc_url.as_str()
    }

    /// Create a configurable smart contract deployer on behalf of this
    /// account.
    #[must_use]
    pub fn as_deployer(&self) -> Deployer {
        Deployer::new(self.url().to_string(), self.pk())
    }

    /// Get the account's gas token balance.
    ///
    /// # Errors
    ///
    /// May fail if the RPC request fails.
    pub async fn balance(&self) -> eyre::Result<U256> {
        self.wallet
            .get_balance(self.address())
            .await
            .wrap_err("should get balance")
    }

    /// Send `value` of the gas token to `to` and wait for inclusion.
    ///
    /// # Errors
    ///
    /// May fail if the transaction is rejected or never included.
    pub async fn send_value(
        &self,
        to: Address,
        value: U256,
    ) -> eyre::Result<()> {
        let tx = TransactionRequest::default()
            .with_from(self.address())
            .with_to(to)
            .with_value(value);

        self.wallet
            .send_transaction(tx)
            .await?
            .watch()
            .await
            .wrap_err("funds were not sent")?;

        Ok(())
    }
}

/// A unit struct used as a synchronization mechanism in
/// [`AccountFactory::lock`].
struct AccountFactory;

impl AccountFactory {
    /// Get access to the factory in a synchronized manner.
    async fn lock() -> MutexGuard<'static, Self> {
        /// Every new account is funded from the single master key, so account
        /// creation must be serialized or the master nonce will be reused.
        static SYNC_ACCOUNT_FACTORY: Lazy<Mutex<AccountFactory>> =
            Lazy::new(|| Mutex::new(AccountFactory));

        SYNC_ACCOUNT_FACTORY.lock().await
    }

    /// Create a new random account and fund it from the master key.
    async fn create() -> eyre::Result<Account> {
        let _lock = AccountFactory::lock().await;

        let signer = PrivateKeySigner::random();
        let rpc_url = rpc_url()?;

        let master = Account::from_private_key(
            rpc_url.as_str(),
            MASTER_PRIVATE_KEY,
        )?;
        master
            .send_value(signer.address(), DEFAULT_FUNDING_ETH)
            .await
            .wrap_err("account's wallet wasn't funded")?;

        let wallet = provider(rpc_url.clone(), signer.clone());
        Ok(Account { signer, wallet, rpc_url })
    }
}
