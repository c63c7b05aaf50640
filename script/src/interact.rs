//! The mint, transfer and burn walkthrough.
use alloy::{primitives::Address, rpc::types::TransactionReceipt};
use e2e::{receipt, Account, Wallet};
use tracing::info;

use crate::{
    abi::TestErc20::{self, TestErc20Instance},
    config::InteractArgs,
    units::{format_tokens, parse_tokens},
};

/// Tokens the owner mints to the first user.
pub const MINT_AMOUNT: &str = "1000";
/// Tokens the first user sends to the second.
pub const TRANSFER_AMOUNT: &str = "200";
/// Tokens the owner burns from the second user.
pub const BURN_AMOUNT: &str = "100";
/// Tokens the first user burns from its own balance.
pub const SELF_BURN_AMOUNT: &str = "50";

/// Owner and user handles on the same token.
pub struct Scenario {
    owner: Account,
    user1: Account,
    user2: Account,
    contract: Address,
}

impl Scenario {
    /// Attach the accounts configured in `args` to the token.
    ///
    /// # Errors
    ///
    /// May fail if any key or the RPC URL is malformed.
    pub fn new(args: &InteractArgs) -> eyre::Result<Self> {
        let rpc_url = &args.network.rpc_url;
        Ok(Self {
            owner: Account::from_private_key(
                rpc_url,
                &args.network.private_key,
            )?,
            user1: Account::from_private_key(rpc_url, &args.user1_private_key)?,
            user2: Account::from_private_key(rpc_url, &args.user2_private_key)?,
            contract: args.contract,
        })
    }

    fn token(&self, account: &Account) -> TestErc20Instance<(), Wallet> {
        TestErc20::new(self.contract, account.wallet.clone())
    }

    /// Log the total supply and the owner's balance.
    ///
    /// # Errors
    ///
    /// May fail if the token cannot be queried.
    pub async fn log_supply(&self, label: &str) -> eyre::Result<()> {
        let token = self.token(&self.owner);
        let total_supply = token.totalSupply().call().await?.totalSupply;
        let owner_balance = token.balanceOf(self.owner.address()).call().await?.balance;

        info!(
            owner = %self.owner.address(),
            total_supply = %format_tokens(total_supply),
            owner_balance = %format_tokens(owner_balance),
            "{label}"
        );
        Ok(())
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// May fail if any step reverts or the node cannot be reached.
    pub async fn run(&self) -> eyre::Result<()> {
        let user1 = self.user1.address();
        let user2 = self.user2.address();
        info!(
            %user1,
            %user2,
            contract = %self.contract,
            "starting interaction"
        );

        let amount = parse_tokens(MINT_AMOUNT)?;
        let receipt =
            receipt!(self.token(&self.owner).mint(user1, amount))?;
        self.log_step("owner minted tokens to user1", &receipt, &[user1])
            .await?;

        let amount = parse_tokens(TRANSFER_AMOUNT)?;
        let receipt =
            receipt!(self.token(&self.user1).transfer(user2, amount))?;
        self.log_step("user1 transferred tokens to user2", &receipt, &[
            user1, user2,
        ])
        .await?;

        let amount = parse_tokens(BURN_AMOUNT)?;
        let receipt = receipt!(self.token(&self.owner).burn(user2, amount))?;
        self.log_step("owner burned tokens from user2", &receipt, &[user2])
            .await?;

        let amount = parse_tokens(SELF_BURN_AMOUNT)?;
        let receipt = receipt!(self.token(&self.user1).burnSelf(amount))?;
        self.log_step("user1 burned own tokens", &receipt, &[user1]).await?;

        Ok(())
    }

    async fn log_step(
        &self,
        step: &str,
        receipt: &TransactionReceipt,
        holders: &[Address],
    ) -> eyre::Result<()> {
        eyre::ensure!(
            receipt.status(),
            "{step}: transaction {} reverted",
            receipt.transaction_hash
        );
        info!(tx_hash = %receipt.transaction_hash, "{step}");

        let token = self.token(&self.owner);
        for holder in holders {
            let balance = token.balanceOf(*holder).call().await?.balance;
            info!(%holder, balance = %format_tokens(balance), "balance");
        }
        Ok(())
    }
}
