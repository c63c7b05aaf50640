//! `TestERC20`: an ERC-20 token whose supply is managed by a single owner.
//!
//! Balance accounting, access control and overflow checks come from
//! [`openzeppelin_stylus`]. This contract wires [`Erc20`],
//! [`Erc20Metadata`] and [`Ownable`] together and adds:
//!
//! * owner-only [`TestErc20::mint`], [`TestErc20::burn`] and their batch
//!   variants;
//! * [`TestErc20::burn_self`], which lets any holder destroy its own tokens;
//! * the [`TokensMinted`], [`TokensBurned`] and [`TokensTransferred`] events,
//!   emitted next to the standard [`erc20::Transfer`].
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]
extern crate alloc;

use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{aliases::B32, uint, Address, U256, U8};
use openzeppelin_stylus::{
    access::ownable::{self, IOwnable, Ownable},
    token::erc20::{
        self,
        extensions::{Erc20Metadata, IErc20Metadata},
        Erc20, IErc20,
    },
    utils::introspection::erc165::IErc165,
};
pub use sol::*;
use stylus_sdk::prelude::*;

/// Number of base units in one whole token (`10^18`).
pub const ONE_TOKEN: U256 = uint!(1_000_000_000_000_000_000_U256);

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_types::sol;

    sol! {
        /// Emitted when the owner creates `amount` tokens for `to`.
        ///
        /// * `operator` - Account that issued the mint.
        /// * `to` - Account that received the tokens.
        /// * `amount` - Number of base units minted.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event TokensMinted(address indexed operator, address indexed to, uint256 amount);

        /// Emitted when `amount` tokens of `from` are destroyed.
        ///
        /// * `operator` - Owner, or the holder itself for a self-burn.
        /// * `from` - Account whose balance decreased.
        /// * `amount` - Number of base units burnt.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event TokensBurned(address indexed operator, address indexed from, uint256 amount);

        /// Emitted when a holder moves `amount` tokens to `to` with
        /// `transfer`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event TokensTransferred(address indexed from, address indexed to, uint256 amount);
    }

    sol! {
        /// The account and amount lists passed to a batch operation differ
        /// in length.
        ///
        /// * `accounts` - Number of accounts supplied.
        /// * `amounts` - Number of amounts supplied.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error TestERC20ArrayLengthMismatch(uint256 accounts, uint256 amounts);
    }
}

/// An error that occurred in the [`TestErc20`] contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// Error raised by the underlying [`Erc20`] ledger.
    Erc20(erc20::Error),
    /// Error raised by the [`Ownable`] access check.
    Ownable(ownable::Error),
    /// Batch inputs are not pairwise.
    ArrayLengthMismatch(TestERC20ArrayLengthMismatch),
}

/// State of the [`TestErc20`] contract.
#[entrypoint]
#[storage]
pub struct TestErc20 {
    erc20: Erc20,
    metadata: Erc20Metadata,
    ownable: Ownable,
}

#[public]
#[implements(IErc20<Error = erc20::Error>, IErc20Metadata, IOwnable<Error = ownable::Error>, IErc165)]
impl TestErc20 {
    /// Sets the token metadata, makes the deploying account the owner and
    /// credits it with `initial_supply` whole tokens.
    ///
    /// Contracts are constructed through the `StylusDeployer` factory, which
    /// is `msg.sender` at this point, so the deploying account is taken from
    /// `tx.origin`. See [`TestErc20::deploying_account`].
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `name` - Token name.
    /// * `symbol` - Token symbol.
    /// * `initial_supply` - Supply in whole tokens, scaled by [`ONE_TOKEN`].
    ///
    /// # Errors
    ///
    /// * [`Error::Ownable`] - If the deploying account is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`ownable::OwnershipTransferred`].
    /// * [`erc20::Transfer`].
    ///
    /// # Panics
    ///
    /// * If `initial_supply` scaled by [`ONE_TOKEN`] exceeds [`U256::MAX`].
    #[constructor]
    pub fn constructor(
        &mut self,
        name: String,
        symbol: String,
        initial_supply: U256,
    ) -> Result<(), Error> {
        let deployer = self.deploying_account();

        self.metadata.constructor(name, symbol);
        self.ownable.constructor(deployer)?;

        let supply = initial_supply
            .checked_mul(ONE_TOKEN)
            .expect("should not exceed `U256::MAX` for initial supply");
        self.erc20._mint(deployer, supply)?;

        Ok(())
    }

    /// Creates `amount` tokens and assigns them to `to`.
    ///
    /// # Errors
    ///
    /// * [`Error::Ownable`] - If the caller is not the owner.
    /// * [`Error::Erc20`] - If `to` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`].
    /// * [`TokensMinted`].
    pub fn mint(&mut self, to: Address, amount: U256) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self._mint_tokens(to, amount)
    }

    /// Destroys `amount` tokens held by `from`.
    ///
    /// # Errors
    ///
    /// * [`Error::Ownable`] - If the caller is not the owner.
    /// * [`Error::Erc20`] - If `from` holds less than `amount`.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`].
    /// * [`TokensBurned`].
    pub fn burn(&mut self, from: Address, amount: U256) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self._burn_tokens(from, amount)
    }

    /// Destroys `amount` of the caller's own tokens. Needs no privilege.
    ///
    /// # Errors
    ///
    /// * [`Error::Erc20`] - If the caller holds less than `amount`.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`].
    /// * [`TokensBurned`].
    pub fn burn_self(&mut self, amount: U256) -> Result<(), Error> {
        let holder = self.vm().msg_sender();
        self._burn_tokens(holder, amount)
    }

    /// Mints `amounts[i]` to `recipients[i]` for every `i`, in order.
    ///
    /// # Errors
    ///
    /// * [`Error::Ownable`] - If the caller is not the owner.
    /// * [`Error::ArrayLengthMismatch`] - If the lists differ in length.
    /// * [`Error::Erc20`] - If any recipient is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`] and [`TokensMinted`] for every pair.
    pub fn batch_mint(
        &mut self,
        recipients: Vec<Address>,
        amounts: Vec<U256>,
    ) -> Result<(), Error> {
        self.ownable.only_owner()?;
        check_lengths(&recipients, &amounts)?;

        for (to, amount) in recipients.into_iter().zip(amounts) {
            self._mint_tokens(to, amount)?;
        }

        Ok(())
    }

    /// Burns `amounts[i]` from `accounts[i]` for every `i`, in order.
    ///
    /// # Errors
    ///
    /// * [`Error::Ownable`] - If the caller is not the owner.
    /// * [`Error::ArrayLengthMismatch`] - If the lists differ in length.
    /// * [`Error::Erc20`] - If any account holds less than its amount.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`] and [`TokensBurned`] for every pair.
    pub fn batch_burn(
        &mut self,
        accounts: Vec<Address>,
        amounts: Vec<U256>,
    ) -> Result<(), Error> {
        self.ownable.only_owner()?;
        check_lengths(&accounts, &amounts)?;

        for (from, amount) in accounts.into_iter().zip(amounts) {
            self._burn_tokens(from, amount)?;
        }

        Ok(())
    }
}

impl TestErc20 {
    /// Account that sent the deployment transaction.
    ///
    /// Hosts that do not expose the transaction origin report
    /// [`Address::ZERO`], in which case the direct caller is used.
    fn deploying_account(&self) -> Address {
        let origin = self.vm().tx_origin();
        if origin.is_zero() {
            self.vm().msg_sender()
        } else {
            origin
        }
    }

    fn _mint_tokens(&mut self, to: Address, amount: U256) -> Result<(), Error> {
        self.erc20._mint(to, amount)?;

        let operator = self.vm().msg_sender();
        log(self.vm(), TokensMinted { operator, to, amount });
        Ok(())
    }

    fn _burn_tokens(
        &mut self,
        from: Address,
        amount: U256,
    ) -> Result<(), Error> {
        self.erc20._burn(from, amount)?;

        let operator = self.vm().msg_sender();
        log(self.vm(), TokensBurned { operator, from, amount });
        Ok(())
    }
}

/// Batch operations take two parallel lists that must pair up.
fn check_lengths(accounts: &[Address], amounts: &[U256]) -> Result<(), Error> {
    if accounts.len() == amounts.len() {
        return Ok(());
    }

    Err(Error::ArrayLengthMismatch(TestERC20ArrayLengthMismatch {
        accounts: U256::from(accounts.len()),
        amounts: U256::from(amounts.len()),
    }))
}

#[public]
impl IErc20 for TestErc20 {
    type Error = erc20::Error;

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.erc20.balance_of(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        let from = self.vm().msg_sender();
        let transferred = self.erc20.transfer(to, value)?;
        log(self.vm(), TokensTransferred { from, to, amount: value });
        Ok(transferred)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.approve(spender, value)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.transfer_from(from, to, value)
    }
}

#[public]
impl IErc20Metadata for TestErc20 {
    fn name(&self) -> String {
        self.metadata.name()
    }

    fn symbol(&self) -> String {
        self.metadata.symbol()
    }

    fn decimals(&self) -> U8 {
        self.metadata.decimals()
    }
}

#[public]
impl IOwnable for TestErc20 {
    type Error = ownable::Error;

    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Self::Error> {
        self.ownable.transfer_ownership(new_owner)
    }

    fn renounce_ownership(&mut self) -> Result<(), Self::Error> {
        self.ownable.renounce_ownership()
    }
}

#[public]
impl IErc165 for TestErc20 {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Self as IErc20>::interface_id() == interface_id
            || <Self as IErc20Metadata>::interface_id() == interface_id
            || <Self as IOwnable>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}
