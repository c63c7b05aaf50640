//! Procedural macros for the `e2e` crate.
use proc_macro::TokenStream;


/// Defines an end-to-end test against a running node.
///
/// Every argument of the test function is created with `<Type>::new().await?`
/// before the body runs, so each `Account` parameter is a freshly generated,
/// funded key. The function must be `async` and return a `Result`.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn mints(alice: Account, bob: Account) -> eyre::Result<()> {
///     let contract_addr = alice
///         .as_deployer()
///         .with_constructor(ctr())
///         .deploy()
///         .await?
///         .contract_address;
///     let contract = TestErc20::new(contract_addr, &alice.wallet);
///
///     let receipt = receipt!(contract.mint(bob.address(), amount))?;
///     assert!(receipt.emits(TestErc20::TokensMinted {
///         operator: alice.address(),
///         to: bob.address(),
///         amount,
///     }));
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(attr, input)
}
