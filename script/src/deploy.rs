//! Deploy a token, wait for it to settle and check its initial state.
use std::time::Duration;

use alloy::{
    primitives::{utils::format_ether, Address, U256},
    providers::Provider,
};
use chrono::Utc;
use e2e::{constructor, Account, Deployment};
use eyre::{ContextCompat, WrapErr};
use tracing::info;

use crate::{
    abi::TestErc20,
    config::DeployArgs,
    record::{network_name, DeploymentRecord, CONTRACT_NAME},
    units::{format_tokens, parse_tokens},
};

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Deploy the token described by `args` and return its record.
///
/// # Errors
///
/// May fail if the deployment is rejected, or if the deployed token does not
/// report the deployer as owner and holder of the whole supply.
pub async fn run(args: &DeployArgs) -> eyre::Result<DeploymentRecord> {
    let deployer = Account::from_private_key(
        &args.network.rpc_url,
        &args.network.private_key,
    )?;
    let deployer_addr = deployer.address();

    let balance = deployer.balance().await?;
    info!(
        deployer = %deployer_addr,
        balance = %format_ether(balance),
        "deploying TestERC20"
    );
    info!(
        name = %args.name,
        symbol = %args.symbol,
        initial_supply = args.initial_supply,
        "constructor parameters"
    );

    let mut builder = deployer
        .as_deployer()
        .with_constructor(constructor!(
            args.name.clone(),
            args.symbol.clone(),
            U256::from(args.initial_supply)
        ))
        .with_wasm(&args.wasm);
    if let Some(address) = &args.deployer_address {
        builder = builder.with_deployer_address(address.clone());
    }

    let deployment = builder.deploy().await.wrap_err("deployment failed")?;
    info!(
        contract = %deployment.contract_address,
        tx_hash = %deployment.tx_hash(),
        "contract deployed"
    );

    wait_for_confirmations(&deployer, &deployment, args.confirmations)
        .await?;

    let contract =
        TestErc20::new(deployment.contract_address, &deployer.wallet);
    let name = contract.name().call().await?.name;
    let symbol = contract.symbol().call().await?.symbol;
    let total_supply = contract.totalSupply().call().await?.totalSupply;
    let owner = contract.owner().call().await?.owner;
    let owner_balance = contract.balanceOf(deployer_addr).call().await?.balance;

    info!(
        %name,
        %symbol,
        total_supply = %format_tokens(total_supply),
        %owner,
        owner_balance = %format_tokens(owner_balance),
        "deployment verified"
    );
    check_initial_state(
        deployer_addr,
        args.initial_supply,
        owner,
        owner_balance,
        total_supply,
    )?;

    let chain_id = deployer.wallet.get_chain_id().await?;

    Ok(DeploymentRecord {
        contract_name: CONTRACT_NAME.to_string(),
        contract_address: deployment.contract_address.to_string(),
        deployer: deployer_addr.to_string(),
        token_name: name,
        token_symbol: symbol,
        initial_supply: args.initial_supply,
        total_supply: format_tokens(total_supply),
        deployment_time: Utc::now(),
        network: network_name(chain_id).to_string(),
        chain_id,
    })
}

/// Poll the chain head until `confirmations` blocks, the deployment block
/// included, have been produced.
async fn wait_for_confirmations(
    account: &Account,
    deployment: &Deployment,
    confirmations: u64,
) -> eyre::Result<()> {
    let deployed_at = deployment
        .block_number()
        .context("deployment receipt has no block number")?;
    let target = confirmation_block(deployed_at, confirmations);

    info!(confirmations, "waiting for confirmations");
    loop {
        let head = account.wallet.get_block_number().await?;
        if head >= target {
            info!(block = head, "deployment confirmed");
            return Ok(());
        }

        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Block at which a transaction included in `block` has `confirmations`
/// confirmations.
fn confirmation_block(block: u64, confirmations: u64) -> u64 {
    block + confirmations.saturating_sub(1)
}

/// The deployer must own the token and hold the whole initial supply.
fn check_initial_state(
    deployer: Address,
    initial_supply: u64,
    owner: Address,
    owner_balance: U256,
    total_supply: U256,
) -> eyre::Result<()> {
    let expected = parse_tokens(&initial_supply.to_string())?;

    eyre::ensure!(
        owner == deployer,
        "owner {owner} is not the deployer {deployer}"
    );
    eyre::ensure!(
        total_supply == expected,
        "total supply {} does not match the initial supply {initial_supply}",
        format_tokens(total_supply)
    );
    eyre::ensure!(
        owner_balance == total_supply,
        "deployer holds {} of {}",
        format_tokens(owner_balance),
        format_tokens(total_supply)
    );

    Ok(())
}
