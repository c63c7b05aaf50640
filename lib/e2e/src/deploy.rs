use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
    str::FromStr,
};

use alloy::{
    hex,
    primitives::{Address, TxHash},
    providers::Provider,
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    sol,
    sol_types::SolError,
};
use eyre::{Context, ContextCompat};
use regex::Regex;

use crate::{
    constructor::Constructor,
    system::{env, provider, DEPLOYER_ADDRESS},
};

sol! {
    error ContractInitializationError(address contract);
    error ProgramUpToDate();
}

/// Raised when the contract was deployed but its constructor reverted.
#[derive(Debug)]
pub struct StylusDeployerError {
    /// Deployed contract address.
    pub contract_address: Address,
    /// Hex encoded revert data.
    pub revert_data: String,
}

impl StylusDeployerError {
    /// Recover a [`StylusDeployerError`] from an [`eyre::Report`].
    #[must_use]
    pub fn from_report(report: &eyre::Report) -> Option<&Self> {
        report.downcast_ref::<StylusDeployerError>()
    }
}

impl std::fmt::Display for StylusDeployerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "constructor of {} reverted with 0x{}",
            self.contract_address, self.revert_data
        )
    }
}

impl std::error::Error for StylusDeployerError {}

/// Outcome of a successful deployment.
#[derive(Clone, Debug)]
pub struct Deployment {
    /// Address of the deployed contract.
    pub contract_address: Address,
    /// Receipt of the deployment transaction.
    pub receipt: TransactionReceipt,
}

impl Deployment {
    /// Hash of the deployment transaction.
    #[must_use]
    pub fn tx_hash(&self) -> TxHash {
        self.receipt.transaction_hash
    }

    /// Block the deployment transaction was included in.
    #[must_use]
    pub fn block_number(&self) -> Option<u64> {
        self.receipt.block_number
    }
}

/// A basic smart contract deployer built on `cargo stylus deploy`.
pub struct Deployer {
    rpc_url: String,
    private_key: String,
    ctr: Option<Constructor>,
    wasm: Option<PathBuf>,
    deployer_address: Option<String>,
}

impl Deployer {
    /// Deployer that signs with `private_key` against `rpc_url`.
    #[must_use]
    pub fn new(rpc_url: String, private_key: String) -> Self {
        Self {
            rpc_url,
            private_key,
            ctr: None,
            wasm: None,
            deployer_address: None,
        }
    }

    /// Add solidity constructor to the deployer.
    #[must_use]
    pub fn with_constructor(mut self, ctr: Constructor) -> Deployer {
        self.ctr = Some(ctr);
        self
    }

    /// Deploy a prebuilt wasm binary instead of building the crate in the
    /// current directory.
    #[must_use]
    pub fn with_wasm(mut self, wasm: impl AsRef<Path>) -> Deployer {
        self.wasm = Some(wasm.as_ref().to_path_buf());
        self
    }

    /// Use `address` as the `StylusDeployer` instead of reading
    /// [`DEPLOYER_ADDRESS`] from the environment.
    #[must_use]
    pub fn with_deployer_address(mut self, address: impl Into<String>) -> Self {
        self.deployer_address = Some(address.into());
        self
    }

    /// Deploy and activate the contract, running its constructor through the
    /// `StylusDeployer` when one is configured.
    ///
    /// # Errors
    ///
    /// May error if:
    ///
    /// - `cargo stylus deploy` cannot be executed or fails.
    /// - The constructor reverts, see [`StylusDeployerError`].
    /// - The deployment transaction hash or the contract address cannot be
    ///   found in the tool's output.
    pub async fn deploy(self) -> eyre::Result<Deployment> {
        let args = self.command()?;
        let output = Command::new("cargo")
            .args(&args[1..])
            .output()
            .context("failed to execute `cargo stylus deploy` command")?;

        if output.status.success() {
            self.get_receipt(&output).await
        } else {
            self.parse_deployment_error(&output).await
        }
    }

    /// Full `cargo stylus deploy` invocation for the current configuration.
    fn command(&self) -> eyre::Result<Vec<String>> {
        let mut command: Vec<String> = ["cargo", "stylus", "deploy"]
            .into_iter()
            .map(String::from)
            .collect();
        command.extend([
            "-e".to_string(),
            self.rpc_url.clone(),
            "--private-key".to_string(),
            self.private_key.clone(),
            "--no-verify".to_string(),
        ]);

        if let Some(wasm) = &self.wasm {
            command.push("--wasm-file".to_string());
            command.push(wasm.display().to_string());
        }

        if let Some(ctr) = &self.ctr {
            let deployer_address = match &self.deployer_address {
                Some(address) => address.clone(),
                None => env(DEPLOYER_ADDRESS)?,
            };

            command.push("--experimental-deployer-address".to_string());
            command.push(deployer_address);
            command.push("--experimental-constructor-signature".to_string());
            command.push(ctr.signature.clone());
            command.push("--experimental-constructor-args".to_string());
            command.extend(ctr.args.iter().cloned());
        }

        Ok(command)
    }

    async fn parse_deployment_error(
        &self,
        output: &Output,
    ) -> eyre::Result<Deployment> {
        let stderr = String::from_utf8_lossy(&output.stderr);

        let Some(data) = revert_data(&stderr)? else {
            eyre::bail!("deployment failed: {stderr}");
        };

        let selector = data.get(..4).unwrap_or_default();
        if selector == ContractInitializationError::SELECTOR {
            let error = ContractInitializationError::abi_decode(&data, false)
                .context("failed to decode ContractInitializationError")?;

            return Err(eyre::Report::new(StylusDeployerError {
                contract_address: error.contract,
                revert_data: hex::encode(&data),
            }));
        }

        if selector == ProgramUpToDate::SELECTOR {
            // The nitro devnode reports an already activated program as a
            // failed estimate but still prints the successful deployment.
            return self.get_receipt(output).await;
        }

        Err(eyre::eyre!("deployment reverted with 0x{}", hex::encode(&data)))
    }

    async fn get_receipt(&self, output: &Output) -> eyre::Result<Deployment> {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let (tx_hash, contract_address) = parse_deployment_output(&stdout)?;

        let signer = self.private_key.parse::<PrivateKeySigner>()?;
        let rpc_url = self
            .rpc_url
            .parse()
            .context(format!("invalid rpc url {}", self.rpc_url))?;
        let wallet = provider(rpc_url, signer);

        let receipt = wallet
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| eyre::eyre!("RPC error: {e}"))?
            .ok_or_else(|| eyre::eyre!("transaction receipt not found"))?;

        Ok(Deployment { contract_address, receipt })
    }
}

/// Extract the revert data reported by `cargo stylus` on stderr.
fn revert_data(stderr: &str) -> eyre::Result<Option<Vec<u8>>> {
    let regex = Regex::new(r#"data: Some\(String\("0x([a-fA-F0-9]+)"\)\)"#)
        .context("failed to create revert data regex")?;

    let Some(hex_str) = regex.captures(stderr).and_then(|c| c.get(1)) else {
        return Ok(None);
    };

    let data = hex::decode(hex_str.as_str())
        .context(format!("failed to decode hex: {}", hex_str.as_str()))?;
    Ok(Some(data))
}

/// Extract the deployment transaction hash and contract address from the
/// colored output of `cargo stylus deploy`.
fn parse_deployment_output(stdout: &str) -> eyre::Result<(TxHash, Address)> {
    // The address is preceded by ANSI escape codes.
    let contract_addr_regex = Regex::new(
        r"deployed code at address:\s*(?:\x1B\[[0-9;]*[a-zA-Z])*(0x[a-fA-F0-9]{40})",
    )
    .context("failed to create contract addr regex")?;
    let tx_hash_regex = Regex::new(
        r"deployment tx hash:\s*(?:\x1B\[[0-9;]*[a-zA-Z])*(0x[a-fA-F0-9]{64})",
    )
    .context("failed to create tx hash regex")?;

    let contract_addr = contract_addr_regex
        .captures(stdout)
        .and_then(|cap| cap.get(1))
        .context(format!("no contract address found in output {stdout}"))?
        .as_str();
    let tx_hash = tx_hash_regex
        .captures(stdout)
        .and_then(|cap| cap.get(1))
        .context(format!("no transaction hash found in output {stdout}"))?
        .as_str();

    let contract_address = Address::from_str(contract_addr).context(format!(
        "failed to parse contract address from string: {contract_addr}"
    ))?;
    let tx_hash = TxHash::from_str(tx_hash)
        .context("failed to parse transaction hash")?;

    Ok((tx_hash, contract_address))
}
