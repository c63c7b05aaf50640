//! Command line and environment configuration.
//!
//! Values are resolved from flags first, then the environment, which
//! [`load_env`] seeds from a `.env` file in the working directory.
use std::path::PathBuf;

use alloy::primitives::Address;
use clap::{Args, Parser};
use e2e::{DEPLOYER_ADDRESS, PRIVATE_KEY, RPC_URL_ENV_VAR_NAME};

/// Endpoint of a local nitro devnode.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8547";

/// Load variables from `.env` without overriding the ones already set.
/// Returns the file that was read, if any.
pub fn load_env() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

/// Connection settings shared by every script.
#[derive(Args, Debug, Clone)]
pub struct NetworkArgs {
    /// RPC endpoint of the Arbitrum node.
    #[arg(
        long,
        env = RPC_URL_ENV_VAR_NAME,
        default_value = DEFAULT_RPC_URL
    )]
    pub rpc_url: String,

    /// Private key of the deployer, who becomes the token owner.
    #[arg(long, env = PRIVATE_KEY, hide_env_values = true)]
    pub private_key: String,
}

/// Deploy `TestERC20` and print a JSON deployment record.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct DeployArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub network: NetworkArgs,

    /// Address of the `StylusDeployer` that runs the constructor.
    #[arg(long, env = DEPLOYER_ADDRESS)]
    pub deployer_address: Option<String>,

    /// Token name.
    #[arg(long, default_value = "Test Token")]
    pub name: String,

    /// Token symbol.
    #[arg(long, default_value = "TEST")]
    pub symbol: String,

    /// Initial supply in whole tokens, credited to the deployer.
    #[arg(long, default_value = "1000000")]
    pub initial_supply: u64,

    /// Blocks to wait for, counting the deployment block.
    #[arg(long, default_value_t = 5)]
    pub confirmations: u64,

    /// Compiled contract to deploy.
    #[arg(
        long,
        default_value = "target/wasm32-unknown-unknown/release/test_erc20.wasm"
    )]
    pub wasm: PathBuf,

    /// File the deployment record is written to.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the mint, transfer and burn scenario against a deployed `TestERC20`.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct InteractArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub network: NetworkArgs,

    /// Address of the deployed contract.
    #[arg(long, env = "CONTRACT_ADDRESS")]
    pub contract: Address,

    /// Private key of the first token holder.
    #[arg(long, env = "USER1_PRIVATE_KEY", hide_env_values = true)]
    pub user1_private_key: String,

    /// Private key of the second token holder.
    #[arg(long, env = "USER2_PRIVATE_KEY", hide_env_values = true)]
    pub user2_private_key: String,
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use clap::CommandFactory;

    use super::*;

    const KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn deploy_defaults_match_the_test_token() {
        let args = DeployArgs::try_parse_from([
            "deploy",
            "--rpc-url",
            "http://localhost:8547",
            "--private-key",
            KEY,
        ])
        .expect("should parse");

        assert_eq!(args.name, "Test Token");
        assert_eq!(args.symbol, "TEST");
        assert_eq!(args.initial_supply, 1_000_000);
        assert_eq!(args.confirmations, 5);
        assert_eq!(args.network.private_key, KEY);
        assert!(args.output.is_none());
    }

    #[test]
    fn reads_shared_environment_names() {
        let command = DeployArgs::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(OsStr::to_os_string)
        };

        assert_eq!(env_of("rpc_url"), Some(RPC_URL_ENV_VAR_NAME.into()));
        assert_eq!(env_of("private_key"), Some(PRIVATE_KEY.into()));
        assert_eq!(env_of("deployer_address"), Some(DEPLOYER_ADDRESS.into()));
    }

    #[test]
    fn deploy_flags_override_defaults() {
        let args = DeployArgs::try_parse_from([
            "deploy",
            "--private-key",
            KEY,
            "--name",
            "Other",
            "--initial-supply",
            "42",
            "--confirmations",
            "1",
            "-o",
            "deployment.json",
        ])
        .expect("should parse");

        assert_eq!(args.name, "Other");
        assert_eq!(args.initial_supply, 42);
        assert_eq!(args.confirmations, 1);
        assert_eq!(args.output, Some(PathBuf::from("deployment.json")));
    }

    #[test]
    fn interact_parses_contract_address() {
        let args = InteractArgs::try_parse_from([
            "interact",
            "--private-key",
            KEY,
            "--contract",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            "--user1-private-key",
            KEY,
            "--user2-private-key",
            KEY,
        ])
        .expect("should parse");

        let expected: Address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            .parse()
            .expect("should parse address");
        assert_eq!(args.contract, expected);
    }

    #[test]
    fn interact_rejects_malformed_contract_address() {
        let result = InteractArgs::try_parse_from([
            "interact",
            "--private-key",
            KEY,
            "--contract",
            "0x1234",
            "--user1-private-key",
            KEY,
            "--user2-private-key",
            KEY,
        ]);

        assert!(result.is_err());
    }
}
