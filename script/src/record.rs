//! The summary printed after a deployment.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name the contract is recorded under.
pub const CONTRACT_NAME: &str = "TestERC20";

/// Everything needed to find and check a deployed token later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    /// Always [`CONTRACT_NAME`].
    pub contract_name: String,
    /// Checksummed address of the token.
    pub contract_address: String,
    /// Checksummed address of the deploying account and token owner.
    pub deployer: String,
    /// Token name.
    pub token_name: String,
    /// Token symbol.
    pub token_symbol: String,
    /// Initial supply in whole tokens, as passed to the constructor.
    pub initial_supply: u64,
    /// Total supply read back from the chain, in whole tokens.
    pub total_supply: String,
    /// When the record was produced.
    pub deployment_time: DateTime<Utc>,
    /// Network name derived from [`Self::chain_id`].
    pub network: String,
    /// Chain the token lives on.
    pub chain_id: u64,
}

/// Human readable name of the Arbitrum chain with id `chain_id`.
#[must_use]
pub fn network_name(chain_id: u64) -> &'static str {
    match chain_id {
        42161 => "arbitrum-one",
        42170 => "arbitrum-nova",
        421_614 => "arbitrum-sepolia",
        412_346 => "nitro-devnode",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn names_known_networks() {
        assert_eq!(network_name(42161), "arbitrum-one");
        assert_eq!(network_name(42170), "arbitrum-nova");
        assert_eq!(network_name(421_614), "arbitrum-sepolia");
        assert_eq!(network_name(412_346), "nitro-devnode");
        assert_eq!(network_name(1), "unknown");
    }

    #[test]
    fn serializes_camel_case_fields() {
        let record = DeploymentRecord {
            contract_name: CONTRACT_NAME.to_string(),
            contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3"
                .to_string(),
            deployer: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
            token_name: "Test Token".to_string(),
            token_symbol: "TEST".to_string(),
            initial_supply: 1_000_000,
            total_supply: "1000000.0".to_string(),
            deployment_time: Utc
                .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
                .single()
                .expect("should be a valid date"),
            network: network_name(412_346).to_string(),
            chain_id: 412_346,
        };

        let json = serde_json::to_value(&record).expect("should serialize");

        assert_eq!(json["contractName"], "TestERC20");
        assert_eq!(json["tokenSymbol"], "TEST");
        assert_eq!(json["initialSupply"], 1_000_000);
        assert_eq!(json["totalSupply"], "1000000.0");
        assert_eq!(json["deploymentTime"], "2024-05-01T12:00:00Z");
        assert_eq!(json["network"], "nitro-devnode");
        assert_eq!(json["chainId"], 412_346);

        let back: DeploymentRecord =
            serde_json::from_value(json).expect("should deserialize");
        assert_eq!(back, record);
    }
}
