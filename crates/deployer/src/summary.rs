use {
    alloy::primitives::{Address, TxHash, U256, utils::format_ether},
    chrono::{DateTime, SecondsFormat, Utc},
    contracts::Project,
    serde::{Serialize, Serializer},
    std::fmt::{self, Display, Formatter},
};

/// Record of a finished deployment. It is logged but never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub contract_name: String,
    pub contract_address: Address,
    pub network: String,
    pub chain_id: u64,
    pub deployer: Address,
    #[serde(serialize_with = "serialize_timestamp")]
    pub deployment_time: DateTime<Utc>,
    pub block_number: u64,
    pub transaction_hash: TxHash,
    pub gas_used: u64,
}

/// ISO 8601 with millisecond precision, e.g. `2025-01-02T03:04:05.678Z`.
fn timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp(time))
}

/// Formats a wei amount in ether with trailing zeros of the fraction
/// removed, keeping at least one decimal (`1.5`, `0.0`).
pub fn format_balance(wei: U256) -> String {
    let formatted = format_ether(wei);
    let Some((whole, fraction)) = formatted.split_once('.') else {
        return format!("{formatted}.0");
    };
    match fraction.trim_end_matches('0') {
        "" => format!("{whole}.0"),
        fraction => format!("{whole}.{fraction}"),
    }
}

impl Display for DeploymentInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Deployment Summary ===")?;
        writeln!(
            f,
            "Contract Name: {} ({})",
            self.contract_name,
            Project::DESCRIPTION
        )?;
        writeln!(f, "Contract Address: {}", self.contract_address)?;
        writeln!(f, "Network: {}", self.network)?;
        writeln!(f, "Deployer: {}", self.deployer)?;
        writeln!(f, "Block Number: {}", self.block_number)?;
        writeln!(f, "Transaction Hash: {}", self.transaction_hash)?;
        writeln!(f, "Gas Used: {}", self.gas_used)?;
        writeln!(f, "Timestamp: {}", timestamp(&self.deployment_time))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::{TxHash, address},
        chrono::TimeZone,
        serde_json::json,
    };

    fn info() -> DeploymentInfo {
        DeploymentInfo {
            contract_name: "Project".to_string(),
            contract_address: address!("0x0000000000000000000000000000000000000001"),
            network: "Core Testnet 2".to_string(),
            chain_id: 1114,
            deployer: address!("0x0000000000000000000000000000000000000002"),
            deployment_time: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            block_number: 7,
            transaction_hash: TxHash::repeat_byte(0x11),
            gas_used: 21_000,
        }
    }

    #[test]
    fn renders_summary() {
        let hash = format!("0x{}", "11".repeat(32));
        let expected = format!(
            "=== Deployment Summary ===\n\
             Contract Name: Project (Decentralized Social Media)\n\
             Contract Address: 0x0000000000000000000000000000000000000001\n\
             Network: Core Testnet 2\n\
             Deployer: 0x0000000000000000000000000000000000000002\n\
             Block Number: 7\n\
             Transaction Hash: {hash}\n\
             Gas Used: 21000\n\
             Timestamp: 2025-01-02T03:04:05.000Z\n"
        );

        assert_eq!(info().to_string(), expected);
    }

    #[test]
    fn balance_without_trailing_zeros() {
        assert_eq!(
            format_balance(U256::from(1_500_000_000_000_000_000u128)),
            "1.5"
        );
        assert_eq!(
            format_balance(U256::from(2_000_000_000_000_000_000u128)),
            "2.0"
        );
        assert_eq!(format_balance(U256::ZERO), "0.0");
        assert_eq!(format_balance(U256::from(1)), "0.000000000000000001");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(info()).unwrap();

        assert_eq!(value["contractName"], json!("Project"));
        assert_eq!(value["network"], json!("Core Testnet 2"));
        assert_eq!(value["chainId"], json!(1114));
        assert_eq!(value["deploymentTime"], json!("2025-01-02T03:04:05.000Z"));
        assert_eq!(value["blockNumber"], json!(7));
        assert_eq!(value["gasUsed"], json!(21000));
        assert!(value["contractAddress"].is_string());
        assert!(value["deployer"].is_string());
        assert!(value["transactionHash"].is_string());
    }
}
