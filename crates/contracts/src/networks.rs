use std::fmt::{self, Display, Formatter};

pub const MAINNET: u64 = 1;
pub const SEPOLIA: u64 = 11155111;
pub const CORE_MAINNET: u64 = 1116;
pub const CORE_TESTNET: u64 = 1115;
pub const CORE_TESTNET2: u64 = 1114;
/// Chain id anvil and the hardhat network use by default.
pub const LOCAL_DEV: u64 = 31337;

/// The network a deployment goes to, as it is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub chain_id: u64,
    pub label: String,
    /// Ticker of the token balances and fees are paid in.
    pub native_symbol: &'static str,
}

impl Network {
    pub fn from_chain_id(chain_id: u64) -> Self {
        // You can find a list of available networks by chain id here:
        // https://chainid.network/chains.json
        let (label, native_symbol) = match chain_id {
            MAINNET => ("Ethereum Mainnet".to_string(), "ETH"),
            SEPOLIA => ("Ethereum Sepolia".to_string(), "ETH"),
            CORE_MAINNET => ("Core Mainnet".to_string(), "CORE"),
            CORE_TESTNET => ("Core Testnet".to_string(), "CORE"),
            CORE_TESTNET2 => ("Core Testnet 2".to_string(), "CORE"),
            LOCAL_DEV => ("Local Dev Node".to_string(), "ETH"),
            _ => (format!("Unknown network (chain_id={chain_id})"), "ETH"),
        };
        Self {
            chain_id,
            label,
            native_symbol,
        }
    }

    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..self
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
