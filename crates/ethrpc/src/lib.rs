pub mod alloy;

#[cfg(any(test, feature = "test-util"))]
use ::alloy::providers::mock::Asserter;
use {
    ::alloy::{
        network::{Ethereum, EthereumWallet, NetworkWallet},
        primitives::Address,
        providers::{DynProvider, Provider},
    },
    anyhow::{Context, Result},
    std::time::Duration,
    url::Url,
};

pub type AlloyProvider = DynProvider;

#[derive(Debug, Clone)]
pub struct Config {
    /// Timeout for a single RPC request to the node.
    pub node_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_timeout: Duration::from_secs(10),
        }
    }
}

/// A connection to a node together with the wallet used to sign
/// transactions locally. Without a wallet, transactions are handed to the
/// node unsigned and the node signs them with one of its own accounts.
#[derive(Debug, Clone)]
pub struct Web3 {
    pub provider: AlloyProvider,
    pub wallet: Option<EthereumWallet>,
}

impl Web3 {
    pub fn new(
        config: &Config,
        url: &Url,
        name: impl ToString,
        wallet: Option<EthereumWallet>,
    ) -> Result<Self> {
        let provider = alloy::provider(config, url, &name.to_string(), wallet.clone())?;
        Ok(Self { provider, wallet })
    }

    /// Builds a connection that answers requests from the given
    /// [`Asserter`] instead of a node.
    #[cfg(any(test, feature = "test-util"))]
    pub fn mocked(asserter: Asserter, wallet: Option<EthereumWallet>) -> Self {
        Self {
            provider: alloy::mocked_provider(asserter, wallet.clone()),
            wallet,
        }
    }

    /// The account transactions are sent from: the default signer of the
    /// wallet or, if there is none, the first account managed by the node.
    pub async fn default_account(&self) -> Result<Address> {
        if let Some(wallet) = &self.wallet {
            return Ok(NetworkWallet::<Ethereum>::default_signer_address(wallet));
        }
        let accounts = self
            .provider
            .get_accounts()
            .await
            .context("could not fetch accounts managed by the node")?;
        accounts
            .first()
            .copied()
            .context("node manages no accounts, configure a private key or a mnemonic")
    }
}
