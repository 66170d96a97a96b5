use {
    alloy::{network::EthereumWallet, signers::local::PrivateKeySigner},
    anyhow::{Context, Result},
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
        time::Duration,
    },
    tracing::level_filters::LevelFilter,
    url::Url,
};

#[derive(clap::Parser)]
pub struct Arguments {
    #[clap(
        long,
        env,
        default_value = "warn,deployer=info,contracts=info,ethrpc=info"
    )]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    /// Emit log events as JSON objects instead of plain text lines.
    #[clap(long, env, action = clap::ArgAction::Set, default_value = "false")]
    pub use_json_logs: bool,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Timeout in seconds for a single request to the node.
    #[clap(long, env, default_value = "10", value_parser = duration_from_seconds)]
    pub node_timeout: Duration,

    /// Hex encoded private key of the account that deploys the contract.
    /// Without a private key or a mnemonic the first account managed by the
    /// node is used and the node signs the transaction.
    #[clap(long, env, hide_env_values = true, conflicts_with = "mnemonic")]
    pub private_key: Option<PrivateKeySigner>,

    /// BIP-39 mnemonic the deployer account is derived from.
    #[clap(long, env, hide_env_values = true)]
    pub mnemonic: Option<String>,

    /// Index of the account derived from the mnemonic
    /// (`m/44'/60'/0'/0/<index>`).
    #[clap(long, env, default_value = "0")]
    pub account_index: u32,

    /// Path to the compiled `Project` artifact.
    #[clap(
        long,
        env,
        default_value = "artifacts/contracts/Project.sol/Project.json"
    )]
    pub artifact: PathBuf,

    /// Name of the network shown in the summary. Derived from the chain id
    /// if not set.
    #[clap(long, env)]
    pub network_label: Option<String>,

    /// Number of blocks that have to include or follow the deployment
    /// before it counts as confirmed.
    #[clap(
        long,
        env,
        default_value = "1",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub confirmations: u64,

    /// How long in seconds to wait for the deployment to be confirmed.
    /// Waits indefinitely if not set.
    #[clap(long, env, value_parser = duration_from_seconds)]
    pub confirmation_timeout: Option<Duration>,
}

impl Arguments {
    pub fn observe_config(&self) -> observe::Config {
        observe::Config::new(
            &self.log_filter,
            self.log_stderr_threshold.into_level(),
            self.use_json_logs,
        )
    }

    pub fn ethrpc_config(&self) -> ethrpc::Config {
        ethrpc::Config {
            node_timeout: self.node_timeout,
        }
    }

    /// The wallet that signs the deployment locally, if a key is
    /// configured.
    pub fn wallet(&self) -> Result<Option<EthereumWallet>> {
        let signer = match (&self.private_key, &self.mnemonic) {
            (Some(private_key), _) => private_key.clone(),
            (None, Some(mnemonic)) => {
                ethrpc::alloy::wallet::from_mnemonic(mnemonic, self.account_index)
                    .context("invalid deployer mnemonic")?
            }
            (None, None) => return Ok(None),
        };
        Ok(Some(EthereumWallet::new(signer)))
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            use_json_logs,
            node_url,
            node_timeout,
            private_key,
            mnemonic,
            account_index,
            artifact,
            network_label,
            confirmations,
            confirmation_timeout,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "node_timeout: {node_timeout:?}")?;
        display_secret_option(f, "private_key", private_key)?;
        display_secret_option(f, "mnemonic", mnemonic)?;
        writeln!(f, "account_index: {account_index}")?;
        writeln!(f, "artifact: {}", artifact.display())?;
        display_option(f, "network_label", network_label)?;
        writeln!(f, "confirmations: {confirmations}")?;
        display_option(
            f,
            "confirmation_timeout",
            &confirmation_timeout.map(|timeout| format!("{timeout:?}")),
        )?;
        Ok(())
    }
}

pub fn duration_from_seconds(s: &str) -> Result<Duration> {
    let seconds: f64 = s.parse().context("not a number of seconds")?;
    Duration::try_from_secs_f64(seconds).context("not a valid duration")
}

fn display_secret_option<T>(f: &mut Formatter<'_>, name: &str, option: &Option<T>) -> fmt::Result {
    display_option(f, name, &option.as_ref().map(|_| "SECRET"))
}

fn display_option(f: &mut Formatter<'_>, name: &str, option: &Option<impl Display>) -> fmt::Result {
    write!(f, "{name}: ")?;
    match option {
        Some(display) => writeln!(f, "{display}"),
        None => writeln!(f, "None"),
    }
}
