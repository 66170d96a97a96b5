use {
    alloy::{
        network::{ReceiptResponse, TransactionBuilder},
        primitives::{Address, TxHash, U256},
        providers::Provider,
        rpc::types::{TransactionReceipt, TransactionRequest},
    },
    anyhow::{Context, Result, ensure},
    contracts::{Artifact, Network, Project},
    ethrpc::Web3,
    std::time::Duration,
};

/// A contract creation transaction that made it on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub transaction_hash: TxHash,
    /// Block that included the transaction, if the node reported it.
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

/// Values of the `Project` counters right after deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub total_users: U256,
    pub total_posts: U256,
}

/// Deploys contracts from a single account to the network `web3` is
/// connected to.
pub struct Deployer {
    web3: Web3,
    account: Address,
    network: Network,
    confirmations: u64,
    timeout: Option<Duration>,
}

impl Deployer {
    /// Resolves the deploying account and the network behind `web3`.
    pub async fn connect(web3: Web3, network_label: Option<String>) -> Result<Self> {
        let account = web3.default_account().await?;
        let chain_id = web3
            .provider
            .get_chain_id()
            .await
            .context("could not fetch current chain id")?;
        let network = Network::from_chain_id(chain_id);
        let network = match network_label {
            Some(label) => network.with_label(label),
            None => network,
        };
        tracing::debug!(%account, chain_id, %network, "connected to node");

        Ok(Self {
            web3,
            account,
            network,
            confirmations: 1,
            timeout: None,
        })
    }

    pub fn with_confirmations(self, confirmations: u64) -> Self {
        Self {
            confirmations,
            ..self
        }
    }

    pub fn with_timeout(self, timeout: Option<Duration>) -> Self {
        Self { timeout, ..self }
    }

    pub fn account(&self) -> Address {
        self.account
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Native token balance of the deploying account.
    pub async fn balance(&self) -> Result<U256> {
        self.web3
            .provider
            .get_balance(self.account)
            .await
            .with_context(|| format!("could not fetch balance of {}", self.account))
    }

    /// Sends the creation code of `artifact` and waits until the
    /// transaction is confirmed and the contract has code.
    pub async fn deploy(&self, artifact: &Artifact) -> Result<Deployment> {
        let tx = TransactionRequest::default()
            .with_from(self.account)
            .with_deploy_code(artifact.bytecode.clone());
        let pending = self
            .web3
            .provider
            .send_transaction(tx)
            .await
            .with_context(|| format!("failed to submit {} deployment", artifact.contract_name))?;
        let transaction_hash = *pending.tx_hash();
        tracing::info!(
            %transaction_hash,
            confirmations = self.confirmations,
            "waiting for deployment to be mined"
        );

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .with_timeout(self.timeout)
            .get_receipt()
            .await
            .with_context(|| format!("deployment transaction {transaction_hash} not confirmed"))?;
        self.verify_receipt(&receipt).await
    }

    /// Checks that `receipt` belongs to a successful contract creation and
    /// that the created contract has code.
    async fn verify_receipt(&self, receipt: &TransactionReceipt) -> Result<Deployment> {
        let transaction_hash = receipt.transaction_hash;
        ensure!(
            ReceiptResponse::status(receipt),
            "deployment transaction {transaction_hash} reverted"
        );
        let address = receipt.contract_address.with_context(|| {
            format!("receipt of {transaction_hash} does not contain a contract address")
        })?;

        let code = self
            .web3
            .provider
            .get_code_at(address)
            .await
            .context("could not fetch deployed code")?;
        ensure!(!code.is_empty(), "no contract code at {address} after deployment");

        Ok(Deployment {
            address,
            transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }

    /// Reads the counters of the `Project` contract at `address`. A
    /// contract that answers both calls is considered to be working.
    pub async fn read_counters(&self, address: Address) -> Result<Counters> {
        let project = Project::Instance::new(address, self.web3.provider.clone());
        let total_users = project
            .getTotalUsers()
            .call()
            .await
            .context("getTotalUsers() call failed")?;
        let total_posts = project
            .getTotalPosts()
            .call()
            .await
            .context("getTotalPosts() call failed")?;
        Ok(Counters {
            total_users,
            total_posts,
        })
    }

    /// Number of the block that included the deployment. Falls back to the
    /// latest block if the receipt did not say.
    pub async fn block_number(&self, deployment: &Deployment) -> Result<u64> {
        match deployment.block_number {
            Some(block_number) => Ok(block_number),
            None => self
                .web3
                .provider
                .get_block_number()
                .await
                .context("could not fetch current block number"),
        }
    }
}
