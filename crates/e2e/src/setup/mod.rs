use {
    alloy::{
        primitives::{Address, U256},
        providers::{Provider, ext::AnvilApi},
        signers::local::PrivateKeySigner,
    },
    ethrpc::Web3,
    futures::FutureExt,
    std::{
        panic::{self, AssertUnwindSafe},
        sync::atomic::{AtomicU64, Ordering},
    },
    tokio::sync::Mutex,
};

/// Local development node (anvil or a hardhat network) the tests run on.
pub const NODE_HOST: &str = "http://127.0.0.1:8545";

/// Hardhat artifact of a `Project` contract whose counters start at 0.
pub const PROJECT_ARTIFACT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/artifacts/Project.json");

/// Guarantees that no more than one test at a time is running on the node.
static NODE_MUTEX: Mutex<()> = Mutex::const_new(());

/// *Testing* function that takes a closure and runs it on the local test
/// node. Before each test it takes a snapshot of the chain, which is restored
/// once the test finished, even if it panicked.
pub async fn run_test<F, Fut>(test_function: F)
where
    F: FnOnce(Web3) -> Fut,
    Fut: Future<Output = ()>,
{
    observe::tracing::initialize_reentrant(
        &observe::Config::default().with_env_filter("warn,deployer=debug,e2e=debug"),
    );
    let _lock = NODE_MUTEX.lock().await;

    let web3 = Web3::new(
        &Default::default(),
        &NODE_HOST.parse().unwrap(),
        "e2e",
        None,
    )
    .unwrap();
    let snapshot = web3
        .provider
        .anvil_snapshot()
        .await
        .expect("test node must support anvil_snapshot");

    // Hack: the closure may actually be unwind unsafe; moreover, `catch_unwind`
    // does not catch some types of panics. In these cases the state of the
    // node is not restored, which is acceptable in a test environment.
    let result = AssertUnwindSafe(test_function(web3.clone()))
        .catch_unwind()
        .await;

    web3.provider
        .anvil_revert(snapshot)
        .await
        .expect("test node must support anvil_revert");

    if let Err(err) = result {
        panic::resume_unwind(err);
    }
}

/// An account that did not exist on the test node before.
#[derive(Clone, Debug)]
pub struct TestAccount {
    pub signer: PrivateKeySigner,
}

impl TestAccount {
    /// Creates a fresh account. Ids start high to stay clear of the
    /// prefunded development accounts.
    pub fn fresh() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(100_500);

        let mut buffer = [0u8; 32];
        loop {
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            buffer[24..].copy_from_slice(&id.to_be_bytes());
            if let Ok(signer) = PrivateKeySigner::from_slice(&buffer) {
                break Self { signer };
            }
        }
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Hex encoded private key, as it is passed on the command line.
    pub fn private_key(&self) -> String {
        self.signer.to_bytes().to_string()
    }

    pub async fn fund(&self, web3: &Web3, amount: U256) {
        web3.provider
            .anvil_set_balance(self.address(), amount)
            .await
            .expect("test node must support anvil_setBalance");
    }

    pub async fn nonce(&self, web3: &Web3) -> u64 {
        web3.provider
            .get_transaction_count(self.address())
            .await
            .unwrap()
    }
}

/// Command line of a deployment to the test node using the test artifact.
pub fn deployer_args(extra: &[&str]) -> Vec<String> {
    ["deployer", "--node-url", NODE_HOST, "--artifact", PROJECT_ARTIFACT]
        .into_iter()
        .chain(extra.iter().copied())
        .map(String::from)
        .collect()
}
