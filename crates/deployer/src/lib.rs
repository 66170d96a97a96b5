pub mod arguments;
pub mod deploy;
pub mod summary;

pub use {
    deploy::{Counters, Deployer, Deployment},
    summary::{DeploymentInfo, format_balance},
};
use {
    anyhow::{Context, Result},
    arguments::Arguments,
    clap::Parser,
    contracts::Project,
    ethrpc::Web3,
};

/// Parses `args` like the binary does and runs the deployment. Logging is
/// initialized only once per process, so this can be called repeatedly.
pub async fn start(args: impl IntoIterator<Item = String>) -> Result<DeploymentInfo> {
    let args = Arguments::try_parse_from(args)?;
    observe::tracing::initialize_reentrant(&args.observe_config());
    tracing::info!("running deployer with validated arguments:\n{}", args);
    run(args).await
}

/// Deploys the `Project` contract and reports where it ended up.
pub async fn run(args: Arguments) -> Result<DeploymentInfo> {
    tracing::info!("Deploying {} contract...", Project::DESCRIPTION);

    let web3 = Web3::new(
        &args.ethrpc_config(),
        &args.node_url,
        "deployer",
        args.wallet()?,
    )?;
    let deployer = Deployer::connect(web3, args.network_label)
        .await?
        .with_confirmations(args.confirmations)
        .with_timeout(args.confirmation_timeout);
    tracing::info!(
        "Deploying contracts with the account: {}",
        deployer.account()
    );

    let balance = deployer.balance().await?;
    tracing::info!(
        "Account balance: {} {}",
        format_balance(balance),
        deployer.network().native_symbol
    );

    let artifact = contracts::project::load_artifact(&args.artifact)
        .with_context(|| format!("failed to load {} artifact", Project::NAME))?;
    let deployment = deployer.deploy(&artifact).await?;
    tracing::info!(
        "{} contract deployed to: {}",
        artifact.contract_name,
        deployment.address
    );

    tracing::info!("Verifying deployment...");
    let counters = deployer.read_counters(deployment.address).await?;
    tracing::info!("Initial total users: {}", counters.total_users);
    tracing::info!("Initial total posts: {}", counters.total_posts);

    let info = DeploymentInfo {
        contract_name: artifact.contract_name,
        contract_address: deployment.address,
        network: deployer.network().label.clone(),
        chain_id: deployer.network().chain_id,
        deployer: deployer.account(),
        deployment_time: chrono::Utc::now(),
        block_number: deployer.block_number(&deployment).await?,
        transaction_hash: deployment.transaction_hash,
        gas_used: deployment.gas_used,
    };
    tracing::info!(
        deployment = %serde_json::to_string(&info)?,
        "deployment info"
    );

    println!("\n{info}");
    println!("Deployment completed successfully!");
    println!(
        "You can interact with the contract using the address: {}",
        info.contract_address
    );
    Ok(info)
}
