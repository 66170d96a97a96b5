use {
    alloy::{
        primitives::{U256, utils::parse_ether},
        providers::Provider,
    },
    contracts::Project,
    e2e::setup::{TestAccount, deployer_args, run_test},
    ethrpc::Web3,
};

#[tokio::test]
#[ignore]
async fn local_node_deploy_with_funded_account() {
    run_test(deploy_with_funded_account).await;
}

#[tokio::test]
#[ignore]
async fn local_node_fresh_contract_has_no_users_or_posts() {
    run_test(fresh_contract_has_no_users_or_posts).await;
}

#[tokio::test]
#[ignore]
async fn local_node_deploy_with_unfunded_account_fails() {
    run_test(deploy_with_unfunded_account_fails).await;
}

#[tokio::test]
#[ignore]
async fn local_node_deploy_with_node_account() {
    run_test(deploy_with_node_account).await;
}

#[tokio::test]
#[ignore]
async fn local_node_missing_artifact_sends_nothing() {
    run_test(missing_artifact_sends_nothing).await;
}

async fn deploy_with_funded_account(web3: Web3) {
    let account = TestAccount::fresh();
    account.fund(&web3, parse_ether("10").unwrap()).await;
    let private_key = account.private_key();

    let info = deployer::start(deployer_args(&["--private-key", &private_key]))
        .await
        .unwrap();

    assert_eq!(info.contract_name, Project::NAME);
    assert_eq!(info.deployer, account.address());
    assert_eq!(info.network, "Local Dev Node");
    // The first transaction of a fresh account creates the contract at the
    // address derived from its nonce 0.
    assert_eq!(info.contract_address, account.address().create(0));

    let receipt = web3
        .provider
        .get_transaction_receipt(info.transaction_hash)
        .await
        .unwrap()
        .expect("deployment transaction is mined");
    assert_eq!(receipt.contract_address, Some(info.contract_address));
    assert_eq!(receipt.block_number, Some(info.block_number));
    assert_eq!(receipt.gas_used, info.gas_used);

    let code = web3
        .provider
        .get_code_at(info.contract_address)
        .await
        .unwrap();
    assert!(!code.is_empty());

    let balance = web3.provider.get_balance(account.address()).await.unwrap();
    assert!(balance < parse_ether("10").unwrap());
}

async fn fresh_contract_has_no_users_or_posts(web3: Web3) {
    let account = TestAccount::fresh();
    account.fund(&web3, parse_ether("1").unwrap()).await;
    let private_key = account.private_key();

    let info = deployer::start(deployer_args(&["--private-key", &private_key]))
        .await
        .unwrap();

    let project = Project::Instance::new(info.contract_address, web3.provider.clone());
    assert_eq!(project.getTotalUsers().call().await.unwrap(), U256::ZERO);
    assert_eq!(project.getTotalPosts().call().await.unwrap(), U256::ZERO);
}

async fn deploy_with_unfunded_account_fails(web3: Web3) {
    let account = TestAccount::fresh();
    let private_key = account.private_key();

    let result = deployer::start(deployer_args(&["--private-key", &private_key])).await;

    assert!(result.is_err());
    assert_eq!(account.nonce(&web3).await, 0);
}

async fn deploy_with_node_account(web3: Web3) {
    let accounts = web3.provider.get_accounts().await.unwrap();
    let node_account = *accounts.first().expect("test node manages accounts");

    let info = deployer::start(deployer_args(&["--network-label", "Core Testnet 2"]))
        .await
        .unwrap();

    assert_eq!(info.deployer, node_account);
    assert_eq!(info.network, "Core Testnet 2");
    assert!(
        !web3
            .provider
            .get_code_at(info.contract_address)
            .await
            .unwrap()
            .is_empty()
    );
}

async fn missing_artifact_sends_nothing(web3: Web3) {
    let account = TestAccount::fresh();
    account.fund(&web3, parse_ether("1").unwrap()).await;
    let private_key = account.private_key();
    let block_before = web3.provider.get_block_number().await.unwrap();

    let result = deployer::start(
        ["deployer", "--node-url", e2e::setup::NODE_HOST]
            .into_iter()
            .chain(["--artifact", "does/not/exist/Project.json"])
            .chain(["--private-key", private_key.as_str()])
            .map(String::from),
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to load Project artifact"));
    assert_eq!(account.nonce(&web3).await, 0);
    assert_eq!(web3.provider.get_block_number().await.unwrap(), block_before);
}
