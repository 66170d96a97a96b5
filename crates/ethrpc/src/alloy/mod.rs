mod instrumentation;
pub mod wallet;

#[cfg(any(test, feature = "test-util"))]
use alloy::providers::mock::Asserter;
use {
    crate::{AlloyProvider, Config},
    alloy::{
        network::EthereumWallet,
        providers::{Provider, ProviderBuilder},
        rpc::client::ClientBuilder,
        transports::{
            http::{Http, reqwest},
            utils::guess_local_url,
        },
    },
    anyhow::{Context, Result},
    instrumentation::{InstrumentationLayer, LabelingLayer},
    url::Url,
};

/// Creates a provider talking to the node at `url`. Every request is tagged
/// with `label` and traced. If a wallet is given, transactions are signed
/// locally before they are submitted.
pub fn provider(
    config: &Config,
    url: &Url,
    label: &str,
    wallet: Option<EthereumWallet>,
) -> Result<AlloyProvider> {
    let http = reqwest::Client::builder()
        .timeout(config.node_timeout)
        .build()
        .context("failed to build http client")?;
    let rpc = ClientBuilder::default()
        .layer(LabelingLayer {
            label: label.to_string(),
        })
        .layer(InstrumentationLayer)
        .transport(Http::with_client(http, url.clone()), guess_local_url(url));

    let provider = match wallet {
        Some(wallet) => ProviderBuilder::new()
            .wallet(wallet)
            .connect_client(rpc)
            .erased(),
        None => ProviderBuilder::new().connect_client(rpc).erased(),
    };
    Ok(provider)
}

#[cfg(any(test, feature = "test-util"))]
pub fn mocked_provider(asserter: Asserter, wallet: Option<EthereumWallet>) -> AlloyProvider {
    match wallet {
        Some(wallet) => ProviderBuilder::new()
            .wallet(wallet)
            .connect_mocked_client(asserter)
            .erased(),
        None => ProviderBuilder::new()
            .connect_mocked_client(asserter)
            .erased(),
    }
}
