use {
    alloy::signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
    anyhow::{Context, Result},
};

/// Mnemonic that anvil and the hardhat network derive their prefunded
/// development accounts from.
pub const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Derives the signer at `m/44'/60'/0'/0/{index}` from a BIP-39 mnemonic.
pub fn from_mnemonic(phrase: &str, index: u32) -> Result<PrivateKeySigner> {
    MnemonicBuilder::<English>::default()
        .phrase(phrase)
        .index(index)?
        .build()
        .context("failed to derive signer from mnemonic")
}

/// Signer of one of the prefunded accounts of a development node.
#[cfg(any(test, feature = "test-util"))]
pub fn dev_signer(index: u32) -> PrivateKeySigner {
    from_mnemonic(DEV_MNEMONIC, index).expect("development mnemonic is valid")
}
