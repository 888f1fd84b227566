// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Deploy a test token and exercise the transactor
//!
//! Deploys `ExampleERC20Decimals` from a Foundry artifact, mints the per-call
//! maximum, approves a spender and burns part of the balance.
//!
//! Prerequisites:
//! - A compiled artifact, e.g. `out/ExampleERC20Decimals.sol/ExampleERC20Decimals.json`
//! - Native gas on the target chain
//!
//! Environment variables (set these in .env file):
//! - ICTT_RPC_URL: RPC endpoint
//! - ICTT_PRIVATE_KEY: Deployer private key (must start with 0x)
//! - EXAMPLE_ERC20_ARTIFACT: Path to the compiled artifact
//!
//! Run with: `cargo run --example deploy_and_send`

use alloy_network::EthereumWallet;
use alloy_primitives::{address, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use dotenvy::dotenv;
use ictt_rs::{
    ContractArtifact, ExampleERC20DecimalsContract, IcttError, TransactOpts, MAX_MINT_AMOUNT,
};

#[tokio::main]
async fn main() -> Result<(), IcttError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let rpc_url = std::env::var("ICTT_RPC_URL").expect("ICTT_RPC_URL must be set in .env file");
    let private_key =
        std::env::var("ICTT_PRIVATE_KEY").expect("ICTT_PRIVATE_KEY must be set in .env file");
    let artifact_path = std::env::var("EXAMPLE_ERC20_ARTIFACT")
        .expect("EXAMPLE_ERC20_ARTIFACT must be set in .env file");

    let signer: PrivateKeySigner = private_key.parse().expect("Invalid ICTT_PRIVATE_KEY format");
    let deployer = signer.address();
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(rpc_url.parse().unwrap());

    println!("📍 Deployer: {deployer}");

    println!("1️⃣  Loading artifact from {artifact_path}...");
    let artifact = ContractArtifact::from_file(&artifact_path)?;
    println!("   {} bytes of creation code\n", artifact.bytecode().len());

    println!("2️⃣  Deploying ExampleERC20Decimals with 6 decimals...");
    let opts = TransactOpts::from_address(deployer);
    let (token, deployment) =
        ExampleERC20DecimalsContract::deploy(provider.clone(), &artifact, &opts, 6).await?;
    println!("   ✅ Deployed at {} (tx {})\n", deployment.address, deployment.tx_hash);

    println!("3️⃣  Minting {MAX_MINT_AMOUNT} base units...");
    let mint_tx = token.transactor().mint(&opts, MAX_MINT_AMOUNT).await?;
    if let Some(receipt) = provider.get_transaction_receipt(mint_tx).await? {
        println!("   ✅ Mint included in block {:?}", receipt.block_number);
    }

    let spender = address!("0987654321098765432109876543210987654321");
    println!("\n4️⃣  Approving {spender}...");
    let approve_tx = token
        .transactor()
        .approve(&opts, spender, U256::from(1_000_000u64))
        .await?;
    println!("   Sent {approve_tx}");

    println!("\n5️⃣  Burning 1 token...");
    let burn_tx = token.transactor().burn(&opts, U256::from(1_000_000u64)).await?;
    println!("   Sent {burn_tx}");

    let balance = token.caller().balance_of(deployer).await?;
    let decimals = token.caller().decimals().await?;
    println!("\n💰 Balance: {balance} ({decimals} decimals)");

    // Minting above the cap never reaches the chain
    let over_cap = token
        .transactor()
        .mint_transaction(&opts, MAX_MINT_AMOUNT + U256::from(1));
    if let Err(err) = over_cap {
        println!("🚫 {err}");
    }

    Ok(())
}
