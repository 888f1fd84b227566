//! Watch wrapped-token transfers on a NativeTokenRemote
//!
//! Prints historical `TokensSent` events, then forwards live `Transfer`
//! events into a channel until Ctrl-C.
//!
//! Environment variables (set these in .env file):
//! - ICTT_RPC_URL: RPC endpoint of the remote chain
//! - NATIVE_TOKEN_REMOTE_ADDRESS: Address of the deployed NativeTokenRemote
//! - FROM_BLOCK: (optional) First block for the historical query, default 0
//!
//! Run with: `cargo run --example watch_transfers`

use alloy_primitives::Address;
use alloy_provider::ProviderBuilder;
use dotenvy::dotenv;
use futures::channel::mpsc;
use futures::StreamExt;
use ictt_rs::{FilterOpts, IcttError, NativeTokenRemoteContract, WatchOpts};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), IcttError> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ictt_rs=debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rpc_url = std::env::var("ICTT_RPC_URL").expect("ICTT_RPC_URL must be set in .env file");
    let remote_address: Address = std::env::var("NATIVE_TOKEN_REMOTE_ADDRESS")
        .expect("NATIVE_TOKEN_REMOTE_ADDRESS must be set in .env file")
        .parse()
        .expect("Invalid NATIVE_TOKEN_REMOTE_ADDRESS");
    let from_block: u64 = std::env::var("FROM_BLOCK")
        .ok()
        .and_then(|block| block.parse().ok())
        .unwrap_or(0);

    let provider = ProviderBuilder::new().connect_http(rpc_url.parse().unwrap());
    let remote = NativeTokenRemoteContract::new(remote_address, provider);

    println!("📍 NativeTokenRemote: {remote_address}");
    println!("   Symbol: {}", remote.caller().symbol().await?);
    println!("   Collateralized: {}", remote.caller().get_is_collateralized().await?);
    println!("   Total minted: {}\n", remote.caller().get_total_minted().await?);

    println!("1️⃣  Historical TokensSent events since block {from_block}...");
    let mut sent = remote
        .filterer()
        .filter_tokens_sent(&FilterOpts::from_block(from_block), &[], &[])
        .await?;
    while let Some(event) = sent.next().await {
        let data = &event.inner.data;
        println!(
            "   {} sent {} to {} (message {})",
            data.sender, data.amount, data.input.recipient, data.teleporterMessageID
        );
    }
    if let Some(err) = sent.error() {
        println!("   ⚠️  Iteration stopped early: {err}");
    }
    sent.close();

    println!("\n2️⃣  Watching Transfer events (Ctrl-C to stop)...");
    let (tx, mut rx) = mpsc::channel(64);
    let subscription = remote
        .filterer()
        .watch_transfer(&WatchOpts::default(), tx, &[], &[])
        .await?;

    loop {
        tokio::select! {
            event = rx.next() => match event {
                Some(event) => {
                    let data = &event.inner.data;
                    println!("   {} → {}: {}", data.from, data.to, data.value);
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    subscription.unsubscribe().await?;
    println!("\n✅ Subscription closed");
    Ok(())
}
