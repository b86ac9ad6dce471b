//! Wallet CLI: `balance <address>` and `transfer <to> <amount>`, backed by
//! the mock signer and RPC client while a real keystore and full-node
//! client are out of scope for this crate.

use anyhow::Result;
use clap::Parser;
use nullspace_wallet::{Args, Command, Config, MockRpcClient, NullSigner, Wallet};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_args(&args);
    info!(node_url = %config.node_url, keystore = %config.keystore.display(), "wallet starting");

    // A real build would load a keypair from `config.keystore` and dial
    // `config.node_url` over HTTP; this CLI wires the same command surface
    // to the mock signer/RPC client so `balance`/`transfer` are exercised
    // end-to-end without a live full node.
    let address = "0xwallet";
    let wallet = Wallet::new(
        NullSigner::new(address),
        MockRpcClient::new().with_balance(address, 1_000),
    );

    match args.command {
        Command::Balance { address } => {
            let balance = wallet.balance_of(&address).await?;
            println!("{balance}");
        }
        Command::Transfer { to, amount } => {
            let digest = wallet.transfer(&to, amount).await?;
            println!("{digest}");
        }
    }

    Ok(())
}
