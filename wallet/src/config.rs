use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

fn default_node_url() -> String {
    std::env::var("WALLET_NODE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

fn default_keystore_path() -> PathBuf {
    std::env::var("WALLET_KEYSTORE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("wallet.keystore"))
}

fn default_timeout_secs() -> u64 {
    std::env::var("WALLET_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10)
}

/// CLI flags (user-provided override environment fallbacks).
#[derive(Parser, Debug)]
#[command(name = "wallet", about = "Thin wallet over a BCS-encoded transaction format")]
pub struct Args {
    /// Full node base URL (WALLET_NODE_URL)
    #[arg(long)]
    pub node_url: Option<String>,

    /// Path to the local keystore file (WALLET_KEYSTORE)
    #[arg(long)]
    pub keystore: Option<PathBuf>,

    /// Request timeout in seconds (WALLET_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Fetch the on-chain balance for an address.
    Balance { address: String },
    /// Transfer an amount from the keystore's account to another address.
    Transfer {
        to: String,
        amount: u64,
    },
}

/// Resolved configuration: CLI flags layered over environment fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    pub node_url: String,
    pub keystore: PathBuf,
    pub timeout: Duration,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            node_url: args.node_url.clone().unwrap_or_else(default_node_url),
            keystore: args.keystore.clone().unwrap_or_else(default_keystore_path),
            timeout: Duration::from_secs(
                args.timeout_secs.unwrap_or_else(default_timeout_secs),
            ),
        }
    }
}
