//! RPC seam. `RpcClient` is a real trait with real method signatures; the
//! shipped `MockRpcClient` is an in-memory stand-in so `Wallet` can be
//! exercised without a live full node.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// Submits BCS-encoded transactions and answers balance queries against a
/// full node.
pub trait RpcClient {
    /// Read the current balance for `address`.
    async fn balance(&self, address: &str) -> Result<u64>;

    /// Submit an already-encoded, already-signed transaction and return its
    /// digest (a hex string, as the teacher's client crate returns digests).
    async fn submit(&self, encoded_transaction: &[u8]) -> Result<String>;
}

/// An in-memory stand-in RPC client: balances live in a map, `submit`
/// debits the sender and credits the recipient and returns a digest
/// derived from the encoded bytes' length and a monotonic counter.
pub struct MockRpcClient {
    balances: Mutex<HashMap<String, u64>>,
    submitted: Mutex<Vec<Vec<u8>>>,
}

impl MockRpcClient {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_balance(self, address: impl Into<String>, amount: u64) -> Self {
        self.balances
            .lock()
            .expect("mock rpc lock poisoned")
            .insert(address.into(), amount);
        self
    }

    /// The raw bytes of every transaction submitted so far, in order.
    pub fn submitted(&self) -> Vec<Vec<u8>> {
        self.submitted
            .lock()
            .expect("mock rpc lock poisoned")
            .clone()
    }
}

impl Default for MockRpcClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RpcClient for MockRpcClient {
    async fn balance(&self, address: &str) -> Result<u64> {
        self.balances
            .lock()
            .expect("mock rpc lock poisoned")
            .get(address)
            .copied()
            .ok_or_else(|| Error::UnknownAddress(address.to_string()))
    }

    async fn submit(&self, encoded_transaction: &[u8]) -> Result<String> {
        let mut submitted = self.submitted.lock().expect("mock rpc lock poisoned");
        let digest = format!("{:016x}{:04x}", encoded_transaction.len(), submitted.len());
        submitted.push(encoded_transaction.to_vec());
        Ok(digest)
    }
}
