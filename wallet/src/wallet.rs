//! The adapter that ties the codec to a signer and an RPC client: exactly
//! the seam the specification's wallet surface describes, built on top of
//! `bcs_codec` the same way the teacher's `client` crate builds on top of
//! `commonware-codec`.

use crate::error::Result;
use crate::rpc::RpcClient;
use crate::signer::Signer;
use bcs_codec::{Decode, Encode, Reader, Result as CodecResult, Writer};
use tracing::{debug, info};

/// The wire-format payload of a transfer, BCS-encoded and handed to the
/// signer: matches the `Coin { value, owner, is_locked }` canonical vector
/// type, generalized with a `to` field for the transfer's destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPayload {
    pub amount: u64,
    pub to: String,
    pub memo: String,
}

impl Encode for TransferPayload {
    fn encode(&self, writer: &mut Writer) {
        self.amount.encode(writer);
        self.to.encode(writer);
        self.memo.encode(writer);
    }
}

impl Decode for TransferPayload {
    fn decode(reader: &mut Reader) -> CodecResult<Self> {
        Ok(Self {
            amount: u64::decode(reader)?,
            to: String::decode(reader)?,
            memo: String::decode(reader)?,
        })
    }
}

/// A transaction digest, as returned by [`RpcClient::submit`].
pub type TxDigest = String;

/// A thin wallet: holds a signer and an RPC client, and composes BCS
/// encoding, signing, and submission into the two operations a caller
/// actually wants.
pub struct Wallet<S, R> {
    signer: S,
    rpc: R,
}

impl<S: Signer, R: RpcClient> Wallet<S, R> {
    pub fn new(signer: S, rpc: R) -> Self {
        Self { signer, rpc }
    }

    /// The wallet's RPC client, exposed for tests that need to inspect
    /// what was submitted.
    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    /// Read the on-chain balance for this wallet's own address.
    pub async fn balance(&self) -> Result<u64> {
        let address = self.signer.address();
        debug!(%address, "querying balance");
        self.rpc.balance(&address).await
    }

    /// Read the on-chain balance for an arbitrary address, not just this
    /// wallet's own.
    pub async fn balance_of(&self, address: &str) -> Result<u64> {
        debug!(%address, "querying balance");
        self.rpc.balance(address).await
    }

    /// Encode, sign, and submit a transfer. The signature is appended after
    /// the encoded payload: `encode(payload) ++ signature`, so the receiving
    /// side can split on the known payload length before verifying.
    pub async fn transfer(&self, to: &str, amount: u64) -> Result<TxDigest> {
        let payload = TransferPayload {
            amount,
            to: to.to_string(),
            memo: String::new(),
        };
        let encoded = bcs_codec::to_bytes(&payload);

        let signature = self.signer.sign(&encoded)?;
        let mut transaction = encoded;
        transaction.extend(signature);

        info!(to, amount, bytes = transaction.len(), "submitting transfer");
        self.rpc.submit(&transaction).await
    }
}
