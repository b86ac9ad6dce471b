//! A thin wallet built on top of [`bcs_codec`]: encodes a transfer payload
//! with BCS, hands the bytes to a [`Signer`], and submits the signed
//! transaction through an [`RpcClient`]. Both traits are genuine seams —
//! the shipped [`NullSigner`] and [`MockRpcClient`] are stand-ins so this
//! crate compiles and its tests demonstrate the codec end-to-end, not
//! production cryptography or networking.

pub mod config;
pub mod error;
pub mod rpc;
pub mod signer;
pub mod wallet;

pub use config::{Args, Command, Config};
pub use error::{Error, Result};
pub use rpc::{MockRpcClient, RpcClient};
pub use signer::{NullSigner, Signer};
pub use wallet::{TransferPayload, TxDigest, Wallet};
