use thiserror::Error;

/// Error type for wallet operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("codec error: {0}")]
    Codec(#[from] bcs_codec::Error),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("signing failed: {0}")]
    SigningFailed(String),
    #[error("rpc call failed: {0}")]
    RpcFailed(String),
    #[error("unknown address: {0}")]
    UnknownAddress(String),
    #[error("invalid URL scheme: {0} (expected http or https)")]
    InvalidScheme(String),
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type for wallet operations.
pub type Result<T> = std::result::Result<T, Error>;
