//! Signing seam. `Signer` is a real trait with a real method signature;
//! the shipped `NullSigner` exists so the rest of the crate compiles and
//! its tests exercise the codec end-to-end, not to implement cryptography.

use crate::error::Result;

/// Produces a signature over a BCS-encoded message.
pub trait Signer {
    /// The public address this signer signs on behalf of.
    fn address(&self) -> String;

    /// Sign `message` (an already BCS-encoded byte string) and return the
    /// raw signature bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;
}

/// A signer that does not sign anything. Returns an empty signature and
/// exists solely as a stand-in so `Wallet::transfer` has something to call.
pub struct NullSigner {
    address: String,
}

impl NullSigner {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl Signer for NullSigner {
    fn address(&self) -> String {
        self.address.clone()
    }

    fn sign(&self, _message: &[u8]) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_signer_returns_empty_signature() {
        let signer = NullSigner::new("0xabc");
        assert_eq!(signer.address(), "0xabc");
        assert_eq!(signer.sign(b"anything").unwrap(), Vec::<u8>::new());
    }
}
