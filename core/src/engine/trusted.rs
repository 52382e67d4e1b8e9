// Copyright (c) 2022-2023 The MobileCoin Foundation

use secp256k1::{ecdsa::Signature, Message, PublicKey, Secp256k1};

use super::Error;

/// Payment-request signing authority.
///
/// Wraps a validated compressed secp256k1 public key. Construction fails
/// on empty or malformed input, so a configured instance is always usable:
/// the integrating firmware injects the key bytes from its build
/// configuration, and a binary without one cannot reach a verifying state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TrustedKey {
    public_key: PublicKey,
}

impl TrustedKey {
    /// Parse a compressed public key, rejecting empty or invalid input
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.is_empty() {
            return Err(Error::InvalidKey);
        }

        let public_key = PublicKey::from_slice(bytes).map_err(|_| Error::InvalidKey)?;

        Ok(Self { public_key })
    }

    /// Verify a 64-byte compact ECDSA signature over `digest`
    pub fn verify(&self, digest: &[u8; 32], signature: &[u8]) -> Result<(), Error> {
        let secp = Secp256k1::verification_only();

        let message = Message::from_digest(*digest);
        let signature = Signature::from_compact(signature).map_err(|_| Error::InvalidSignature)?;

        secp.verify_ecdsa(&message, &signature, &self.public_key)
            .map_err(|_| Error::InvalidSignature)
    }
}
