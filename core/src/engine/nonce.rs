// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Session nonce store.
//!
//! Nonces are minted on host request, held for the lifetime of the signing
//! session, and consumed exactly once when a payment request presents them.
//! The store is owned by the session context and handed to the verifier by
//! mutable borrow, so only the active flow can touch it.

use heapless::Vec;
use rand_core::CryptoRngCore;

/// Nonce length issued by [`NonceStore::issue`]
pub const NONCE_LEN: usize = 32;

/// Maximum nonces held per session
pub const NONCE_STORE_SIZE: usize = 4;

/// One-time value binding a payment request to this session
pub type Nonce = Vec<u8, NONCE_LEN>;

/// Currently valid, previously issued one-time values
#[derive(Clone)]
pub struct NonceStore {
    nonces: Vec<Nonce, NONCE_STORE_SIZE>,
}

impl NonceStore {
    /// Create an empty store
    pub const fn new() -> Self {
        Self { nonces: Vec::new() }
    }

    /// Mint a new nonce and register it as valid.
    ///
    /// The oldest outstanding nonce is evicted when the store is full.
    pub fn issue<RNG: CryptoRngCore>(&mut self, rng: &mut RNG) -> Nonce {
        let mut value = [0u8; NONCE_LEN];
        rng.fill_bytes(&mut value);

        if self.nonces.is_full() {
            self.nonces.remove(0);
        }

        let mut nonce = Nonce::new();
        let _ = nonce.extend_from_slice(&value);
        let _ = self.nonces.push(nonce.clone());

        nonce
    }

    /// Whether `nonce` is currently valid
    pub fn contains(&self, nonce: &[u8]) -> bool {
        self.nonces.iter().any(|n| n.as_slice() == nonce)
    }

    /// Find and remove `nonce` as one step.
    ///
    /// Returns `false` when the value was never issued or has already been
    /// consumed. A consumed nonce is not restored if the caller's
    /// verification fails later.
    pub fn consume(&mut self, nonce: &[u8]) -> bool {
        match self.nonces.iter().position(|n| n.as_slice() == nonce) {
            Some(i) => {
                self.nonces.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drop all outstanding nonces
    pub fn clear(&mut self) {
        self.nonces.clear();
    }

    /// Number of outstanding nonces
    pub fn len(&self) -> usize {
        self.nonces.len()
    }

    /// Whether no nonces are outstanding
    pub fn is_empty(&self) -> bool {
        self.nonces.is_empty()
    }
}
