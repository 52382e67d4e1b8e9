// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Payment request verification engine.
//!
//! [`PaymentRequestVerifier`] authenticates a signed payment request on
//! construction, then checks the transaction's outputs one at a time as
//! the signing flow serializes them. Outputs arrive with no lookahead, so
//! the running amount measured against the authorized total is what
//! decides that the stream is complete; at that point the double-SHA-256
//! of the accumulated canonical encoding must equal the signed output
//! commitment.

use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::hashing::HashWriter;
use crate::keychain::CoinInfo;

mod error;
pub use error::Error;

mod memo;
pub use memo::{
    verify_memos, Memo, MEMO_DATA_MAX_LEN, MEMO_TYPE_COIN_FLAG, MEMO_TYPE_COIN_MASK,
    MEMO_TYPE_UTF8,
};

mod nonce;
pub use nonce::{Nonce, NonceStore, NONCE_LEN, NONCE_STORE_SIZE};

mod request;
pub use request::{PaymentRequestAck, TxOutput};

mod trusted;
pub use trusted::TrustedKey;

/// Domain tag for the request authentication digest
const PAYMENT_REQUEST_TAG: &[u8; 16] = b"Payment request:";

/// Verifier state enumeration
#[derive(Copy, Clone, PartialEq, Debug, EnumString, Display, EnumVariantNames, EnumIter)]
pub enum State {
    /// Request authenticated, accumulating streamed outputs
    Accumulating,

    /// Output stream verified against the signed request
    Complete,

    /// Verification failed, no further operations accepted
    Error,
}

/// Verifies a transaction's output stream against an authenticated payment
/// request.
///
/// One verifier exists per signing session. It is created right after the
/// acknowledgment message is received, fed outputs during serialization,
/// and discarded with the session on success or failure.
pub struct PaymentRequestVerifier {
    state: State,

    h_outputs: HashWriter,

    amount: u64,
    expected_amount: u64,
    expected_hash_outputs: [u8; 32],
}

impl PaymentRequestVerifier {
    /// Authenticate `ack` and construct a verifier for its output stream.
    ///
    /// The request nonce, when present, must be outstanding in `nonces`;
    /// it is consumed before the signature is checked and is not restored
    /// if any later step fails.
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn new(
        ack: &PaymentRequestAck<'_>,
        coin: &CoinInfo,
        nonces: &mut NonceStore,
        trusted_key: &TrustedKey,
    ) -> Result<Self, Error> {
        Self::authenticate(ack, coin, nonces, trusted_key)?;

        #[cfg(feature = "log")]
        log::debug!(
            "payment request authenticated for '{}', amount {}",
            ack.recipient_name,
            ack.amount
        );

        Ok(Self {
            state: State::Accumulating,
            h_outputs: HashWriter::new(),
            amount: 0,
            expected_amount: ack.amount,
            expected_hash_outputs: ack.hash_outputs,
        })
    }

    /// Check the request signature over the canonical authentication digest
    #[cfg_attr(feature = "noinline", inline(never))]
    fn authenticate(
        ack: &PaymentRequestAck<'_>,
        coin: &CoinInfo,
        nonces: &mut NonceStore,
        trusted_key: &TrustedKey,
    ) -> Result<(), Error> {
        let mut h = HashWriter::new();

        h.write(PAYMENT_REQUEST_TAG);
        h.write_var_bytes(ack.recipient_name.as_bytes());
        h.write_u32(coin.slip44);
        h.write(&ack.hash_outputs);

        h.write_compact_size(ack.memos.len() as u64);
        for memo in ack.memos {
            if memo.data.len() > MEMO_DATA_MAX_LEN {
                return Err(Error::InvalidLength);
            }

            h.write_u32(memo.kind);
            h.write_var_bytes(memo.data);
        }

        match ack.nonce {
            Some(nonce) if !nonce.is_empty() => {
                if !nonces.consume(nonce) {
                    #[cfg(feature = "log")]
                    log::warn!("unknown nonce in payment request");

                    return Err(Error::InvalidNonce);
                }

                h.write_var_bytes(nonce);
            }
            _ => h.write_var_bytes(&[]),
        }

        trusted_key.verify(&h.finalize(), ack.signature)
    }

    /// Feed the next streamed output and its resolved locking script.
    ///
    /// Returns `false` while more outputs are expected, and `true` exactly
    /// once, when the stream sums to the authorized amount and hashes to
    /// the signed commitment. Calling again after completion or failure is
    /// an invariant violation and returns [`Error::InvalidState`].
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn add_output(
        &mut self,
        output: &TxOutput,
        script_pubkey: &[u8],
    ) -> Result<bool, Error> {
        if self.state != State::Accumulating {
            return Err(Error::InvalidState);
        }

        self.h_outputs.write_output(output.amount, script_pubkey);

        self.amount = match self.amount.checked_add(output.amount) {
            Some(v) => v,
            None => {
                self.state = State::Error;
                return Err(Error::InvalidAmount);
            }
        };

        if self.amount < self.expected_amount {
            return Ok(false);
        }

        if self.amount != self.expected_amount {
            #[cfg(feature = "log")]
            log::warn!(
                "output stream exceeds authorized amount: {} > {}",
                self.amount,
                self.expected_amount
            );

            self.state = State::Error;
            return Err(Error::InvalidAmount);
        }

        if self.h_outputs.finalize_double() != self.expected_hash_outputs {
            #[cfg(feature = "log")]
            log::warn!("output stream does not match signed commitment");

            self.state = State::Error;
            return Err(Error::InvalidCommitment);
        }

        self.state = State::Complete;

        Ok(true)
    }

    /// Fetch current verifier state
    pub fn state(&self) -> State {
        self.state
    }

    /// Running total of streamed output amounts
    pub fn amount(&self) -> u64 {
        self.amount
    }
}
