// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Payment request verification core
//!
//! This provides the [engine] used by hardware wallets to honor signed
//! payment requests during transaction signing: the request is
//! authenticated up front, then the transaction outputs are checked one at
//! a time as the signing flow serializes them, without ever buffering the
//! full transaction in memory.
//!
//! ## Operations
//!
//! 1. Authenticate the received acknowledgment and construct a
//!    [`PaymentRequestVerifier`][engine::PaymentRequestVerifier]. This
//!    consumes the request nonce (if any) from the session
//!    [`NonceStore`][engine::NonceStore] and checks the request signature
//!    against the configured [`TrustedKey`][engine::TrustedKey].
//! 2. Feed each transaction output to
//!    [`add_output`][engine::PaymentRequestVerifier::add_output] in the
//!    exact order it is serialized into the transaction. The call returns
//!    `true` exactly once, when the streamed outputs sum to the authorized
//!    amount and hash to the signed output commitment.
//! 3. Independently, pass the acknowledgment's memo list to
//!    [`verify_memos`][engine::verify_memos] together with the platform
//!    [`KeychainProvider`][keychain::KeychainProvider]. Coin-scoped memos
//!    are validated by re-deriving the asserted destination script.
//!
//! Every failure is fatal to the enclosing signing operation: the verifier
//! and its state are discarded with the session, and a consumed nonce is
//! not restored.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;

pub mod hashing;

pub mod keychain;
