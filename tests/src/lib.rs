// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Fixtures and shared tests for payment request verification.
//!
//! Provides a deterministic signing authority, a fixture coin registry and
//! a BIP32 fixture keychain implementing the core capability traits, for
//! reuse by hardware-wallet integrations.

pub mod coins;
