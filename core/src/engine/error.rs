// Copyright (c) 2022-2023 The MobileCoin Foundation

/// Payment request verification errors.
///
/// Every variant is fatal to the enclosing signing operation; there is no
/// local recovery or retry.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[repr(u8)]
pub enum Error {
    /// Invalid argument length
    #[cfg_attr(feature = "thiserror", error("Invalid argument length"))]
    InvalidLength = 0x00,

    /// Nonce missing from the session store
    #[cfg_attr(feature = "thiserror", error("Invalid nonce in payment request"))]
    InvalidNonce = 0x01,

    /// Signature does not verify under the trusted key
    #[cfg_attr(feature = "thiserror", error("Invalid signature in payment request"))]
    InvalidSignature = 0x02,

    /// Streamed outputs exceed the authorized amount
    #[cfg_attr(feature = "thiserror", error("Invalid amount in payment request"))]
    InvalidAmount = 0x03,

    /// Streamed outputs do not hash to the signed commitment
    #[cfg_attr(
        feature = "thiserror",
        error("Invalid output commitment in payment request")
    )]
    InvalidCommitment = 0x04,

    /// Resolved coin does not match the memo's registry index
    #[cfg_attr(feature = "thiserror", error("Coin type mismatch in payment request"))]
    CoinMismatch = 0x05,

    /// Derivation path fails the script-type policy
    #[cfg_attr(
        feature = "thiserror",
        error("Invalid derivation path in payment request")
    )]
    InvalidPath = 0x06,

    /// Memo script differs from the derived destination script
    #[cfg_attr(feature = "thiserror", error("Invalid scriptPubKey in payment request"))]
    ScriptMismatch = 0x07,

    /// No keychain available for the requested coin
    #[cfg_attr(feature = "thiserror", error("Unknown coin in payment request"))]
    UnknownCoin = 0x08,

    /// Trusted verification key missing or malformed
    #[cfg_attr(feature = "thiserror", error("Invalid trusted key configuration"))]
    InvalidKey = 0x09,

    /// Operation not valid in the current verifier state
    #[cfg_attr(feature = "thiserror", error("Invalid verifier state"))]
    InvalidState = 0x0a,

    /// User rejected a confirmation request
    #[cfg_attr(feature = "thiserror", error("Request cancelled"))]
    Cancelled = 0x0b,
}
