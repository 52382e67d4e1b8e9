// Copyright (c) 2022-2023 The MobileCoin Foundation

use super::memo::Memo;

/// Payment request acknowledgment, as received from the host.
///
/// Memo order is significant: it is part of the signed digest.
#[derive(Clone, Debug)]
pub struct PaymentRequestAck<'a> {
    /// Recipient the request was issued for
    pub recipient_name: &'a str,

    /// Double-SHA-256 commitment over the canonical output stream
    pub hash_outputs: [u8; 32],

    /// Authorized total value of all outputs
    pub amount: u64,

    /// One-time session nonce; absent or empty means no replay protection
    pub nonce: Option<&'a [u8]>,

    /// Compact ECDSA signature by the payment-request authority
    pub signature: &'a [u8],

    /// Auxiliary memos, in signed order
    pub memos: &'a [Memo<'a>],
}

/// Transaction output as streamed during signing
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TxOutput {
    /// Output value
    pub amount: u64,
}
