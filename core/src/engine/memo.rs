// Copyright (c) 2022-2023 The MobileCoin Foundation

use static_assertions::const_assert;

use crate::keychain::{Keychain, KeychainProvider, ScriptType, MAX_SCRIPT_LEN};

use super::Error;

/// Plain UTF-8 text memo
pub const MEMO_TYPE_UTF8: u32 = 1;

/// Top bit marks a memo scoped to a specific coin
pub const MEMO_TYPE_COIN_FLAG: u32 = 0x8000_0000;

/// Remaining bits carry the coin's SLIP-0044 registry index
pub const MEMO_TYPE_COIN_MASK: u32 = 0x7FFF_FFFF;

/// Maximum memo payload accepted on the wire
pub const MEMO_DATA_MAX_LEN: usize = 128;

// A coin-scoped memo payload is a locking script and must fit the bound
const_assert!(MEMO_DATA_MAX_LEN >= MAX_SCRIPT_LEN);

/// Auxiliary signed data attached to a payment request.
///
/// `kind` and `data` are covered by the request signature; `address_path`
/// and `script_type` travel alongside the wire record and are only used to
/// validate coin-scoped memos.
#[derive(Copy, Clone, Debug)]
pub struct Memo<'a> {
    /// Memo type; coin-scoped when [`MEMO_TYPE_COIN_FLAG`] is set
    pub kind: u32,

    /// Opaque payload; the asserted locking script for coin-scoped memos
    pub data: &'a [u8],

    /// Claimed derivation path for the asserted destination
    pub address_path: &'a [u32],

    /// Claimed script usage for `address_path`, as a wire value
    pub script_type: u32,
}

impl<'a> Memo<'a> {
    /// Whether this memo asserts a destination on a specific coin
    pub fn is_coin_scoped(&self) -> bool {
        self.kind & MEMO_TYPE_COIN_FLAG != 0
    }

    /// SLIP-0044 registry index encoded in a coin-scoped memo type
    pub fn slip44(&self) -> u32 {
        self.kind & MEMO_TYPE_COIN_MASK
    }
}

/// Validate payment-request memos, in order.
///
/// Memos without the coin flag need no action here: their integrity is
/// already covered by the authenticated request digest. Coin-scoped memos
/// assert a destination on another coin, and the asserted locking script
/// must equal the script derived for the memo's path on the resolved
/// keychain. Memos are processed strictly sequentially and the first
/// failure aborts the whole verification.
#[cfg_attr(feature = "noinline", inline(never))]
pub fn verify_memos<P: KeychainProvider>(
    memos: &[Memo<'_>],
    provider: &mut P,
) -> Result<(), Error> {
    for memo in memos {
        if !memo.is_coin_scoped() {
            continue;
        }

        let slip44 = memo.slip44();
        let mut keychain = provider.keychain_for_coin(slip44)?;

        if keychain.coin().slip44 != slip44 {
            #[cfg(feature = "log")]
            log::warn!(
                "memo coin mismatch: resolved {}, expected {}",
                keychain.coin().slip44,
                slip44
            );

            return Err(Error::CoinMismatch);
        }

        let script_type =
            ScriptType::try_from(memo.script_type).map_err(|_| Error::InvalidPath)?;

        keychain.validate_path(memo.address_path, script_type)?;

        let node = keychain.derive(memo.address_path)?;
        let address = keychain.address(script_type, &node)?;
        let script = keychain.output_script(&address)?;

        if script.as_slice() != memo.data {
            #[cfg(feature = "log")]
            log::warn!("memo script mismatch for {}", address);

            return Err(Error::ScriptMismatch);
        }
    }

    Ok(())
}
