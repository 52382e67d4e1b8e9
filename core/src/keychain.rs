// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Coin metadata and the platform keychain capability boundary.
//!
//! The engine never derives key material itself: memo validation resolves
//! a per-coin [`Keychain`] through a platform [`KeychainProvider`] and asks
//! it for path validation, node derivation and address/script computation.
//! Resolution and path validation may require user confirmation;
//! implementations suspend the calling session inside these methods and
//! return once the interaction resolves. The engine invokes them strictly
//! sequentially, one memo at a time.

use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, EnumString};

use crate::engine::Error;

/// Hardened derivation flag for path components
pub const HARDENED: u32 = 0x8000_0000;

/// Maximum locking-script length handled by the engine
pub const MAX_SCRIPT_LEN: usize = 83;

/// Maximum encoded address length handled by the engine
pub const MAX_ADDRESS_LEN: usize = 90;

/// Locking script bytes
pub type Script = heapless::Vec<u8, MAX_SCRIPT_LEN>;

/// Encoded address string
pub type Address = heapless::String<MAX_ADDRESS_LEN>;

/// Coin registry entry.
///
/// `slip44` is the SLIP-0044 registry index that payment-request memos and
/// derivation paths refer to; the version bytes parameterize base58check
/// address encoding for the coin.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CoinInfo {
    pub coin_name: &'static str,
    pub slip44: u32,
    /// Base58check version for pay-to-pubkey-hash addresses
    pub address_type: u8,
    /// Base58check version for pay-to-script-hash addresses
    pub address_type_p2sh: u8,
}

/// Script usage asserted for a derivation path, as carried on the wire
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, TryFromPrimitive, EnumString, Display, EnumIter,
)]
#[repr(u32)]
pub enum ScriptType {
    SpendAddress = 0,
    SpendMultisig = 1,
    SpendWitness = 3,
    SpendP2shWitness = 4,
    SpendTaproot = 5,
}

/// Keychain scoped to a single coin and its approved derivation paths
pub trait Keychain {
    /// Key node derived at a path
    type Node;

    /// Coin this keychain is scoped to
    fn coin(&self) -> &CoinInfo;

    /// Validate a derivation path against the script usage it claims.
    ///
    /// May suspend for user confirmation of unusual paths.
    fn validate_path(&mut self, path: &[u32], script_type: ScriptType) -> Result<(), Error>;

    /// Derive the key node at `path`
    fn derive(&mut self, path: &[u32]) -> Result<Self::Node, Error>;

    /// Compute the address for `node` under `script_type`
    fn address(&mut self, script_type: ScriptType, node: &Self::Node) -> Result<Address, Error>;

    /// Derive the locking script paying to `address`
    fn output_script(&mut self, address: &Address) -> Result<Script, Error>;
}

/// Resolves per-coin keychains by SLIP-0044 registry index
pub trait KeychainProvider {
    type Keychain: Keychain;

    /// Resolve a keychain for `slip44`.
    ///
    /// May suspend for user confirmation; fails with
    /// [`Error::UnknownCoin`] when no such coin is registered.
    fn keychain_for_coin(&mut self, slip44: u32) -> Result<Self::Keychain, Error>;
}

impl<T: KeychainProvider> KeychainProvider for &mut T {
    type Keychain = T::Keychain;

    fn keychain_for_coin(&mut self, slip44: u32) -> Result<Self::Keychain, Error> {
        T::keychain_for_coin(self, slip44)
    }
}
