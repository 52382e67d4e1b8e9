// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Fixture coin registry

use ledger_payreq_core::keychain::CoinInfo;

/// Bitcoin mainnet
pub const BITCOIN: CoinInfo = CoinInfo {
    coin_name: "Bitcoin",
    slip44: 0,
    address_type: 0x00,
    address_type_p2sh: 0x05,
};

/// Bitcoin testnet
pub const TESTNET: CoinInfo = CoinInfo {
    coin_name: "Testnet",
    slip44: 1,
    address_type: 0x6f,
    address_type_p2sh: 0xc4,
};

/// Registry rows available to the fixture provider
pub const COINS: &[CoinInfo] = &[BITCOIN, TESTNET];

/// Look up a fixture coin by SLIP-0044 registry index
pub fn by_slip44(slip44: u32) -> Option<&'static CoinInfo> {
    COINS.iter().find(|c| c.slip44 == slip44)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registry_lookup() {
        assert_eq!(by_slip44(0), Some(&BITCOIN));
        assert_eq!(by_slip44(1), Some(&TESTNET));
        assert_eq!(by_slip44(42), None);
    }
}
