// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Canonical transaction-stream encoding and hashing.
//!
//! Payment requests commit to a transaction's outputs via a double-SHA-256
//! over their canonical byte encoding, and the request itself is
//! authenticated over a single-SHA-256 digest built from the same
//! primitives. [`HashWriter`] accumulates these encodings incrementally so
//! callers never hold the full stream in memory.
//!
//! Encoding rules: fixed-width integers are little-endian, variable-length
//! integers use the Bitcoin CompactSize format, length-prefixed byte
//! strings are a CompactSize length followed by the raw bytes, and an
//! output record is the output amount followed by its length-prefixed
//! locking script.

use byteorder::{ByteOrder, LittleEndian};
use sha2::{Digest, Sha256};

/// Incremental SHA-256 writer over the canonical byte encoding
#[derive(Clone)]
pub struct HashWriter {
    hasher: Sha256,
}

impl HashWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self { hasher: Sha256::new() }
    }

    /// Append raw bytes
    pub fn write(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Append a little-endian `u32`
    pub fn write_u32(&mut self, v: u32) {
        let mut b = [0u8; 4];
        LittleEndian::write_u32(&mut b, v);
        self.hasher.update(b);
    }

    /// Append a little-endian `u64`
    pub fn write_u64(&mut self, v: u64) {
        let mut b = [0u8; 8];
        LittleEndian::write_u64(&mut b, v);
        self.hasher.update(b);
    }

    /// Append a CompactSize variable-length integer
    pub fn write_compact_size(&mut self, n: u64) {
        match n {
            0..=0xfc => self.hasher.update([n as u8]),
            0xfd..=0xffff => {
                let mut b = [0u8; 3];
                b[0] = 0xfd;
                LittleEndian::write_u16(&mut b[1..], n as u16);
                self.hasher.update(b);
            }
            0x1_0000..=0xffff_ffff => {
                let mut b = [0u8; 5];
                b[0] = 0xfe;
                LittleEndian::write_u32(&mut b[1..], n as u32);
                self.hasher.update(b);
            }
            _ => {
                let mut b = [0u8; 9];
                b[0] = 0xff;
                LittleEndian::write_u64(&mut b[1..], n);
                self.hasher.update(b);
            }
        }
    }

    /// Append length-prefixed bytes
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_compact_size(bytes.len() as u64);
        self.write(bytes);
    }

    /// Append a transaction output record
    pub fn write_output(&mut self, amount: u64, script_pubkey: &[u8]) {
        self.write_u64(amount);
        self.write_var_bytes(script_pubkey);
    }

    /// Single-SHA-256 digest of everything written, consuming the writer
    pub fn finalize(self) -> [u8; 32] {
        self.hasher.finalize().into()
    }

    /// Double-SHA-256 digest of everything written so far.
    ///
    /// The writer remains usable; the output commitment is checked against
    /// a stream that is still being accumulated.
    pub fn finalize_double(&self) -> [u8; 32] {
        let first = self.hasher.clone().finalize();
        Sha256::digest(first).into()
    }
}
