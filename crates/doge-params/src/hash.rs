//! 256-bit hashes and targets

use crate::{Error, Result};
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Unsigned 256-bit value
///
/// Bytes are stored little-endian, the order in which hashes appear on the
/// wire. Display and parsing use the conventional reversed (big-endian) hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uint256([u8; 32]);

/// Hash of a block header
pub type BlockHash = Uint256;

impl Uint256 {
    /// Zero
    pub const ZERO: Uint256 = Uint256([0u8; 32]);

    /// Wrap little-endian bytes
    pub const fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Little-endian bytes
    pub const fn to_le_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Big-endian bytes
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut be = self.0;
        be.reverse();
        be
    }

    /// `~0 >> shift`, the usual way of writing a proof-of-work limit
    pub const fn max_shr(shift: u32) -> Self {
        let mut le = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            // i counts bytes from the most significant end
            let covered = 8 * i as u32;
            let byte = if shift >= covered + 8 {
                0
            } else if shift <= covered {
                0xff
            } else {
                0xffu8 >> (shift - covered)
            };
            le[31 - i] = byte;
            i += 1;
        }
        Self(le)
    }

    /// Parse big-endian hex, as printed by block explorers
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut be = [0u8; 32];
        hex::decode_to_slice(s, &mut be).map_err(|e| Error::InvalidHex(format!("{s}: {e}")))?;
        be.reverse();
        Ok(Self(be))
    }

    /// Number of leading zero bits in the big-endian representation
    pub fn leading_zero_bits(&self) -> u32 {
        let mut zeros = 0;
        for byte in self.0.iter().rev() {
            if *byte == 0 {
                zeros += 8;
            } else {
                zeros += byte.leading_zeros();
                break;
            }
        }
        zeros
    }

    /// True if every byte is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl Ord for Uint256 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for Uint256 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_be_bytes()))
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({})", self)
    }
}

impl FromStr for Uint256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Uint256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Double SHA-256
pub fn sha256d(data: &[u8]) -> Uint256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    Uint256(out)
}
