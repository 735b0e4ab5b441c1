//! Simplified DES: a 10-bit key, 8-bit block, two-round Feistel cipher.
//!
//! All permutation and substitution tables are fixed constants of the
//! reference algorithm. Decryption is the encryption transform with the
//! round subkeys applied in reverse order.

use std::str::FromStr;

use rand::Rng;

use crate::error::StegocryptError;
use crate::result::Result;

/// Width of the master key in bits.
pub const KEY_BITS: usize = 10;

// Key schedule and round tables, positions 1-indexed from the MSB.
const P10: [u32; 10] = [3, 5, 2, 7, 4, 10, 1, 9, 8, 6];
const P8: [u32; 8] = [6, 3, 7, 4, 8, 5, 10, 9];
const IP: [u32; 8] = [2, 6, 3, 1, 4, 8, 5, 7];
const IP_INV: [u32; 8] = [4, 1, 3, 5, 7, 2, 8, 6];
const EP: [u32; 8] = [4, 1, 2, 3, 2, 3, 4, 1];
const P4: [u32; 4] = [2, 4, 3, 1];

const S0: [[u8; 4]; 4] = [
    [1, 0, 3, 2],
    [3, 2, 1, 0],
    [0, 2, 1, 3],
    [3, 1, 3, 2],
];

const S1: [[u8; 4]; 4] = [
    [0, 1, 2, 3],
    [2, 0, 1, 3],
    [3, 0, 1, 0],
    [2, 1, 0, 3],
];

/// A 10-bit block cipher master key.
///
/// Only exactly 10 bits are accepted; shorter or longer inputs fail with a
/// key error instead of being zero-extended or truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockKey(u16);

impl BlockKey {
    /// Builds a key from individual bits, most significant first.
    pub fn from_bits(bits: &[bool]) -> Result<Self> {
        if bits.len() != KEY_BITS {
            return Err(StegocryptError::BlockKeyLength(bits.len()));
        }

        let value = bits
            .iter()
            .fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit));
        Ok(Self(value))
    }

    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..1 << KEY_BITS))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Derives the two round subkeys: P10, split into 5-bit halves, rotate
    /// each half left by one and compress through P8 for K1, rotate by two
    /// more and compress again for K2.
    pub fn subkeys(&self) -> Subkeys {
        let permuted = permute(self.0, 10, &P10);
        let mut left = (permuted >> 5) & 0x1F;
        let mut right = permuted & 0x1F;

        left = rotl5(left, 1);
        right = rotl5(right, 1);
        let k1 = permute((left << 5) | right, 10, &P8) as u8;

        left = rotl5(left, 2);
        right = rotl5(right, 2);
        let k2 = permute((left << 5) | right, 10, &P8) as u8;

        Subkeys { k1, k2 }
    }
}

impl FromStr for BlockKey {
    type Err = StegocryptError;

    /// Parses a binary string such as `"1010000010"`.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != KEY_BITS {
            return Err(StegocryptError::BlockKeyLength(s.len()));
        }

        let mut value = 0u16;
        for ch in s.chars() {
            value = match ch {
                '0' => value << 1,
                '1' => (value << 1) | 1,
                other => return Err(StegocryptError::UnsupportedCharacter(other)),
            };
        }

        Ok(Self(value))
    }
}

/// The two 8-bit round subkeys, derived once per key and reused for every
/// block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subkeys {
    pub k1: u8,
    pub k2: u8,
}

/// Encrypts one 8-bit block.
pub fn encrypt_block(block: u8, keys: &Subkeys) -> u8 {
    transform(block, keys.k1, keys.k2)
}

/// Decrypts one 8-bit block; same network, subkeys reversed.
pub fn decrypt_block(block: u8, keys: &Subkeys) -> u8 {
    transform(block, keys.k2, keys.k1)
}

fn transform(block: u8, first: u8, second: u8) -> u8 {
    let permuted = permute(u16::from(block), 8, &IP) as u8;
    let mut left = permuted >> 4;
    let mut right = permuted & 0x0F;

    let mixed = left ^ round_function(right, first);
    // swap between the rounds, not after the last one
    left = right;
    right = mixed;

    left ^= round_function(right, second);

    permute(u16::from((left << 4) | right), 8, &IP_INV) as u8
}

/// The Feistel round function: expand to 8 bits, XOR the subkey, substitute
/// each half through its S-box, permute the 4-bit result.
fn round_function(right: u8, subkey: u8) -> u8 {
    let expanded = permute(u16::from(right), 4, &EP) as u8;
    let mixed = expanded ^ subkey;
    let substituted = (sbox(mixed >> 4, &S0) << 2) | sbox(mixed & 0x0F, &S1);
    permute(u16::from(substituted), 4, &P4) as u8
}

/// S-box lookup: bits 1 and 4 of the nibble select the row, bits 2 and 3
/// the column.
fn sbox(nibble: u8, table: &[[u8; 4]; 4]) -> u8 {
    let row = ((nibble >> 2) & 0b10) | (nibble & 1);
    let col = (nibble >> 1) & 0b11;
    table[usize::from(row)][usize::from(col)]
}

fn permute(value: u16, width: u32, table: &[u32]) -> u16 {
    table
        .iter()
        .fold(0, |acc, &pos| (acc << 1) | ((value >> (width - pos)) & 1))
}

fn rotl5(half: u16, by: u32) -> u16 {
    ((half << by) | (half >> (5 - by))) & 0x1F
}
