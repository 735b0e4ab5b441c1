//! Hill cipher over 2-symbol blocks in Z/26.
//!
//! Each pair of alphabet symbols is treated as a column vector and
//! multiplied by a 2×2 key matrix modulo 26. Decryption multiplies by the
//! modular inverse of the key, which exists exactly when the determinant is
//! coprime with 26 — that invariant is enforced at key construction.

use rand::Rng;

use crate::error::StegocryptError;
use crate::result::Result;

/// Size of the cipher alphabet (A..=Z).
pub const ALPHABET_LEN: u8 = 26;

/// Symbol appended when the plaintext has an odd number of symbols.
pub const FILLER: char = 'X';

const MAX_GENERATE_ATTEMPTS: usize = 1_000;

/// A validated 2×2 key matrix over Z/26.
///
/// Construction fails unless every entry is in `[0,25]` and the determinant
/// is invertible modulo 26, so any `MatrixKey` value is usable for both
/// encryption and decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixKey([[u8; 2]; 2]);

impl MatrixKey {
    pub fn new(entries: [[u8; 2]; 2]) -> Result<Self> {
        for row in &entries {
            for &entry in row {
                if entry >= ALPHABET_LEN {
                    return Err(StegocryptError::MatrixEntryOutOfRange(entry));
                }
            }
        }

        let key = Self(entries);
        let det = key.determinant();
        if gcd(det, ALPHABET_LEN) != 1 {
            return Err(StegocryptError::MatrixKeyNotInvertible(det));
        }

        Ok(key)
    }

    /// Samples random matrices from the given source until one is
    /// invertible. Most residues qualify, so this terminates quickly; a
    /// retry cap guards against pathological random sources.
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self> {
        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let entries = [
                [rng.gen_range(0..ALPHABET_LEN), rng.gen_range(0..ALPHABET_LEN)],
                [rng.gen_range(0..ALPHABET_LEN), rng.gen_range(0..ALPHABET_LEN)],
            ];
            if let Ok(key) = Self::new(entries) {
                return Ok(key);
            }
        }

        Err(StegocryptError::KeyGenerationExhausted(MAX_GENERATE_ATTEMPTS))
    }

    pub fn entries(&self) -> [[u8; 2]; 2] {
        self.0
    }

    /// Determinant reduced into `[0,25]`.
    pub fn determinant(&self) -> u8 {
        let [[a, b], [c, d]] = self.0;
        let det = i32::from(a) * i32::from(d) - i32::from(b) * i32::from(c);
        det.rem_euclid(i32::from(ALPHABET_LEN)) as u8
    }

    /// The inverse key: adjugate times the modular inverse of the
    /// determinant, entry-wise modulo 26.
    pub fn inverse(&self) -> Result<Self> {
        let det_inv = i32::from(mod_inverse(self.determinant())?);
        let [[a, b], [c, d]] = self.0;
        let adjugate = [
            [i32::from(d), -i32::from(b)],
            [-i32::from(c), i32::from(a)],
        ];

        let mut entries = [[0u8; 2]; 2];
        for (row, adj_row) in entries.iter_mut().zip(adjugate.iter()) {
            for (entry, &adj) in row.iter_mut().zip(adj_row.iter()) {
                *entry = (det_inv * adj).rem_euclid(i32::from(ALPHABET_LEN)) as u8;
            }
        }

        Ok(Self(entries))
    }

    fn apply(&self, v0: u8, v1: u8) -> (u8, u8) {
        let [[a, b], [c, d]] = self.0;
        let x = (u16::from(a) * u16::from(v0) + u16::from(b) * u16::from(v1)) % u16::from(ALPHABET_LEN);
        let y = (u16::from(c) * u16::from(v0) + u16::from(d) * u16::from(v1)) % u16::from(ALPHABET_LEN);
        (x as u8, y as u8)
    }
}

/// Ciphertext plus the record of whether a filler pad was appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub text: String,
    pub padded: bool,
}

/// Encrypts an alphabetic string.
///
/// Case is normalized to uppercase; any character outside the alphabet is
/// rejected rather than stripped, so the symbol count stays accountable.
/// Odd-length input gets one [`FILLER`] appended and the fact is recorded
/// in the result.
pub fn encode(text: &str, key: &MatrixKey) -> Result<Encoded> {
    let mut symbols = text_to_symbols(text)?;
    let padded = symbols.len() % 2 == 1;
    if padded {
        symbols.push(FILLER as u8 - b'A');
    }

    let mut out = String::with_capacity(symbols.len());
    for pair in symbols.chunks_exact(2) {
        let (x, y) = key.apply(pair[0], pair[1]);
        out.push(num_to_symbol(x));
        out.push(num_to_symbol(y));
    }

    Ok(Encoded { text: out, padded })
}

/// Decrypts a ciphertext produced by [`encode`].
///
/// A trailing [`FILLER`] is stripped only when `strip_filler` is set: the
/// caller knows from the matching encode whether a pad was added, and
/// removing an arbitrary trailing symbol would corrupt genuine plaintext.
pub fn decode(ciphertext: &str, key: &MatrixKey, strip_filler: bool) -> Result<String> {
    let symbols = text_to_symbols(ciphertext)?;
    if symbols.len() % 2 != 0 {
        return Err(StegocryptError::UnalignedCiphertext(symbols.len()));
    }

    let inverse = key.inverse()?;
    let mut out = String::with_capacity(symbols.len());
    for pair in symbols.chunks_exact(2) {
        let (x, y) = inverse.apply(pair[0], pair[1]);
        out.push(num_to_symbol(x));
        out.push(num_to_symbol(y));
    }

    if strip_filler && out.ends_with(FILLER) {
        out.pop();
    }

    Ok(out)
}

fn text_to_symbols(text: &str) -> Result<Vec<u8>> {
    let mut symbols = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(StegocryptError::UnsupportedCharacter(ch));
        }
        symbols.push(ch.to_ascii_uppercase() as u8 - b'A');
    }
    Ok(symbols)
}

fn num_to_symbol(num: u8) -> char {
    char::from(b'A' + num % ALPHABET_LEN)
}

fn gcd(mut a: u8, mut b: u8) -> u8 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Modular inverse in Z/26 via the extended Euclidean algorithm.
fn mod_inverse(a: u8) -> Result<u8> {
    let modulus = i32::from(ALPHABET_LEN);
    let (mut old_r, mut r) = (i32::from(a), modulus);
    let (mut old_s, mut s) = (1i32, 0i32);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    if old_r != 1 {
        return Err(StegocryptError::MatrixKeyNotInvertible(a));
    }

    Ok(old_s.rem_euclid(modulus) as u8)
}
