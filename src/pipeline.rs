//! Orchestration of the three engines.
//!
//! Encrypt: matrix cipher → block cipher → LSB embedding; decrypt walks the
//! mirror path. Each call is a pure function of its arguments — keys are
//! passed in explicitly, no state survives between calls, and the caller's
//! carrier image is never written to.

use std::fmt;

use log::debug;

use crate::bits::Bits;
use crate::cipher::hill::{self, MatrixKey};
use crate::cipher::sdes::{self, BlockKey};
use crate::error::StegocryptError;
use crate::media::image::{LsbCodec, Raster};
use crate::payload::{self, LENGTH_HEADER_BITS};
use crate::result::Result;

/// The pipeline stage a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    MatrixCipher,
    BlockCipher,
    Embedding,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::MatrixCipher => "matrix cipher",
            Stage::BlockCipher => "block cipher",
            Stage::Embedding => "embedding",
        })
    }
}

/// Outcome of a successful encryption.
#[derive(Debug, Clone)]
pub struct Encryption<R> {
    /// Copy of the carrier with the payload embedded in its channel LSBs.
    pub stego: R,
    /// Whether the matrix stage appended the filler symbol. Pass this as
    /// `strip_filler` to [`decrypt`] to recover the exact input.
    pub padded: bool,
    /// Embedded message length in bits, excluding the length header.
    pub message_bits: usize,
}

/// Runs the full forward pipeline.
///
/// The plaintext is matrix-encrypted into alphabet symbols, each symbol is
/// carried as its 8-bit ASCII code through the block cipher, and the result
/// is framed with a 32-bit length header and embedded into a copy of
/// `carrier`. A capacity failure is surfaced as-is; any other engine
/// failure is annotated with the stage it happened in.
pub fn encrypt<R>(
    plaintext: &str,
    matrix_key: &MatrixKey,
    block_key: &BlockKey,
    carrier: &R,
) -> Result<Encryption<R>>
where
    R: Raster + Clone,
{
    let encoded = at_stage(hill::encode(plaintext, matrix_key), Stage::MatrixCipher)?;
    debug!(
        "matrix stage: {} symbols, padded: {}",
        encoded.text.len(),
        encoded.padded
    );

    let subkeys = block_key.subkeys();
    let mut message = Bits::with_capacity(encoded.text.len() * 8);
    for symbol in encoded.text.bytes() {
        message.push_byte(sdes::encrypt_block(symbol, &subkeys));
    }
    debug!("block stage: {} message bits", message.len());

    let framed = payload::frame(&message)?;
    let stego = at_stage(LsbCodec::embed(carrier, &framed), Stage::Embedding)?;
    debug!("embedding stage: {} payload bits embedded", framed.len());

    Ok(Encryption {
        stego,
        padded: encoded.padded,
        message_bits: message.len(),
    })
}

/// Runs the full reverse pipeline.
///
/// The length header is extracted and validated first, then exactly the
/// declared number of message bits is read back, block-decrypted with the
/// subkeys in reverse order and matrix-decrypted. `strip_filler` removes a
/// trailing filler symbol and must only be set when the matching
/// encryption reported one (see [`Encryption::padded`]).
pub fn decrypt<R: Raster>(
    stego: &R,
    matrix_key: &MatrixKey,
    block_key: &BlockKey,
    strip_filler: bool,
) -> Result<String> {
    let header = at_stage(
        LsbCodec::extract(stego, LENGTH_HEADER_BITS),
        Stage::Embedding,
    )?;
    let declared = payload::read_length(&header)?;
    debug!("embedding stage: header declares {declared} message bits");

    let capacity = LsbCodec::capacity(stego);
    if LENGTH_HEADER_BITS + declared > capacity {
        return Err(StegocryptError::MalformedHeader {
            declared,
            available: capacity - LENGTH_HEADER_BITS,
        });
    }
    if declared % 8 != 0 {
        return Err(StegocryptError::UnalignedMessageLength(declared));
    }

    let full = at_stage(
        LsbCodec::extract(stego, LENGTH_HEADER_BITS + declared),
        Stage::Embedding,
    )?;
    let message_bytes = &full.as_bytes()[LENGTH_HEADER_BITS / 8..];

    let subkeys = block_key.subkeys();
    let mut symbols = Vec::with_capacity(message_bytes.len());
    for &block in message_bytes {
        symbols.push(sdes::decrypt_block(block, &subkeys));
    }
    let ciphertext = at_stage(
        String::from_utf8(symbols).map_err(StegocryptError::from),
        Stage::BlockCipher,
    )?;
    debug!("block stage: {} symbols recovered", ciphertext.len());

    at_stage(
        hill::decode(&ciphertext, matrix_key, strip_filler),
        Stage::MatrixCipher,
    )
}

/// Annotates a component failure with its stage. Capacity errors pass
/// through untouched so callers can match on them directly.
fn at_stage<T>(result: Result<T>, stage: Stage) -> Result<T> {
    result.map_err(|e| match e {
        e @ StegocryptError::CapacityExceeded { .. } => e,
        other => StegocryptError::StageFailed {
            stage,
            source: Box::new(other),
        },
    })
}

#[cfg(test)]
mod tests {
    use image::RgbImage;

    use super::*;
    use crate::media::sample;

    fn keys() -> (MatrixKey, BlockKey) {
        (
            MatrixKey::new([[3, 3], [2, 5]]).unwrap(),
            "1010000010".parse().unwrap(),
        )
    }

    #[test]
    fn encrypt_decrypt_round_trips() {
        let (matrix_key, block_key) = keys();
        let carrier = sample::gradient(32, 32);

        let sealed = encrypt("ATTACKATDAWN", &matrix_key, &block_key, &carrier).unwrap();
        assert!(!sealed.padded);
        assert_eq!(sealed.message_bits, 12 * 8);

        let recovered = decrypt(&sealed.stego, &matrix_key, &block_key, sealed.padded).unwrap();
        assert_eq!(recovered, "ATTACKATDAWN");
    }

    #[test]
    fn odd_length_plaintext_round_trips_via_the_pad_flag() {
        let (matrix_key, block_key) = keys();
        let carrier = sample::gradient(32, 32);

        let sealed = encrypt("HIDDEN", &matrix_key, &block_key, &carrier).unwrap();
        assert!(!sealed.padded);

        let sealed = encrypt("SECRETS", &matrix_key, &block_key, &carrier).unwrap();
        assert!(sealed.padded);
        assert_eq!(
            decrypt(&sealed.stego, &matrix_key, &block_key, true).unwrap(),
            "SECRETS"
        );
        assert_eq!(
            decrypt(&sealed.stego, &matrix_key, &block_key, false).unwrap(),
            "SECRETSX"
        );
    }

    #[test]
    fn empty_plaintext_round_trips() {
        let (matrix_key, block_key) = keys();
        let carrier = sample::gradient(4, 4);

        let sealed = encrypt("", &matrix_key, &block_key, &carrier).unwrap();
        assert_eq!(sealed.message_bits, 0);
        assert_eq!(
            decrypt(&sealed.stego, &matrix_key, &block_key, false).unwrap(),
            ""
        );
    }

    #[test]
    fn the_caller_carrier_is_never_mutated() {
        let (matrix_key, block_key) = keys();
        let carrier = sample::gradient(32, 32);
        let pristine = carrier.clone();

        let sealed = encrypt("UNTOUCHED", &matrix_key, &block_key, &carrier).unwrap();

        assert_eq!(carrier, pristine);
        assert_ne!(sealed.stego, carrier);
    }

    #[test]
    fn oversized_payload_surfaces_capacity_error_unwrapped() {
        let (matrix_key, block_key) = keys();
        // 2x2 RGB carrier: 12 bits, not even room for the header
        let carrier = sample::gradient(2, 2);

        match encrypt("TOOBIG", &matrix_key, &block_key, &carrier) {
            Err(StegocryptError::CapacityExceeded { available: 12, .. }) => (),
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[test]
    fn input_errors_are_attributed_to_the_matrix_stage() {
        let (matrix_key, block_key) = keys();
        let carrier = sample::gradient(16, 16);

        match encrypt("nope!", &matrix_key, &block_key, &carrier) {
            Err(StegocryptError::StageFailed { stage, source }) => {
                assert_eq!(stage, Stage::MatrixCipher);
                assert!(matches!(
                    *source,
                    StegocryptError::UnsupportedCharacter('!')
                ));
            }
            other => panic!("expected StageFailed, got {other:?}"),
        }
    }

    #[test]
    fn a_lying_length_header_is_rejected() {
        let (matrix_key, block_key) = keys();
        // craft a carrier whose header claims more bits than it holds
        let mut header = Bits::new();
        for _ in 0..3 {
            header.push_byte(0xFF);
        }
        header.push_byte(0xF8);
        let carrier: RgbImage = sample::gradient(8, 8);
        let stego = LsbCodec::embed(&carrier, &header).unwrap();

        match decrypt(&stego, &matrix_key, &block_key, false) {
            Err(StegocryptError::MalformedHeader { .. }) => (),
            other => panic!("expected MalformedHeader, got {other:?}"),
        }
    }

    #[test]
    fn an_unaligned_length_header_is_rejected() {
        let (matrix_key, block_key) = keys();
        // header declaring 5 bits: 0x00000005
        let mut header = Bits::new();
        header.push_byte(0);
        header.push_byte(0);
        header.push_byte(0);
        header.push_byte(5);
        let carrier = sample::gradient(8, 8);
        let stego = LsbCodec::embed(&carrier, &header).unwrap();

        match decrypt(&stego, &matrix_key, &block_key, false) {
            Err(StegocryptError::UnalignedMessageLength(5)) => (),
            other => panic!("expected UnalignedMessageLength, got {other:?}"),
        }
    }

    #[test]
    fn intermediate_bitstream_differs_from_plain_ascii() {
        let (matrix_key, block_key) = keys();
        let carrier = sample::gradient(32, 32);

        let sealed = encrypt("HELP", &matrix_key, &block_key, &carrier).unwrap();
        let full = LsbCodec::extract(&sealed.stego, 32 + sealed.message_bits).unwrap();
        let embedded = &full.as_bytes()[4..];

        // the embedded bytes are SDES("HIAT"), not the matrix output itself
        assert_ne!(embedded, b"HIAT");
        assert_ne!(embedded, b"HELP");

        let subkeys = block_key.subkeys();
        let decrypted: Vec<u8> = embedded
            .iter()
            .map(|&b| crate::cipher::sdes::decrypt_block(b, &subkeys))
            .collect();
        assert_eq!(decrypted, b"HIAT");
    }
}
