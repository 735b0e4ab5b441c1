use std::string::FromUtf8Error;
use thiserror::Error;

use crate::pipeline::Stage;

#[derive(Error, Debug)]
pub enum StegocryptError {
    /// Represents a matrix key whose determinant shares a factor with 26,
    /// so no modular inverse exists
    #[error("Matrix key is not invertible modulo 26 (determinant {0})")]
    MatrixKeyNotInvertible(u8),

    /// Represents a matrix key entry outside the alphabet residues [0,25]
    #[error("Matrix key entry {0} is outside the range 0..26")]
    MatrixEntryOutOfRange(u8),

    /// Represents a block cipher key of the wrong width
    #[error("Block key must be exactly 10 bits, got {0}")]
    BlockKeyLength(usize),

    /// Represents plaintext containing a character outside the cipher alphabet
    #[error("Character {0:?} is outside the supported alphabet")]
    UnsupportedCharacter(char),

    /// Represents a ciphertext whose length cannot be split into 2-symbol blocks
    #[error("Ciphertext length {0} is not a multiple of the cipher block size")]
    UnalignedCiphertext(usize),

    /// Represents a payload larger than the carrier image can hold
    #[error("Payload of {required} bits exceeds the carrier capacity of {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a length header inconsistent with the carrier capacity
    #[error("Length header declares {declared} bits but the carrier holds at most {available}")]
    MalformedHeader { declared: usize, available: usize },

    /// Represents a declared message length that is not block-aligned
    #[error("Declared message length of {0} bits is not a whole number of 8-bit blocks")]
    UnalignedMessageLength(usize),

    /// Represents a lossy carrier format; re-encoding would destroy LSB data
    #[error("Carrier format {0:?} is lossy and unsafe for embedding")]
    LossyCarrierFormat(String),

    /// Represents a carrier file that is neither a supported raster format nor lossy
    #[error("Carrier format is not supported")]
    UnsupportedCarrierFormat,

    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Carrier image is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding the stego image file
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents the error of invalid UTF-8 data after block decryption,
    /// usually the result of a wrong key
    #[error("Invalid text data recovered from the block cipher stage")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents automatic key generation running out of attempts
    #[error("Key generation gave up after {0} attempts")]
    KeyGenerationExhausted(usize),

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents a component failure, annotated with the pipeline stage it
    /// occurred in
    #[error("{stage} stage failed: {source}")]
    StageFailed {
        stage: Stage,
        source: Box<StegocryptError>,
    },

    #[error("API Error: Missing plaintext message")]
    MissingMessage,

    #[error("API Error: Missing matrix key")]
    MatrixKeyNotSet,

    #[error("API Error: Missing block key")]
    BlockKeyNotSet,

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
