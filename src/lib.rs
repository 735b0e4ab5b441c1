//! # Stegocrypt Core
//!
//! A three-layer text encryption pipeline:
//!
//! 1. a Hill cipher over 2-symbol blocks in Z/26 ([`cipher::hill`])
//! 2. a Simplified DES block cipher with a 10-bit key ([`cipher::sdes`])
//! 3. LSB steganography over a raster image carrier ([`media::image`])
//!
//! [`pipeline::encrypt`] chains the three into a stego image; the keys are
//! passed explicitly on every call and the result carries the bookkeeping
//! (pad flag, embedded bit count) needed to reverse the process with
//! [`pipeline::decrypt`].
//!
//! None of this is cryptographically strong — the layers are classical and
//! educational — but every transformation is bit-exact and fully
//! reversible.
//!
//! # Usage Example
//!
//! ```rust
//! use stegocrypt_core::media::sample;
//! use stegocrypt_core::{pipeline, BlockKey, MatrixKey};
//!
//! let matrix_key = MatrixKey::new([[3, 3], [2, 5]]).unwrap();
//! let block_key: BlockKey = "1010000010".parse().unwrap();
//! let carrier = sample::gradient(64, 64);
//!
//! let sealed = pipeline::encrypt("SECRETS", &matrix_key, &block_key, &carrier)
//!     .expect("carrier is large enough");
//!
//! let recovered =
//!     pipeline::decrypt(&sealed.stego, &matrix_key, &block_key, sealed.padded)
//!         .expect("keys match");
//! assert_eq!(recovered, "SECRETS");
//! ```
//!
//! For file-based callers there is a builder API under [`api`] which loads
//! a lossless carrier image from disk and persists the stego image as PNG.

pub mod api;
pub mod bits;
pub mod cipher;
pub mod error;
pub mod media;
pub mod payload;
pub mod pipeline;
pub mod result;

pub use crate::cipher::hill::MatrixKey;
pub use crate::cipher::sdes::BlockKey;
pub use crate::error::StegocryptError;
pub use crate::media::Persist;
pub use crate::pipeline::{decrypt, encrypt, Encryption, Stage};
pub use crate::result::Result;
