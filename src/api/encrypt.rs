//! Builder entry point for file-based encryption.

use std::path::{Path, PathBuf};

use crate::cipher::hill::MatrixKey;
use crate::cipher::sdes::BlockKey;
use crate::error::StegocryptError;
use crate::media::{Carrier, Persist};
use crate::pipeline;
use crate::result::Result;

pub fn prepare() -> EncryptApi {
    EncryptApi::default()
}

#[derive(Default, Debug)]
pub struct EncryptApi {
    text: Option<String>,
    matrix_key: Option<MatrixKey>,
    block_key: Option<BlockKey>,
    carrier: Option<PathBuf>,
    output: Option<PathBuf>,
}

/// Bookkeeping from a successful run: what the caller needs to remember to
/// decrypt faithfully later.
#[derive(Debug, Clone, Copy)]
pub struct Receipt {
    pub padded: bool,
    pub message_bits: usize,
}

impl EncryptApi {
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_matrix_key(mut self, key: MatrixKey) -> Self {
        self.matrix_key = Some(key);
        self
    }

    pub fn with_block_key(mut self, key: BlockKey) -> Self {
        self.block_key = Some(key);
        self
    }

    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<Receipt> {
        let Some(text) = self.text else {
            return Err(StegocryptError::MissingMessage);
        };
        let Some(matrix_key) = self.matrix_key else {
            return Err(StegocryptError::MatrixKeyNotSet);
        };
        let Some(block_key) = self.block_key else {
            return Err(StegocryptError::BlockKeyNotSet);
        };
        let Some(carrier_path) = self.carrier else {
            return Err(StegocryptError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegocryptError::TargetNotSet);
        };

        let carrier = Carrier::from_file(&carrier_path)?;
        let sealed = pipeline::encrypt(&text, &matrix_key, &block_key, carrier.image())?;

        let receipt = Receipt {
            padded: sealed.padded,
            message_bits: sealed.message_bits,
        };
        Carrier::from_image(sealed.stego).save_as(&output)?;

        Ok(receipt)
    }
}
