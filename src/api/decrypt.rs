//! Builder entry point for file-based decryption.

use std::path::{Path, PathBuf};

use crate::cipher::hill::MatrixKey;
use crate::cipher::sdes::BlockKey;
use crate::error::StegocryptError;
use crate::media::Carrier;
use crate::pipeline;
use crate::result::Result;

pub fn prepare() -> DecryptApi {
    DecryptApi::default()
}

#[derive(Default, Debug)]
pub struct DecryptApi {
    stego: Option<PathBuf>,
    matrix_key: Option<MatrixKey>,
    block_key: Option<BlockKey>,
    strip_filler: bool,
}

impl DecryptApi {
    pub fn with_stego_image<A: AsRef<Path>>(mut self, stego: A) -> Self {
        self.stego = Some(stego.as_ref().to_path_buf());
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

    /// Strip the trailing filler symbol. Only set this when the matching
    /// encryption reported that a pad was added.
    pub fn strip_filler(mut self, strip: bool) -> Self {
        self.strip_filler = strip;
        self
    }

    pub fn execute(self) -> Result<String> {
        let Some(stego_path) = self.stego else {
            return Err(StegocryptError::CarrierNotSet);
        };
        let Some(matrix_key) = self.matrix_key else {
            return Err(StegocryptError::MatrixKeyNotSet);
        };
        let Some(block_key) = self.block_key else {
            return Err(StegocryptError::BlockKeyNotSet);
        };

        let stego = Carrier::from_file(&stego_path)?;
        pipeline::decrypt(stego.image(), &matrix_key, &block_key, self.strip_filler)
    }
}
