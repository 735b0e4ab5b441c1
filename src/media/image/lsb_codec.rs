//! Least-significant-bit codec over any [`Raster`] carrier.
//!
//! Bits are written and read in one fixed, deterministic order: pixels
//! row-major, channels in order within a pixel, one bit per channel byte.
//! Embedding never touches the caller's image; it works on a copy.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::bits::Bits;
use crate::error::StegocryptError;
use crate::result::Result;

use super::raster::Raster;

/// Facade for embedding and extracting bitstreams.
pub struct LsbCodec;

impl LsbCodec {
    /// Carrier capacity in bits: one per channel byte.
    pub fn capacity<R: Raster>(image: &R) -> usize {
        image.width() as usize * image.height() as usize * usize::from(image.channels())
    }

    /// Writes the payload into the LSBs of a copy of `image`.
    ///
    /// Channels beyond the payload length are left byte-identical to the
    /// original, and the upper seven bits of every touched channel are
    /// preserved.
    pub fn embed<R>(image: &R, payload: &Bits) -> Result<R>
    where
        R: Raster + Clone,
    {
        let capacity = Self::capacity(image);
        if payload.len() > capacity {
            return Err(StegocryptError::CapacityExceeded {
                required: payload.len(),
                available: capacity,
            });
        }

        let mut stego = image.clone();
        let mut reader = BitReader::endian(payload.as_bytes(), BigEndian);
        for index in 0..payload.len() {
            let bit = reader.read_bit()?;
            let (x, y, channel) = position(image, index);
            let value = stego.channel(x, y, channel);
            stego.set_channel(x, y, channel, (value & 0xFE) | u8::from(bit));
        }

        Ok(stego)
    }

    /// Reads `bit_count` LSBs back out of the carrier in embed order.
    pub fn extract<R: Raster>(image: &R, bit_count: usize) -> Result<Bits> {
        let capacity = Self::capacity(image);
        if bit_count > capacity {
            return Err(StegocryptError::MalformedHeader {
                declared: bit_count,
                available: capacity,
            });
        }

        let mut writer = BitWriter::endian(Vec::with_capacity(bit_count.div_ceil(8)), BigEndian);
        for index in 0..bit_count {
            let (x, y, channel) = position(image, index);
            writer.write_bit(image.channel(x, y, channel) & 1 == 1)?;
        }
        writer.byte_align()?;

        Ok(Bits::from_parts(writer.into_writer(), bit_count))
    }
}

/// Maps a bit index onto the traversal order: row-major pixels, channel
/// order within a pixel.
fn position<R: Raster>(image: &R, bit_index: usize) -> (u32, u32, u8) {
    let channels = usize::from(image.channels());
    let pixel = bit_index / channels;
    let channel = (bit_index % channels) as u8;
    let x = (pixel % image.width() as usize) as u32;
    let y = (pixel / image.width() as usize) as u32;
    (x, y, channel)
}
