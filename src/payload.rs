//! Wire format of the embedded payload.
//!
//! `[32-bit big-endian message bit length][message bits]`, MSB-first. The
//! header is read back first and tells the extractor exactly where the
//! hidden data ends, so no terminator scan is ever needed.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::bits::Bits;
use crate::result::Result;

/// Width of the length header in bits.
pub const LENGTH_HEADER_BITS: usize = 32;

/// Prepends the length header to a message bitstream.
pub fn frame(message: &Bits) -> Result<Bits> {
    debug_assert!(message.len() <= u32::MAX as usize);

    let mut bytes = Vec::with_capacity(4 + message.as_bytes().len());
    bytes.write_u32::<BigEndian>(message.len() as u32)?;
    bytes.extend_from_slice(message.as_bytes());

    Ok(Bits::from_parts(bytes, LENGTH_HEADER_BITS + message.len()))
}

/// Decodes the message bit length from an extracted header.
pub fn read_length(header: &Bits) -> Result<usize> {
    let mut bytes = header.as_bytes();
    Ok(bytes.read_u32::<BigEndian>()? as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_prepends_the_bit_length_big_endian() {
        let mut message = Bits::new();
        message.push_byte(0xAB);
        message.push(true);

        let framed = frame(&message).unwrap();

        assert_eq!(framed.len(), 32 + 9);
        assert_eq!(framed.as_bytes()[..4], [0, 0, 0, 9]);
        assert_eq!(framed.as_bytes()[4], 0xAB);
    }

    #[test]
    fn read_length_recovers_the_framed_length() {
        let message = Bits::from_bytes(vec![1, 2, 3]);
        let framed = frame(&message).unwrap();

        let header = Bits::from_parts(framed.as_bytes()[..4].to_vec(), LENGTH_HEADER_BITS);

        assert_eq!(read_length(&header).unwrap(), 24);
    }

    #[test]
    fn empty_message_frames_to_a_bare_header() {
        let framed = frame(&Bits::new()).unwrap();

        assert_eq!(framed.len(), LENGTH_HEADER_BITS);
        assert_eq!(framed.as_bytes(), &[0, 0, 0, 0]);
    }
}
