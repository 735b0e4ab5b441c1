pub mod lsb_codec;
pub mod raster;

pub use lsb_codec::LsbCodec;
pub use raster::Raster;
