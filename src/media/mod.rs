pub mod carrier;
pub mod image;
pub mod sample;

use std::path::Path;

pub use carrier::Carrier;

pub trait Persist {
    fn save_as(&mut self, file: &Path) -> crate::Result<()>;
}
