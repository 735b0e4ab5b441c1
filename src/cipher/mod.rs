pub mod hill;
pub mod sdes;
