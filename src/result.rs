use crate::error::StegocryptError;

pub type Result<T> = std::result::Result<T, StegocryptError>;
