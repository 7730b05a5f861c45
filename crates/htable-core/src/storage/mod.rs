use crate::error::StorageError;

pub mod config;
pub mod layout;

type Result<T> = std::result::Result<T, StorageError>;
