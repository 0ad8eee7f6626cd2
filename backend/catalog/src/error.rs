use prost::DecodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Data store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Data store answered with status {0}")]
    Status(u16),

    #[error("Malformed snapshot: {0}")]
    Decode(#[from] DecodeError),

    #[error("Snapshot file error: {0}")]
    Io(#[from] std::io::Error),
}
