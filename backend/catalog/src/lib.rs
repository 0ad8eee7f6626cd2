//! Shared catalog crate: item model, variant grouping, snapshot file and data store access.
use std::{fs, path::Path};

use prost::Message;

pub mod error;
pub mod images;
pub mod models;
pub mod remote;
pub mod rules;
pub mod snapshot;
pub mod variants;
pub mod whatsapp;

pub use error::StoreError;
use snapshot::Snapshot;

pub const SNAPSHOT_PATH: &str = "../catalog.bin";

pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, StoreError> {
    let data = fs::read(path)?;

    Ok(Snapshot::decode(&*data)?)
}

pub fn write_snapshot(path: impl AsRef<Path>, snapshot: &Snapshot) -> Result<(), StoreError> {
    fs::write(path, snapshot.encode_to_vec())?;

    Ok(())
}
