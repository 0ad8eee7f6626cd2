//! # Data Access
//!
//! Rows for a table (caixa) either come from the in-memory snapshot or straight from
//! the data store.
//!
//! ## Snapshot
//! - Loaded once at startup from a file or a published URL
//! - Lookups never fail, an unknown table is just missing
//! - Refreshed by redeploying after `process` writes a new one
//!
//! ## Remote
//! - One data store query per request, nothing kept between requests
//! - `CATALOG_TABLES` limits which tables can be read, empty lets any table through
//! - The store has no table listing, so `/tables` shows exactly `CATALOG_TABLES` and
//!   is empty when it is unset
//! - Store failures surface as upstream errors
use std::borrow::Cow;

use catalog::{
    StoreError,
    models::CatalogItem,
    read_snapshot,
    remote::{RemoteStore, get_remote_snapshot},
    snapshot::Catalog,
};
use serde::Serialize;
use tracing::info;

use crate::config::{Config, Source};

#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub name: String,
    pub title: String,
    /// Known only for snapshot tables.
    pub items: Option<usize>,
}

pub enum Store {
    Snapshot(Catalog),
    Remote {
        store: RemoteStore,
        tables: Vec<String>,
    },
}

impl Store {
    pub async fn init(config: &Config) -> Result<Self, StoreError> {
        match config.source {
            Source::Snapshot => {
                let path = &config.snapshot_path;

                let snapshot = if path.starts_with("http://") || path.starts_with("https://") {
                    get_remote_snapshot(path).await?
                } else {
                    read_snapshot(path)?
                };

                let catalog = Catalog::from(snapshot);
                info!(
                    "Loaded snapshot from {path}: {} tables, generated at {}",
                    catalog.tables.len(),
                    catalog.generated_at
                );

                Ok(Store::Snapshot(catalog))
            }
            Source::Remote => {
                info!("Querying data store at {}", config.store_url);

                Ok(Store::Remote {
                    store: RemoteStore::new(&config.store_url, &config.store_key),
                    tables: config.tables.clone(),
                })
            }
        }
    }

    pub fn tables(&self) -> Vec<TableSummary> {
        match self {
            Store::Snapshot(catalog) => catalog
                .tables
                .iter()
                .map(|table| TableSummary {
                    name: table.name.clone(),
                    title: table.title.clone(),
                    items: Some(table.items.len()),
                })
                .collect(),
            Store::Remote { tables, .. } => tables
                .iter()
                .map(|name| TableSummary {
                    name: name.clone(),
                    title: name.clone(),
                    items: None,
                })
                .collect(),
        }
    }

    /// Rows of `table`, `None` when the table does not exist.
    pub async fn fetch_table(
        &self,
        table: &str,
    ) -> Result<Option<Cow<'_, [CatalogItem]>>, StoreError> {
        match self {
            Store::Snapshot(catalog) => Ok(catalog
                .table(table)
                .map(|table| Cow::Borrowed(table.items.as_slice()))),
            Store::Remote { store, tables } => {
                if !tables.is_empty() && !tables.iter().any(|name| name == table) {
                    return Ok(None);
                }

                Ok(store.fetch_table(table).await?.map(Cow::Owned))
            }
        }
    }
}
