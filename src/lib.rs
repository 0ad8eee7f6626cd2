//! # Catalogo Documentation
//!
//! Catalog backend for a medical equipment rental business.
//!
//! ## Notes
//!
//! - Catalog rows live in one data store table per caixa, tables disagree on column names
//! - Instruments come in sizes listed as separate rows, the site sells them as one conjunto
//! - Leads go through WhatsApp, there is no cart or checkout
//!
//!
//!
//! # Crates
//!
//! - `backend`: binary, starts the server
//! - `server`: axum HTTP API
//! - `catalog`: item model, variant grouping, snapshot file, data store client, image and WhatsApp helpers
//! - `process`: pulls tables from the data store into the snapshot
//! - `tester`: writes a demo snapshot for local runs
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Demo snapshot, written to `backend/catalog.bin`.
//! ```sh
//! cd backend/tester && cargo run
//! ```
//!
//! Real snapshot.
//! ```sh
//! cd backend/process
//! CATALOG_STORE_URL=https://xyz.supabase.co CATALOG_STORE_KEY=... \
//!   cargo run -- caixa_ortopedia="Caixa de Ortopedia" hospitalar="Equipamentos Hospitalares"
//! ```
//!
//! Serve it.
//! ```sh
//! cd backend && RUST_LOG=info cargo run
//! ```
//!
//!
//!
//! # Sources
//!
//! Snapshot (default)
//! - `CATALOG_SNAPSHOT` path or URL, read once at startup, defaults to `catalog.bin` in the working directory
//!
//! Remote
//! - `CATALOG_SOURCE=remote`, every request queries the data store
//! - Key read from `CATALOG_STORE_KEY` under `CATALOG_SECRETS_DIR` (`/run/secrets`)
//! - `CATALOG_TABLES` lists the exposed tables, `/tables` is empty without it

pub mod frontend;
