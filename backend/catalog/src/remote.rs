//! # Remote Data Store
//!
//! Catalog rows live in a hosted Postgres exposed through a PostgREST style API,
//! one table per caixa.
//!
//! ## Column names
//! Tables were created by hand over time and disagree on naming:
//! - name: `name`, `nome`, `descricao`
//! - code: `code`, `codigo`, `cod`, sometimes numeric
//! - image: `image_url`, `imagem`, `image`, `url_imagem`, `foto`
//!
//! When a row carries more than one of these, the first non-null one in the
//! order above wins. Rows are normalized into [`CatalogItem`] on the way in.
use prost::Message;
use reqwest::{Client, StatusCode, get};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    error::StoreError,
    models::{CatalogItem, ItemId},
    snapshot::Snapshot,
};

const NAME_COLUMNS: [&str; 3] = ["name", "nome", "descricao"];
const CODE_COLUMNS: [&str; 3] = ["code", "codigo", "cod"];
const IMAGE_COLUMNS: [&str; 5] = ["image_url", "imagem", "image", "url_imagem", "foto"];

/// One row as the store returns it. Several naming conventions can coexist in a
/// single table, so columns are looked up by priority instead of bound to fields.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct RawRow(Map<String, Value>);

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

impl RawRow {
    /// First column from `columns` holding a string or number.
    fn pick(&self, columns: &[&str]) -> Option<String> {
        columns
            .iter()
            .filter_map(|column| self.0.get(*column))
            .find_map(text)
    }

    fn id(&self) -> Option<ItemId> {
        match self.0.get("id")? {
            Value::Number(id) => id.as_i64().map(ItemId::Int),
            Value::String(id) => Some(ItemId::Text(id.clone())),
            _ => None,
        }
    }

    /// `position` stands in for rows that carry no id column.
    pub fn into_item(self, position: usize) -> CatalogItem {
        CatalogItem {
            id: self.id().unwrap_or(ItemId::Int(position as i64)),
            name: self.pick(&NAME_COLUMNS).unwrap_or_default(),
            code: self.pick(&CODE_COLUMNS),
            image_url: self.pick(&IMAGE_COLUMNS),
        }
    }
}

#[derive(Clone)]
pub struct RemoteStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RemoteStore {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetches every row of `table`. `None` when the store does not know the table.
    pub async fn fetch_table(&self, table: &str) -> Result<Option<Vec<CatalogItem>>, StoreError> {
        let url = format!(
            "{}/rest/v1/{}?select=*",
            self.base_url,
            urlencoding::encode(table)
        );
        debug!("Fetching {url}");

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            status if !status.is_success() => {
                warn!("Data store answered {status} for table {table}");
                return Err(StoreError::Status(status.as_u16()));
            }
            _ => {}
        }

        let rows: Vec<RawRow> = response.json().await?;

        Ok(Some(
            rows.into_iter()
                .enumerate()
                .map(|(position, row)| row.into_item(position))
                .collect(),
        ))
    }
}

/// Downloads a snapshot published as a static file.
pub async fn get_remote_snapshot(url: &str) -> Result<Snapshot, StoreError> {
    let response = get(url).await?;
    if !response.status().is_success() {
        return Err(StoreError::Status(response.status().as_u16()));
    }

    let bytes = response.bytes().await?;

    Ok(Snapshot::decode(&*bytes)?)
}
