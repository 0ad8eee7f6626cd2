//! # Snapshot
//!
//! Binary copy of every catalog table, written by the `process` tool and served by the backend.
//!
//! ## Notes
//! - Messages are derived by hand, no `.proto` compile step.
//! - Row ids keep their source type through a oneof since tables disagree on int vs text keys.
//! - Table order is the order `process` was given, the backend lists tables in that order.
use prost::{Message, Oneof};

use crate::models::{CatalogItem, ItemId};

#[derive(Clone, PartialEq, Message)]
pub struct Snapshot {
    #[prost(string, tag = "1")]
    pub generated_at: String,
    #[prost(message, repeated, tag = "2")]
    pub tables: Vec<TableRecord>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TableRecord {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(message, repeated, tag = "3")]
    pub items: Vec<ItemRecord>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ItemRecord {
    #[prost(oneof = "RecordId", tags = "1, 2")]
    pub id: Option<RecordId>,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, optional, tag = "4")]
    pub code: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub image_url: Option<String>,
}

#[derive(Clone, PartialEq, Oneof)]
pub enum RecordId {
    #[prost(int64, tag = "1")]
    Int(i64),
    #[prost(string, tag = "2")]
    Text(String),
}

impl From<&CatalogItem> for ItemRecord {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: Some(match &item.id {
                ItemId::Int(id) => RecordId::Int(*id),
                ItemId::Text(id) => RecordId::Text(id.clone()),
            }),
            name: item.name.clone(),
            code: item.code.clone(),
            image_url: item.image_url.clone(),
        }
    }
}

impl From<ItemRecord> for CatalogItem {
    fn from(record: ItemRecord) -> Self {
        let id = match record.id {
            Some(RecordId::Int(id)) => ItemId::Int(id),
            Some(RecordId::Text(id)) => ItemId::Text(id),
            None => ItemId::Text(String::new()),
        };

        Self {
            id,
            name: record.name,
            code: record.code,
            image_url: record.image_url,
        }
    }
}

impl TableRecord {
    pub fn new(name: impl Into<String>, title: impl Into<String>, items: &[CatalogItem]) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            items: items.iter().map(ItemRecord::from).collect(),
        }
    }
}

/// One catalog table (caixa) held in memory.
#[derive(Debug, Clone)]
pub struct CatalogTable {
    pub name: String,
    pub title: String,
    pub items: Vec<CatalogItem>,
}

/// Decoded snapshot, tables looked up by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub generated_at: String,
    pub tables: Vec<CatalogTable>,
}

impl Catalog {
    pub fn table(&self, name: &str) -> Option<&CatalogTable> {
        self.tables.iter().find(|table| table.name == name)
    }
}

impl From<Snapshot> for Catalog {
    fn from(snapshot: Snapshot) -> Self {
        let tables = snapshot
            .tables
            .into_iter()
            .map(|table| CatalogTable {
                title: if table.title.is_empty() {
                    table.name.clone()
                } else {
                    table.title
                },
                name: table.name,
                items: table.items.into_iter().map(CatalogItem::from).collect(),
            })
            .collect();

        Self {
            generated_at: snapshot.generated_at,
            tables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keeps_id_types() {
        let items = vec![
            CatalogItem::new(ItemId::Int(3), "Maca Hospitalar").with_code("MH3"),
            CatalogItem::new(ItemId::Text("c-1".into()), "Cureta Nº1").with_image("cx/cureta.png"),
        ];

        let snapshot = Snapshot {
            generated_at: "2026-10-18T12:00:00Z".into(),
            tables: vec![TableRecord::new("caixa_cirurgica", "", &items)],
        };

        let decoded = Snapshot::decode(&*snapshot.encode_to_vec()).unwrap();
        let catalog = Catalog::from(decoded);
        let table = catalog.table("caixa_cirurgica").unwrap();

        assert_eq!(table.title, "caixa_cirurgica");
        assert_eq!(table.items, items);
        assert!(catalog.table("missing").is_none());
    }

    #[test]
    fn test_record_without_id() {
        let item = CatalogItem::from(ItemRecord {
            id: None,
            name: "Biombo".into(),
            code: None,
            image_url: None,
        });

        assert_eq!(item.id, ItemId::Text(String::new()));
    }
}
