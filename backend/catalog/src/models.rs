use std::fmt;

use serde::{Deserialize, Serialize};

/// Row identifier. Some tables key rows by serial integers, others by text codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl ItemId {
    /// Compares against an identifier taken from a URL path segment.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ItemId::Int(id) => raw.trim().parse::<i64>().is_ok_and(|raw| raw == *id),
            ItemId::Text(id) => id == raw,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(id) => write!(f, "{id}"),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub code: Option<String>,
    pub image_url: Option<String>,
}

impl CatalogItem {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: None,
            image_url: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
