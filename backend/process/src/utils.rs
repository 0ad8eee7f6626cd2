use std::sync::LazyLock;

use catalog::models::CatalogItem;
use chrono::{SecondsFormat, Utc};
use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

static CONTROL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Cc}\p{Cf}&&[^\s]]").expect("Invalid regex"));

pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Collapses whitespace and drops control characters. Case and accents are kept,
/// grouping depends on them being untouched.
pub fn sanitize(input: &str) -> String {
    let visible = CONTROL.replace_all(input, "");

    WHITESPACE.replace_all(&visible, " ").trim().to_string()
}

fn sanitize_optional(input: Option<String>) -> Option<String> {
    input
        .map(|value| sanitize(&value))
        .filter(|value| !value.is_empty())
}

/// Cleans every field and drops rows left without a name.
pub fn sanitize_items(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    items
        .into_iter()
        .map(|item| CatalogItem {
            name: sanitize(&item.name),
            code: sanitize_optional(item.code),
            image_url: sanitize_optional(item.image_url),
            ..item
        })
        .filter(|item| !item.name.is_empty())
        .collect()
}
