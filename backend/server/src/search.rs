//! # Listing
//!
//! Product listing for one table (caixa).
//!
//! ## Flow
//! 1. Keep rows whose name or valid code contains the query, case-insensitive
//! 2. Cut the requested page out of the matching rows
//! 3. Group the page by base name
//! 4. One card per group: `single` when alone, `group` with a slug linking to `/conjunto`
//!
//! ## Notes
//! - Grouping runs after pagination, so a large group can show up on two pages.
//! - Totals count rows, not cards.
//! - The group card shows the first member image that resolves.
use catalog::{
    images::resolve_image_url,
    models::{CatalogItem, ItemId},
    rules::CatalogRules,
    variants::{VariantGroup, group_by_base_name},
};
use serde::{Deserialize, Serialize};

use crate::{
    state::State,
    utils::{group_slug, page_window},
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Card {
    #[serde(rename_all = "camelCase")]
    Single {
        id: ItemId,
        name: String,
        code: Option<String>,
        image_url: Option<String>,
        variant_number: Option<u64>,
    },
    #[serde(rename_all = "camelCase")]
    Group {
        slug: String,
        base_name: String,
        count: usize,
        first_number: Option<u64>,
        last_number: Option<u64>,
        image_url: Option<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    pub table: String,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub cards: Vec<Card>,
}

pub fn matches_query(item: &CatalogItem, query: &str, rules: &CatalogRules) -> bool {
    item.name.to_lowercase().contains(query)
        || rules
            .valid_code(item.code.as_deref())
            .is_some_and(|code| code.to_lowercase().contains(query))
}

fn card(state: &State, group: VariantGroup) -> Card {
    let storage = &state.config.storage;

    match group.members.as_slice() {
        [member] => Card::Single {
            id: member.item.id.clone(),
            name: member.item.name.clone(),
            code: state
                .rules
                .valid_code(member.item.code.as_deref())
                .map(str::to_string),
            image_url: resolve_image_url(member.item.image_url.as_deref(), storage),
            variant_number: member.variant_number,
        },
        members => Card::Group {
            slug: group_slug(&group.base_name),
            count: members.len(),
            first_number: group.first_number,
            last_number: group.last_number,
            image_url: members
                .iter()
                .find_map(|member| resolve_image_url(member.item.image_url.as_deref(), storage)),
            base_name: group.base_name,
        },
    }
}

pub fn build_listing(
    state: &State,
    table: &str,
    items: &[CatalogItem],
    query: ListingQuery,
) -> ListingPage {
    let needle = query
        .q
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .unwrap_or_default();

    let matching: Vec<CatalogItem> = items
        .iter()
        .filter(|item| needle.is_empty() || matches_query(item, &needle, &state.rules))
        .cloned()
        .collect();

    let window = page_window(
        matching.len(),
        query.page,
        query.per_page,
        state.config.page_size,
    );

    let cards = group_by_base_name(&matching[window.start..window.end])
        .into_iter()
        .map(|group| card(state, group))
        .collect();

    ListingPage {
        table: table.to_string(),
        page: window.page,
        per_page: window.per_page,
        total_items: matching.len(),
        total_pages: window.total_pages,
        cards,
    }
}
