use std::sync::Arc;

use axum::{
    Json,
    extract::{self, Path, Query, rejection::QueryRejection},
};
use catalog::{
    images::resolve_image_url,
    models::ItemId,
    variants::{ExtractedItem, extract_base_name_and_variant, filter_group_by_base_name},
    whatsapp::{group_message, product_message, whatsapp_link},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    database::TableSummary,
    error::AppError,
    search::{ListingPage, ListingQuery, build_listing},
    state::State,
    utils::{group_slug, not_blank},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub table: String,
    pub id: ItemId,
    pub name: String,
    pub code: Option<String>,
    pub image_url: Option<String>,
    pub base_name: String,
    pub variant_number: Option<u64>,
    pub group_slug: Option<String>,
    pub group_size: usize,
    pub whatsapp_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: ItemId,
    pub name: String,
    pub code: Option<String>,
    pub image_url: Option<String>,
    pub variant_number: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPayload {
    pub table: String,
    pub base_name: String,
    pub display_name: String,
    pub members: Vec<GroupMember>,
    pub first_number: Option<u64>,
    pub last_number: Option<u64>,
    pub whatsapp_url: String,
}

#[derive(Debug, Deserialize)]
pub struct GroupQuery {
    pub table: Option<String>,
    pub base: Option<String>,
}

impl GroupMember {
    fn new(state: &State, member: ExtractedItem) -> Self {
        Self {
            code: state
                .rules
                .valid_code(member.item.code.as_deref())
                .map(str::to_string),
            image_url: resolve_image_url(member.item.image_url.as_deref(), &state.config.storage),
            id: member.item.id,
            name: member.item.name,
            variant_number: member.variant_number,
        }
    }
}

pub async fn tables_handler(
    extract::State(state): extract::State<Arc<State>>,
) -> Json<Vec<TableSummary>> {
    Json(state.store.tables())
}

pub async fn listing_handler(
    extract::State(state): extract::State<Arc<State>>,
    Path(table): Path<String>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<ListingPage>, AppError> {
    let Query(query) = query?;
    let table = state.rules.canonical_table(&table);

    let items = state
        .store
        .fetch_table(table)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("table {table}")))?;

    Ok(Json(build_listing(&state, table, &items, query)))
}

pub async fn item_handler(
    extract::State(state): extract::State<Arc<State>>,
    Path((table, id)): Path<(String, String)>,
) -> Result<Json<ProductDetail>, AppError> {
    let table = state.rules.canonical_table(&table);

    let items = state
        .store
        .fetch_table(table)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("table {table}")))?;

    let item = items
        .iter()
        .find(|item| item.id.matches(&id))
        .ok_or_else(|| AppError::NotFound(format!("item {id} in {table}")))?;

    let extraction = extract_base_name_and_variant(&item.name);
    let group_size = filter_group_by_base_name(&items, &extraction.base_name)
        .members
        .len();

    let code = state.rules.valid_code(item.code.as_deref());

    Ok(Json(ProductDetail {
        table: table.to_string(),
        id: item.id.clone(),
        name: item.name.clone(),
        code: code.map(str::to_string),
        image_url: resolve_image_url(item.image_url.as_deref(), &state.config.storage),
        group_slug: (group_size > 1).then(|| group_slug(&extraction.base_name)),
        base_name: extraction.base_name,
        variant_number: extraction.variant_number,
        group_size,
        whatsapp_url: whatsapp_link(
            &state.config.whatsapp_phone,
            &product_message(&item.name, code),
        ),
    }))
}

/// Group (conjunto) page: every variant of one base name in a table.
pub async fn group_handler(
    extract::State(state): extract::State<Arc<State>>,
    query: Result<Query<GroupQuery>, QueryRejection>,
) -> Result<Json<GroupPayload>, AppError> {
    let Query(query) = query?;
    let table = not_blank(query.table).ok_or(AppError::MissingParameter("table"))?;
    let base_name = not_blank(query.base).ok_or(AppError::MissingParameter("base"))?;

    let table = state.rules.canonical_table(&table);
    debug!("Group lookup for {base_name:?} in {table}");

    let items = state
        .store
        .fetch_table(table)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("table {table}")))?;

    let selection = filter_group_by_base_name(&items, &base_name);

    if selection.is_empty() {
        return Err(AppError::NotFound(format!("group {base_name} in {table}")));
    }

    let whatsapp_url = whatsapp_link(
        &state.config.whatsapp_phone,
        &group_message(
            &selection.display_name,
            selection.first_number,
            selection.last_number,
        ),
    );

    Ok(Json(GroupPayload {
        table: table.to_string(),
        base_name,
        display_name: selection.display_name,
        members: selection
            .members
            .into_iter()
            .map(|member| GroupMember::new(&state, member))
            .collect(),
        first_number: selection.first_number,
        last_number: selection.last_number,
        whatsapp_url,
    }))
}
