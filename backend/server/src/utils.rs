pub const MAX_PER_PAGE: usize = 100;

/// Slice of a listing shown on one page. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

pub fn page_window(
    total: usize,
    page: Option<usize>,
    per_page: Option<usize>,
    default_per_page: usize,
) -> PageWindow {
    let per_page = per_page.unwrap_or(default_per_page).clamp(1, MAX_PER_PAGE);
    let page = page.unwrap_or(1).max(1);

    let start = (page - 1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);

    PageWindow {
        page,
        per_page,
        total_pages: total.div_ceil(per_page),
        start,
        end,
    }
}

/// Link target for a group card, decoded again by the query extractor.
pub fn group_slug(base_name: &str) -> String {
    urlencoding::encode(base_name).into_owned()
}

pub fn not_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
