use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: usize = 10;
pub const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// One page of a client-side paginated list. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slices `items` into the requested page.
///
/// `per_page` is clamped to `1..=MAX_PER_PAGE`; `page` is clamped into
/// `1..=total_pages`. An empty list still has one (empty) page.
pub fn paginate<T>(items: Vec<T>, query: PageQuery) -> Page<T> {
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(1, MAX_PER_PAGE);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = query.page.unwrap_or(1).clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
