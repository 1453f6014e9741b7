//! Request shaping for the food API
//!
//! Pure functions that decide which path and query-string pairs each store
//! action sends. The HTTP layer only joins them onto the base URL.

use crate::food::SearchParams;
use crate::view::CategorySelection;

/// Result cap for `/api/foods/search`.
pub const SEARCH_LIMIT: usize = 50;
/// Result cap for `/api/foods/category/{category}`.
pub const CATEGORY_LIMIT: usize = 100;
/// Result cap for the item fetch issued on initialization.
pub const INITIAL_LIMIT: usize = 100;

/// Query-string pairs, in the order they are sent
pub type QueryPairs = Vec<(&'static str, String)>;

pub fn foods_path() -> Vec<String> {
    vec!["api".into(), "foods".into()]
}

pub fn food_path(id: &str) -> Vec<String> {
    vec!["api".into(), "foods".into(), id.to_string()]
}

pub fn search_path() -> Vec<String> {
    vec!["api".into(), "foods".into(), "search".into()]
}

pub fn category_foods_path(category: &str) -> Vec<String> {
    vec![
        "api".into(),
        "foods".into(),
        "category".into(),
        category.to_string(),
    ]
}

pub fn categories_path() -> Vec<String> {
    vec!["api".into(), "categories".into()]
}

pub fn stats_path() -> Vec<String> {
    vec!["api".into(), "stats".into()]
}

/// Pass-through of the optional `/api/foods` parameters
pub fn foods_query(params: Option<&SearchParams>) -> QueryPairs {
    let Some(params) = params else {
        return Vec::new();
    };

    let mut pairs = QueryPairs::new();
    if let Some(limit) = params.limit {
        pairs.push(("limit", limit.to_string()));
    }
    if let Some(offset) = params.offset {
        pairs.push(("offset", offset.to_string()));
    }
    if let Some(q) = &params.q {
        pairs.push(("q", q.clone()));
    }
    if let Some(category) = &params.category {
        pairs.push(("category", category.clone()));
    }
    pairs
}

/// Search parameters: the query as typed, the fixed cap, and the category
/// unless the selection is "all"
pub fn search_query(query: &str, selection: &CategorySelection) -> QueryPairs {
    let mut pairs = vec![("q", query.to_string()), ("limit", SEARCH_LIMIT.to_string())];
    if let Some(category) = selection.as_filter() {
        pairs.push(("category", category.to_string()));
    }
    pairs
}

pub fn category_foods_query() -> QueryPairs {
    vec![("limit", CATEGORY_LIMIT.to_string())]
}

/// Parameters of the item fetch run by initialization
pub fn initial_foods_params() -> SearchParams {
    SearchParams::with_limit(INITIAL_LIMIT)
}
