//! Derived food views
//!
//! Pure functions that combine the cached collections with the search and
//! category selection state into the list shown to the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::food::FoodItem;

/// Selection value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Search state: either no search is active, or one is and holds its results
///
/// An active search with no results ("no matches") is distinct from an
/// inactive search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "results", rename_all = "snake_case")]
pub enum SearchState {
    #[default]
    Inactive,
    Active(Vec<FoodItem>),
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchState::Active(_))
    }

    pub fn results(&self) -> Option<&[FoodItem]> {
        match self {
            SearchState::Active(results) => Some(results),
            SearchState::Inactive => None,
        }
    }
}

/// Category filter applied when no search is active
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    #[default]
    All,
    Category(String),
}

impl CategorySelection {
    /// The category id to send to the API, `None` for [`CategorySelection::All`]
    pub fn as_filter(&self) -> Option<&str> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Category(id) => Some(id),
        }
    }

    pub fn matches(&self, item: &FoodItem) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Category(id) => item.category == *id,
        }
    }
}

impl From<String> for CategorySelection {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Category(value)
        }
    }
}

impl From<&str> for CategorySelection {
    fn from(value: &str) -> Self {
        CategorySelection::from(value.to_string())
    }
}

impl From<CategorySelection> for String {
    fn from(selection: CategorySelection) -> Self {
        selection.to_string()
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str(ALL_CATEGORIES),
            CategorySelection::Category(id) => f.write_str(id),
        }
    }
}

/// The list to display
///
/// An active search wins outright and its results are returned verbatim;
/// the category selection is not applied on top. Without a search, items are
/// filtered by category in their original order.
pub fn filtered_foods<'a>(
    foods: &'a [FoodItem],
    search: &'a SearchState,
    selection: &CategorySelection,
) -> Vec<&'a FoodItem> {
    match search {
        SearchState::Active(results) => results.iter().collect(),
        SearchState::Inactive => foods.iter().filter(|item| selection.matches(item)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::CalorieLevel;

    fn create_test_item(id: &str, category: &str) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_string(),
            category: category.to_string(),
            calories: 100.0,
            calorie_level: CalorieLevel::ALL[0],
            portion: "100g".to_string(),
            emoji: "🍽️".to_string(),
            description: String::new(),
            source: None,
            summary: None,
        }
    }

    fn fixture() -> Vec<FoodItem> {
        vec![
            create_test_item("rice", "staples"),
            create_test_item("cola", "drinks"),
            create_test_item("noodles", "staples"),
            create_test_item("apple", "fruits"),
        ]
    }

    fn ids(items: &[&FoodItem]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_all_returns_every_item() {
        let foods = fixture();
        let view = filtered_foods(&foods, &SearchState::Inactive, &CategorySelection::All);
        assert_eq!(ids(&view), vec!["rice", "cola", "noodles", "apple"]);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let foods = fixture();
        let selection = CategorySelection::from("staples");
        let view = filtered_foods(&foods, &SearchState::Inactive, &selection);
        assert_eq!(ids(&view), vec!["rice", "noodles"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let foods = fixture();
        let selection = CategorySelection::from("desserts");
        let view = filtered_foods(&foods, &SearchState::Inactive, &selection);
        assert!(view.is_empty());
    }

    #[test]
    fn test_search_overrides_category() {
        let foods = fixture();
        let search = SearchState::Active(vec![
            create_test_item("cola", "drinks"),
            create_test_item("milk", "dairy"),
        ]);

        for selection in [
            CategorySelection::All,
            CategorySelection::from("staples"),
            CategorySelection::from("drinks"),
        ] {
            let view = filtered_foods(&foods, &search, &selection);
            assert_eq!(ids(&view), vec!["cola", "milk"]);
        }
    }

    #[test]
    fn test_empty_search_is_still_active() {
        let foods = fixture();
        let search = SearchState::Active(Vec::new());
        let view = filtered_foods(&foods, &search, &CategorySelection::All);
        assert!(view.is_empty());
        assert!(search.is_active());
        assert_eq!(search.results().map(|r| r.len()), Some(0));
    }

    #[test]
    fn test_selection_round_trip_through_string() {
        assert_eq!(CategorySelection::from("all"), CategorySelection::All);
        assert_eq!(CategorySelection::All.as_filter(), None);
        assert_eq!(
            CategorySelection::from("fruits").as_filter(),
            Some("fruits")
        );
        assert_eq!(String::from(CategorySelection::from("fruits")), "fruits");
    }
}
