use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lowest calorie tier.
pub const MIN_CALORIE_LEVEL: u8 = 1;
/// Highest calorie tier.
pub const MAX_CALORIE_LEVEL: u8 = 5;

/// Error raised when a calorie tier falls outside `1..=5`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid calorie level {0}: expected a value between 1 and 5")]
pub struct InvalidCalorieLevel(pub u8);

/// Coarse 1-5 tier classifying a calorie count
///
/// The only way to build one is through [`CalorieLevel::new`] (or serde, which
/// goes through the same check), so every value held by the application is in
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CalorieLevel(u8);

impl CalorieLevel {
    /// Every tier, lowest first.
    pub const ALL: [CalorieLevel; 5] = [
        CalorieLevel(1),
        CalorieLevel(2),
        CalorieLevel(3),
        CalorieLevel(4),
        CalorieLevel(5),
    ];

    pub fn new(level: u8) -> Result<Self, InvalidCalorieLevel> {
        if (MIN_CALORIE_LEVEL..=MAX_CALORIE_LEVEL).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidCalorieLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CalorieLevel {
    type Error = InvalidCalorieLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<CalorieLevel> for u8 {
    fn from(level: CalorieLevel) -> Self {
        level.0
    }
}

impl fmt::Display for CalorieLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Food item as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    /// Id of the [`FoodCategory`] this item belongs to
    pub category: String,
    pub calories: f64,
    pub calorie_level: CalorieLevel,
    /// Free-form quantity and unit, e.g. "330ml", "70g", "1只"
    pub portion: String,
    pub emoji: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Food category with the number of items it held at fetch time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCategory {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub count: u64,
}

/// `/api/categories` response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<FoodCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Optional query parameters for `/api/foods`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl SearchParams {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloriesStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

/// Aggregate statistics snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsData {
    pub total_foods: u64,
    pub calories_stats: CaloriesStats,
    pub calorie_level_distribution: BTreeMap<u8, u64>,
    pub category_distribution: BTreeMap<String, u64>,
}

/// Decode an `/api/stats` response
///
/// The backend answers with a bare `{"message": ...}` object when it holds no
/// data. That is a valid "nothing to report" answer and maps to `None`.
pub fn parse_stats(value: serde_json::Value) -> Result<Option<StatsData>, serde_json::Error> {
    let is_empty_notice = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("message") && !obj.contains_key("total_foods"));

    if is_empty_notice {
        return Ok(None);
    }

    serde_json::from_value(value).map(Some)
}

/// Whole calorie counts are written as JSON integers (`139`, not `139.0`).
fn serialize_calories<S>(calories: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if calories.fract() == 0.0 && calories.abs() <= MAX_EXACT {
        serializer.serialize_i64(*calories as i64)
    } else {
        serializer.serialize_f64(*calories)
    }
}

/// Display-ready food item with weight-adjusted values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedFoodItem {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub category: String,
    #[serde(serialize_with = "serialize_calories")]
    pub calories: f64,
    #[serde(serialize_with = "serialize_calories")]
    pub actual_calories: f64,
    /// Tier reported by the server for `calories`
    pub calorie_level: CalorieLevel,
    /// Tier recomputed from `actual_calories`
    pub actual_calorie_level: CalorieLevel,
    pub portion: String,
    pub actual_portion: String,
    pub emoji: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
