//! Weight-aware calorie formatting
//!
//! Many items are stored with nutrition facts per 100g while their name spells
//! out the real serving size, e.g. `可乐（330ml）`. The functions here detect
//! that case and rescale calories and portion for display.

use regex::Regex;
use std::sync::OnceLock;

use crate::food::{CalorieLevel, FoodItem, ProcessedFoodItem};

/// Portion string that marks per-100g nutrition facts.
pub const REFERENCE_PORTION: &str = "100g";

/// Inclusive upper bounds of calorie tiers 1 through 4. Anything above the last
/// bound falls into tier 5.
const CALORIE_LEVEL_THRESHOLDS: [f64; 4] = [100.0, 200.0, 300.0, 450.0];

/// Split a trailing weight annotation off a food name
///
/// Recognises `<name>（<number>g）` and `<name>（<number>ml）`, with either
/// full-width or ASCII parentheses; both must be of the same kind. The whole
/// string must match, so annotations in the middle of a name are ignored.
///
/// Returns the trimmed name and the weight when present, otherwise the name
/// unchanged and `None`.
pub fn extract_weight_from_name(name: &str) -> (String, Option<f64>) {
    static RE_WEIGHT: OnceLock<Regex> = OnceLock::new();
    let re_weight = RE_WEIGHT.get_or_init(|| {
        Regex::new(r"^(.+?)(?:（(\d+(?:\.\d+)?)(?:g|ml)）|\((\d+(?:\.\d+)?)(?:g|ml)\))$").unwrap()
    });

    if let Some(caps) = re_weight.captures(name) {
        let weight = caps
            .get(2)
            .or_else(|| caps.get(3))
            .and_then(|m| m.as_str().parse::<f64>().ok());
        if let (Some(clean), Some(weight)) = (caps.get(1), weight) {
            return (clean.as_str().trim().to_string(), Some(weight));
        }
    }

    (name.to_string(), None)
}

/// Build the display view of a food item
///
/// When the name carries a positive weight and the portion is the 100g
/// reference, calories are scaled by `weight / 100` and rounded, the portion
/// becomes `<weight>g` and the name loses its annotation. Every other item
/// passes through unchanged. `actual_calorie_level` is always derived from
/// `actual_calories`; `calorie_level` keeps the server's value.
pub fn process_food_data(item: &FoodItem) -> ProcessedFoodItem {
    let (clean_name, weight) = extract_weight_from_name(&item.name);

    let (display_name, actual_calories, actual_portion) = match weight {
        Some(weight) if weight > 0.0 && item.portion == REFERENCE_PORTION => (
            clean_name,
            (item.calories * (weight / 100.0)).round(),
            format!("{weight}g"),
        ),
        _ => (item.name.clone(), item.calories, item.portion.clone()),
    };

    ProcessedFoodItem {
        id: item.id.clone(),
        name: item.name.clone(),
        display_name,
        category: item.category.clone(),
        calories: item.calories,
        actual_calories,
        calorie_level: item.calorie_level,
        actual_calorie_level: calculate_actual_calorie_level(actual_calories),
        portion: item.portion.clone(),
        actual_portion,
        emoji: item.emoji.clone(),
        description: item.description.clone(),
        source: item.source.clone(),
        summary: item.summary.clone(),
    }
}

/// Process a list of items, preserving order
pub fn process_foods<'a, I>(items: I) -> Vec<ProcessedFoodItem>
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    items.into_iter().map(process_food_data).collect()
}

/// Map a calorie count to its 1-5 tier
///
/// Thresholds are inclusive: `<=100` is 1, `<=200` is 2, `<=300` is 3,
/// `<=450` is 4 and everything else is 5.
pub fn calculate_actual_calorie_level(calories: f64) -> CalorieLevel {
    let index = CALORIE_LEVEL_THRESHOLDS
        .iter()
        .position(|&bound| calories <= bound)
        .unwrap_or(CALORIE_LEVEL_THRESHOLDS.len());

    CalorieLevel::ALL[index]
}
