use crate::prelude::{println, *};
use calorie_core::food::ProcessedFoodItem;
use calorie_core::processor::process_food_data;
use colored::Colorize;

use super::{colorize_level, report_failure};
use crate::store::Resource;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ShowOptions {
    /// Food id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ShowOptions, global: crate::Global) -> Result<()> {
    let store = global.store()?;

    store.fetch_food(&options.id).await;

    let Some(food) = store.detail() else {
        report_failure(&store, Resource::Detail);
        return Err(eyre!("Food '{}' could not be loaded", options.id));
    };
    let processed = process_food_data(&food);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&processed)?);
    } else {
        print!("{}", format_food_detail(&processed));
    }

    Ok(())
}

/// Render one food with both the stated and the weight-adjusted values
fn format_food_detail(food: &ProcessedFoodItem) -> String {
    let mut result = format!(
        "\n{} {}\n\n",
        food.emoji,
        food.display_name.bright_white().bold()
    );

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", &food.id]);
    table.add_row(prettytable::row!["Name", &food.name]);
    table.add_row(prettytable::row!["Category", &food.category]);
    table.add_row(prettytable::row![
        "Calories",
        format!("{} kcal / {}", food.calories, food.portion)
    ]);
    if food.actual_portion != food.portion {
        table.add_row(prettytable::row![
            "Actual",
            format!("{} kcal / {}", food.actual_calories, food.actual_portion)
        ]);
    }
    table.add_row(prettytable::row!["Level", colorize_level(food.calorie_level)]);
    if food.actual_calorie_level != food.calorie_level {
        table.add_row(prettytable::row![
            "Actual level",
            colorize_level(food.actual_calorie_level)
        ]);
    }
    if let Some(source) = food.source.as_deref().filter(|s| !s.is_empty()) {
        table.add_row(prettytable::row!["Source", source]);
    }
    result.push_str(&table.to_string());

    if !food.description.is_empty() {
        result.push_str(&format!("\n{}\n", food.description));
    }
    if let Some(summary) = food.summary.as_deref().filter(|s| !s.is_empty()) {
        result.push_str(&format!("\n{}\n", summary.bright_black()));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_core::food::{CalorieLevel, FoodItem};

    fn create_test_food(name: &str, calories: f64, portion: &str) -> ProcessedFoodItem {
        process_food_data(&FoodItem {
            id: "food-1".to_string(),
            name: name.to_string(),
            category: "drinks".to_string(),
            calories,
            calorie_level: CalorieLevel::ALL[0],
            portion: portion.to_string(),
            emoji: "🥤".to_string(),
            description: "碳酸饮料".to_string(),
            source: Some("百科".to_string()),
            summary: Some(String::new()),
        })
    }

    #[test]
    fn test_format_food_detail_with_weight() {
        let output = format_food_detail(&create_test_food("可乐（330ml）", 42.0, "100g"));

        assert!(output.contains("可乐（330ml）"));
        assert!(output.contains("42 kcal / 100g"));
        assert!(output.contains("139 kcal / 330g"));
        assert!(output.contains("Actual level"));
        assert!(output.contains("百科"));
        assert!(output.contains("碳酸饮料"));
    }

    #[test]
    fn test_format_food_detail_without_weight() {
        let output = format_food_detail(&create_test_food("苹果", 52.0, "1只"));

        assert!(output.contains("52 kcal / 1只"));
        assert!(!output.contains("Actual"));
    }
}
