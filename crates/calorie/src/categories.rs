use crate::prelude::{println, *};
use calorie_core::food::FoodCategory;
use colored::Colorize;

use crate::foods::report_failure;
use crate::store::Resource;

#[derive(Debug, clap::Parser)]
#[command(name = "categories")]
#[command(about = "List food categories")]
pub struct App {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let store = global.store()?;

    store.fetch_categories().await;
    let state = store.snapshot();

    if app.json {
        let output = serde_json::json!({
            "categories": state.categories,
            "total": state.categories_total,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!(
            "{}",
            format_categories_text(&state.categories, state.categories_total)
        );
    }

    report_failure(&store, Resource::Categories);
    Ok(())
}

fn format_categories_text(categories: &[FoodCategory], total: Option<u64>) -> String {
    let mut result = format!("{}\n\n", "CATEGORIES".bright_cyan().bold());

    if categories.is_empty() {
        result.push_str(&format!("{}\n", "No categories found.".yellow()));
        return result;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Category", "Foods"]);
    for category in categories {
        table.add_row(prettytable::row![
            &category.id,
            format!("{} {}", category.emoji, category.name),
            category.count
        ]);
    }
    result.push_str(&table.to_string());

    if let Some(total) = total {
        result.push_str(&format!("\n{} {}\n", "Total foods:".green(), total));
    }

    result.push_str(&format!(
        "\n{}: {}\n",
        "To browse a category".bright_white().bold(),
        "calorie foods list --category <id>".cyan()
    ));

    result
}
