use crate::prelude::{eprintln, println, *};
use calorie_core::food::{CalorieLevel, ProcessedFoodItem};
use colored::{ColoredString, Colorize};

use crate::store::{FoodStore, Resource};

pub mod category;
pub mod list;
pub mod search;
pub mod show;

#[derive(Debug, clap::Parser)]
#[command(name = "foods")]
#[command(about = "Food listing, search and details")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List foods, optionally narrowed to one category
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Search foods by name
    #[clap(name = "search")]
    Search(search::SearchOptions),

    /// Fetch the foods of one category from the API
    #[clap(name = "category")]
    Category(category::CategoryOptions),

    /// Show a single food
    #[clap(name = "show")]
    Show(show::ShowOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list::run(options, global).await,
        Commands::Search(options) => search::run(options, global).await,
        Commands::Category(options) => category::run(options, global).await,
        Commands::Show(options) => show::run(options, global).await,
    }
}

/// Color a calorie tier from green (light) to red (heavy)
pub fn colorize_level(level: CalorieLevel) -> ColoredString {
    let text = format!("L{level}");
    match level.get() {
        1 => text.green(),
        2 => text.bright_green(),
        3 => text.yellow(),
        4 => text.bright_red(),
        _ => text.red().bold(),
    }
}

/// Render processed foods as a table with weight-adjusted values
pub fn format_foods_table(items: &[ProcessedFoodItem]) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID", "Food", "Category", "Calories", "Portion", "Level"
    ]);

    for item in items {
        table.add_row(prettytable::row![
            &item.id,
            format!("{} {}", item.emoji, item.display_name),
            &item.category,
            format!("{} kcal", item.actual_calories),
            &item.actual_portion,
            colorize_level(item.actual_calorie_level)
        ]);
    }

    table.to_string()
}

/// Print processed foods as JSON or as a table with a header line
pub fn output_foods(title: &str, items: &[ProcessedFoodItem], json: bool) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(items).context("JSON serialization failed")?;
        println!("{output}");
        return Ok(());
    }

    println!(
        "{} {}\n",
        title.bright_cyan().bold(),
        format!("({} foods)", items.len()).bright_black()
    );

    if items.is_empty() {
        println!("{}", "No foods found.".yellow());
    } else {
        print!("{}", format_foods_table(items));
    }

    Ok(())
}

/// Warn about a fetch the store swallowed
pub fn report_failure(store: &FoodStore, resource: Resource) {
    if let Some(err) = store.last_failure(resource) {
        eprintln!("{} {}", "warning:".yellow().bold(), failure_message(resource, &err));
    }
}

fn failure_message(resource: Resource, err: &Error) -> String {
    format!("could not load {resource}: {err}")
}
