use crate::prelude::{println, *};
use calorie_core::food::StatsData;
use colored::Colorize;

use crate::foods::report_failure;
use crate::store::Resource;

#[derive(Debug, clap::Parser)]
#[command(name = "stats")]
#[command(about = "Show calorie statistics")]
pub struct App {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let store = global.store()?;

    store.fetch_stats().await;
    let stats = store.stats();

    if app.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        match &stats {
            Some(stats) => print!("{}", format_stats_text(stats)),
            None => println!("{}", "No statistics available.".yellow()),
        }
    }

    report_failure(&store, Resource::Stats);
    Ok(())
}

fn format_stats_text(stats: &StatsData) -> String {
    let mut result = format!("{}\n\n", "CALORIE STATISTICS".bright_cyan().bold());

    let mut table = new_table();
    table.add_row(prettytable::row!["Total foods", stats.total_foods]);
    table.add_row(prettytable::row![
        "Average",
        format!("{:.2} kcal", stats.calories_stats.average)
    ]);
    table.add_row(prettytable::row![
        "Min",
        format!("{} kcal", stats.calories_stats.min)
    ]);
    table.add_row(prettytable::row![
        "Max",
        format!("{} kcal", stats.calories_stats.max)
    ]);
    result.push_str(&table.to_string());

    result.push_str(&format!("\n{}\n", "BY LEVEL".bright_yellow().bold()));
    let mut levels = new_table();
    for (level, count) in &stats.calorie_level_distribution {
        levels.add_row(prettytable::row![format!("L{level}"), count]);
    }
    result.push_str(&levels.to_string());

    result.push_str(&format!("\n{}\n", "BY CATEGORY".bright_yellow().bold()));
    let mut categories = new_table();
    for (category, count) in &stats.category_distribution {
        categories.add_row(prettytable::row![category, count]);
    }
    result.push_str(&categories.to_string());

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_core::food::CaloriesStats;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_stats_text() {
        let stats = StatsData {
            total_foods: 3,
            calories_stats: CaloriesStats {
                average: 120.333,
                max: 250.0,
                min: 20.0,
            },
            calorie_level_distribution: BTreeMap::from([(1, 2), (3, 1)]),
            category_distribution: BTreeMap::from([
                ("drinks".to_string(), 2),
                ("fruits".to_string(), 1),
            ]),
        };

        let output = format_stats_text(&stats);

        assert!(output.contains("CALORIE STATISTICS"));
        assert!(output.contains("120.33 kcal"));
        assert!(output.contains("250 kcal"));
        assert!(output.contains("20 kcal"));
        assert!(output.contains("L3"));
        assert!(output.contains("drinks"));
        assert!(output.contains("fruits"));
    }
}
