use crate::prelude::*;

use super::{output_foods, report_failure};
use crate::store::Resource;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Only show foods of this category ("all" shows everything)
    #[arg(short, long, env = "CALORIE_CATEGORY", default_value = "all")]
    pub category: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let store = global.store()?;

    store.initialize().await;
    store.select_category(options.category.as_str());

    let title = format!("FOODS IN {}", options.category.to_uppercase());
    output_foods(&title, &store.processed_foods(), options.json)?;

    report_failure(&store, Resource::Foods);
    Ok(())
}
