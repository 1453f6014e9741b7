use crate::prelude::*;

use super::{output_foods, report_failure};
use crate::store::Resource;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CategoryOptions {
    /// Category id, e.g. drinks, fruits, staples
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: CategoryOptions, global: crate::Global) -> Result<()> {
    let store = global.store()?;

    store.fetch_by_category(&options.category).await;

    let title = format!("CATEGORY {}", options.category.to_uppercase());
    output_foods(&title, &store.processed_foods(), options.json)?;

    report_failure(&store, Resource::Foods);
    Ok(())
}
