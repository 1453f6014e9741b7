use crate::prelude::*;

use super::{output_foods, report_failure};
use crate::store::Resource;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Text to look for in food names
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Restrict the search to one category
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let store = global.store()?;

    store.select_category(options.category.as_str());
    store.search(&options.query).await;

    if !store.search_state().is_active() {
        return Err(eyre!("Search query must not be empty"));
    }

    let title = format!("RESULTS FOR \"{}\"", store.search_query());
    output_foods(&title, &store.processed_foods(), options.json)?;

    report_failure(&store, Resource::Search);
    Ok(())
}
