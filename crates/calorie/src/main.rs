use crate::prelude::{eprintln, *};
use clap::Parser;

mod api;
mod categories;
mod config;
mod error;
mod foods;
mod prelude;
mod stats;
mod store;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse foods, categories and calorie statistics from a calorie API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the calorie API (overrides CALORIE_API_URL)
    #[clap(long, global = true)]
    api_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "CALORIE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Build a food store for the configured API
    pub fn store(&self) -> Result<store::FoodStore> {
        let config =
            config::ApiConfig::resolve(self.api_url.as_deref()).map_err(|e| eyre!(e))?;

        if self.verbose {
            eprintln!("Calorie API Base: {}", config.base_url);
        }

        let api = api::FoodApi::new(&config).map_err(|e| eyre!(e))?;
        Ok(store::FoodStore::new(api))
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Food listing, search and details
    Foods(crate::foods::App),

    /// List food categories
    Categories(crate::categories::App),

    /// Show calorie statistics
    Stats(crate::stats::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Foods(sub_app) => crate::foods::run(sub_app, app.global).await,
        SubCommands::Categories(sub_app) => crate::categories::run(sub_app, app.global).await,
        SubCommands::Stats(sub_app) => crate::stats::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
