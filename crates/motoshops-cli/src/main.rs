mod shops;

use clap::{Parser, Subcommand};
use motoshops_core::ShopFilter;
use motoshops_ingest::IngestionPipeline;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "motoshops")]
#[command(about = "Browse the EU motorcycle repair shop directory")]
struct Cli {
    /// CSV file path or http(s) URL to read instead of the configured source
    #[arg(long, global = true, value_name = "PATH|URL")]
    csv: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List shops, optionally filtered by country and search text
    List {
        /// ISO country code (e.g., DE)
        #[arg(long)]
        country: Option<String>,
        /// Case-insensitive match against name, city, street and country code
        #[arg(long)]
        search: Option<String>,
        /// Print matching shops as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show shop counts for every EU country
    Countries,
    /// Show the map framing and pinned shops for a filtered view
    Map {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = motoshops_core::load_app_config_with_csv(cli.csv.as_deref())?;

    // Logs go to stderr so `list --json` output stays machine-readable.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pipeline = IngestionPipeline::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build ingestion pipeline: {e}"))?;
    let collection = pipeline.load().await;

    match cli.command {
        Commands::List {
            country,
            search,
            json,
        } => {
            let filter = ShopFilter::new(country.as_deref(), search.as_deref());
            shops::run_list(&collection, &filter, json)?;
        }
        Commands::Countries => shops::run_countries(&collection),
        Commands::Map { country, search } => {
            let filter = ShopFilter::new(country.as_deref(), search.as_deref());
            shops::run_map(&collection, &filter);
        }
    }

    Ok(())
}
