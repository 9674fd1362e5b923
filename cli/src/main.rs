mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillet_core::{ApiConfig, RecipeClient, SearchCriteria};

#[derive(Parser)]
#[command(name = "skillet")]
#[command(about = "Browse recipes from a skillet backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, optionally filtered by text or tag
    List {
        /// Free-text search over title, description, and tags
        #[arg(long)]
        query: Option<String>,
        /// Exact tag to filter by
        #[arg(long)]
        tag: Option<String>,
        /// Backend base URL (default: SKILLET_API_BASE or http://localhost:3001)
        #[arg(long)]
        server: Option<String>,
    },
    /// Show one recipe in full
    Show {
        /// Recipe id
        id: String,
        /// Backend base URL (default: SKILLET_API_BASE or http://localhost:3001)
        #[arg(long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { query, tag, server } => {
            let client = client_for(server)?;
            let criteria = SearchCriteria { query, tag };
            let recipes = client.list_recipes(&criteria, None).await?;
            render::recipe_list(&recipes);
        }
        Commands::Show { id, server } => {
            let client = client_for(server)?;
            let recipe = client.recipe_by_id(&id, None).await?;
            render::recipe_detail(&recipe);
        }
    }

    Ok(())
}

fn client_for(server: Option<String>) -> Result<RecipeClient> {
    let config = match server {
        Some(base) => ApiConfig::with_base(&base),
        None => ApiConfig::from_env(),
    };
    Ok(RecipeClient::new(&config)?)
}
