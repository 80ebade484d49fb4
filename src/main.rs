use clap::{Parser, Subcommand};
use expense_graphql::config::Config;
use expense_graphql::graphql::schema_sdl;
use expense_graphql::logging;
use expense_graphql::seed::SeedData;
use expense_graphql::server;
use expense_graphql::storage::{InMemoryStorage, Storage};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "expense_graphql")]
#[command(about = "GraphQL API for shared expenses")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GraphQL HTTP server (default)
    Serve {
        /// Path to the TOML config file (defaults to ./config.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Port to listen on, overriding the config file
        #[arg(short, long)]
        port: Option<u16>,
        /// Disable the GraphiQL page
        #[arg(long)]
        no_graphiql: bool,
    },
    /// Print the GraphQL schema in SDL form
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    match cli.command.unwrap_or(Commands::Serve {
        config: None,
        port: None,
        no_graphiql: false,
    }) {
        Commands::Serve {
            config,
            port,
            no_graphiql,
        } => serve(config, port, no_graphiql).await,
        Commands::Schema => {
            println!("{}", schema_sdl());
            Ok(())
        }
    }
}

async fn serve(config_path: Option<PathBuf>, port: Option<u16>, no_graphiql: bool) -> anyhow::Result<()> {
    let mut config = Config::load(config_path.as_deref())?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if no_graphiql {
        config.server.graphiql = false;
    }

    // Held until exit so the file log gets flushed
    let _log_guard = logging::init_logging(&config.logging)?;

    let seed = SeedData::load(config.data.seed_file.as_deref())?;
    info!(
        users = seed.users.len(),
        expenses = seed.expenses.len(),
        "Initializing in-memory storage"
    );
    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::from_seed(seed)?);

    server::start_server(storage, &config.server).await
}
