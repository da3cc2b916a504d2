use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use vecroute_common::{logger, AppConfig, MetricKind};
use vecroute_routing::{RouteOptions, RouteService};
use vecroute_vector::VectorStore;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root, falling back to the working directory
fn load_dotenv_from_project_root() {
    match find_project_root().map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            dotenv::from_path(&env_path).ok();
        }
        _ => {
            dotenv::dotenv().ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "vecroute")]
#[command(about = "VecRoute - route inference over vector similarity search", long_about = None)]
struct Cli {
    /// Dataset file (overrides DATASET_PATH)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Similarity metric: euclidean or cosine (overrides SIMILARITY_METRIC)
    #[arg(long, global = true)]
    metric: Option<MetricKind>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print one location
    City {
        /// Location id
        id: String,
    },

    /// Order waypoints greedily from a start location
    Route {
        /// Start location id
        start: String,

        /// Waypoint names
        #[arg(required = true)]
        waypoints: Vec<String>,

        /// Allow hops through locations that were not requested
        #[arg(long)]
        detours: bool,
    },

    /// Infer highways between two locations
    Highways {
        /// Start location id
        from: String,

        /// End location id
        to: String,

        /// Number of highway candidates to consider
        #[arg(long)]
        candidates: Option<usize>,
    },
}

/// Build the route service for a one-shot command
fn route_service(config: &AppConfig) -> Result<RouteService> {
    let store = VectorStore::load(&config.dataset_path, config.metric)?;
    Ok(RouteService::new(Arc::new(store), RouteOptions::from(config)))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;
    if let Some(dataset) = cli.dataset {
        config.dataset_path = dataset;
    }
    if let Some(metric) = cli.metric {
        config.metric = metric;
    }

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.validate()?;

            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("VecRoute starting...");
            tracing::info!("  Bind: {}", config.server_bind_address());
            tracing::info!("  Dataset: {}", config.dataset_path.display());
            tracing::info!("  Metric: {:?}", config.metric);

            vecroute_server::start_server(config).await?;
        }
        Some(Commands::City { id }) => {
            logger::setup_console_logging(&config.log_level)?;
            let service = route_service(&config)?;
            print_json(&service.city(&id)?)?;
        }
        Some(Commands::Route {
            start,
            waypoints,
            detours,
        }) => {
            config.allow_detours |= detours;
            logger::setup_console_logging(&config.log_level)?;
            let service = route_service(&config)?;
            print_json(&service.city_list(&start, waypoints)?)?;
        }
        Some(Commands::Highways {
            from,
            to,
            candidates,
        }) => {
            if let Some(candidates) = candidates {
                config.segment_candidates = candidates;
            }
            config.validate()?;
            logger::setup_console_logging(&config.log_level)?;
            let service = route_service(&config)?;
            print_json(&service.highways(&from, &to)?)?;
        }
        None => {
            // Default: start server with configuration from the environment
            logger::setup_logging(&config.log_dir, &config.log_level)?;
            tracing::info!("VecRoute starting with default configuration...");

            vecroute_server::start_server(config).await?;
        }
    }

    Ok(())
}
