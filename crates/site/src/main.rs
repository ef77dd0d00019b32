//! Site - server-rendered pages.

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use common::{Environment, Settings};

#[derive(Parser)]
#[command(name = "site")]
#[command(about = "Server-rendered site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "SITE_HOST", default_value = DEFAULT_SERVER_HOST)]
        host: String,
        #[arg(long, env = "SITE_PORT", default_value_t = DEFAULT_SERVER_PORT)]
        port: u16,
    },
    /// Print the assembled settings (secrets omitted)
    ShowConfig,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Settings decide log verbosity, so assemble them before tracing starts
    let settings = Settings::from_env();
    init_tracing(settings.as_ref().ok().map(|s| s.environment));

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    debug!(?settings, "Settings loaded");

    let result = match cli.command {
        Commands::Serve { host, port } => site_lib::run(&host, port, settings).await,
        Commands::ShowConfig => show_config(&settings),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber (development defaults to debug level)
fn init_tracing(environment: Option<Environment>) {
    let default_filter = match environment {
        Some(Environment::Development) => "debug,tower_http=debug",
        _ => "info",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn show_config(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
