/// Roster Server - User CRUD service
use clap::{Parser, Subcommand};
use roster_core::{types::CreateUser, UserStore};
use roster_server::{create_router, AppState, Environment, ServerConfig};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "User CRUD service", long_about = None)]
struct Cli {
    /// Configuration profile (dev, test, prod); unknown names use the base profile
    #[arg(long, global = true, env = "ROSTER_ENV", default_value = "dev")]
    env: String,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Phone number
        #[arg(short, long)]
        phone: Option<i64>,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let environment = Environment::from_name(&cli.env);
    let config = ServerConfig::load(environment, cli.config.as_deref())?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::AddUser { name, email, phone } => {
            add_user(&config, CreateUser::new(name, email, phone)).await?;
        }
        Commands::ListUsers => list_users(&config).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = roster_storage::open(&config.storage.database_url).await?;
    tracing::info!("Database ready at {}", config.storage.database_url);

    let app_state = AppState::new(Arc::new(store), config.environment);
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn add_user(config: &ServerConfig, new_user: CreateUser) -> anyhow::Result<()> {
    new_user.validate()?;

    let store = roster_storage::open(&config.storage.database_url).await?;
    let user = store.create_user(new_user).await?;

    tracing::info!(user_id = user.id, "created user");
    println!("{}", serde_json::to_string_pretty(&user)?);

    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = roster_storage::open(&config.storage.database_url).await?;
    let users = store.get_all_users().await?;

    println!("Users:");
    for user in users {
        let phone = user
            .phone
            .map_or_else(|| "-".to_string(), |phone| phone.to_string());
        println!("  {} - {} <{}> {}", user.id, user.name, user.email, phone);
    }

    Ok(())
}
