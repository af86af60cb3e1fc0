use spy::config::Config;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Starting Spy server on {}:{}", config.host, config.port);

    // The store client is built once and shared by every request
    let store = spy::build_store(&config)?;

    let addr = config.addr();
    let app = spy::app(spy::AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Spy server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
