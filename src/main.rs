use fitness_api::api::{routes::create_routes, AppState};
use fitness_api::config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = config.database.open_store().await;
    let app = create_routes(AppState::new(store, &config.database));

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Fitness App API starting on http://{}", address);
    info!("Schema available at http://{}/schema", address);

    axum::serve(listener, app).await?;

    Ok(())
}
