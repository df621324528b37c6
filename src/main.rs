//! HBnB API server: builds the facade once, mounts common and user routes, serves until stopped.

use hbnb_api::{app_router, AppState, HbnbFacade, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hbnb_api=info,hbnb_server=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(HbnbFacade::new());
    let app = app_router(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
