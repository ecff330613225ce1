use insurance_company_service::core::{AppState, Config};
use insurance_company_service::create_router;
use insurance_company_service::repositories::connect_collection;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "insurance_company_service=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    config.print_info();

    // one collection handle for the whole process
    let collection = connect_collection(&config).await?;
    let state = Arc::new(AppState::new(collection, config.jwt_secret.clone()));
    let app = create_router(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
