use std::sync::Arc;

use reelist::{AppState, config::Config, db, routes, store::Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,reelist=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url).await?;
    db::seed_if_empty(&db).await?;

    let state = Arc::new(AppState { config: config.clone(), store: Store::new(db.clone()) });

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    db.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
