pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

use anyhow::Context;
use axum::http::{header, Method};
use axum::middleware;
use shared::data::db::SalesStore;
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::logging::init(&Path::new("target").join("logs")).context("log setup failed")?;

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;

    // Create the table up front so a schema problem stops startup
    let store = SalesStore::open(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;
    store
        .release(Ok(()))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;
    tracing::info!("Sales store ready at {}", db_path.display());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(routes::AppState::new(db_path))
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(middleware::from_fn(shared::logging::access_log))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            tracing::error!("Port {} is already in use", config.server.port);
            return Err(e.into());
        }
        Err(e) => return Err(anyhow::Error::new(e).context(format!("bind {addr} failed"))),
    };
    tracing::info!("Serving sales dashboard on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
