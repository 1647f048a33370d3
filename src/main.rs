mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::storage::LocalBlobStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let storage = LocalBlobStore::from_env();
    let uploads_dir = storage.root().clone();
    let state = state::AppState::new(pool, Arc::new(storage));

    let app = routes::app(state, uploads_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "markboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
