use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use task_store::InMemoryTaskStore;
use task_store::config::ShellConfig;
use task_store::shell::http::router;
use task_store::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ShellConfig::from_env()?;
    let store = Arc::new(InMemoryTaskStore::new(config.store));
    let app = router(AppState::new(store));

    tracing::info!(
        capacity = config.store.capacity.get(),
        eviction_batch_size = config.store.eviction_batch_size.get(),
        "task store ready"
    );
    tracing::info!("listening on http://{}/tasks", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
