//! The catalog API server binary.
//!
//! Reads configuration (see [`catalog::config`]), builds the configured
//! storage backend, and serves the REST API until SIGTERM or Ctrl+C.

use std::sync::Arc;

use anyhow::Result;

use catalog::config::{AppConfig, StorageBackend};
use catalog::core::store::ProductStore;
use catalog::service::CatalogService;
use catalog::storage::InMemoryProductStore;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load()?;
    let store = build_store(&config).await?;
    let service = CatalogService::new(store);

    catalog::server::serve(&config.server.bind_address, service).await
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn ProductStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            let store = if config.storage.seed_demo {
                tracing::info!("using in-memory storage with demo catalog");
                InMemoryProductStore::with_demo_products()
            } else {
                tracing::info!("using in-memory storage");
                InMemoryProductStore::new()
            };
            Ok(Arc::new(store))
        }
        StorageBackend::Mongodb => mongodb_store(config).await,
    }
}

#[cfg(feature = "mongodb_backend")]
async fn mongodb_store(config: &AppConfig) -> Result<Arc<dyn ProductStore>> {
    use catalog::storage::MongoProductStore;
    use mongodb::Client;

    let mongo = &config.storage.mongodb;
    let client = Client::with_uri_str(&mongo.uri).await?;
    let database = client.database(&mongo.database);
    tracing::info!(database = %mongo.database, "using MongoDB storage");

    Ok(Arc::new(MongoProductStore::new(database)))
}

#[cfg(not(feature = "mongodb_backend"))]
async fn mongodb_store(_config: &AppConfig) -> Result<Arc<dyn ProductStore>> {
    anyhow::bail!(
        "storage backend is set to mongodb, but this binary was built without \
         the mongodb_backend feature"
    )
}
