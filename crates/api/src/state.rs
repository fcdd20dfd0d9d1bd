use std::sync::Arc;

use metatag_core::manager::SeoManager;
use metatag_db::store::PgFieldStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: metatag_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// An SEO manager backed by this state's database, building permalinks
    /// under the configured site URL.
    pub fn seo(&self) -> SeoManager<PgFieldStore> {
        SeoManager::new(PgFieldStore::new(
            self.pool.clone(),
            self.config.site_url.clone(),
        ))
    }
}
