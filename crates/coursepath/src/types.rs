/// Shared application state
use crate::catalog::Catalogs;
use crate::recommend::Recommender;
use std::sync::Arc;

/// State shared by every request handler.
///
/// The catalogs are loaded once at startup and never mutated afterwards,
/// so handlers need no locking.
pub struct AppState {
    pub catalogs: Arc<Catalogs>,
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(catalogs: Catalogs) -> Self {
        let catalogs = Arc::new(catalogs);
        Self {
            recommender: Recommender::new(catalogs.clone()),
            catalogs,
        }
    }
}
