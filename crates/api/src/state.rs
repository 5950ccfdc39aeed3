use std::sync::Arc;

use campusdb_db::Store;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Holds the process-scoped store handle; cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}
