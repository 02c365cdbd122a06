//! Fyyur: a directory of live-music venues and artists, and the shows that
//! bring them together.

use std::sync::Arc;

pub mod aggregate;
pub mod config;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod utils;
pub mod views;

use store::Store;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: Store + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }
}
