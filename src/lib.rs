//! Development HTTP server with SPA fallback routing.
//!
//! Static assets are served directly from the document root; any GET request
//! that does not resolve to a real file is rewritten to the root
//! `index.html` so that client-side routes survive reloads and deep links.

use std::sync::Arc;

use tower_http::services::ServeDir;

pub mod classify;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the document root
    pub config: Arc<Config>,
    /// File service rooted at the document root, built once at startup
    pub serve_dir: ServeDir,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let serve_dir = ServeDir::new(&config.root);
        Self {
            config: Arc::new(config),
            serve_dir,
        }
    }
}
