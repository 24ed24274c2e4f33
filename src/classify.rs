//! Request-path classification for SPA fallback routing.

use tracing::debug;

use crate::config::{Config, INDEX_PATH};

/// Outcome of classifying a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    /// The path names a static asset; serve it verbatim.
    ServeAsRequested(&'a str),
    /// Not an asset; serve the application shell instead.
    Fallback(&'static str),
}

/// Classify a request path (query string already stripped).
///
/// Rules are priority-ordered, first match wins:
///
/// 1. A reserved bootstrap asset that exists at the root is force-served,
///    before any later rule can misclassify it.
/// 2. A recognized asset extension is served as requested even when the
///    file is missing, so a broken asset reference 404s instead of
///    silently loading the app shell.
/// 3. A reserved prefix (loader, payload, favicon family) is static.
/// 4. Anything naming a real file under the root is static.
/// 5. Everything else falls back to the application shell.
///
/// Pure apart from a single read-only existence probe; never fails a
/// request on its own, filesystem errors surface downstream as HTTP
/// statuses from the file service.
pub fn classify<'a>(config: &Config, path: &'a str) -> Classification<'a> {
    if config.is_reserved_asset(path) {
        if let Some(file) = config.resolve(path) {
            if file.is_file() {
                return Classification::ServeAsRequested(path);
            }
        }
    }

    if config.has_static_extension(path) {
        return Classification::ServeAsRequested(path);
    }

    if config.has_reserved_prefix(path) {
        return Classification::ServeAsRequested(path);
    }

    if let Some(file) = config.resolve(path) {
        if file.is_file() {
            return Classification::ServeAsRequested(path);
        }
    }

    debug!("No static match for {}, serving {}", path, INDEX_PATH);
    Classification::Fallback(INDEX_PATH)
}
