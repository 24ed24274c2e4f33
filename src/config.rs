use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Path suffixes always treated as static assets, whether or not the file
/// exists on disk. A missing stylesheet must 404, not turn into the app shell.
pub const STATIC_EXTENSIONS: &[&str] = &[
    ".js", ".wasm", ".css", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".html", ".json",
    ".txt",
];

/// Path prefixes always treated as static assets.
pub const RESERVED_PREFIXES: &[&str] = &["/wasm_exec.js", "/app.wasm", "/favicon"];

/// Bootstrap assets that must never be swallowed by the fallback: the WASM
/// loader script and the compiled application payload.
pub const RESERVED_ASSETS: &[&str] = &["/wasm_exec.js", "/app.wasm"];

/// The application shell served for all non-asset routes.
pub const INDEX_PATH: &str = "/index.html";

/// Server configuration
///
/// The classification tables above are compiled in; the only runtime input
/// is the document root.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory to serve files from
    pub root: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Check if a request path ends in a static-asset extension
    pub fn has_static_extension(&self, path: &str) -> bool {
        STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
    }

    /// Check if a request path starts with a reserved prefix
    pub fn has_reserved_prefix(&self, path: &str) -> bool {
        RESERVED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
    }

    /// Check if a request path names a reserved bootstrap asset exactly
    pub fn is_reserved_asset(&self, path: &str) -> bool {
        RESERVED_ASSETS.contains(&path)
    }

    /// Translate a URL path into a root-relative filesystem path.
    ///
    /// Percent-decoded first, the same decoding the file service applies,
    /// so `/read%20me` probes the file named `read me`. Then built
    /// component by component; parent-directory references are rejected
    /// rather than resolved, so a traversal sequence can never satisfy the
    /// existence rule. Returns `None` for such paths and for paths that do
    /// not decode to UTF-8.
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        let decoded = percent_decode_str(path).decode_utf8().ok()?;
        let relative = decoded.trim_start_matches('/');
        let mut result = self.root.clone();

        for component in Path::new(relative).components() {
            match component {
                Component::Normal(name) => result.push(name),
                Component::CurDir => {}
                _ => return None,
            }
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_below_root() {
        let config = Config::new("/srv/app");
        assert_eq!(
            config.resolve("/styles/main.css"),
            Some(PathBuf::from("/srv/app/styles/main.css"))
        );
    }

    #[test]
    fn resolve_root_path_is_root() {
        let config = Config::new("/srv/app");
        assert_eq!(config.resolve("/"), Some(PathBuf::from("/srv/app")));
    }

    #[test]
    fn resolve_decodes_percent_encoding() {
        let config = Config::new("/srv/app");
        assert_eq!(
            config.resolve("/read%20me"),
            Some(PathBuf::from("/srv/app/read me"))
        );
    }

    #[test]
    fn resolve_rejects_encoded_traversal() {
        let config = Config::new("/srv/app");
        assert_eq!(config.resolve("/%2e%2e/secret"), None);
    }

    #[test]
    fn resolve_rejects_parent_components() {
        let config = Config::new("/srv/app");
        assert_eq!(config.resolve("/../etc/passwd"), None);
        assert_eq!(config.resolve("/static/../../secret"), None);
    }

    #[test]
    fn extension_match_is_suffix_only() {
        let config = Config::new("/srv/app");
        assert!(config.has_static_extension("/deep/nested/app.js"));
        assert!(!config.has_static_extension("/js-heavy-page"));
    }
}
