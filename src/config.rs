//! Server configuration
//!
//! Settings shared by every connection. The served directory is resolved
//! once at startup so per-request containment checks compare against a
//! canonical base.

use std::path::{Path, PathBuf};
use tracing::warn;

/// Runtime settings for a server instance
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    base_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build a config, resolving the served directory
    ///
    /// A directory that does not resolve, or resolves to something other
    /// than a directory, is dropped with a warning instead of refusing to
    /// start; the file routes then answer 404 for everything.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        let base_dir = base_dir.and_then(|dir| match dir.canonicalize() {
            Ok(resolved) if resolved.is_dir() => Some(resolved),
            Ok(resolved) => {
                warn!(path = %resolved.display(), "serving path is not a directory, file routes disabled");
                None
            }
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "serving directory unusable, file routes disabled");
                None
            }
        });

        ServerConfig { base_dir }
    }

    /// Directory backing the file routes, if one was given
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}
