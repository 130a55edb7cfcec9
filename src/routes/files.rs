//! File read and write routes
//!
//! Both routes funnel client-supplied names through [`resolve`], the one
//! place the containment invariant is enforced: whatever the name contains,
//! the path actually touched stays inside the served directory.

use crate::config::ServerConfig;
use crate::http::{Response, Status};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Map a client-supplied name to a path inside the served directory
///
/// The name is joined to the base as a relative child (leading slashes are
/// stripped so it cannot re-root the join) and canonicalized, which resolves
/// `..`, `.` and symlinks before the containment check. Targets that do not
/// exist yet get their parent canonicalized and the final component
/// re-attached, so a write may name a new file. Returns `None` when the
/// canonical result leaves the base, equals the base itself, or cannot be
/// resolved at all.
fn resolve(base: &Path, name: &str) -> Option<PathBuf> {
    let joined = base.join(name.trim_start_matches('/'));

    let resolved = match joined.canonicalize() {
        Ok(path) => path,
        Err(_) => {
            // file_name() is None for names ending in "..", which also
            // must not slip through here.
            let file_name = joined.file_name()?;
            let parent = joined.parent()?.canonicalize().ok()?;
            parent.join(file_name)
        }
    };

    if resolved.starts_with(base) && resolved != base {
        Some(resolved)
    } else {
        None
    }
}

/// `GET /files/{name}`: serve a regular file as raw bytes
pub(crate) fn read(name: &str, config: &ServerConfig) -> Response {
    let Some(base) = config.base_dir() else {
        return Response::new(Status::NotFound);
    };
    let Some(path) = resolve(base, name) else {
        debug!(name, "file path rejected");
        return Response::new(Status::NotFound);
    };

    if !path.is_file() {
        return Response::new(Status::NotFound);
    }

    match fs::read(&path) {
        Ok(content) => Response::builder()
            .header("Content-Type", "application/octet-stream")
            .header("Content-Length", content.len().to_string())
            .body(content)
            .build(),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "file read failed");
            Response::new(Status::NotFound)
        }
    }
}

/// `POST /files/{name}`: create or replace a file with the request body
pub(crate) fn write(name: &str, body: &[u8], config: &ServerConfig) -> Response {
    let Some(base) = config.base_dir() else {
        return Response::new(Status::NotFound);
    };
    let Some(path) = resolve(base, name) else {
        debug!(name, "file path rejected");
        return Response::new(Status::NotFound);
    };

    match fs::write(&path, body) {
        Ok(()) => Response::new(Status::Created),
        Err(err) => {
            error!(path = %path.display(), error = %err, "file write failed");
            Response::new(Status::InternalServerError)
        }
    }
}
