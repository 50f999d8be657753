//! Loading of compiled contract artifacts from disk.
//!
//! Both loaders treat a missing or unreadable file as "no artifact" and
//! return `None`; callers fall back to whatever the config carries inline.

use std::path::Path;

/// Reads a base64 artifact, joining its lines into a single string.
pub async fn load_base64<P: AsRef<Path>>(path: P) -> Option<String> {
    let text = read_artifact(path.as_ref()).await?;
    Some(text.lines().collect())
}

/// Reads a tvc artifact as is.
pub async fn try_load_tvc<P: AsRef<Path>>(path: P) -> Option<String> {
    read_artifact(path.as_ref()).await
}

async fn read_artifact(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!("Failed to load artifact at {:?}: {}", path, e);
            None
        }
    }
}
