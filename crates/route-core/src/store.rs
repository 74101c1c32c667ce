//! PlaceStore trait - where the last processed batch is persisted
//!
//! The pipeline writes its output through this trait so the target can be
//! swapped (file on disk, memory for tests) without touching the pipeline.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;

use crate::error::{RouteError, RouteResult};
use crate::models::Place;

/// Default location of the artifact, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// Sink for the processed place list.
///
/// Every `save` fully replaces the previous content; there is no history.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Replace the stored artifact with `places`
    async fn save(&self, places: &[Place]) -> RouteResult<()>;

    /// Read back the stored artifact (empty if nothing was saved yet)
    async fn load(&self) -> RouteResult<Vec<Place>>;

    /// Human-readable location, used in log output
    fn describe(&self) -> String;
}

// =============================================================================
// JSON file store
// =============================================================================

/// Stores the batch as a pretty-printed JSON array in a single file.
///
/// Writes go to a temp file in the target directory which is then renamed
/// over the artifact, so readers never observe a half-written file and
/// concurrent writers resolve to whichever rename lands last.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the artifact
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

/// Serialize as a JSON array indented with four spaces
fn to_pretty_json(places: &[Place]) -> RouteResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    places.serialize(&mut ser)?;
    Ok(buf)
}

fn write_replace(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    // Temp files are created 0600; the artifact keeps its own mode
    if let Some(permissions) = artifact_permissions(path)? {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Mode the replaced artifact should carry: the current file's, or 0644
/// for a fresh one
fn artifact_permissions(path: &Path) -> std::io::Result<Option<std::fs::Permissions>> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(default_permissions()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}

#[async_trait]
impl PlaceStore for JsonFileStore {
    async fn save(&self, places: &[Place]) -> RouteResult<()> {
        let contents = to_pretty_json(places)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_replace(&path, &contents))
            .await
            .map_err(|e| RouteError::Internal(format!("write task failed: {}", e)))??;

        tracing::debug!(path = %self.path.display(), count = places.len(), "Saved places");
        Ok(())
    }

    async fn load(&self) -> RouteResult<Vec<Place>> {
        let path = self.path.clone();
        let content = tokio::task::spawn_blocking(move || std::fs::read(&path))
            .await
            .map_err(|e| RouteError::Internal(format!("read task failed: {}", e)))?;

        match content {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Keeps the last batch in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    places: RwLock<Vec<Place>>,
    writes: RwLock<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed saves
    pub fn write_count(&self) -> usize {
        *self.writes.read()
    }
}

#[async_trait]
impl PlaceStore for MemoryStore {
    async fn save(&self, places: &[Place]) -> RouteResult<()> {
        *self.places.write() = places.to_vec();
        *self.writes.write() += 1;
        Ok(())
    }

    async fn load(&self) -> RouteResult<Vec<Place>> {
        Ok(self.places.read().clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
