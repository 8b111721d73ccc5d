//! Thumbnail loading
//!
//! After every refresh the page hands the currently visible items to an
//! [`ImageLoader`] so it can pick up newly shown thumbnails. The bundled
//! [`ThumbnailLoader`] resolves each item's image source, substituting the
//! fallback when the primary source is unusable, and caches the result.
//! Clones share the cache, so the page can read back what the session's
//! loader resolved.

use crate::catalog::Item;
use moka::sync::Cache;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Collaborator notified after every visibility change
pub trait ImageLoader: Send {
    /// Evaluate the thumbnails of the items that are now visible
    fn update(&mut self, visible: &[&Item]);
}

/// Loader that ignores every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopImages;

impl ImageLoader for NoopImages {
    fn update(&mut self, _visible: &[&Item]) {}
}

/// Where a thumbnail comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailSource {
    /// Remote URL (or inline data URL)
    Remote(String),
    /// File on disk
    Local(PathBuf),
    /// Nothing usable
    Missing,
}

/// A resolved thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Resolved source
    pub source: ThumbnailSource,
    /// Whether the fallback replaced the primary source
    pub used_fallback: bool,
}

impl Thumbnail {
    /// Short name of the source for display
    ///
    /// File name for local files, last path segment for URLs, `inline` for
    /// data URLs, and `None` when nothing is usable.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match &self.source {
            ThumbnailSource::Remote(url) if url.starts_with("data:") => Some("inline".into()),
            ThumbnailSource::Remote(url) => {
                let trimmed = url.trim_end_matches('/');
                Some(trimmed.rsplit('/').next().unwrap_or(trimmed).to_string())
            }
            ThumbnailSource::Local(path) => Some(
                path.file_name()
                    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
            ),
            ThumbnailSource::Missing => None,
        }
    }
}

/// Thumbnail resolver with a bounded cache
#[derive(Clone)]
pub struct ThumbnailLoader {
    base_dir: Option<PathBuf>,
    cache: Cache<String, Thumbnail>,
    last_visible: Arc<Mutex<Vec<String>>>,
}

impl ThumbnailLoader {
    /// Create a loader resolving relative paths against the working directory
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache_config(Duration::from_secs(600), 2000)
    }

    /// Create a loader with custom cache configuration
    #[must_use]
    pub fn with_cache_config(ttl: Duration, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(max_capacity)
            .build();

        Self {
            base_dir: None,
            cache,
            last_visible: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Resolve relative paths against `dir` (usually the catalog's directory)
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Cached thumbnail of an item, if it has been visible
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Thumbnail> {
        self.cache.get(id)
    }

    /// Identifiers passed to the latest update
    #[must_use]
    pub fn last_visible(&self) -> Vec<String> {
        self.last_visible
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop every cached resolution
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
    }

    /// Resolve one item's thumbnail without touching the cache
    #[must_use]
    pub fn resolve(&self, item: &Item) -> Thumbnail {
        if let Some(source) = item.thumbnail.as_deref().and_then(|s| self.usable(s)) {
            return Thumbnail {
                source,
                used_fallback: false,
            };
        }

        match item.thumbnail_fallback.as_deref().and_then(|s| self.usable(s)) {
            Some(source) => {
                tracing::debug!(id = %item.id, "using fallback thumbnail");
                Thumbnail {
                    source,
                    used_fallback: true,
                }
            }
            None => Thumbnail {
                source: ThumbnailSource::Missing,
                used_fallback: false,
            },
        }
    }

    fn usable(&self, source: &str) -> Option<ThumbnailSource> {
        let source = source.trim();
        if source.is_empty() {
            return None;
        }
        if is_remote(source) {
            return Some(ThumbnailSource::Remote(source.to_string()));
        }

        let path = Path::new(source);
        let path = match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        };
        path.is_file().then_some(ThumbnailSource::Local(path))
    }
}

impl Default for ThumbnailLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader for ThumbnailLoader {
    fn update(&mut self, visible: &[&Item]) {
        *self.last_visible.lock().unwrap_or_else(PoisonError::into_inner) =
            visible.iter().map(|item| item.id.clone()).collect();
        for item in visible {
            if self.cache.get(&item.id).is_none() {
                let thumbnail = self.resolve(item);
                self.cache.insert(item.id.clone(), thumbnail);
            }
        }
    }
}

fn is_remote(source: &str) -> bool {
    ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| source.starts_with(scheme))
}
