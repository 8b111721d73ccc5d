//! Testing utilities for papershelf
//!
//! Fixture catalogs and recording collaborators for unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, Item};
use crate::thumbnails::ImageLoader;
use std::sync::{Arc, Mutex, PoisonError};

/// The two-paper catalog used throughout the tests
///
/// - `p1`: "Deep Learning" by Smith, 2020, tagged `ml`
/// - `p2`: "Compilers" by Lee, 2019, tagged `pl`
///
/// # Panics
/// Never; the fixture ids are unique.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new("p1", "Deep Learning", "Smith", Some(2020), vec!["ml".into()]),
        Item::new("p2", "Compilers", "Lee", Some(2019), vec!["pl".into()]),
    ])
    .expect("fixture ids are unique")
}

/// A larger catalog with shared tags, an unknown year, and a year tag
///
/// # Panics
/// Never; the fixture ids are unique.
#[must_use]
pub fn shelf_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new(
            "nerf",
            "NeRF: Representing Scenes as Neural Radiance Fields",
            "Mildenhall, Srinivasan, Tancik",
            Some(2020),
            vec!["Neural Rendering".into(), "Year 2020".into()],
        ),
        Item::new(
            "3dgs",
            "3D Gaussian Splatting for Real-Time Radiance Field Rendering",
            "Kerbl, Kopanas",
            Some(2023),
            vec!["Neural Rendering".into(), "Real-Time".into()],
        ),
        Item::new(
            "instant",
            "Instant Neural Graphics Primitives",
            "Müller, Evans",
            Some(2022),
            vec!["Real-Time".into(), "Neural Rendering".into(), "Hashing".into()],
        ),
        Item::new("preprint", "Untitled Preprint", "Anonymous", None, vec![]),
    ])
    .expect("fixture ids are unique")
}

/// Image loader that records every update, shareable with the test
#[derive(Debug, Clone, Default)]
pub struct RecordingImages {
    updates: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingImages {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers passed to the latest update
    #[must_use]
    pub fn last(&self) -> Vec<String> {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_default()
    }

    /// Number of updates received
    #[must_use]
    pub fn count(&self) -> usize {
        self.updates.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl ImageLoader for RecordingImages {
    fn update(&mut self, visible: &[&Item]) {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(visible.iter().map(|item| item.id.clone()).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        assert_eq!(sample_catalog().len(), 2);
        assert_eq!(shelf_catalog().len(), 4);
    }

    #[test]
    fn test_recording_images() {
        let observer = RecordingImages::new();
        let mut loader = observer.clone();
        let catalog = sample_catalog();
        let items: Vec<&Item> = catalog.items().iter().collect();

        loader.update(&items);
        loader.update(&items[..1]);

        assert_eq!(observer.count(), 2);
        assert_eq!(observer.last(), vec!["p1".to_string()]);
    }
}
