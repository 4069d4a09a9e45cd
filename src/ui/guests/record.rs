// SPDX-License-Identifier: MPL-2.0
//! Guest records and the configuration that generates them.
//!
//! Records are generated once, directly over the valid id range. There is
//! never a transient "skipped" element: excluded ids are simply not
//! generated. Records are immutable afterwards; all per-session changes
//! live in the component state, not here.

use crate::config::{self, Config};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Description shown for every guest in the default configuration.
pub const DEFAULT_DESCRIPTION: &str =
    "We are privileged to welcome this esteemed guest to our gathering.";

const IMAGE_PREFIX: &str = "guests";
const IMAGE_EXTENSION: &str = "png";

/// One displayable guest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRecord {
    pub id: u32,
    /// Deterministic image location, a pure function of `id`.
    pub image_path: PathBuf,
    /// May be empty; the caption block only renders when it is not.
    pub name: String,
    /// May be empty; the caption block only renders when it is not.
    pub title: String,
    pub description: String,
}

impl GuestRecord {
    /// Whether the name/title caption block should render at all.
    ///
    /// Holds for the grid card and the lightbox alike: both empty means
    /// no caption block, anywhere.
    #[must_use]
    pub fn has_caption(&self) -> bool {
        !self.name.is_empty() || !self.title.is_empty()
    }

    /// Label used where a textual stand-in for the image is needed.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            "Guest"
        } else {
            &self.name
        }
    }
}

/// Shape of the generated gallery: id range, holes, and image directory.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Ids run from 1 up to and including this value.
    pub max_guests: u32,
    /// Ids omitted from generation. Entries outside `1..=max_guests` are
    /// silently ignored.
    pub excluded_ids: BTreeSet<u32>,
    /// Directory containing `guests<id>.png` files.
    pub assets_dir: PathBuf,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            max_guests: config::DEFAULT_MAX_GUESTS,
            excluded_ids: config::DEFAULT_EXCLUDED_IDS.iter().copied().collect(),
            assets_dir: PathBuf::from(config::DEFAULT_ASSETS_DIR),
        }
    }
}

impl From<&Config> for GalleryConfig {
    fn from(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            max_guests: config.max_guests.unwrap_or(defaults.max_guests),
            excluded_ids: config
                .excluded_ids
                .as_ref()
                .map(|ids| ids.iter().copied().collect())
                .unwrap_or(defaults.excluded_ids),
            assets_dir: config
                .assets_dir
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
        }
    }
}

impl GalleryConfig {
    /// Image location for a guest id.
    #[must_use]
    pub fn image_path(&self, id: u32) -> PathBuf {
        self.assets_dir
            .join(format!("{IMAGE_PREFIX}{id}.{IMAGE_EXTENSION}"))
    }

    /// Generate the full record list in ascending id order.
    #[must_use]
    pub fn generate(&self) -> Vec<GuestRecord> {
        (1..=self.max_guests)
            .filter(|id| !self.excluded_ids.contains(id))
            .map(|id| GuestRecord {
                id,
                image_path: self.image_path(id),
                name: String::new(),
                title: String::new(),
                description: DEFAULT_DESCRIPTION.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(max_guests: u32, excluded: &[u32]) -> GalleryConfig {
        GalleryConfig {
            max_guests,
            excluded_ids: excluded.iter().copied().collect(),
            ..GalleryConfig::default()
        }
    }

    #[test]
    fn default_shape_skips_guest_ten() {
        let records = GalleryConfig::default().generate();

        assert_eq!(records.len(), 56);
        assert!(records.iter().all(|r| r.id != 10));
        assert_eq!(records.first().map(|r| r.id), Some(1));
        assert_eq!(records.last().map(|r| r.id), Some(57));
    }

    #[test]
    fn ids_are_unique_and_ascending() {
        let records = gallery(57, &[10]).generate();

        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn excluded_id_outside_range_is_ignored() {
        let records = gallery(5, &[99]).generate();
        assert_eq!(records.len(), 5);

        let records = gallery(5, &[0]).generate();
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn multiple_excluded_ids_leave_matching_holes() {
        let records = gallery(6, &[2, 4]).generate();
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 6]);
    }

    #[test]
    fn zero_max_guests_generates_nothing() {
        assert!(gallery(0, &[]).generate().is_empty());
    }

    #[test]
    fn image_path_is_deterministic_across_generations() {
        let config = GalleryConfig::default();
        let first = config.generate();
        let second = config.generate();

        assert_eq!(first, second);
        for record in &first {
            assert_eq!(record.image_path, config.image_path(record.id));
        }
    }

    #[test]
    fn image_path_follows_naming_pattern() {
        let config = gallery(3, &[]);
        let path = config.image_path(2);
        assert!(path.ends_with("guests2.png"));
        assert!(path.starts_with(&config.assets_dir));
    }

    #[test]
    fn caption_renders_only_with_name_or_title() {
        let mut record = gallery(1, &[]).generate().remove(0);
        assert!(!record.has_caption());
        assert_eq!(record.label(), "Guest");

        record.title = "Keynote speaker".to_string();
        assert!(record.has_caption());

        record.title.clear();
        record.name = "Ada".to_string();
        assert!(record.has_caption());
        assert_eq!(record.label(), "Ada");
    }

    #[test]
    fn gallery_config_resolves_missing_fields_from_defaults() {
        let config = Config {
            max_guests: None,
            excluded_ids: None,
            assets_dir: Some("portraits".to_string()),
        };
        let gallery = GalleryConfig::from(&config);

        assert_eq!(gallery.max_guests, crate::config::DEFAULT_MAX_GUESTS);
        assert!(gallery.excluded_ids.contains(&10));
        assert_eq!(gallery.assets_dir, PathBuf::from("portraits"));
    }
}
