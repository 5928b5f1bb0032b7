// src/dataset/mod.rs
mod dataset_error;
pub mod loader;

pub use dataset_error::DatasetError;

use crate::domain::accommodation::normalize_amenity;
use crate::domain::{AccommodationRecord, AmenityMatch};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Which optional columns the source file carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPresence {
    /// Both `latitude` and `longitude` headers exist.
    pub coordinates: bool,
    pub sentiment: bool,
}

/// The immutable accommodation snapshot, loaded once at startup and shared
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<AccommodationRecord>,
    columns: ColumnPresence,
    headers: Vec<String>,
}

impl Dataset {
    pub fn new(
        records: Vec<AccommodationRecord>,
        columns: ColumnPresence,
        headers: Vec<String>,
    ) -> Self {
        Self {
            records,
            columns,
            headers,
        }
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let dataset = loader::load_from_path(path)?;
        tracing::info!(
            path = %path.display(),
            records = dataset.records.len(),
            coordinates = dataset.columns.coordinates,
            sentiment = dataset.columns.sentiment,
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[AccommodationRecord] {
        &self.records
    }

    pub fn columns(&self) -> ColumnPresence {
        self.columns
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Distinct destinations, in the order they first appear.
    pub fn destinations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.destination.as_str())
            .filter(|d| !d.is_empty() && seen.insert(*d))
            .collect()
    }

    /// Selectable amenity options, trimmed and sorted case-insensitively.
    ///
    /// Token matching ignores case, so spellings that differ only in case
    /// collapse into the first one seen. Substring matching is case-sensitive,
    /// so every distinct spelling stays selectable.
    pub fn amenity_options(&self, matching: AmenityMatch) -> Vec<String> {
        let mut options: BTreeMap<(String, String), String> = BTreeMap::new();
        for raw in self.records.iter().flat_map(|r| r.amenities.split(',')) {
            let display = raw.trim();
            if display.is_empty() {
                continue;
            }
            let folded = normalize_amenity(display);
            let key = match matching {
                AmenityMatch::Token => (folded, String::new()),
                AmenityMatch::Substring => (folded, display.to_string()),
            };
            options.entry(key).or_insert_with(|| display.to_string());
        }
        options.into_values().collect()
    }
}
