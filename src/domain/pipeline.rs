// src/domain/pipeline.rs
//
// Destination -> price band -> amenity filtering, then map point extraction and
// sentiment ranking. Everything here is a pure function of its arguments.

use crate::domain::accommodation::{normalize_amenity, AccommodationRecord};
use crate::domain::price_band::PriceBand;
use serde::Serialize;

/// How many records the ranked list keeps.
pub const TOP_N: usize = 3;

/// How requested amenities are tested against a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmenityMatch {
    /// Membership in the record's normalized token set.
    #[default]
    Token,
    /// Raw substring search in the record's amenity string. A request for
    /// "Pool" also matches "Pool Table".
    Substring,
}

impl AmenityMatch {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "token" => Some(AmenityMatch::Token),
            "substring" => Some(AmenityMatch::Substring),
            _ => None,
        }
    }

    fn matches(self, record: &AccommodationRecord, requested: &[String]) -> bool {
        match self {
            AmenityMatch::Token => requested
                .iter()
                .map(|a| normalize_amenity(a))
                .filter(|a| !a.is_empty())
                .all(|a| record.amenity_tokens.contains(&a)),
            AmenityMatch::Substring => requested
                .iter()
                .all(|a| record.amenities.contains(a.as_str())),
        }
    }
}

/// A coordinate pair to plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// The user's filter choices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria {
    pub destination: String,
    pub price_band: PriceBand,
    pub amenities: Vec<String>,
}

/// Pipeline output. Rows borrow from the dataset they were selected from.
#[derive(Debug, Default)]
pub struct Selection<'a> {
    pub filtered: Vec<&'a AccommodationRecord>,
    pub map_points: Vec<MapPoint>,
    pub top: Vec<&'a AccommodationRecord>,
}

pub fn select<'a>(
    records: &'a [AccommodationRecord],
    criteria: &Criteria,
    matching: AmenityMatch,
) -> Selection<'a> {
    tracing::debug!(
        destination = %criteria.destination,
        band = criteria.price_band.slug(),
        amenities = criteria.amenities.len(),
        "filtering accommodations"
    );

    let filtered = filter(records, criteria, matching);
    let map_points = map_points(&filtered);
    let top = top_by_sentiment(&filtered, TOP_N);

    Selection {
        filtered,
        map_points,
        top,
    }
}

pub fn filter<'a>(
    records: &'a [AccommodationRecord],
    criteria: &Criteria,
    matching: AmenityMatch,
) -> Vec<&'a AccommodationRecord> {
    records
        .iter()
        .filter(|r| r.destination == criteria.destination)
        .filter(|r| criteria.price_band.contains(r.price))
        .filter(|r| criteria.amenities.is_empty() || matching.matches(r, &criteria.amenities))
        .collect()
}

pub fn map_points(rows: &[&AccommodationRecord]) -> Vec<MapPoint> {
    rows.iter()
        .filter_map(|r| r.coordinates())
        .map(|(latitude, longitude)| MapPoint {
            latitude,
            longitude,
        })
        .collect()
}

/// Highest sentiment first; `sort_by` is stable so ties keep dataset order.
pub fn top_by_sentiment<'a>(
    rows: &[&'a AccommodationRecord],
    n: usize,
) -> Vec<&'a AccommodationRecord> {
    let mut scored: Vec<(&AccommodationRecord, f64)> = rows
        .iter()
        .filter_map(|r| r.sentiment_score.map(|s| (*r, s)))
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    scored.into_iter().take(n).map(|(r, _)| r).collect()
}
