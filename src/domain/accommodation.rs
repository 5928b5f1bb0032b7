// src/domain/accommodation.rs

use std::collections::BTreeSet;

/// One row of the accommodation dataset, with its numeric columns already coerced.
///
/// Numeric fields are either a finite number or `None`; a malformed cell in the
/// source never reaches the filtering or ranking logic as text.
#[derive(Debug, Clone, PartialEq)]
pub struct AccommodationRecord {
    pub hotel_name: String,
    pub destination: String,
    pub price: Option<f64>,
    /// Raw comma-separated amenity string, as found in the dataset.
    pub amenities: String,
    /// Trimmed, case-folded amenity tokens split out of `amenities`.
    pub amenity_tokens: BTreeSet<String>,
    pub ratings: String,
    pub sentiment_score: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AccommodationRecord {
    pub fn new(
        hotel_name: impl Into<String>,
        destination: impl Into<String>,
        price: Option<f64>,
        amenities: impl Into<String>,
    ) -> Self {
        let amenities = amenities.into();
        Self {
            hotel_name: hotel_name.into(),
            destination: destination.into(),
            price: price.filter(|p| p.is_finite()),
            amenity_tokens: amenity_tokens(&amenities),
            amenities,
            ratings: String::new(),
            sentiment_score: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_ratings(mut self, ratings: impl Into<String>) -> Self {
        self.ratings = ratings.into();
        self
    }

    pub fn with_sentiment(mut self, score: Option<f64>) -> Self {
        self.sentiment_score = score.filter(|s| s.is_finite());
        self
    }

    pub fn with_coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude.filter(|v| v.is_finite());
        self.longitude = longitude.filter(|v| v.is_finite());
        self
    }

    /// Both coordinates, when the record has them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Trim and case-fold one amenity token.
pub fn normalize_amenity(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Split a raw amenity string into its set of normalized tokens.
pub fn amenity_tokens(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(normalize_amenity)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Coerce a dataset cell into a number. Blank, malformed and non-finite
/// values all become `None`.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numeric_tolerates_garbage() {
        assert_eq!(parse_numeric("2500"), Some(2500.0));
        assert_eq!(parse_numeric(" 0.75 "), Some(0.75));
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("N/A"), None);
        assert_eq!(parse_numeric("₹2500"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
    }

    #[test]
    fn amenity_tokens_are_trimmed_and_folded() {
        let tokens = amenity_tokens("WiFi, Pool ,  ,spa,wifi");
        let expected: Vec<&str> = vec!["pool", "spa", "wifi"];
        assert_eq!(tokens.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn coordinates_need_both_halves() {
        let base = AccommodationRecord::new("A", "Manali", Some(1000.0), "");
        assert_eq!(
            base.clone().with_coordinates(Some(32.2), Some(77.1)).coordinates(),
            Some((32.2, 77.1))
        );
        assert_eq!(base.with_coordinates(Some(32.2), None).coordinates(), None);
    }
}
