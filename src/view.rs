// src/view.rs
//
// Input state in, view model out. `compute` is pure: the router calls it on
// every request, so any change to the form is a full recomputation.

use crate::dataset::Dataset;
use crate::domain::{select, AccommodationRecord, AmenityMatch, Criteria, MapPoint, PriceBand};
use chrono::NaiveDate;
use url::form_urlencoded;

pub const NO_RESULTS: &str = "No hotels found for this destination and criteria. Try adjusting your filters!";
pub const DATE_ORDER_WARNING: &str = "Check-out date must be after the Check-in date.";

/// Everything the user can set, as received in the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinderState {
    pub destination: Option<String>,
    pub price_band: Option<PriceBand>,
    pub amenities: Vec<String>,
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
}

impl FinderState {
    /// Unknown keys and unparsable values are ignored.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut state = FinderState::default();
        let Some(query) = query else {
            return state;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "destination" if !value.is_empty() => state.destination = Some(value.into_owned()),
                "price" => state.price_band = PriceBand::from_slug(&value),
                "amenity" if !value.trim().is_empty() => state.amenities.push(value.into_owned()),
                "checkin" => state.checkin = parse_date(&value),
                "checkout" => state.checkout = parse_date(&value),
                _ => {}
            }
        }
        state
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Fill in what the user left unset: the first destination of the dataset
/// and the lowest price band.
pub fn resolve_criteria(dataset: &Dataset, state: &FinderState) -> Criteria {
    let destinations = dataset.destinations();
    let destination = state
        .destination
        .as_deref()
        .filter(|d| destinations.contains(d))
        .or_else(|| destinations.first().copied())
        .unwrap_or_default()
        .to_string();

    Criteria {
        destination,
        price_band: state.price_band.unwrap_or_default(),
        amenities: state.amenities.clone(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapSection {
    /// The dataset has no latitude/longitude columns at all.
    CoordinatesMissing,
    NoResults,
    /// Hotels matched but none of them carry coordinates.
    NoCoordinates,
    Points(Vec<MapPoint>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RankingSection {
    /// The dataset has no sentiment column; lists what it does have.
    SentimentMissing { available: Vec<String> },
    NoResults,
    Hotels(Vec<HotelCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotelCard {
    pub name: String,
    pub price: String,
    pub ratings: String,
    pub sentiment: String,
    pub destination: String,
    pub amenities: String,
}

impl HotelCard {
    fn from_record(record: &AccommodationRecord) -> Self {
        Self {
            name: record.hotel_name.clone(),
            price: record.price.map(format_price).unwrap_or_default(),
            ratings: record.ratings.clone(),
            sentiment: record
                .sentiment_score
                .map(|s| format!("{s:.2}"))
                .unwrap_or_default(),
            destination: record.destination.clone(),
            amenities: record.amenities.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinderVm {
    pub destinations: Vec<String>,
    pub criteria: Criteria,
    pub amenity_options: Vec<String>,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub date_warning: Option<&'static str>,
    pub result_count: usize,
    pub map: MapSection,
    pub ranking: RankingSection,
    /// Canonical query string for the current inputs, reused by the refresh
    /// and export links.
    pub query: String,
}

/// Unset dates default to `today`, so an untouched form has checkin ==
/// checkout and always carries the date-order warning.
pub fn compute(
    dataset: &Dataset,
    state: &FinderState,
    matching: AmenityMatch,
    today: NaiveDate,
) -> FinderVm {
    let criteria = resolve_criteria(dataset, state);
    let selection = select(dataset.records(), &criteria, matching);
    let columns = dataset.columns();

    let checkin = state.checkin.unwrap_or(today);
    let checkout = state.checkout.unwrap_or(today);
    let date_warning = (checkout <= checkin).then_some(DATE_ORDER_WARNING);

    let map = if !columns.coordinates {
        MapSection::CoordinatesMissing
    } else if selection.filtered.is_empty() {
        MapSection::NoResults
    } else if selection.map_points.is_empty() {
        MapSection::NoCoordinates
    } else {
        MapSection::Points(selection.map_points.clone())
    };

    let ranking = if !columns.sentiment {
        RankingSection::SentimentMissing {
            available: dataset.headers().to_vec(),
        }
    } else if selection.top.is_empty() {
        RankingSection::NoResults
    } else {
        RankingSection::Hotels(selection.top.iter().map(|r| HotelCard::from_record(r)).collect())
    };

    let query = query_string(&criteria, checkin, checkout);

    FinderVm {
        destinations: dataset.destinations().into_iter().map(str::to_string).collect(),
        amenity_options: dataset.amenity_options(matching),
        result_count: selection.filtered.len(),
        criteria,
        checkin,
        checkout,
        date_warning,
        map,
        ranking,
        query,
    }
}

pub fn query_string(criteria: &Criteria, checkin: NaiveDate, checkout: NaiveDate) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    out.append_pair("destination", &criteria.destination);
    out.append_pair("price", criteria.price_band.slug());
    for amenity in &criteria.amenities {
        out.append_pair("amenity", amenity);
    }
    out.append_pair("checkin", &checkin.format("%Y-%m-%d").to_string());
    out.append_pair("checkout", &checkout.format("%Y-%m-%d").to_string());
    out.finish()
}

/// Whole rupee amounts print without a fractional part.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}
