// src/dataset/loader.rs
use crate::dataset::{ColumnPresence, Dataset, DatasetError};
use crate::domain::accommodation::{parse_numeric, AccommodationRecord};
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const COL_DESTINATION: &str = "Destination";
pub const COL_PRICE: &str = "Price";
pub const COL_AMENITIES: &str = "Amenities";
pub const COL_HOTEL_NAME: &str = "Hotel Name";
pub const COL_RATINGS: &str = "Ratings";
pub const COL_SENTIMENT: &str = "sentiment_score";
pub const COL_LATITUDE: &str = "latitude";
pub const COL_LONGITUDE: &str = "longitude";

/// Column positions resolved from the header row.
struct Columns {
    destination: usize,
    price: usize,
    amenities: usize,
    hotel_name: usize,
    ratings: usize,
    sentiment: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, DatasetError> {
        let index: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h, i))
            .collect();

        let required = |name: &'static str| {
            index
                .get(name)
                .copied()
                .ok_or(DatasetError::MissingColumn(name))
        };

        Ok(Columns {
            destination: required(COL_DESTINATION)?,
            price: required(COL_PRICE)?,
            amenities: required(COL_AMENITIES)?,
            hotel_name: required(COL_HOTEL_NAME)?,
            ratings: required(COL_RATINGS)?,
            sentiment: index.get(COL_SENTIMENT).copied(),
            latitude: index.get(COL_LATITUDE).copied(),
            longitude: index.get(COL_LONGITUDE).copied(),
        })
    }

    fn presence(&self) -> ColumnPresence {
        ColumnPresence {
            coordinates: self.latitude.is_some() && self.longitude.is_some(),
            sentiment: self.sentiment.is_some(),
        }
    }

    fn record(&self, row: &StringRecord) -> AccommodationRecord {
        let text = |i: usize| row.get(i).unwrap_or("").to_string();
        let number = |i: Option<usize>| i.and_then(|i| row.get(i)).and_then(parse_numeric);

        AccommodationRecord::new(
            text(self.hotel_name),
            text(self.destination),
            number(Some(self.price)),
            text(self.amenities),
        )
        .with_ratings(text(self.ratings))
        .with_sentiment(number(self.sentiment))
        .with_coordinates(number(self.latitude), number(self.longitude))
    }
}

pub fn load_from_path(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(columns.record(&row?));
    }

    Ok(Dataset::new(
        records,
        columns.presence(),
        headers.iter().map(str::to_string).collect(),
    ))
}
