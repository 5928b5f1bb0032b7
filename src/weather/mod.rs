mod client;
mod models;
mod snapshot;
mod weather_error;

pub use client::{WeatherClient, DEFAULT_BASE_URL};
pub use snapshot::{WeatherReport, WeatherSnapshot};
pub use weather_error::WeatherError;

/// Source of sidebar weather. Lookups never fail: problems come back as an
/// `Error` entry for that city.
pub trait WeatherLookup: Send + Sync {
    fn lookup(&self, city: &str) -> WeatherSnapshot;

    /// Sequential, one city at a time, in the given order.
    fn lookup_all(&self, cities: &[String]) -> Vec<WeatherSnapshot> {
        cities.iter().map(|city| self.lookup(city)).collect()
    }
}
